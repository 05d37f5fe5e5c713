use raylib::prelude::*;

use crate::scenes::{DrawContext, Scene, UpdateContext, heading};
use crate::slider::Bounds;
use crate::ui;

const LENS_WIDTH: f32 = 800.0;
const NOTES_WIDTH: f32 = 480.0;

const NOTES: [(&str, &str, Color, Color); 2] = [
    (
        "Issue: Structural Hallucination",
        "The model attempts to complete the dome structure despite insufficient wall support in the \
         footprint, leading to a physically impossible prediction.",
        ui::WARNING_SOFT,
        ui::WARNING,
    ),
    (
        "Mitigation Strategy",
        "Increasing the diversity of ruined states in the training data (Dataset Augmentation \
         Phase) helps reduce these hallucinations.",
        Color::new(0xF9, 0xFA, 0xFB, 255),
        ui::MUTED,
    ),
];

/// Failure case under a magnifier. The lens state lives in the decorations so a
/// presentation reset clears it. The shell also clears it when this scene is unmounted.
pub struct LimitationsScene;

/// Lens container, below the heading block.
pub fn lens_bounds(area: Bounds) -> Bounds {
    let (cx, _) = area.center();
    let total = LENS_WIDTH + 60.0 + NOTES_WIDTH;
    Bounds::new(cx - total * 0.5, area.top + 280.0, LENS_WIDTH, LENS_WIDTH * 9.0 / 16.0)
}

impl LimitationsScene {
    pub fn new() -> Self {
        Self
    }
}

impl Scene for LimitationsScene {
    fn update(&mut self, _dt: f32, ctx: &mut UpdateContext) {
        let container = lens_bounds(ctx.area);
        let pointer = ctx.pointer;
        let lens = &mut ctx.decorations.lens;

        match (lens.is_hovered(), pointer.over(container)) {
            (false, true) => lens.pointer_entered(),
            (true, false) => lens.pointer_left(),
            _ => {}
        }
        if lens.is_hovered() {
            lens.pointer_moved(pointer.x, pointer.y, container);
            if pointer.wheel != 0.0 {
                lens.wheel(pointer.wheel);
            }
        }
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D, ctx: &DrawContext) {
        heading(
            d,
            ctx.area,
            Some(("LIMITATIONS ANALYSIS", ui::WARNING_SOFT, ui::WARNING)),
            "When the Model Fails",
            "Understanding failure cases is crucial. The model struggles with highly irregular ruins \
             or styles not present in the training set (e.g., late-period eccentric arches).",
        );

        let container = lens_bounds(ctx.area);
        let lens = ctx.decorations.lens;
        d.draw_rectangle_rec(ui::rect(container), Color::new(0xF3, 0xF4, 0xF6, 255));
        {
            let mut clip = d.begin_scissor_mode(
                container.left as i32,
                container.top as i32,
                container.width as i32,
                container.height as i32,
            );
            let content = lens.zoom_rect(container.inset(8.0), container);
            ui::figure(&mut clip, ctx.assets.figure(8), content, "Failure Case");
        }
        d.draw_rectangle_lines_ex(ui::rect(container), 2.0, Color::new(0xFF, 0xED, 0xD5, 255));

        let tag = "INACCURATE PREDICTION";
        let tag_w = ui::text_width(tag, 14) as f32 + 16.0;
        d.draw_rectangle_rec(ui::rect(Bounds::new(container.left + 16.0, container.top + 16.0, tag_w, 24.0)), ui::DANGER);
        ui::text(d, tag, container.left + 24.0, container.top + 21.0, 14, ui::SURFACE);

        if !lens.is_hovered() {
            let hint = "Scroll to Zoom";
            let hint_w = ui::text_width(hint, 14) as f32 + 16.0;
            let b = Bounds::new(container.right() - 16.0 - hint_w, container.bottom() - 40.0, hint_w, 24.0);
            d.draw_rectangle_rec(ui::rect(b), Color::new(0, 0, 0, 128));
            ui::text(d, hint, b.left + 8.0, b.top + 5.0, 14, ui::SURFACE);
        } else if lens.factor() > 1.0 {
            let readout = format!("{:.1}x", lens.factor());
            ui::text(d, &readout, container.right() - 60.0, container.bottom() - 36.0, 18, ui::MUTED);
        }

        let mut y = container.top;
        let x = container.right() + 60.0;
        for (title, body, fill, color) in NOTES {
            let b = Bounds::new(x, y, NOTES_WIDTH, 170.0);
            d.draw_rectangle_rounded(ui::rect(b), 0.08, 8, fill);
            ui::text(d, title, b.left + 20.0, b.top + 20.0, 20, color);
            ui::paragraph(d, body, b.left + 20.0, b.top + 54.0, b.width - 40.0, 16, color);
            y += 190.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ZOOM_HOVER, ZOOM_MAX, ZOOM_MIN};
    use crate::decoration::Decorations;
    use crate::input::Pointer;
    use std::path::Path;

    const AREA: Bounds = Bounds::new(0.0, 90.0, 1920.0, 900.0);

    fn frame(scene: &mut LimitationsScene, decorations: &mut Decorations, pointer: Pointer) {
        let mut ctx = UpdateContext { pointer, area: AREA, decorations, document: Path::new("") };
        scene.update(1.0 / 60.0, &mut ctx);
    }

    #[test]
    fn hover_wheel_and_leave() {
        let mut scene = LimitationsScene::new();
        let mut deco = Decorations::default();
        let c = lens_bounds(AREA);
        let (cx, cy) = c.center();

        frame(&mut scene, &mut deco, Pointer { x: cx, y: cy, moved: true, ..Default::default() });
        assert!(deco.lens.is_hovered());
        assert_eq!(deco.lens.factor(), ZOOM_HOVER);
        assert_eq!(deco.lens.origin(), (50.0, 50.0));

        for _ in 0..10 {
            frame(&mut scene, &mut deco, Pointer { x: cx, y: cy, wheel: 1.0, ..Default::default() });
        }
        assert_eq!(deco.lens.factor(), ZOOM_MAX);

        frame(&mut scene, &mut deco, Pointer { x: c.left, y: c.top, moved: true, ..Default::default() });
        assert_eq!(deco.lens.origin(), (0.0, 0.0));

        frame(&mut scene, &mut deco, Pointer { x: 10.0, y: 10.0, moved: true, ..Default::default() });
        assert!(!deco.lens.is_hovered());
        assert_eq!(deco.lens.factor(), ZOOM_MIN);
    }

    #[test]
    fn wheel_outside_is_ignored() {
        let mut scene = LimitationsScene::new();
        let mut deco = Decorations::default();
        frame(&mut scene, &mut deco, Pointer { x: 10.0, y: 10.0, wheel: 3.0, ..Default::default() });
        assert_eq!(deco.lens.factor(), ZOOM_MIN);
        assert!(!deco.lens.is_hovered());
    }

    #[test]
    fn layout_fits() {
        let c = lens_bounds(AREA);
        assert!(c.bottom() < AREA.bottom());
        assert!(c.right() + 60.0 + NOTES_WIDTH < AREA.right());
    }
}
