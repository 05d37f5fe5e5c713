use log::debug;
use raylib::prelude::*;

use crate::floor_plan::Placement;
use crate::scenes::{DrawContext, Scene, UpdateContext};
use crate::slider::{Bounds, CompareSlider, DragCapture};
use crate::steps::PlanStage;
use crate::ui;

const SLIDER_SIDE: f32 = 620.0;

/// One generator stage: a before/after slider over two plans plus the network diagram.
pub struct CompareScene {
    title: &'static str,
    before: PlanStage,
    after: PlanStage,
    diagram: (&'static str, &'static str),
    badges: [&'static str; 2],
    slider: CompareSlider,
    capture: Option<DragCapture>,
}

pub fn slider_bounds(area: Bounds) -> Bounds {
    let (cx, cy) = area.center();
    Bounds::new(cx - SLIDER_SIDE - 40.0, cy - SLIDER_SIDE * 0.5 + 30.0, SLIDER_SIDE, SLIDER_SIDE)
}

fn diagram_bounds(area: Bounds) -> Bounds {
    let (cx, cy) = area.center();
    Bounds::new(cx + 80.0, cy - 200.0 + 30.0, 520.0, 400.0)
}

impl CompareScene {
    pub fn new(
        title: &'static str,
        before: PlanStage,
        after: PlanStage,
        labels: (&'static str, &'static str),
        diagram: (&'static str, &'static str),
        badges: [&'static str; 2],
    ) -> Self {
        Self {
            title,
            before,
            after,
            diagram,
            badges,
            slider: CompareSlider::new(labels.0, labels.1),
            capture: None,
        }
    }

    pub fn slider(&self) -> &CompareSlider {
        &self.slider
    }

    pub fn is_dragging(&self) -> bool {
        self.capture.is_some()
    }

    /// Routes one frame of window-wide pointer state into the drag gesture.
    fn track_pointer(&mut self, ctx: &UpdateContext) {
        let container = slider_bounds(ctx.area);
        let pointer = ctx.pointer;

        if self.capture.is_none() && pointer.clicked(container) {
            self.capture = self.slider.begin_drag();
        }
        if let Some(capture) = self.capture.as_ref() {
            if pointer.moved {
                capture.pointer_moved(&mut self.slider, pointer.x, container);
            }
        }
        if pointer.released {
            if let Some(capture) = self.capture.take() {
                capture.release(&mut self.slider);
                debug!("{}: split left at {:.1}%", self.title, self.slider.position());
            }
        }
    }

    fn draw_diagram<D: RaylibDraw>(&self, d: &mut D, b: Bounds) {
        let (input, output) = self.diagram;
        let box_w = 150.0;
        let box_h = 70.0;
        let row = b.top + 60.0;

        let boxes = [
            (Bounds::new(b.left, row, box_w, box_h), input, ui::MUTED),
            (Bounds::new(b.left + (b.width - box_w) * 0.5, row, box_w, box_h), "Generator", ui::ACCENT),
            (Bounds::new(b.right() - box_w, row, box_w, box_h), output, ui::PURPLE),
        ];
        for pair in boxes.windows(2) {
            let (from, to) = (pair[0].0, pair[1].0);
            let y = from.top + box_h * 0.5;
            d.draw_line_ex(Vector2::new(from.right(), y), Vector2::new(to.left - 6.0, y), 2.0, ui::FAINT);
            d.draw_triangle(
                Vector2::new(to.left, y),
                Vector2::new(to.left - 10.0, y - 6.0),
                Vector2::new(to.left - 10.0, y + 6.0),
                ui::FAINT,
            );
        }
        for (bx, label, color) in boxes {
            ui::panel(d, bx, ui::SURFACE, color);
            let (cx, cy) = bx.center();
            ui::text_centered(d, label, cx, cy - 9.0, 18, color);
        }

        // Discriminator judges generated output against real plans
        let disc = Bounds::new(b.left + (b.width - 220.0) * 0.5, row + box_h + 90.0, 220.0, box_h);
        ui::panel(d, disc, ui::SURFACE, ui::DANGER);
        let (dcx, dcy) = disc.center();
        ui::text_centered(d, "Discriminator", dcx, dcy - 9.0, 18, ui::DANGER);
        let out = boxes[2].0;
        d.draw_line_ex(
            Vector2::new(out.center().0, out.bottom()),
            Vector2::new(disc.right(), dcy),
            2.0,
            ui::with_alpha(ui::DANGER, 0.5),
        );
        ui::text_centered(d, "U-Net generator, PatchGAN discriminator", dcx, disc.bottom() + 24.0, 16, ui::MUTED);

        // Training progress
        let bar = Bounds::new(b.left, b.bottom() - 40.0, b.width, 10.0);
        d.draw_rectangle_rounded(ui::rect(bar), 1.0, 8, ui::ACCENT);
        ui::text(d, "Epoch 300 / 300", bar.left, bar.top - 28.0, 16, ui::MUTED);
    }
}

impl Scene for CompareScene {
    fn update(&mut self, _dt: f32, ctx: &mut UpdateContext) {
        self.track_pointer(ctx);
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D, ctx: &DrawContext) {
        let area = ctx.area;
        let container = slider_bounds(area);

        // Title row
        ui::text(d, self.title, container.left, area.top + 40.0, 30, ui::TEXT);
        let chip = format!("{}  -  {}", self.badges[0], self.badges[1]);
        let chip_w = ui::text_width(&chip, 16) as f32 + 32.0;
        let diagram = diagram_bounds(area);
        let chip_box = Bounds::new(diagram.right() - chip_w, area.top + 38.0, chip_w, 32.0);
        d.draw_rectangle_rounded(ui::rect(chip_box), 1.0, 12, Color::new(0xF3, 0xF4, 0xF6, 255));
        ui::text(d, &chip, chip_box.left + 16.0, chip_box.top + 8.0, 16, ui::MUTED);

        // After layer, full bleed
        d.draw_rectangle_rec(ui::rect(container.inset(-6.0)), ui::SURFACE);
        let placement = Placement::fit(container);
        ctx.plans.get(self.after).draw(d, &placement);
        let after_label = self.slider.after_label();
        let after_w = ui::text_width(after_label, 16) as f32 + 16.0;
        let tag = Bounds::new(container.right() - 16.0 - after_w, container.top + 16.0, after_w, 26.0);
        d.draw_rectangle_rec(ui::rect(tag), Color::new(0, 0, 0, 128));
        ui::text(d, after_label, tag.left + 8.0, tag.top + 5.0, 16, ui::SURFACE);

        // Before layer, clipped to the split
        let split = self.slider.split_width(container);
        {
            let mut clip = d.begin_scissor_mode(
                container.left as i32,
                container.top as i32,
                split.round() as i32,
                container.height as i32,
            );
            clip.draw_rectangle_rec(ui::rect(container), ui::BACKGROUND);
            ctx.plans.get(self.before).draw(&mut clip, &placement);
            let before_label = self.slider.before_label();
            let before_w = ui::text_width(before_label, 16) as f32 + 16.0;
            let tag = Bounds::new(container.left + 16.0, container.top + 16.0, before_w, 26.0);
            clip.draw_rectangle_rec(ui::rect(tag), Color::new(0, 0, 0, 128));
            ui::text(&mut clip, before_label, tag.left + 8.0, tag.top + 5.0, 16, ui::SURFACE);
        }

        // Handle
        let x = container.left + split;
        d.draw_rectangle_rec(Rectangle::new(x - 2.0, container.top, 4.0, container.height), ui::SURFACE);
        let (_, cy) = container.center();
        let grip = Vector2::new(x, cy);
        let hovered = self.is_dragging() || ctx.pointer.over(container);
        d.draw_circle_v(grip, if hovered { 20.0 } else { 17.0 }, ui::SURFACE);
        d.draw_circle_lines(x as i32, cy as i32, if hovered { 20.0 } else { 17.0 }, ui::BORDER);
        for dx in [-4.0, 4.0] {
            d.draw_line_ex(Vector2::new(x + dx, cy - 7.0), Vector2::new(x + dx, cy + 7.0), 2.0, ui::MUTED);
        }
        d.draw_rectangle_lines_ex(ui::rect(container.inset(-6.0)), 6.0, ui::SURFACE);

        self.draw_diagram(d, diagram);
    }
}
