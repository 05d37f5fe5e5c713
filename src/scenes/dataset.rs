use raylib::prelude::*;

use crate::floor_plan::Placement;
use crate::scenes::{DrawContext, Scene, UpdateContext};
use crate::slider::Bounds;
use crate::steps::PlanStage;
use crate::ui;

const PLAN_SIDE: f32 = 420.0;
const EASE_RATE: f32 = 12.0;

/// Augmentation preview. The angle on screen eases toward the stored rotation.
pub struct DatasetScene {
    shown_rotation: f32,
}

struct Layout {
    plan: Bounds,
    rotate: Bounds,
    mirror: Bounds,
    text_left: f32,
}

fn layout(area: Bounds) -> Layout {
    let (cx, cy) = area.center();
    let plan = Bounds::new(cx - PLAN_SIDE - 60.0, cy - PLAN_SIDE * 0.5 - 30.0, PLAN_SIDE, PLAN_SIDE);
    let (px, _) = plan.center();
    Layout {
        plan,
        rotate: Bounds::new(px - 110.0, plan.bottom() + 60.0, 100.0, 44.0),
        mirror: Bounds::new(px + 10.0, plan.bottom() + 60.0, 100.0, 44.0),
        text_left: cx + 60.0,
    }
}

/// Moves `shown` toward `target` with an exponential ease; snaps once close.
pub fn ease_toward(shown: f32, target: f32, dt: f32) -> f32 {
    let next = shown + (target - shown) * (1.0 - (-EASE_RATE * dt.max(0.0)).exp());
    if (target - next).abs() < 0.05 { target } else { next }
}

impl DatasetScene {
    pub fn new() -> Self {
        Self { shown_rotation: 0.0 }
    }
}

impl Scene for DatasetScene {
    fn update(&mut self, dt: f32, ctx: &mut UpdateContext) {
        let l = layout(ctx.area);
        let augmentation = &mut ctx.decorations.augmentation;
        if ctx.pointer.clicked(l.rotate) {
            augmentation.rotate();
        }
        if ctx.pointer.clicked(l.mirror) {
            augmentation.toggle_mirror();
        }
        self.shown_rotation = ease_toward(self.shown_rotation, augmentation.rotation as f32, dt);
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D, ctx: &DrawContext) {
        let l = layout(ctx.area);
        let augmentation = ctx.decorations.augmentation;

        let placement = Placement {
            bounds: l.plan,
            rotation: self.shown_rotation,
            mirrored: augmentation.mirrored,
        };
        ctx.plans.get(PlanStage::Footprint).draw(d, &placement);

        ui::button(d, l.rotate, "Rotate", false, ctx.pointer.over(l.rotate));
        ui::button(d, l.mirror, "Mirror", augmentation.mirrored, ctx.pointer.over(l.mirror));

        let x = l.text_left;
        let mut y = l.plan.top + 40.0;
        ui::text(d, "Data Augmentation", x, y, 32, ui::TEXT);
        y += 56.0;
        y += ui::paragraph(
            d,
            "To train a robust RESTITUTION model, the limited historical dataset is multiplied. \
             Try the controls to simulate the augmentation pipeline.",
            x,
            y,
            520.0,
            20,
            ui::MUTED,
        );
        y += 24.0;

        let readout = Bounds::new(x, y, 520.0, 110.0);
        d.draw_rectangle_rec(ui::rect(readout), Color::new(0xF9, 0xFA, 0xFB, 255));
        let rows = [
            format!("ROTATION: {} deg", augmentation.display_angle()),
            format!("MIRROR: {}", if augmentation.mirrored { "ON" } else { "OFF" }),
            format!("SAMPLES: {}X", augmentation.sample_multiplier()),
        ];
        for (i, row) in rows.iter().enumerate() {
            let (col, line) = (i % 2, i / 2);
            ui::text(d, row, x + 20.0 + col as f32 * 250.0, y + 24.0 + line as f32 * 40.0, 18, ui::FAINT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_converges_and_snaps() {
        let mut shown = 0.0;
        for _ in 0..120 {
            shown = ease_toward(shown, 90.0, 1.0 / 60.0);
        }
        assert_eq!(shown, 90.0);
    }

    #[test]
    fn ease_moves_monotonically() {
        let a = ease_toward(0.0, 90.0, 1.0 / 60.0);
        let b = ease_toward(a, 90.0, 1.0 / 60.0);
        assert!(0.0 < a && a < b && b < 90.0);
        assert_eq!(ease_toward(10.0, 90.0, 0.0), 10.0);
    }

    #[test]
    fn buttons_sit_under_the_plan() {
        let l = layout(Bounds::new(0.0, 90.0, 1920.0, 900.0));
        assert!(l.rotate.top > l.plan.bottom());
        assert!(l.rotate.right() < l.mirror.left);
        assert!(l.plan.right() < l.text_left);
    }
}
