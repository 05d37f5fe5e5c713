use raylib::prelude::*;

use crate::floor_plan::Placement;
use crate::scenes::{DrawContext, Scene, UpdateContext};
use crate::slider::Bounds;
use crate::steps::PlanStage;
use crate::ui;

const PLAN_SIDE: f32 = 520.0;
const HEATMAP_FADE: f32 = 0.25;
const BAR_DURATION: f32 = 1.0;

struct Metric {
    name: &'static str,
    value: &'static str,
    verdict: &'static str,
    verdict_color: Color,
    color: Color,
    /// Fill fraction the bar settles at.
    fill: f32,
    delay: f32,
}

const METRICS: [Metric; 2] = [
    Metric {
        name: "SSIM INDEX",
        value: "0.88",
        verdict: "High Accuracy",
        verdict_color: ui::SUCCESS,
        color: ui::ACCENT,
        fill: 0.88,
        delay: 0.5,
    },
    Metric {
        name: "L1 LOSS",
        value: "0.04",
        verdict: "Converged",
        verdict_color: ui::PURPLE,
        color: ui::PURPLE,
        fill: 0.12,
        delay: 0.7,
    },
];

/// Fill of a metric bar `elapsed` seconds after mount: empty until `delay`, then a
/// linear grow to `target` over one second.
pub fn bar_fill(elapsed: f32, delay: f32, target: f32) -> f32 {
    let t = ((elapsed - delay) / BAR_DURATION).clamp(0.0, 1.0);
    target * t
}

pub struct EvaluationScene {
    elapsed: f32,
    /// Shown heatmap opacity, chasing the decoration flag.
    heat_alpha: f32,
}

fn plan_bounds(area: Bounds) -> Bounds {
    let (cx, cy) = area.center();
    Bounds::new(cx - PLAN_SIDE - 40.0, cy - PLAN_SIDE * 0.5, PLAN_SIDE, PLAN_SIDE)
}

fn toggle_bounds(plan: Bounds) -> Bounds {
    Bounds::new(plan.right() - 180.0, plan.bottom() - 56.0, 164.0, 40.0)
}

impl EvaluationScene {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            heat_alpha: 0.0,
        }
    }

    fn draw_metric<D: RaylibDraw>(&self, d: &mut D, metric: &Metric, b: Bounds) {
        ui::panel(d, b, ui::SURFACE, ui::BORDER);
        ui::text(d, metric.name, b.left + 20.0, b.top + 18.0, 14, ui::FAINT);
        ui::text(d, metric.value, b.left + 20.0, b.top + 44.0, 40, ui::TEXT);
        let value_w = ui::text_width(metric.value, 40) as f32;
        ui::text(d, metric.verdict, b.left + 32.0 + value_w, b.top + 64.0, 16, metric.verdict_color);

        let track = Bounds::new(b.left + 20.0, b.bottom() - 24.0, b.width - 40.0, 6.0);
        d.draw_rectangle_rec(ui::rect(track), ui::BORDER);
        let fill = bar_fill(self.elapsed, metric.delay, metric.fill);
        d.draw_rectangle_rec(ui::rect(Bounds::new(track.left, track.top, track.width * fill, track.height)), metric.color);
    }
}

impl Scene for EvaluationScene {
    fn update(&mut self, dt: f32, ctx: &mut UpdateContext) {
        self.elapsed += dt;
        if ctx.pointer.clicked(plan_bounds(ctx.area)) {
            ctx.decorations.toggle_heatmap();
        }
        let target = if ctx.decorations.heatmap { 1.0 } else { 0.0 };
        let step = dt.max(0.0) / HEATMAP_FADE;
        self.heat_alpha = if self.heat_alpha < target {
            (self.heat_alpha + step).min(target)
        } else {
            (self.heat_alpha - step).max(target)
        };
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D, ctx: &DrawContext) {
        let plan = plan_bounds(ctx.area);
        ui::panel(d, plan.inset(-12.0), ui::SURFACE, ui::BORDER);
        ctx.plans.get(PlanStage::Furnishing).draw(d, &Placement::fit(plan));

        if self.heat_alpha > 0.0 {
            let a = self.heat_alpha;
            d.draw_rectangle_gradient_ex(
                ui::rect(plan),
                ui::with_alpha(ui::DANGER, 0.0),
                ui::with_alpha(ui::DANGER, 0.2 * a),
                ui::with_alpha(ui::DANGER, 0.0),
                ui::with_alpha(ui::DANGER, 0.0),
            );
            // simulated error spots
            let spots = [(0.25, 0.25, 0.09, 0.4), (0.75, 0.67, 0.12, 0.3)];
            for (fx, fy, r, alpha) in spots {
                let c = Vector2::new(plan.left + plan.width * fx, plan.top + plan.height * fy);
                let radius = plan.width * r;
                d.draw_circle_gradient(
                    c.x as i32,
                    c.y as i32,
                    radius,
                    ui::with_alpha(ui::DANGER, alpha * a),
                    ui::with_alpha(ui::DANGER, 0.0),
                );
            }
        }

        let toggle = toggle_bounds(plan);
        let (fill, color, label) = if ctx.decorations.heatmap {
            (ui::DANGER, ui::SURFACE, "HIDE ERRORS")
        } else {
            (ui::SURFACE, ui::TEXT, "SHOW ERRORS")
        };
        d.draw_rectangle_rounded(ui::rect(toggle), 1.0, 12, fill);
        let (tcx, tcy) = toggle.center();
        ui::text_centered(d, label, tcx, tcy - 8.0, 16, color);

        let (cx, _) = ctx.area.center();
        let mut y = plan.top + 20.0;
        for metric in METRICS.iter() {
            self.draw_metric(d, metric, Bounds::new(cx + 40.0, y, 360.0, 130.0));
            y += 150.0;
        }

        let info = Bounds::new(cx + 40.0, y + 10.0, 360.0, 90.0);
        d.draw_rectangle_rounded(ui::rect(info), 0.1, 8, ui::ACCENT_SOFT);
        ui::paragraph(
            d,
            "The model successfully reconstructs 88% of structural details compared to ground truth.",
            info.left + 16.0,
            info.top + 16.0,
            info.width - 32.0,
            16,
            ui::ACCENT,
        );
    }
}
