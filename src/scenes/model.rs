use raylib::prelude::*;

use crate::scenes::{DrawContext, Scene, UpdateContext, heading};
use crate::slider::Bounds;
use crate::ui;

/// The U-Net generator figure. Nothing interactive.
pub struct ModelScene;

impl Scene for ModelScene {
    fn update(&mut self, _dt: f32, _ctx: &mut UpdateContext) {}

    fn draw<D: RaylibDraw>(&self, d: &mut D, ctx: &DrawContext) {
        let top = heading(
            d,
            ctx.area,
            Some(("MODEL ARCHITECTURE", Color::new(0xDB, 0xEA, 0xFE, 255), Color::new(0x1D, 0x4E, 0xD8, 255))),
            "U-Net Generator Details",
            "Visualizing the internal layers of the Generator network utilized in both stages of the framework.",
        );
        let (cx, _) = ctx.area.center();
        let width = 1280.0;
        let panel = Bounds::new(cx - width * 0.5, top, width, ctx.area.bottom() - top - 30.0);
        ui::panel(d, panel, ui::SURFACE, ui::BORDER);
        ui::figure(d, ctx.assets.figure(5), panel.inset(16.0), "ML Model Architecture");
    }
}
