use log::warn;
use raylib::prelude::*;

use crate::scenes::{DrawContext, Scene, UpdateContext, heading};
use crate::slider::Bounds;
use crate::ui;
use crate::viewer::DocumentViewer;

/// The publication. raylib cannot render the PDF itself, so the panel hands it to the
/// desktop viewer and reports how that went.
pub struct PaperScene {
    viewer: DocumentViewer,
    status: Option<Result<String, String>>,
}

fn panel_bounds(area: Bounds) -> Bounds {
    let width = 1100.0;
    let (cx, _) = area.center();
    Bounds::new(cx - width * 0.5, area.top + 160.0, width, area.height - 220.0)
}

fn open_button(panel: Bounds) -> Bounds {
    let (cx, cy) = panel.center();
    Bounds::new(cx - 100.0, cy + 40.0, 200.0, 52.0)
}

impl PaperScene {
    pub fn new() -> Self {
        Self {
            viewer: DocumentViewer::new(),
            status: None,
        }
    }
}

impl Scene for PaperScene {
    fn update(&mut self, _dt: f32, ctx: &mut UpdateContext) {
        if !ctx.pointer.clicked(open_button(panel_bounds(ctx.area))) {
            return;
        }
        self.status = Some(match self.viewer.open(ctx.document) {
            Ok(()) => Ok(format!("Opened {} in the system viewer", ctx.document.display())),
            Err(e) => {
                warn!("Could not open the paper: {:#}", e);
                Err(format!("{:#}", e))
            }
        });
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D, ctx: &DrawContext) {
        heading(
            d,
            ctx.area,
            Some(("FULL RESEARCH PAPER", Color::new(0xF1, 0xF5, 0xF9, 255), Color::new(0x33, 0x41, 0x55, 255))),
            "Publication",
            "",
        );

        let panel = panel_bounds(ctx.area);
        ui::panel(d, panel, ui::SURFACE, ui::BORDER);

        // page glyph
        let (cx, cy) = panel.center();
        let page = Bounds::new(cx - 45.0, cy - 150.0, 90.0, 120.0);
        d.draw_rectangle_rec(ui::rect(page), Color::new(0xF3, 0xF4, 0xF6, 255));
        d.draw_rectangle_lines_ex(ui::rect(page), 2.0, ui::FAINT);
        for i in 0..5 {
            let y = page.top + 24.0 + i as f32 * 16.0;
            d.draw_line_ex(Vector2::new(page.left + 16.0, y), Vector2::new(page.right() - 16.0, y), 2.0, ui::BORDER);
        }
        ui::text_centered(d, "Research Paper", cx, page.bottom() + 16.0, 22, ui::TEXT);

        let button = open_button(panel);
        ui::button(d, button, "Open PDF", true, ctx.pointer.over(button));

        match &self.status {
            Some(Ok(message)) => ui::text_centered(d, message, cx, button.bottom() + 24.0, 16, ui::MUTED),
            Some(Err(message)) => ui::text_centered(d, message, cx, button.bottom() + 24.0, 16, ui::DANGER),
            None => ui::text_centered(
                d,
                "Opens in the system PDF viewer",
                cx,
                button.bottom() + 24.0,
                16,
                ui::FAINT,
            ),
        }
    }
}
