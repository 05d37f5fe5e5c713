use log::debug;
use raylib::prelude::*;

use crate::scenes::{DrawContext, Scene, UpdateContext, heading};
use crate::slider::Bounds;
use crate::ui;

const ITEMS: [(u8, &str); 6] = [
    (2, "Sample A: Multi-dome Structure"),
    (3, "Sample B: Single Vault"),
    (4, "Sample C: Complex Ruin"),
    (5, "Sample D: Corner Detail"),
    (6, "Sample E: Archway"),
    (7, "Sample F: Wall Evaluation"),
];

const COLUMNS: usize = 3;
const TILE_WIDTH: f32 = 400.0;
const TILE_GAP: f32 = 24.0;
const CLOSE_SIZE: f32 = 40.0;

/// The enlarged figure, if any. Only one at a time.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    selected: Option<usize>,
}

impl Lightbox {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn open(&mut self, index: usize) {
        self.selected = Some(index);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }
}

pub struct GalleryScene {
    lightbox: Lightbox,
}

fn tile(area: Bounds, top: f32, index: usize) -> Bounds {
    let height = TILE_WIDTH * 3.0 / 4.0;
    let total = COLUMNS as f32 * TILE_WIDTH + (COLUMNS as f32 - 1.0) * TILE_GAP;
    let (cx, _) = area.center();
    let (col, row) = (index % COLUMNS, index / COLUMNS);
    Bounds::new(
        cx - total * 0.5 + col as f32 * (TILE_WIDTH + TILE_GAP),
        top + row as f32 * (height + TILE_GAP),
        TILE_WIDTH,
        height,
    )
}

fn grid_top(area: Bounds) -> f32 {
    area.top + 150.0
}

fn modal(area: Bounds) -> Bounds {
    area.inset(60.0)
}

fn close_button(modal: Bounds) -> Bounds {
    Bounds::new(modal.right() - CLOSE_SIZE - 16.0, modal.top + 16.0, CLOSE_SIZE, CLOSE_SIZE)
}

impl GalleryScene {
    pub fn new() -> Self {
        Self {
            lightbox: Lightbox::default(),
        }
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }
}

impl Scene for GalleryScene {
    fn update(&mut self, _dt: f32, ctx: &mut UpdateContext) {
        let pointer = ctx.pointer;
        if !pointer.pressed {
            return;
        }
        if self.lightbox.selected().is_some() {
            let m = modal(ctx.area);
            if pointer.over(close_button(m)) || !pointer.over(m) {
                self.lightbox.close();
            }
            return;
        }
        let top = grid_top(ctx.area);
        if let Some(index) = (0..ITEMS.len()).find(|&i| pointer.over(tile(ctx.area, top, i))) {
            debug!("Gallery: opening {}", ITEMS[index].1);
            self.lightbox.open(index);
        }
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D, ctx: &DrawContext) {
        heading(
            d,
            ctx.area,
            None,
            "Restitution Results Gallery",
            "Diverse examples of the model's performance across different architectural typologies.",
        );

        let top = grid_top(ctx.area);
        for (i, (figure, label)) in ITEMS.iter().enumerate() {
            let b = tile(ctx.area, top, i);
            d.draw_rectangle_rec(ui::rect(b), Color::new(0xF3, 0xF4, 0xF6, 255));
            ui::figure(d, ctx.assets.figure(*figure), b, label);
            let hovered = self.lightbox.selected().is_none() && ctx.pointer.over(b);
            if hovered {
                d.draw_rectangle_rec(ui::rect(b), Color::new(0, 0, 0, 50));
            }
            let caption = Bounds::new(b.left, b.bottom() - 36.0, b.width, 36.0);
            d.draw_rectangle_gradient_v(
                caption.left as i32,
                caption.top as i32,
                caption.width as i32,
                caption.height as i32,
                Color::new(0, 0, 0, 0),
                Color::new(0, 0, 0, 150),
            );
            ui::text(d, label, caption.left + 10.0, caption.top + 12.0, 16, ui::SURFACE);
            d.draw_rectangle_lines_ex(ui::rect(b), 1.0, if hovered { ui::FAINT } else { ui::BORDER });
        }

        if let Some(index) = self.lightbox.selected() {
            let (figure, label) = ITEMS[index];
            d.draw_rectangle_rec(ui::rect(ctx.area), Color::new(0, 0, 0, 230));
            let m = modal(ctx.area);
            d.draw_rectangle_rec(ui::rect(m), ui::SURFACE);
            let footer = 60.0;
            let body = Bounds::new(m.left, m.top, m.width, m.height - footer);
            d.draw_rectangle_rec(ui::rect(body), Color::new(0xF5, 0xF5, 0xF5, 255));
            ui::figure(d, ctx.assets.figure(figure), body.inset(16.0), label);
            ui::text(d, label, m.left + 20.0, m.bottom() - footer + 20.0, 20, ui::TEXT);

            let close = close_button(m);
            let (cx, cy) = close.center();
            let shade = if ctx.pointer.over(close) { 180 } else { 128 };
            d.draw_circle_v(Vector2::new(cx, cy), CLOSE_SIZE * 0.5, Color::new(0, 0, 0, shade));
            let r = 8.0;
            d.draw_line_ex(Vector2::new(cx - r, cy - r), Vector2::new(cx + r, cy + r), 2.0, ui::SURFACE);
            d.draw_line_ex(Vector2::new(cx + r, cy - r), Vector2::new(cx - r, cy + r), 2.0, ui::SURFACE);
        }
    }
}
