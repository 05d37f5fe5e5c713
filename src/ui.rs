//! Drawing helpers shared by the chrome and the scenes.

use raylib::prelude::*;

use crate::slider::Bounds;

pub const BACKGROUND: Color = Color::new(0xFA, 0xFA, 0xFA, 255);
pub const SURFACE: Color = Color::new(0xFF, 0xFF, 0xFF, 255);
pub const BORDER: Color = Color::new(0xE5, 0xE7, 0xEB, 255);
pub const TEXT: Color = Color::new(0x0F, 0x17, 0x2A, 255);
pub const MUTED: Color = Color::new(0x6B, 0x72, 0x80, 255);
pub const FAINT: Color = Color::new(0x9C, 0xA3, 0xAF, 255);
pub const ACCENT: Color = Color::new(0x25, 0x63, 0xEB, 255);
pub const ACCENT_SOFT: Color = Color::new(0xEF, 0xF6, 0xFF, 255);
pub const PURPLE: Color = Color::new(0xA8, 0x55, 0xF7, 255);
pub const DANGER: Color = Color::new(0xEF, 0x44, 0x44, 255);
pub const DANGER_SOFT: Color = Color::new(0xFE, 0xF2, 0xF2, 255);
pub const WARNING: Color = Color::new(0xC2, 0x41, 0x0C, 255);
pub const WARNING_SOFT: Color = Color::new(0xFF, 0xF7, 0xED, 255);
pub const SUCCESS: Color = Color::new(0x22, 0xC5, 0x5E, 255);
pub const INK: Color = Color::new(0x0F, 0x17, 0x2A, 230);

pub fn rect(b: Bounds) -> Rectangle {
    Rectangle::new(b.left, b.top, b.width, b.height)
}

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha.clamp(0.0, 1.0)) as u8)
}

pub fn text_width(text: &str, size: i32) -> i32 {
    raylib::core::text::measure_text(text, size)
}

pub fn text<D: RaylibDraw>(d: &mut D, s: &str, x: f32, y: f32, size: i32, color: Color) {
    d.draw_text(s, x as i32, y as i32, size, color);
}

pub fn text_centered<D: RaylibDraw>(d: &mut D, s: &str, cx: f32, y: f32, size: i32, color: Color) {
    let w = text_width(s, size) as f32;
    text(d, s, cx - w * 0.5, y, size, color);
}

/// Greedy word wrap for the default font. Returns the height used.
pub fn paragraph<D: RaylibDraw>(d: &mut D, s: &str, x: f32, y: f32, max_width: f32, size: i32, color: Color) -> f32 {
    let line_height = size as f32 * 1.4;
    let mut line = String::new();
    let mut cy = y;
    for word in s.split_whitespace() {
        let candidate = if line.is_empty() { word.to_string() } else { format!("{} {}", line, word) };
        if !line.is_empty() && text_width(&candidate, size) as f32 > max_width {
            text(d, &line, x, cy, size, color);
            cy += line_height;
            line = word.to_string();
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        text(d, &line, x, cy, size, color);
        cy += line_height;
    }
    cy - y
}

pub fn panel<D: RaylibDraw>(d: &mut D, b: Bounds, fill: Color, border: Color) {
    d.draw_rectangle_rounded(rect(b), 0.06, 8, fill);
    d.draw_rectangle_lines_ex(rect(b), 1.0, border);
}

/// Pill with centred text. Width follows the text.
pub fn badge<D: RaylibDraw>(d: &mut D, s: &str, cx: f32, y: f32, fill: Color, color: Color) -> Bounds {
    let w = text_width(s, 16) as f32 + 28.0;
    let b = Bounds::new(cx - w * 0.5, y, w, 28.0);
    d.draw_rectangle_rounded(rect(b), 1.0, 12, fill);
    text_centered(d, s, cx, y + 6.0, 16, color);
    b
}

pub fn button<D: RaylibDraw>(d: &mut D, b: Bounds, label: &str, active: bool, hovered: bool) {
    let (fill, color) = match (active, hovered) {
        (true, _) => (ACCENT, SURFACE),
        (false, true) => (ACCENT_SOFT, TEXT),
        (false, false) => (SURFACE, MUTED),
    };
    d.draw_rectangle_rounded(rect(b), 0.3, 8, fill);
    d.draw_rectangle_lines_ex(rect(b), 1.0, BORDER);
    let (cx, cy) = b.center();
    text_centered(d, label, cx, cy - 9.0, 18, color);
}

/// Largest box with the texture's aspect ratio that fits in `b`, centred.
pub fn contain(b: Bounds, tex_width: f32, tex_height: f32) -> Bounds {
    if tex_width <= 0.0 || tex_height <= 0.0 || b.width <= 0.0 || b.height <= 0.0 {
        return Bounds::new(b.left, b.top, 0.0, 0.0);
    }
    let scale = (b.width / tex_width).min(b.height / tex_height);
    let (w, h) = (tex_width * scale, tex_height * scale);
    Bounds::new(b.left + (b.width - w) * 0.5, b.top + (b.height - h) * 0.5, w, h)
}

/// Draws a figure letterboxed into `b`, or a labelled placeholder when it failed to load.
pub fn figure<D: RaylibDraw>(d: &mut D, texture: Option<&Texture2D>, b: Bounds, alt: &str) {
    match texture {
        Some(texture) => {
            let (tw, th) = (texture.width() as f32, texture.height() as f32);
            let dest = contain(b, tw, th);
            d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, tw, th),
                rect(dest),
                Vector2::new(0.0, 0.0),
                0.0,
                Color::WHITE,
            );
        }
        None => placeholder(d, b, alt),
    }
}

pub fn placeholder<D: RaylibDraw>(d: &mut D, b: Bounds, alt: &str) {
    d.draw_rectangle_rec(rect(b), Color::new(0xF3, 0xF4, 0xF6, 255));
    d.draw_rectangle_lines_ex(rect(b), 2.0, BORDER);
    d.draw_line_ex(Vector2::new(b.left, b.top), Vector2::new(b.right(), b.bottom()), 1.0, BORDER);
    d.draw_line_ex(Vector2::new(b.right(), b.top), Vector2::new(b.left, b.bottom()), 1.0, BORDER);
    let (cx, cy) = b.center();
    text_centered(d, alt, cx, cy - 10.0, 20, FAINT);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contain_letterboxes_wide_images() {
        let b = contain(Bounds::new(0.0, 0.0, 400.0, 400.0), 800.0, 400.0);
        assert_eq!(b, Bounds::new(0.0, 100.0, 400.0, 200.0));
    }

    #[test]
    fn contain_pillarboxes_tall_images() {
        let b = contain(Bounds::new(10.0, 0.0, 400.0, 200.0), 100.0, 200.0);
        assert_eq!(b, Bounds::new(160.0, 0.0, 100.0, 200.0));
    }

    #[test]
    fn contain_handles_empty_input() {
        assert_eq!(contain(Bounds::new(5.0, 5.0, 100.0, 100.0), 0.0, 10.0).width, 0.0);
    }

    #[test]
    fn alpha_scales_existing_alpha() {
        assert_eq!(with_alpha(INK, 1.0).a, 230);
        assert_eq!(with_alpha(Color::WHITE, 0.5).a, 127);
        assert_eq!(with_alpha(Color::WHITE, 2.0).a, 255);
    }
}
