//! Header stepper, play control, footer legend and navigation.

use raylib::prelude::*;

use crate::constants::*;
use crate::input::Pointer;
use crate::sequencer::SequencerSnapshot;
use crate::slider::Bounds;
use crate::state::Command;
use crate::steps::{Icon, LEGEND, SceneDescriptor};
use crate::ui;

const STEPPER_LEFT: f32 = 420.0;
const STEP_WIDTH: f32 = 108.0;
const STEP_GAP: f32 = 6.0;
const BUTTON_HEIGHT: f32 = 44.0;

/// Where every clickable piece of chrome sits on the render target.
#[derive(Debug, Clone)]
pub struct ChromeLayout {
    pub steps: Vec<Bounds>,
    pub play: Bounds,
    pub reset: Bounds,
    pub previous: Bounds,
    pub next: Bounds,
}

impl ChromeLayout {
    pub fn new(step_count: usize) -> Self {
        let top = (HEADER_HEIGHT - BUTTON_HEIGHT) * 0.5;
        let steps = (0..step_count)
            .map(|i| Bounds::new(STEPPER_LEFT + i as f32 * (STEP_WIDTH + STEP_GAP), top, STEP_WIDTH, BUTTON_HEIGHT))
            .collect();
        let footer_top = RENDER_HEIGHT as f32 - FOOTER_HEIGHT + (FOOTER_HEIGHT - BUTTON_HEIGHT) * 0.5;
        let right = RENDER_WIDTH as f32 - 32.0;
        Self {
            steps,
            play: Bounds::new(right - 210.0, top, 210.0, BUTTON_HEIGHT),
            next: Bounds::new(right - BUTTON_HEIGHT, footer_top, BUTTON_HEIGHT, BUTTON_HEIGHT),
            previous: Bounds::new(right - 190.0, footer_top, BUTTON_HEIGHT, BUTTON_HEIGHT),
            reset: Bounds::new(right - 330.0, footer_top, 120.0, BUTTON_HEIGHT),
        }
    }

    /// Command for a press at the pointer, if it landed on an enabled control.
    pub fn hit(&self, pointer: &Pointer, seq: &SequencerSnapshot) -> Option<Command> {
        if !pointer.pressed {
            return None;
        }
        if let Some(index) = self.steps.iter().position(|b| pointer.over(*b)) {
            return Some(Command::GoTo(index));
        }
        if pointer.over(self.play) {
            return Some(Command::TogglePlay);
        }
        if pointer.over(self.reset) {
            return Some(Command::Reset);
        }
        if pointer.over(self.previous) && !seq.is_first() {
            return Some(Command::Previous);
        }
        if pointer.over(self.next) && !seq.is_last() {
            return Some(Command::Next);
        }
        None
    }

    /// True when the pointer sits on the header or footer bars.
    pub fn owns(&self, pointer: &Pointer) -> bool {
        pointer.y < HEADER_HEIGHT || pointer.y >= RENDER_HEIGHT as f32 - FOOTER_HEIGHT
    }
}

/// Content area between header and footer.
pub fn stage_bounds() -> Bounds {
    Bounds::new(
        0.0,
        HEADER_HEIGHT,
        RENDER_WIDTH as f32,
        RENDER_HEIGHT as f32 - HEADER_HEIGHT - FOOTER_HEIGHT,
    )
}

pub fn play_label(playing: bool) -> &'static str {
    if playing { "Stop Auto-Play" } else { "Start Demo" }
}

fn draw_icon<D: RaylibDraw>(d: &mut D, icon: Icon, cx: f32, cy: f32, color: Color) {
    let r = 7.0;
    let l = |d: &mut D, x0: f32, y0: f32, x1: f32, y1: f32| {
        d.draw_line_ex(Vector2::new(cx + x0, cy + y0), Vector2::new(cx + x1, cy + y1), 2.0, color)
    };
    match icon {
        Icon::Layout => {
            d.draw_rectangle_lines_ex(Rectangle::new(cx - r, cy - r, r * 2.0, r * 2.0), 2.0, color);
            l(d, -r, -2.0, r, -2.0);
            l(d, -1.0, -2.0, -1.0, r);
        }
        Icon::FileImage | Icon::FileText => {
            d.draw_rectangle_lines_ex(Rectangle::new(cx - 5.0, cy - r, 10.0, r * 2.0), 2.0, color);
            if icon == Icon::FileText {
                l(d, -2.0, -1.0, 2.0, -1.0);
                l(d, -2.0, 3.0, 2.0, 3.0);
            } else {
                d.draw_circle_v(Vector2::new(cx, cy + 2.0), 2.0, color);
            }
        }
        Icon::Info => {
            d.draw_circle_lines(cx as i32, cy as i32, r, color);
            l(d, 0.0, -1.0, 0.0, 4.0);
            d.draw_circle_v(Vector2::new(cx, cy - 4.0), 1.2, color);
        }
        Icon::Cpu => {
            d.draw_rectangle_lines_ex(Rectangle::new(cx - 5.0, cy - 5.0, 10.0, 10.0), 2.0, color);
            l(d, -r, -2.0, -5.0, -2.0);
            l(d, 5.0, 2.0, r, 2.0);
        }
        Icon::Box => {
            d.draw_rectangle_lines_ex(Rectangle::new(cx - 6.0, cy - 4.0, 12.0, 10.0), 2.0, color);
            l(d, -6.0, -4.0, -2.0, -r);
            l(d, 6.0, -4.0, 2.0, -r);
        }
        Icon::Layers => {
            for dy in [-4.0, 0.0, 4.0] {
                l(d, -r, dy, r, dy);
            }
        }
        Icon::Activity => {
            l(d, -r, 0.0, -3.0, 0.0);
            l(d, -3.0, 0.0, -1.0, -5.0);
            l(d, -1.0, -5.0, 2.0, 5.0);
            l(d, 2.0, 5.0, 4.0, 0.0);
            l(d, 4.0, 0.0, r, 0.0);
        }
        Icon::Images => {
            d.draw_rectangle_lines_ex(Rectangle::new(cx - r, cy - 5.0, 11.0, 10.0), 2.0, color);
            l(d, -4.0, -r, r, -r);
            l(d, r, -r, r, 3.0);
        }
        Icon::Alert => {
            l(d, 0.0, -r, -r, r - 1.0);
            l(d, -r, r - 1.0, r, r - 1.0);
            l(d, r, r - 1.0, 0.0, -r);
            l(d, 0.0, -2.0, 0.0, 2.0);
        }
    }
}

pub fn draw_header<D: RaylibDraw>(
    d: &mut D,
    layout: &ChromeLayout,
    steps: &[SceneDescriptor],
    seq: &SequencerSnapshot,
    play_progress: Option<f32>,
    pointer: &Pointer,
) {
    d.draw_rectangle_rec(Rectangle::new(0.0, 0.0, RENDER_WIDTH as f32, HEADER_HEIGHT), ui::SURFACE);
    d.draw_line_ex(
        Vector2::new(0.0, HEADER_HEIGHT),
        Vector2::new(RENDER_WIDTH as f32, HEADER_HEIGHT),
        1.0,
        ui::BORDER,
    );

    // Logo and title
    let logo = Rectangle::new(32.0, 21.0, 48.0, 48.0);
    d.draw_rectangle_rounded(logo, 0.25, 8, ui::ACCENT);
    ui::text_centered(d, "AI", 56.0, 33.0, 22, ui::SURFACE);
    ui::text(d, "Heritage Restoration", 96.0, 24.0, 24, ui::TEXT);
    ui::text(d, "Pix2Pix Architecture", 96.0, 54.0, 14, ui::MUTED);

    // Stepper
    for (i, (step, b)) in steps.iter().zip(&layout.steps).enumerate() {
        let active = i == seq.active;
        let hovered = pointer.over(*b);
        let fill = if active { ui::SURFACE } else if hovered { ui::ACCENT_SOFT } else { Color::new(0xF3, 0xF4, 0xF6, 255) };
        d.draw_rectangle_rounded(ui::rect(*b), 0.25, 8, fill);
        if active {
            d.draw_rectangle_lines_ex(ui::rect(*b), 1.0, ui::BORDER);
        }
        let color = if active {
            ui::ACCENT
        } else if i < seq.active {
            ui::FAINT
        } else {
            ui::MUTED
        };
        draw_icon(d, step.icon, b.left + 16.0, b.top + b.height * 0.5, color);
        ui::text(d, step.label, b.left + 30.0, b.top + 15.0, 14, if active { ui::ACCENT } else { ui::MUTED });
    }

    // Play control
    let b = layout.play;
    let (fill, color) = if seq.playing {
        (ui::DANGER_SOFT, ui::DANGER)
    } else {
        (ui::ACCENT, ui::SURFACE)
    };
    d.draw_rectangle_rounded(ui::rect(b), 0.25, 8, fill);
    let (cx, cy) = b.center();
    if !seq.playing {
        d.draw_triangle(
            Vector2::new(b.left + 22.0, cy - 7.0),
            Vector2::new(b.left + 22.0, cy + 7.0),
            Vector2::new(b.left + 34.0, cy),
            color,
        );
    }
    ui::text_centered(d, play_label(seq.playing), cx + 8.0, cy - 9.0, 18, color);

    // Time left on the current step
    if let Some(progress) = play_progress {
        d.draw_rectangle_rec(
            Rectangle::new(0.0, HEADER_HEIGHT - 3.0, RENDER_WIDTH as f32 * progress, 3.0),
            ui::ACCENT,
        );
    }
}

pub fn draw_footer<D: RaylibDraw>(d: &mut D, layout: &ChromeLayout, seq: &SequencerSnapshot, pointer: &Pointer) {
    let top = RENDER_HEIGHT as f32 - FOOTER_HEIGHT;
    d.draw_rectangle_rec(Rectangle::new(0.0, top, RENDER_WIDTH as f32, FOOTER_HEIGHT), ui::SURFACE);
    d.draw_line_ex(Vector2::new(0.0, top), Vector2::new(RENDER_WIDTH as f32, top), 1.0, ui::BORDER);

    // Semantic legend
    let cy = top + FOOTER_HEIGHT * 0.5;
    ui::text(d, "SEMANTIC LABELS", 32.0, cy - 7.0, 14, ui::FAINT);
    let mut x = 32.0 + ui::text_width("SEMANTIC LABELS", 14) as f32 + 24.0;
    d.draw_line_ex(Vector2::new(x - 12.0, cy - 10.0), Vector2::new(x - 12.0, cy + 10.0), 1.0, ui::BORDER);
    for (label, [r, g, b]) in LEGEND {
        d.draw_circle_v(Vector2::new(x + 8.0, cy), 8.0, Color::new(r, g, b, 255));
        d.draw_circle_lines((x + 8.0) as i32, cy as i32, 8.0, ui::BORDER);
        ui::text(d, label, x + 24.0, cy - 8.0, 16, ui::MUTED);
        x += 24.0 + ui::text_width(label, 16) as f32 + 28.0;
    }

    // Navigation
    ui::button(d, layout.reset, "Reset", false, pointer.over(layout.reset));
    for (b, enabled, forward) in [
        (layout.previous, !seq.is_first(), false),
        (layout.next, !seq.is_last(), true),
    ] {
        let (cx, cy) = b.center();
        if enabled && pointer.over(b) {
            d.draw_circle_v(Vector2::new(cx, cy), b.width * 0.5, Color::new(0xF3, 0xF4, 0xF6, 255));
        }
        let color = if enabled { ui::TEXT } else { ui::with_alpha(ui::TEXT, 0.3) };
        let dir = if forward { 1.0 } else { -1.0 };
        d.draw_line_ex(Vector2::new(cx - 4.0 * dir, cy - 8.0), Vector2::new(cx + 4.0 * dir, cy), 3.0, color);
        d.draw_line_ex(Vector2::new(cx + 4.0 * dir, cy), Vector2::new(cx - 4.0 * dir, cy + 8.0), 3.0, color);
    }
    let readout = format!("{} / {}", seq.active + 1, seq.len);
    let mid = (layout.previous.right() + layout.next.left) * 0.5;
    ui::text_centered(d, &readout, mid, cy - 9.0, 18, ui::TEXT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::STEPS;

    fn seq(active: usize) -> SequencerSnapshot {
        SequencerSnapshot { active, len: STEPS.len(), playing: false, revision: 0 }
    }

    fn press_at(b: Bounds) -> Pointer {
        let (x, y) = b.center();
        Pointer { x, y, pressed: true, down: true, ..Default::default() }
    }

    #[test]
    fn layout_fits_on_the_render_target() {
        let layout = ChromeLayout::new(STEPS.len());
        let last = layout.steps.last().unwrap();
        assert!(last.right() < layout.play.left);
        assert!(layout.reset.right() < layout.previous.left);
        assert!(layout.previous.right() < layout.next.left);
        assert!(layout.next.right() <= RENDER_WIDTH as f32);
    }

    #[test]
    fn stepper_buttons_jump() {
        let layout = ChromeLayout::new(STEPS.len());
        for (i, b) in layout.steps.iter().enumerate() {
            assert_eq!(layout.hit(&press_at(*b), &seq(0)), Some(Command::GoTo(i)));
        }
    }

    #[test]
    fn navigation_disabled_at_the_ends() {
        let layout = ChromeLayout::new(STEPS.len());
        assert_eq!(layout.hit(&press_at(layout.previous), &seq(0)), None);
        assert_eq!(layout.hit(&press_at(layout.next), &seq(0)), Some(Command::Next));
        assert_eq!(layout.hit(&press_at(layout.next), &seq(STEPS.len() - 1)), None);
        assert_eq!(layout.hit(&press_at(layout.previous), &seq(STEPS.len() - 1)), Some(Command::Previous));
    }

    #[test]
    fn play_and_reset() {
        let layout = ChromeLayout::new(STEPS.len());
        assert_eq!(layout.hit(&press_at(layout.play), &seq(3)), Some(Command::TogglePlay));
        assert_eq!(layout.hit(&press_at(layout.reset), &seq(3)), Some(Command::Reset));
    }

    #[test]
    fn hover_without_press_does_nothing() {
        let layout = ChromeLayout::new(STEPS.len());
        let hover = Pointer { pressed: false, ..press_at(layout.play) };
        assert_eq!(layout.hit(&hover, &seq(0)), None);
        let stage = stage_bounds();
        let (x, y) = stage.center();
        assert!(!layout.owns(&Pointer { x, y, ..Default::default() }));
        assert!(layout.owns(&hover));
    }

    #[test]
    fn play_button_text() {
        assert_eq!(play_label(false), "Start Demo");
        assert_eq!(play_label(true), "Stop Auto-Play");
    }
}
