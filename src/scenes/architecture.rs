use raylib::prelude::*;

use crate::constants::HOTSPOT_PULSE_DURATION;
use crate::scenes::{DrawContext, Scene, UpdateContext, heading};
use crate::slider::Bounds;
use crate::ui;

struct Hotspot {
    /// Position in the figure panel, as fractions.
    at: (f32, f32),
    color: Color,
    title: &'static str,
    body: &'static str,
}

const HOTSPOTS: [Hotspot; 2] = [
    Hotspot {
        at: (0.25, 1.0 / 3.0),
        color: ui::ACCENT,
        title: "Generator 1 (Structure):",
        body: "Trained to predict walls, domes, and arches from partial footprint data only.",
    },
    Hotspot {
        at: (0.75, 1.0 / 3.0),
        color: ui::PURPLE,
        title: "Generator 2 (Texture):",
        body: "Takes the structural map and applies material properties and fine details based on style transfer.",
    },
];

const HOTSPOT_RADIUS: f32 = 16.0;
const TOOLTIP_WIDTH: f32 = 380.0;

/// At most one open tooltip; clicking its hotspot again closes it.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Tooltips {
    open: Option<usize>,
}

impl Tooltips {
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }
}

/// Scale of a hotspot during its single pulse: 1 -> 1.5 -> 1.
pub fn pulse_scale(elapsed: f32) -> f32 {
    if !(0.0..HOTSPOT_PULSE_DURATION).contains(&elapsed) {
        return 1.0;
    }
    1.0 + 0.5 * (std::f32::consts::PI * elapsed / HOTSPOT_PULSE_DURATION).sin()
}

pub struct ArchitectureScene {
    tooltips: Tooltips,
    elapsed: f32,
}

const SUBTITLE: &str = "The framework utilizes two sequential Pix2Pix networks: the first generates structural \
     topology from incomplete footprints, and the second hallucinates architectural details.";

fn figure_panel(area: Bounds) -> Bounds {
    let width = 1200.0;
    let height = width * 9.0 / 16.0;
    let (cx, _) = area.center();
    Bounds::new(cx - width * 0.5, area.bottom() - height - 30.0, width, height)
}

fn hotspot_center(panel: Bounds, hotspot: &Hotspot) -> Vector2 {
    Vector2::new(
        panel.left + panel.width * hotspot.at.0,
        panel.top + panel.height * hotspot.at.1,
    )
}

impl ArchitectureScene {
    pub fn new() -> Self {
        Self {
            tooltips: Tooltips::default(),
            elapsed: 0.0,
        }
    }
}

impl Scene for ArchitectureScene {
    fn update(&mut self, dt: f32, ctx: &mut UpdateContext) {
        self.elapsed += dt;
        if !ctx.pointer.pressed {
            return;
        }
        let panel = figure_panel(ctx.area);
        for (i, hotspot) in HOTSPOTS.iter().enumerate() {
            let c = hotspot_center(panel, hotspot);
            let (dx, dy) = (ctx.pointer.x - c.x, ctx.pointer.y - c.y);
            if dx * dx + dy * dy <= HOTSPOT_RADIUS * HOTSPOT_RADIUS * 2.25 {
                self.tooltips.toggle(i);
            }
        }
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D, ctx: &DrawContext) {
        heading(d, ctx.area, None, "Two-Step cGAN Architecture", SUBTITLE);

        let panel = figure_panel(ctx.area);
        ui::panel(d, panel, ui::SURFACE, ui::BORDER);
        ui::figure(d, ctx.assets.figure(1), panel.inset(16.0), "Architecture Pipeline");

        let scale = pulse_scale(self.elapsed);
        for (i, hotspot) in HOTSPOTS.iter().enumerate() {
            let c = hotspot_center(panel, hotspot);
            if scale > 1.0 {
                let glow = ui::with_alpha(hotspot.color, 0.6 * (scale - 1.0) * 2.0);
                d.draw_circle_v(c, HOTSPOT_RADIUS * scale * 1.8, ui::with_alpha(glow, 0.4));
            }
            d.draw_circle_v(c, HOTSPOT_RADIUS * scale, hotspot.color);
            ui::text_centered(d, "i", c.x, c.y - 9.0, 18, ui::SURFACE);

            if self.tooltips.open() == Some(i) {
                // first tooltip opens to the right, second to the left
                let left = if i == 0 { c.x - HOTSPOT_RADIUS } else { c.x + HOTSPOT_RADIUS - TOOLTIP_WIDTH };
                let tip = Bounds::new(left, c.y + HOTSPOT_RADIUS * 2.0, TOOLTIP_WIDTH, 120.0);
                d.draw_rectangle_rounded(ui::rect(tip), 0.08, 8, ui::INK);
                ui::text(d, hotspot.title, tip.left + 16.0, tip.top + 14.0, 18, ui::SURFACE);
                ui::paragraph(d, hotspot.body, tip.left + 16.0, tip.top + 42.0, TOOLTIP_WIDTH - 32.0, 16, ui::BORDER);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_toggles_and_switches() {
        let mut t = Tooltips::default();
        t.toggle(0);
        assert_eq!(t.open(), Some(0));
        t.toggle(1);
        assert_eq!(t.open(), Some(1));
        t.toggle(1);
        assert_eq!(t.open(), None);
    }

    #[test]
    fn pulse_peaks_halfway_and_settles() {
        assert_eq!(pulse_scale(0.0), 1.0);
        assert!((pulse_scale(HOTSPOT_PULSE_DURATION * 0.5) - 1.5).abs() < 1e-4);
        assert_eq!(pulse_scale(HOTSPOT_PULSE_DURATION), 1.0);
        assert_eq!(pulse_scale(60.0), 1.0);
    }

    #[test]
    fn hotspots_sit_inside_the_figure() {
        let panel = figure_panel(Bounds::new(0.0, 90.0, 1920.0, 900.0));
        assert!(panel.top > 90.0);
        for h in HOTSPOTS.iter() {
            let c = hotspot_center(panel, h);
            assert!(panel.contains(c.x, c.y));
        }
    }
}
