//! Scene decorations: augmentation preview, evaluation heatmap and the lens zoom.
//! All of it is cleared together by the presentation reset.

use crate::constants::*;
use crate::slider::Bounds;

/// Rotation and mirror applied to the dataset preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Augmentation {
    /// Accumulated degrees; only reduced for display.
    pub rotation: i32,
    pub mirrored: bool,
}

impl Augmentation {
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.wrapping_add(ROTATION_STEP);
    }

    pub fn toggle_mirror(&mut self) {
        self.mirrored = !self.mirrored;
    }

    pub fn display_angle(&self) -> i32 {
        self.rotation.rem_euclid(360)
    }

    /// Training samples produced per source plan: four rotations, doubled by mirroring.
    pub fn sample_multiplier(&self) -> u32 {
        4 * if self.mirrored { 2 } else { 1 }
    }
}

/// Magnifier over a figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensZoom {
    factor: f32,
    /// Zoom origin in percent of the container.
    origin: (f32, f32),
    hovered: bool,
}

impl Default for LensZoom {
    fn default() -> Self {
        Self {
            factor: ZOOM_MIN,
            origin: (50.0, 50.0),
            hovered: false,
        }
    }
}

impl LensZoom {
    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn origin(&self) -> (f32, f32) {
        self.origin
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_factor(&mut self, factor: f32) {
        if factor.is_finite() {
            self.factor = factor.clamp(ZOOM_MIN, ZOOM_MAX);
        }
    }

    pub fn pointer_entered(&mut self) {
        self.hovered = true;
        self.factor = ZOOM_HOVER;
    }

    pub fn pointer_left(&mut self) {
        self.hovered = false;
        self.factor = ZOOM_MIN;
    }

    /// Wheel notches; positive zooms in.
    pub fn wheel(&mut self, notches: f32) {
        self.set_factor(self.factor + notches * ZOOM_WHEEL_STEP);
    }

    /// Moves the zoom origin under the pointer. Ignored while not hovered or while the
    /// container has no area.
    pub fn pointer_moved(&mut self, x: f32, y: f32, container: Bounds) {
        if !self.hovered {
            return;
        }
        if let Some(origin) = container.percent_of(x, y) {
            self.origin = origin;
        }
    }

    /// Where `content` lands once scaled by the zoom factor about the origin point of
    /// `container`. The origin point itself stays fixed on screen.
    pub fn zoom_rect(&self, content: Bounds, container: Bounds) -> Bounds {
        let ox = container.left + container.width * self.origin.0 / 100.0;
        let oy = container.top + container.height * self.origin.1 / 100.0;
        Bounds::new(
            ox + (content.left - ox) * self.factor,
            oy + (content.top - oy) * self.factor,
            content.width * self.factor,
            content.height * self.factor,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Decorations {
    pub augmentation: Augmentation,
    pub heatmap: bool,
    pub lens: LensZoom,
}

impl Decorations {
    pub fn toggle_heatmap(&mut self) {
        self.heatmap = !self.heatmap;
    }

    pub fn release_lens(&mut self) {
        self.lens = LensZoom::default();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_rotations_come_back_around() {
        let mut aug = Augmentation::default();
        let start = aug.display_angle();
        for expected in [90, 180, 270, 360] {
            aug.rotate();
            assert_eq!(aug.rotation, expected);
        }
        assert_eq!(aug.display_angle(), start);
        aug.rotate();
        assert_eq!(aug.display_angle(), 90);
    }

    #[test]
    fn mirror_doubles_samples() {
        let mut aug = Augmentation::default();
        assert_eq!(aug.sample_multiplier(), 4);
        aug.toggle_mirror();
        assert_eq!(aug.sample_multiplier(), 8);
        aug.toggle_mirror();
        assert!(!aug.mirrored);
    }

    #[test]
    fn hover_and_leave() {
        let mut lens = LensZoom::default();
        lens.pointer_entered();
        assert_eq!(lens.factor(), 2.5);
        lens.pointer_left();
        assert_eq!(lens.factor(), 1.0);
    }

    #[test]
    fn wheel_is_clamped() {
        let mut lens = LensZoom::default();
        lens.pointer_entered();
        lens.wheel(100.0);
        assert_eq!(lens.factor(), ZOOM_MAX);
        lens.wheel(-100.0);
        assert_eq!(lens.factor(), ZOOM_MIN);
        lens.wheel(1.0);
        assert_eq!(lens.factor(), 1.5);
        lens.set_factor(f32::NAN);
        assert_eq!(lens.factor(), 1.5);
    }

    #[test]
    fn origin_follows_pointer_while_hovered() {
        let container = Bounds::new(100.0, 100.0, 400.0, 200.0);
        let mut lens = LensZoom::default();
        lens.pointer_moved(200.0, 150.0, container);
        assert_eq!(lens.origin(), (50.0, 50.0));

        lens.pointer_entered();
        lens.pointer_moved(200.0, 150.0, container);
        assert_eq!(lens.origin(), (25.0, 25.0));

        lens.pointer_moved(300.0, 200.0, Bounds::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(lens.origin(), (25.0, 25.0));
    }

    #[test]
    fn zoom_keeps_origin_fixed() {
        let container = Bounds::new(100.0, 100.0, 200.0, 100.0);
        let mut lens = LensZoom::default();
        assert_eq!(lens.zoom_rect(container, container), container);

        lens.pointer_entered();
        lens.set_factor(2.0);
        lens.pointer_moved(100.0, 100.0, container);
        assert_eq!(lens.zoom_rect(container, container), Bounds::new(100.0, 100.0, 400.0, 200.0));

        lens.pointer_moved(300.0, 200.0, container);
        assert_eq!(lens.zoom_rect(container, container), Bounds::new(-100.0, 0.0, 400.0, 200.0));
    }

    #[test]
    fn reset_clears_everything() {
        let mut deco = Decorations::default();
        for _ in 0..3 {
            deco.augmentation.rotate();
        }
        deco.augmentation.toggle_mirror();
        deco.lens.set_factor(3.0);
        deco.toggle_heatmap();

        deco.reset();
        assert_eq!(deco.augmentation.rotation, 0);
        assert!(!deco.augmentation.mirrored);
        assert_eq!(deco.lens.factor(), 1.0);
        assert!(!deco.heatmap);
    }
}
