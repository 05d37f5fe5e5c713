//! Before/after comparison slider.
//!
//! The split position only moves through a [`DragCapture`]. A capture is handed out by
//! [`CompareSlider::begin_drag`], at most one per slider at a time, and consumed by
//! [`DragCapture::release`]. A capture only moves the slider that issued it, and once it
//! is released there is nothing left that could move the slider.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::constants::SLIDER_DEFAULT_POSITION;
use log::{trace, warn};

static NEXT_SLIDER_ID: AtomicU64 = AtomicU64::new(1);

/// Axis-aligned box in render-target pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }

    /// Shrinks the box by `by` pixels on every side.
    pub fn inset(&self, by: f32) -> Self {
        Self::new(
            self.left + by,
            self.top + by,
            (self.width - by * 2.0).max(0.0),
            (self.height - by * 2.0).max(0.0),
        )
    }

    /// Relative position of `(x, y)` inside the box in percent, clamped to [0, 100].
    /// `None` while the box has no area.
    pub fn percent_of(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return None;
        }
        Some((
            ((x - self.left) / self.width * 100.0).clamp(0.0, 100.0),
            ((y - self.top) / self.height * 100.0).clamp(0.0, 100.0),
        ))
    }
}

#[derive(Debug)]
pub struct CompareSlider {
    id: u64,
    /// Set while a capture issued by this slider is live.
    dragging: bool,
    position: f32,
    before_label: String,
    after_label: String,
}

impl Default for CompareSlider {
    fn default() -> Self {
        Self::new("Before", "After")
    }
}

impl CompareSlider {
    pub fn new(before_label: impl Into<String>, after_label: impl Into<String>) -> Self {
        Self {
            id: NEXT_SLIDER_ID.fetch_add(1, Ordering::Relaxed),
            dragging: false,
            position: SLIDER_DEFAULT_POSITION,
            before_label: before_label.into(),
            after_label: after_label.into(),
        }
    }

    /// Split position in percent of the container width.
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn before_label(&self) -> &str {
        &self.before_label
    }

    pub fn after_label(&self) -> &str {
        &self.after_label
    }

    /// Width in pixels of the "before" layer for a container of the given bounds.
    pub fn split_width(&self, container: Bounds) -> f32 {
        container.width.max(0.0) * self.position / 100.0
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Starts a drag. Returns `None` while an earlier capture is still live.
    pub fn begin_drag(&mut self) -> Option<DragCapture> {
        if self.dragging {
            warn!("slider {} is already being dragged", self.id);
            return None;
        }
        self.dragging = true;
        trace!("slider {} drag started at {:.1}%", self.id, self.position);
        Some(DragCapture { slider: self.id })
    }

    fn track(&mut self, pointer_x: f32, container: Bounds) -> bool {
        if !(container.width > 0.0) {
            return false;
        }
        let position = ((pointer_x - container.left) / container.width * 100.0).clamp(0.0, 100.0);
        if position.is_nan() {
            return false;
        }
        self.position = position;
        true
    }
}

/// Live drag gesture on one slider.
///
/// The owner feeds it every pointer move in the window, not only moves over the
/// slider, and releases it on button-up anywhere.
#[derive(Debug)]
pub struct DragCapture {
    slider: u64,
}

impl DragCapture {
    fn owns(&self, slider: &CompareSlider) -> bool {
        slider.id == self.slider && slider.dragging
    }

    /// Recomputes the split from a pointer x coordinate. Returns false when nothing was
    /// updated: the container has no width yet, or `slider` did not issue this capture.
    pub fn pointer_moved(&self, slider: &mut CompareSlider, pointer_x: f32, container: Bounds) -> bool {
        if !self.owns(slider) {
            return false;
        }
        slider.track(pointer_x, container)
    }

    /// Ends the drag on the slider that issued it. Another slider is left untouched.
    pub fn release(self, slider: &mut CompareSlider) {
        if self.owns(slider) {
            slider.dragging = false;
            trace!("slider {} drag released at {:.1}%", slider.id, slider.position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_centered() {
        assert_eq!(CompareSlider::default().position(), 50.0);
    }

    #[test]
    fn drag_maps_pointer_to_percent() {
        let container = Bounds::new(0.0, 0.0, 200.0, 100.0);
        let mut slider = CompareSlider::default();
        let capture = slider.begin_drag().unwrap();
        assert!(capture.pointer_moved(&mut slider, 150.0, container));
        assert_eq!(slider.position(), 75.0);
        assert!(capture.pointer_moved(&mut slider, 400.0, container));
        assert_eq!(slider.position(), 100.0);
        capture.release(&mut slider);
    }

    #[test]
    fn position_stays_in_range_for_any_pointer() {
        let container = Bounds::new(300.0, 40.0, 640.0, 640.0);
        let mut slider = CompareSlider::default();
        let capture = slider.begin_drag().unwrap();
        for x in [-1e9, -300.0, 0.0, 299.0, 300.0, 620.0, 940.0, 5000.0, 1e9, f32::INFINITY, f32::NEG_INFINITY] {
            capture.pointer_moved(&mut slider, x, container);
            let p = slider.position();
            assert!((0.0..=100.0).contains(&p), "{x} -> {p}");
        }
        capture.release(&mut slider);
    }

    #[test]
    fn zero_width_container_is_skipped() {
        let mut slider = CompareSlider::default();
        let capture = slider.begin_drag().unwrap();
        assert!(!capture.pointer_moved(&mut slider, 120.0, Bounds::new(10.0, 10.0, 0.0, 50.0)));
        assert_eq!(slider.position(), 50.0);
        capture.release(&mut slider);
    }

    #[test]
    fn offset_container() {
        let mut slider = CompareSlider::default();
        let capture = slider.begin_drag().unwrap();
        capture.pointer_moved(&mut slider, 150.0, Bounds::new(100.0, 0.0, 200.0, 200.0));
        assert_eq!(slider.position(), 25.0);
        assert_eq!(slider.split_width(Bounds::new(100.0, 0.0, 200.0, 200.0)), 50.0);
        capture.pointer_moved(&mut slider, 20.0, Bounds::new(100.0, 0.0, 200.0, 200.0));
        assert_eq!(slider.position(), 0.0);
        capture.release(&mut slider);
    }

    #[test]
    fn released_drag_leaves_position_alone() {
        let container = Bounds::new(0.0, 0.0, 200.0, 200.0);
        let mut slider = CompareSlider::new("Ruin", "Structure");
        let mut capture = slider.begin_drag();

        // pointer leaves the box to the right, then the button goes up out there
        for x in [180.0, 260.0, 900.0] {
            if let Some(c) = capture.as_ref() {
                c.pointer_moved(&mut slider, x, container);
            }
        }
        if let Some(c) = capture.take() {
            c.release(&mut slider);
        }
        assert_eq!(slider.position(), 100.0);
        assert!(!slider.is_dragging());

        for x in [10.0, 50.0] {
            if let Some(c) = capture.as_ref() {
                c.pointer_moved(&mut slider, x, container);
            }
        }
        assert_eq!(slider.position(), 100.0);
        assert_eq!(slider.before_label(), "Ruin");
    }

    #[test]
    fn one_live_capture_per_slider() {
        let container = Bounds::new(0.0, 0.0, 200.0, 100.0);
        let mut slider = CompareSlider::default();
        let first = slider.begin_drag().unwrap();
        assert!(slider.is_dragging());
        assert!(slider.begin_drag().is_none());

        first.release(&mut slider);
        assert!(!slider.is_dragging());
        let second = slider.begin_drag().unwrap();
        assert!(second.pointer_moved(&mut slider, 50.0, container));
        assert_eq!(slider.position(), 25.0);
        second.release(&mut slider);
    }

    #[test]
    fn capture_only_moves_its_own_slider() {
        let container = Bounds::new(0.0, 0.0, 200.0, 100.0);
        let mut structure = CompareSlider::new("Ruin", "Structure");
        let mut texture = CompareSlider::new("Zoning", "Furnishing");
        let capture = structure.begin_drag().unwrap();

        assert!(!capture.pointer_moved(&mut texture, 20.0, container));
        assert_eq!(texture.position(), 50.0);
        assert!(texture.begin_drag().is_some());

        assert!(capture.pointer_moved(&mut structure, 20.0, container));
        assert_eq!(structure.position(), 10.0);
        capture.release(&mut structure);
        assert!(!structure.is_dragging());
        assert!(texture.is_dragging());
    }

    #[test]
    fn percent_of_needs_area() {
        let b = Bounds::new(0.0, 0.0, 400.0, 200.0);
        assert_eq!(b.percent_of(100.0, 50.0), Some((25.0, 25.0)));
        assert_eq!(b.percent_of(-10.0, 500.0), Some((0.0, 100.0)));
        assert_eq!(Bounds::default().percent_of(1.0, 1.0), None);
    }
}
