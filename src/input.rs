use raylib::prelude::*;

use crate::constants::*;
use crate::slider::Bounds;

/// Pointer state for one frame, in render-target coordinates.
///
/// Polled once per frame for the whole window, so whoever holds a drag sees every move
/// and every release no matter where the pointer is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
    pub moved: bool,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
    /// Wheel notches, positive away from the user.
    pub wheel: f32,
}

impl Pointer {
    pub fn poll(rl: &RaylibHandle) -> Self {
        let (sx, sy) = window_to_render(rl.get_screen_width(), rl.get_screen_height());
        let position = rl.get_mouse_position();
        let delta = rl.get_mouse_delta();
        Self {
            x: position.x * sx,
            y: position.y * sy,
            moved: delta.x != 0.0 || delta.y != 0.0,
            pressed: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            down: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
            released: rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
            wheel: rl.get_mouse_wheel_move(),
        }
    }

    pub fn over(&self, bounds: Bounds) -> bool {
        bounds.contains(self.x, self.y)
    }

    pub fn clicked(&self, bounds: Bounds) -> bool {
        self.pressed && self.over(bounds)
    }

    /// Same pointer with the press consumed, for handing on after the chrome used it.
    pub fn without_press(self) -> Self {
        Self { pressed: false, ..self }
    }
}

/// Scale factors from window pixels to render-target pixels.
pub fn window_to_render(window_width: i32, window_height: i32) -> (f32, f32) {
    let sx = if window_width > 0 { RENDER_WIDTH as f32 / window_width as f32 } else { 1.0 };
    let sy = if window_height > 0 { RENDER_HEIGHT as f32 / window_height as f32 } else { 1.0 };
    (sx, sy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_size_window_doubles_coordinates() {
        assert_eq!(window_to_render(960, 540), (2.0, 2.0));
        assert_eq!(window_to_render(1920, 1080), (1.0, 1.0));
    }

    #[test]
    fn minimized_window_does_not_divide_by_zero() {
        assert_eq!(window_to_render(0, 0), (1.0, 1.0));
    }

    #[test]
    fn click_needs_press_inside() {
        let b = Bounds::new(10.0, 10.0, 20.0, 20.0);
        let p = Pointer { x: 15.0, y: 15.0, pressed: true, ..Default::default() };
        assert!(p.clicked(b));
        assert!(!p.without_press().clicked(b));
        assert!(!Pointer { x: 50.0, ..p }.clicked(b));
    }
}
