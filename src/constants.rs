pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const HEADER_HEIGHT: f32 = 90.0;          // Stepper bar
pub const FOOTER_HEIGHT: f32 = 90.0;          // Legend and navigation bar

pub const AUTOPLAY_PERIOD: f32 = 4.0;         // Seconds per step while auto-playing
pub const MIN_TIMER_PERIOD: f32 = 0.05;       // Shortest accepted timer period (seconds)
pub const SPOTLIGHT_DELAY: f32 = 3.0;         // Framing scene: seconds between spotlight steps
pub const MOUNT_FADE_DURATION: f32 = 0.3;     // Fade-in when a scene is mounted (seconds)
pub const ANIMATION_DURATION: f32 = 0.6;      // Card flight from spotlight to grid (seconds)
pub const HOTSPOT_PULSE_DURATION: f32 = 3.0;  // One pulse of the architecture hotspots (seconds)

pub const SLIDER_DEFAULT_POSITION: f32 = 50.0;
pub const ROTATION_STEP: i32 = 90;            // Degrees per rotate click
pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 5.0;
pub const ZOOM_HOVER: f32 = 2.5;              // Factor applied when the pointer enters the lens
pub const ZOOM_WHEEL_STEP: f32 = 0.5;         // Factor change per wheel notch
