use crate::constants::*;
use crate::slider::Bounds;

/// A floor-plan card that can fly between two boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub bounds: Bounds,

    start: Bounds,
    end: Bounds,

    animation_timer: f32,
    pub is_animating: bool,
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Same centre, `factor` times the size.
pub fn scaled(b: Bounds, factor: f32) -> Bounds {
    let (cx, cy) = b.center();
    let (w, h) = (b.width * factor, b.height * factor);
    Bounds::new(cx - w * 0.5, cy - h * 0.5, w, h)
}

impl Card {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            start: bounds,
            end: bounds,
            animation_timer: 0.0,
            is_animating: false,
        }
    }

    /// Starts a flight from wherever the card is now.
    pub fn fly_to(&mut self, target: Bounds) {
        self.start = self.bounds;
        self.end = target;
        self.animation_timer = 0.0;
        self.is_animating = true;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.animation_timer += dt;
        let t = (self.animation_timer / ANIMATION_DURATION).min(1.0);
        let t = 1.0 - (1.0 - t).powi(3); // easeOutCubic

        self.bounds = Bounds::new(
            lerp(self.start.left, self.end.left, t),
            lerp(self.start.top, self.end.top, t),
            lerp(self.start.width, self.end.width, t),
            lerp(self.start.height, self.end.height, t),
        );

        if self.animation_timer >= ANIMATION_DURATION {
            self.is_animating = false;
            self.bounds = self.end;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_lands_exactly_on_target() {
        let mut card = Card::new(Bounds::new(0.0, 0.0, 100.0, 100.0));
        let target = Bounds::new(500.0, 200.0, 50.0, 60.0);
        card.fly_to(target);
        card.update(ANIMATION_DURATION * 0.5);
        assert!(card.is_animating);
        assert!(card.bounds.left > 0.0 && card.bounds.left < 500.0);
        card.update(ANIMATION_DURATION);
        assert!(!card.is_animating);
        assert_eq!(card.bounds, target);
    }

    #[test]
    fn idle_card_does_not_move() {
        let start = Bounds::new(10.0, 10.0, 20.0, 20.0);
        let mut card = Card::new(start);
        card.update(5.0);
        assert_eq!(card.bounds, start);
    }

    #[test]
    fn scaled_keeps_center() {
        let b = scaled(Bounds::new(0.0, 0.0, 100.0, 200.0), 0.5);
        assert_eq!(b, Bounds::new(25.0, 50.0, 50.0, 100.0));
    }
}
