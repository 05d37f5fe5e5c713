use crate::constants::MIN_TIMER_PERIOD;

/// Repeating timer fed with frame time by its owner.
///
/// Nothing fires on its own: the owner calls [`IntervalTimer::advance`] once per frame
/// and acts on the returned fire count. Cancelling is dropping the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalTimer {
    period: f32,
    elapsed: f32,
}

impl IntervalTimer {
    pub fn new(period: f32) -> Self {
        Self {
            period: period.max(MIN_TIMER_PERIOD),
            elapsed: 0.0,
        }
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    /// Accumulates `dt` seconds and returns how many full periods elapsed.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !(dt > 0.0) {
            return 0;
        }
        self.elapsed += dt;
        let fired = (self.elapsed / self.period).floor();
        self.elapsed -= fired * self.period;
        fired as u32
    }

    /// Fraction of the current period already elapsed, in [0, 1).
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.period).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_period() {
        let mut timer = IntervalTimer::new(4.0);
        assert_eq!(timer.advance(3.0), 0);
        assert_eq!(timer.advance(1.0), 1);
        assert_eq!(timer.advance(2.0), 0);
        assert!((timer.progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn long_frame_fires_several_times() {
        let mut timer = IntervalTimer::new(1.0);
        assert_eq!(timer.advance(3.5), 3);
        assert_eq!(timer.advance(0.5), 1);
    }

    #[test]
    fn ignores_non_positive_time() {
        let mut timer = IntervalTimer::new(1.0);
        assert_eq!(timer.advance(0.0), 0);
        assert_eq!(timer.advance(-2.0), 0);
        assert_eq!(timer.advance(f32::NAN), 0);
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn period_has_a_floor() {
        let timer = IntervalTimer::new(0.0);
        assert_eq!(timer.period(), MIN_TIMER_PERIOD);
    }
}
