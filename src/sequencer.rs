//! Step sequencer: which scene is active and whether auto-advance is running.
//!
//! The auto-play timer lives inside the sequencer as an `Option<IntervalTimer>`, so
//! "playing" and "timer armed" can never disagree. Stopping for any reason (manual
//! pause, reaching the last step, owner teardown) drops the timer.

use crate::timer::IntervalTimer;
use log::{debug, info};

/// Immutable view of the sequencer after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencerSnapshot {
    pub active: usize,
    pub len: usize,
    pub playing: bool,
    pub revision: u64,
}

impl SequencerSnapshot {
    pub fn is_first(&self) -> bool {
        self.active == 0
    }

    pub fn is_last(&self) -> bool {
        self.active + 1 >= self.len
    }
}

#[derive(Debug)]
pub struct StepSequencer {
    len: usize,
    active: usize,
    period: f32,
    timer: Option<IntervalTimer>,
    revision: u64,
}

impl StepSequencer {
    /// `len` is the number of steps; an empty list is treated as a single step.
    pub fn new(len: usize, period: f32) -> Self {
        debug_assert!(len > 0, "sequencer needs at least one step");
        Self {
            len: len.max(1),
            active: 0,
            period,
            timer: None,
            revision: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> SequencerSnapshot {
        SequencerSnapshot {
            active: self.active,
            len: self.len,
            playing: self.is_playing(),
            revision: self.revision,
        }
    }

    fn last(&self) -> usize {
        self.len - 1
    }

    fn set_active(&mut self, index: usize) {
        if index != self.active {
            self.active = index;
            self.revision += 1;
        }
    }

    /// Jumps to `index`, clamped to the step range. Play state is untouched.
    pub fn go_to(&mut self, index: usize) {
        self.set_active(index.min(self.last()));
    }

    pub fn next(&mut self) {
        if self.active < self.last() {
            self.set_active(self.active + 1);
        }
    }

    pub fn previous(&mut self) {
        if self.active > 0 {
            self.set_active(self.active - 1);
        }
    }

    /// Arms the auto-advance timer. No-op while already playing.
    pub fn start(&mut self) {
        if self.timer.is_none() {
            self.timer = Some(IntervalTimer::new(self.period));
            self.revision += 1;
            info!("auto-play started at step {}/{}", self.active + 1, self.len);
        }
    }

    /// Cancels the auto-advance timer. No-op while paused.
    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            self.revision += 1;
            info!("auto-play stopped at step {}/{}", self.active + 1, self.len);
        }
    }

    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// One auto-advance timer callback. Ignored while paused.
    ///
    /// Advancing onto the last step stops playback right away, so the last step is
    /// never left by the timer.
    pub fn tick(&mut self) {
        if !self.is_playing() {
            return;
        }
        if self.active >= self.last() {
            self.stop();
            return;
        }
        self.set_active(self.active + 1);
        debug!("auto-play advanced to step {}/{}", self.active + 1, self.len);
        if self.active == self.last() {
            self.stop();
        }
    }

    /// Feeds frame time to the timer and runs every tick that came due.
    /// Returns true when any state changed.
    pub fn advance(&mut self, dt: f32) -> bool {
        let before = self.revision;
        let fired = match self.timer.as_mut() {
            Some(timer) => timer.advance(dt),
            None => 0,
        };
        for _ in 0..fired {
            if !self.is_playing() {
                break;
            }
            self.tick();
        }
        self.revision != before
    }

    /// Back to the first step, paused.
    pub fn reset(&mut self) {
        self.stop();
        self.set_active(0);
    }

    /// Fraction of the current auto-play period elapsed, if playing.
    pub fn play_progress(&self) -> Option<f32> {
        self.timer.as_ref().map(IntervalTimer::progress)
    }
}
