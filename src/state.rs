use crate::decoration::Decorations;
use crate::sequencer::{SequencerSnapshot, StepSequencer};
use crate::steps::SceneDescriptor;
use log::{info, trace};

/// Immutable copy of everything the shell renders from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentationSnapshot {
    pub sequencer: SequencerSnapshot,
    pub decorations: Decorations,
    /// Bumped by every reset, so the shell can remount even when the step is unchanged.
    pub epoch: u64,
    /// Bumped by every change to any of the above, navigation and decorations alike.
    pub revision: u64,
}

/// Navigation request coming from the chrome.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    GoTo(usize),
    Previous,
    Next,
    TogglePlay,
    Reset,
}

/// State container for the whole presentation: the step sequencer plus the
/// decoration state shared by the scenes.
pub struct Presentation {
    steps: &'static [SceneDescriptor],
    sequencer: StepSequencer,
    decorations: Decorations,
    epoch: u64,
    revision: u64,
}

type Observed = (SequencerSnapshot, Decorations, u64);

impl Presentation {
    pub fn new(steps: &'static [SceneDescriptor], period: f32) -> Self {
        Self {
            steps,
            sequencer: StepSequencer::new(steps.len(), period),
            decorations: Decorations::default(),
            epoch: 0,
            revision: 0,
        }
    }

    pub fn steps(&self) -> &'static [SceneDescriptor] {
        self.steps
    }

    pub fn sequencer(&self) -> &StepSequencer {
        &self.sequencer
    }

    pub fn active_step(&self) -> &'static SceneDescriptor {
        &self.steps[self.sequencer.active()]
    }

    pub fn decorations(&self) -> &Decorations {
        &self.decorations
    }

    pub fn snapshot(&self) -> PresentationSnapshot {
        PresentationSnapshot {
            sequencer: self.sequencer.snapshot(),
            decorations: self.decorations,
            epoch: self.epoch,
            revision: self.revision,
        }
    }

    fn observe(&self) -> Observed {
        (self.sequencer.snapshot(), self.decorations, self.epoch)
    }

    /// Bumps the revision when anything moved since `before`.
    fn commit(&mut self, before: Observed) {
        if self.observe() != before {
            self.revision += 1;
            trace!("presentation revision {}", self.revision);
        }
    }

    pub fn apply(&mut self, command: Command) {
        let before = self.observe();
        match command {
            Command::GoTo(index) => self.sequencer.go_to(index),
            Command::Previous => self.sequencer.previous(),
            Command::Next => self.sequencer.next(),
            Command::TogglePlay => self.sequencer.toggle_play(),
            Command::Reset => self.reset_all(),
        }
        self.commit(before);
    }

    pub fn advance(&mut self, dt: f32) -> bool {
        let before = self.observe();
        let fired = self.sequencer.advance(dt);
        self.commit(before);
        fired
    }

    /// Runs `edit` against the decorations. The only way scenes change them, so every
    /// rotate, mirror, heatmap or lens change shows up as a new revision.
    pub fn decorate<R>(&mut self, edit: impl FnOnce(&mut Decorations) -> R) -> R {
        let before = self.observe();
        let result = edit(&mut self.decorations);
        self.commit(before);
        result
    }

    /// Clears the decoration state owned by the scene being torn down. The lens only
    /// lives as long as the scene showing it.
    pub fn unmount_scene(&mut self) {
        self.decorate(|d| d.release_lens());
    }

    /// First step, paused, default decorations. One update, one new epoch.
    pub fn reset(&mut self) {
        self.apply(Command::Reset);
    }

    fn reset_all(&mut self) {
        self.sequencer.reset();
        self.decorations.reset();
        self.epoch += 1;
        info!("presentation reset");
    }

    /// Stops the auto-play timer. Called by the owner before the window goes away.
    pub fn shutdown(&mut self) {
        let before = self.observe();
        self.sequencer.stop();
        self.commit(before);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::{STEPS, SceneKind};

    #[test]
    fn reset_restores_defaults_in_one_step() {
        let mut p = Presentation::new(&STEPS, 4.0);
        p.apply(Command::GoTo(3));
        p.apply(Command::TogglePlay);
        p.decorate(|d| {
            for _ in 0..3 {
                d.augmentation.rotate();
            }
            d.augmentation.toggle_mirror();
            d.lens.set_factor(3.0);
        });
        assert_eq!(p.decorations().augmentation.rotation, 270);

        let before = p.snapshot();
        p.apply(Command::Reset);
        let after = p.snapshot();

        assert_eq!(after.decorations.augmentation.rotation, 0);
        assert!(!after.decorations.augmentation.mirrored);
        assert_eq!(after.decorations.lens.factor(), 1.0);
        assert_eq!(after.sequencer.active, 0);
        assert!(!after.sequencer.playing);
        assert_eq!(after.epoch, before.epoch + 1);
        assert_eq!(after.revision, before.revision + 1);
        assert_eq!(p.active_step().kind, SceneKind::Framing);
    }

    #[test]
    fn reset_on_a_pristine_deck_still_moves_the_revision() {
        let mut p = Presentation::new(&STEPS, 4.0);
        let before = p.snapshot();
        p.reset();
        let after = p.snapshot();
        assert_eq!(after.sequencer.active, 0);
        assert_eq!(after.epoch, 1);
        assert!(after.revision > before.revision);
    }

    #[test]
    fn decoration_changes_move_the_revision() {
        let mut p = Presentation::new(&STEPS, 4.0);
        let start = p.snapshot();

        p.decorate(|d| d.augmentation.rotate());
        let rotated = p.snapshot();
        assert_eq!(rotated.revision, start.revision + 1);
        assert_eq!(rotated.sequencer, start.sequencer);

        p.decorate(|d| d.toggle_heatmap());
        assert_eq!(p.snapshot().revision, rotated.revision + 1);

        p.decorate(|d| d.augmentation.toggle_mirror());
        p.decorate(|d| d.lens.wheel(2.0));
        assert_eq!(p.snapshot().revision, rotated.revision + 3);
    }

    #[test]
    fn untouched_decorations_keep_the_revision() {
        let mut p = Presentation::new(&STEPS, 4.0);
        let start = p.snapshot();
        let heatmap = p.decorate(|d| d.heatmap);
        assert!(!heatmap);
        // already at the minimum, so the clamp leaves it unchanged
        p.decorate(|d| d.lens.wheel(-3.0));
        p.apply(Command::Previous);
        assert!(!p.advance(1.0));
        assert_eq!(p.snapshot(), start);
    }

    #[test]
    fn unmounting_clears_the_lens_only() {
        let mut p = Presentation::new(&STEPS, 4.0);
        p.apply(Command::GoTo(8));
        p.decorate(|d| {
            d.augmentation.rotate();
            d.lens.pointer_entered();
            d.lens.pointer_moved(10.0, 10.0, crate::slider::Bounds::new(0.0, 0.0, 100.0, 100.0));
            d.lens.wheel(4.0);
        });
        p.apply(Command::Next);
        p.unmount_scene();

        let lens = p.decorations().lens;
        assert!(!lens.is_hovered());
        assert_eq!(lens.factor(), 1.0);
        assert_eq!(lens.origin(), (50.0, 50.0));
        assert_eq!(p.decorations().augmentation.rotation, 90);
    }

    #[test]
    fn snapshots_are_detached_copies() {
        let mut p = Presentation::new(&STEPS, 4.0);
        let first = p.snapshot();
        p.apply(Command::Next);
        p.decorate(|d| d.toggle_heatmap());
        assert_eq!(first.sequencer.active, 0);
        assert!(!first.decorations.heatmap);
        assert_ne!(p.snapshot(), first);
        assert!(p.snapshot().sequencer.revision > first.sequencer.revision);
    }

    #[test]
    fn autoplay_through_the_whole_deck() {
        let mut p = Presentation::new(&STEPS, 4.0);
        p.apply(Command::TogglePlay);
        for _ in 0..STEPS.len() * 2 {
            p.advance(4.0);
        }
        let snap = p.snapshot();
        assert_eq!(snap.sequencer.active, STEPS.len() - 1);
        assert!(!snap.sequencer.playing);
        assert_eq!(p.active_step().kind, SceneKind::Paper);
    }

    #[test]
    fn shutdown_cancels_autoplay() {
        let mut p = Presentation::new(&STEPS, 4.0);
        p.apply(Command::TogglePlay);
        p.shutdown();
        assert!(!p.advance(40.0));
        assert_eq!(p.snapshot().sequencer.active, 0);
    }
}
