use log::debug;
use raylib::prelude::*;

use crate::constants::*;
use crate::floor_plan::Placement;
use crate::scenes::card::{Card, scaled};
use crate::scenes::{DrawContext, Scene, UpdateContext};
use crate::slider::Bounds;
use crate::steps::{STAGES, StageInfo};
use crate::timer::IntervalTimer;
use crate::ui;

const GRID_CARD_WIDTH: f32 = 300.0;
const GRID_GAP: f32 = 80.0;
const SPOTLIGHT_WIDTH: f32 = 460.0;
const CARD_ASPECT: f32 = 1.3;

/// Which stage is in the spotlight.
///
/// Step `k < len` shows stage `k` centred; stages before `k` sit in the grid. Step 0
/// waits for a click, every later step advances on its own after a delay, and step
/// `len` (everything in the grid) is final.
#[derive(Debug)]
pub struct Spotlight {
    step: usize,
    len: usize,
    timer: Option<IntervalTimer>,
}

impl Spotlight {
    pub fn new(len: usize) -> Self {
        Self { step: 0, len, timer: None }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn is_done(&self) -> bool {
        self.step >= self.len
    }

    pub fn is_waiting_for_click(&self) -> bool {
        self.step == 0 && self.len > 0
    }

    /// The click on the first stage. Ignored at any other step.
    pub fn start(&mut self) -> bool {
        if !self.is_waiting_for_click() {
            return false;
        }
        self.step = 1;
        if !self.is_done() {
            self.timer = Some(IntervalTimer::new(SPOTLIGHT_DELAY));
        }
        true
    }

    /// Returns the steps passed during this frame, in order.
    pub fn advance(&mut self, dt: f32) -> Vec<usize> {
        let fired = match self.timer.as_mut() {
            Some(timer) => timer.advance(dt),
            None => 0,
        };
        let mut passed = Vec::new();
        for _ in 0..fired {
            if self.is_done() {
                break;
            }
            passed.push(self.step);
            self.step += 1;
        }
        if self.is_done() {
            self.timer = None;
        }
        passed
    }

    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }
}

pub struct FramingScene {
    spotlight: Spotlight,
    cards: Vec<Card>,
    spot: Bounds,
    slots: Vec<Bounds>,
}

fn card_box(cx: f32, cy: f32, width: f32) -> Bounds {
    let height = width * CARD_ASPECT;
    Bounds::new(cx - width * 0.5, cy - height * 0.5, width, height)
}

impl FramingScene {
    pub fn new(area: Bounds) -> Self {
        let (cx, cy) = area.center();
        let spot = card_box(cx, cy, SPOTLIGHT_WIDTH);
        let total = STAGES.len() as f32 * GRID_CARD_WIDTH + (STAGES.len() as f32 - 1.0) * GRID_GAP;
        let slots = (0..STAGES.len())
            .map(|i| {
                let x = cx - total * 0.5 + GRID_CARD_WIDTH * 0.5 + i as f32 * (GRID_CARD_WIDTH + GRID_GAP);
                card_box(x, cy, GRID_CARD_WIDTH)
            })
            .collect();

        let mut cards: Vec<Card> = (0..STAGES.len()).map(|_| Card::new(scaled(spot, 0.5))).collect();
        if let Some(first) = cards.first_mut() {
            first.fly_to(spot);
        }

        Self {
            spotlight: Spotlight::new(STAGES.len()),
            cards,
            spot,
            slots,
        }
    }

    /// Stage `from` leaves the spotlight for its slot; the next one pops in.
    fn on_step_passed(&mut self, from: usize) {
        debug!("Framing: stage {} moves to the grid", from);
        if let Some(card) = self.cards.get_mut(from) {
            card.fly_to(self.slots[from]);
        }
        if let Some(card) = self.cards.get_mut(from + 1) {
            *card = Card::new(scaled(self.spot, 0.5));
            card.fly_to(self.spot);
        }
    }

    fn draw_card<D: RaylibDraw>(d: &mut D, ctx: &DrawContext, stage: &StageInfo, b: Bounds, spotlight: bool, hint: bool) {
        if spotlight {
            d.draw_rectangle_rounded(ui::rect(b.inset(-6.0)), 0.06, 8, ui::ACCENT_SOFT);
        }
        ui::panel(d, b, ui::SURFACE, ui::BORDER);

        let pad = b.width * 0.06;
        let label_size = (b.width * 0.055).max(10.0) as i32;
        let (cx, _) = b.center();
        ui::text_centered(d, stage.label, cx, b.top + pad, label_size, ui::TEXT);

        let side = b.width - pad * 2.0;
        let plan = Bounds::new(b.left + pad, b.top + pad * 1.6 + label_size as f32, side, side);
        ctx.plans.get(stage.stage).draw(d, &Placement::fit(plan));

        let caption_size = (b.width * 0.035).max(8.0) as i32;
        let caption = stage.caption.to_uppercase();
        let y = plan.bottom() + pad * 0.6;
        ui::text_centered(d, &caption, cx, y, caption_size, ui::FAINT);
        if hint {
            ui::text_centered(d, "CLICK TO START", cx, y + caption_size as f32 * 1.8, caption_size, ui::ACCENT);
        }
    }
}

impl Scene for FramingScene {
    fn update(&mut self, dt: f32, ctx: &mut UpdateContext) {
        if ctx.pointer.clicked(ctx.area) && self.spotlight.start() {
            self.on_step_passed(0);
        }
        for from in self.spotlight.advance(dt) {
            self.on_step_passed(from);
        }
        for card in self.cards.iter_mut() {
            card.update(dt);
        }
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D, ctx: &DrawContext) {
        let step = self.spotlight.step();

        // Settled grid cards first, then the veil, then anything in motion or spotlit
        for (i, card) in self.cards.iter().enumerate() {
            if i < step && !card.is_animating {
                Self::draw_card(d, ctx, &STAGES[i], card.bounds, false, false);
            }
        }
        if !self.spotlight.is_done() {
            d.draw_rectangle_rec(ui::rect(ctx.area), ui::with_alpha(ui::SURFACE, 0.6));
        }
        for (i, card) in self.cards.iter().enumerate() {
            let in_flight = i < step && card.is_animating;
            let spotlit = i == step;
            if in_flight || spotlit {
                let hint = spotlit && self.spotlight.is_waiting_for_click();
                Self::draw_card(d, ctx, &STAGES[i], card.bounds, spotlit, hint);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_for_click() {
        let mut s = Spotlight::new(3);
        assert!(s.advance(100.0).is_empty());
        assert_eq!(s.step(), 0);
        assert!(!s.has_timer());
    }

    #[test]
    fn advances_every_delay_after_click() {
        let mut s = Spotlight::new(3);
        assert!(s.start());
        assert_eq!(s.step(), 1);
        assert!(s.advance(SPOTLIGHT_DELAY - 0.5).is_empty());
        assert_eq!(s.advance(0.5), vec![1]);
        assert_eq!(s.step(), 2);
        assert_eq!(s.advance(SPOTLIGHT_DELAY), vec![2]);
        assert!(s.is_done());
        assert!(!s.has_timer());
        assert!(s.advance(100.0).is_empty());
        assert_eq!(s.step(), 3);
    }

    #[test]
    fn click_only_counts_once() {
        let mut s = Spotlight::new(3);
        assert!(s.start());
        assert!(!s.start());
        assert_eq!(s.step(), 1);
    }

    #[test]
    fn long_frame_finishes_without_overshoot() {
        let mut s = Spotlight::new(3);
        s.start();
        assert_eq!(s.advance(SPOTLIGHT_DELAY * 10.0), vec![1, 2]);
        assert_eq!(s.step(), 3);
    }

    #[test]
    fn single_stage_finishes_on_click() {
        let mut s = Spotlight::new(1);
        assert!(s.start());
        assert!(s.is_done());
        assert!(!s.has_timer());
    }

    #[test]
    fn grid_slots_do_not_overlap() {
        let scene = FramingScene::new(Bounds::new(0.0, 90.0, 1920.0, 900.0));
        for pair in scene.slots.windows(2) {
            assert!(pair[0].right() < pair[1].left);
        }
        assert!(scene.cards[0].is_animating);
    }
}
