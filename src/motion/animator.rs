//! The per-frame motion loop: drift + magnet, smoothed.

use glam::Vec2;

use super::drift::drift_offset;
use super::field::{attraction, Rect};
use super::transform::CardTransform;
use crate::options::{DriftOptions, MagnetOptions};

/// Motion state of one deck card.
///
/// `smoothed` is owned by the loop and only changes inside
/// [`MotionLoop::tick`]; `magnet` is the last proximity result and `target`
/// the last drift + magnet sum.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardMotion {
    /// Transform written on the last frame.
    pub smoothed: CardTransform,
    /// Last pointer attraction (zero when out of range or reset).
    pub magnet: CardTransform,
    /// Last frame's unsmoothed target.
    pub target: CardTransform,
}

/// Lifecycle of the loop. There is no way back to `Idle`; a stopped loop
/// stays stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Not yet scheduled.
    Idle,
    /// Scheduled every frame.
    Running,
    /// Cancelled through [`MotionLoop::stop`].
    Stopped,
}

/// Drives every card's transform from idle drift plus pointer attraction.
///
/// The loop is a pure step function: the host calls [`tick`](Self::tick)
/// with its frame timestamp and writes the returned transforms. Pointer
/// input only updates the magnet targets; it never writes transforms
/// directly.
#[derive(Debug, Clone)]
pub struct MotionLoop {
    cards: Vec<CardMotion>,
    magnet: MagnetOptions,
    drift: DriftOptions,
    pointer: Option<Vec2>,
    /// Whether pointer moves update the magnet (off while a swipe drags).
    tracking: bool,
    state: LoopState,
}

impl MotionLoop {
    /// Loop for `card_count` cards at rest.
    #[must_use]
    pub fn new(
        card_count: usize,
        magnet: MagnetOptions,
        drift: DriftOptions,
    ) -> Self {
        Self {
            cards: vec![CardMotion::default(); card_count],
            magnet,
            drift,
            pointer: None,
            tracking: true,
            state: LoopState::Idle,
        }
    }

    /// Number of cards driven.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the loop drives no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Per-card motion state.
    #[must_use]
    pub fn cards(&self) -> &[CardMotion] {
        &self.cards
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Whether frames are being produced.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Last tracked pointer position.
    #[must_use]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Whether pointer moves currently feed the magnet.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Replace tuning; takes effect on the next pointer move / frame.
    pub fn set_options(&mut self, magnet: MagnetOptions, drift: DriftOptions) {
        self.magnet = magnet;
        self.drift = drift;
    }

    /// Begin producing frames.
    ///
    /// Returns `true` only when this call moved the loop from idle to
    /// running, i.e. when the host must schedule the first frame.
    pub fn start(&mut self) -> bool {
        if self.state != LoopState::Idle {
            return false;
        }
        self.state = LoopState::Running;
        log::debug!("motion loop started for {} cards", self.cards.len());
        true
    }

    /// Cancel the loop. Later ticks produce nothing.
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            log::debug!("motion loop stopped");
        }
        self.state = LoopState::Stopped;
    }

    /// Stop feeding pointer moves into the magnet.
    pub fn suspend_tracking(&mut self) {
        self.tracking = false;
    }

    /// Resume feeding pointer moves into the magnet.
    pub fn resume_tracking(&mut self) {
        self.tracking = true;
    }

    /// Recompute every card's attraction for a pointer at `pointer`.
    ///
    /// `rects` are the cards' current bounding boxes, in card order; cards
    /// without a rect get no pull. Ignored while tracking is suspended.
    /// Returns `true` when the loop must be scheduled (first pointer event).
    pub fn pointer_moved(&mut self, pointer: Vec2, rects: &[Rect]) -> bool {
        if !self.tracking {
            return false;
        }
        self.pointer = Some(pointer);
        for (i, card) in self.cards.iter_mut().enumerate() {
            card.magnet = rects.get(i).map_or(CardTransform::ZERO, |rect| {
                attraction(&self.magnet, pointer, rect)
            });
        }
        self.start()
    }

    /// Drop every card's attraction (pointer left the window or blur).
    ///
    /// Returns `true` when the loop must be scheduled.
    pub fn reset_magnet(&mut self) -> bool {
        self.pointer = None;
        for card in &mut self.cards {
            card.magnet = CardTransform::ZERO;
        }
        self.start()
    }

    /// Advance one frame at host time `now_ms`.
    ///
    /// Returns the new smoothed transform of every card, or `None` unless
    /// the loop is running. All cards advance within this one call.
    pub fn tick(&mut self, now_ms: f64) -> Option<Vec<CardTransform>> {
        if self.state != LoopState::Running {
            return None;
        }
        let factor = self.magnet.smoothing;
        let frame = self
            .cards
            .iter_mut()
            .enumerate()
            .map(|(index, card)| {
                let drift = drift_offset(&self.drift, now_ms, index);
                card.target = card.magnet + drift;
                card.smoothed =
                    card.smoothed.smooth_towards(&card.target, factor);
                card.smoothed
            })
            .collect();
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still_drift() -> DriftOptions {
        DriftOptions {
            amplitude_x: 0.0,
            amplitude_y: 0.0,
            amplitude_rot: 0.0,
            ..DriftOptions::default()
        }
    }

    fn deck_rects() -> Vec<Rect> {
        (0..3)
            .map(|i| Rect::from_xywh(i as f32 * 300.0, 0.0, 200.0, 120.0))
            .collect()
    }

    #[test]
    fn idle_loop_produces_no_frames() {
        let mut motion =
            MotionLoop::new(3, MagnetOptions::default(), still_drift());
        assert_eq!(motion.state(), LoopState::Idle);
        assert!(motion.tick(16.0).is_none());
    }

    #[test]
    fn start_reports_only_the_first_transition() {
        let mut motion =
            MotionLoop::new(3, MagnetOptions::default(), still_drift());
        assert!(motion.start());
        assert!(!motion.start());
        assert!(!motion.pointer_moved(Vec2::ZERO, &deck_rects()));
    }

    #[test]
    fn first_pointer_move_starts_the_loop() {
        let mut motion =
            MotionLoop::new(3, MagnetOptions::default(), still_drift());
        assert!(motion.pointer_moved(Vec2::new(100.0, 60.0), &deck_rects()));
        assert!(motion.is_running());
    }

    #[test]
    fn zero_cards_tick_is_empty() {
        let mut motion =
            MotionLoop::new(0, MagnetOptions::default(), still_drift());
        let _ = motion.start();
        assert!(!motion.pointer_moved(Vec2::ZERO, &[]));
        assert_eq!(motion.tick(0.0), Some(Vec::new()));
    }

    #[test]
    fn smoothed_transform_converges_on_magnet() {
        let mut motion =
            MotionLoop::new(3, MagnetOptions::default(), still_drift());
        let rects = deck_rects();
        // 130px right of card 0's center: half strength.
        let _ = motion.pointer_moved(Vec2::new(230.0, 60.0), &rects);
        let expected = motion.cards()[0].magnet;
        assert!(expected.tx() > 0.0);

        let first = motion.tick(0.0).unwrap();
        assert!((first[0].tx() - expected.tx() * 0.18).abs() < 1e-4);

        let mut last = first;
        for frame in 1..120 {
            last = motion.tick(f64::from(frame) * 16.7).unwrap();
        }
        assert!((last[0].tx() - expected.tx()).abs() < 1e-3);
        assert!((last[0].rot_deg - expected.rot_deg).abs() < 1e-3);
    }

    #[test]
    fn reset_zeroes_magnets_immediately() {
        let mut motion =
            MotionLoop::new(3, MagnetOptions::default(), still_drift());
        let rects = deck_rects();
        let _ = motion.pointer_moved(Vec2::new(100.0, 60.0), &rects);
        let _ = motion.reset_magnet();
        assert!(motion.pointer().is_none());
        assert!(motion
            .cards()
            .iter()
            .all(|c| c.magnet == CardTransform::ZERO));
    }

    #[test]
    fn jump_out_of_range_clears_stale_pull() {
        let mut motion =
            MotionLoop::new(3, MagnetOptions::default(), still_drift());
        let rects = deck_rects();
        let _ = motion.pointer_moved(Vec2::new(120.0, 60.0), &rects);
        assert_ne!(motion.cards()[0].magnet, CardTransform::ZERO);
        let _ = motion.pointer_moved(Vec2::new(5000.0, 5000.0), &rects);
        assert_eq!(motion.cards()[0].magnet, CardTransform::ZERO);
    }

    #[test]
    fn suspended_tracking_ignores_pointer() {
        let mut motion =
            MotionLoop::new(3, MagnetOptions::default(), still_drift());
        let rects = deck_rects();
        motion.suspend_tracking();
        assert!(!motion.pointer_moved(Vec2::new(100.0, 60.0), &rects));
        assert!(motion.pointer().is_none());
        assert_eq!(motion.cards()[0].magnet, CardTransform::ZERO);

        motion.resume_tracking();
        let _ = motion.pointer_moved(Vec2::new(120.0, 60.0), &rects);
        assert_ne!(motion.cards()[0].magnet, CardTransform::ZERO);
    }

    #[test]
    fn target_is_magnet_plus_drift() {
        let drift = DriftOptions::default();
        let mut motion =
            MotionLoop::new(2, MagnetOptions::default(), drift.clone());
        let rects = deck_rects();
        let _ = motion.pointer_moved(Vec2::new(150.0, 60.0), &rects);
        let _ = motion.tick(1234.0);
        let card = motion.cards()[1];
        let expected = card.magnet + drift_offset(&drift, 1234.0, 1);
        assert_eq!(card.target, expected);
    }

    #[test]
    fn stopped_loop_stays_stopped() {
        let mut motion =
            MotionLoop::new(1, MagnetOptions::default(), still_drift());
        let _ = motion.start();
        motion.stop();
        assert!(!motion.start());
        assert!(motion.tick(10.0).is_none());
    }
}
