//! Touch swipe on the active card: live drag, commit threshold, snap-back.

use super::navigator::Side;
use crate::motion::CardTransform;
use crate::options::SwipeOptions;
use crate::util::easing::EasingFunction;

/// Conditions checked when a pointer goes down on the deck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeStart {
    /// Card under the pointer, if any.
    pub card: Option<usize>,
    /// Currently active card.
    pub active: Option<usize>,
    /// Pointer x in viewport px.
    pub x: f32,
    /// Viewport is at or below the mobile breakpoint.
    pub mobile: bool,
    /// Touch pointer, or a touch-capable environment.
    pub touch: bool,
}

/// Swipe lifecycle. A drag exists only between press and release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeState {
    /// No drag in progress.
    Idle,
    /// Following a touch drag on `card`.
    Dragging {
        /// The dragged (active) card.
        card: usize,
        /// Pointer x at press.
        start_x: f32,
        /// Latest pointer x.
        current_x: f32,
    },
}

/// How a released drag resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Dragged right past the threshold.
    Next,
    /// Dragged left past the threshold.
    Previous,
    /// Released inside the threshold.
    Cancelled,
}

impl SwipeOutcome {
    /// Deck direction for a committed swipe.
    #[must_use]
    pub fn direction(self) -> Option<Side> {
        match self {
            Self::Next => Some(Side::Right),
            Self::Previous => Some(Side::Left),
            Self::Cancelled => None,
        }
    }
}

/// A finished drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeRelease {
    /// Card that was dragged.
    pub card: usize,
    /// Final horizontal displacement.
    pub delta: f32,
    /// Resolution.
    pub outcome: SwipeOutcome,
}

/// Direct transform on one card, bypassing smoothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOverride {
    /// Card the override applies to.
    pub card: usize,
    /// Transform to write verbatim.
    pub transform: CardTransform,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SnapBack {
    card: usize,
    from: CardTransform,
    /// Set by the first frame after release.
    started_ms: Option<f64>,
}

/// Touch-drag state machine layered on the deck.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    state: SwipeState,
    snap: Option<SnapBack>,
    options: SwipeOptions,
    easing: EasingFunction,
}

impl SwipeTracker {
    /// Idle tracker.
    #[must_use]
    pub fn new(options: SwipeOptions) -> Self {
        Self {
            state: SwipeState::Idle,
            snap: None,
            options,
            easing: EasingFunction::EASE,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SwipeState {
        self.state
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SwipeState::Dragging { .. })
    }

    /// Whether a snap-back transition is still pending or running.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.snap.is_some()
    }

    /// Replace tuning; applies from the next drag.
    pub fn set_options(&mut self, options: SwipeOptions) {
        self.options = options;
    }

    /// Try to start a drag. Requires a mobile viewport, a touch pointer,
    /// and a press on the active card; only one drag may run at a time.
    pub fn begin(&mut self, start: SwipeStart) -> bool {
        if self.is_dragging() || !start.mobile || !start.touch {
            return false;
        }
        let (Some(card), Some(active)) = (start.card, start.active) else {
            return false;
        };
        if card != active {
            return false;
        }
        self.snap = None;
        self.state = SwipeState::Dragging {
            card,
            start_x: start.x,
            current_x: start.x,
        };
        log::debug!("swipe started on card {card} at x={}", start.x);
        true
    }

    /// Follow the pointer. Returns the live override, `None` when idle.
    pub fn update(&mut self, x: f32) -> Option<DragOverride> {
        let SwipeState::Dragging { card, start_x, .. } = self.state else {
            return None;
        };
        self.state = SwipeState::Dragging {
            card,
            start_x,
            current_x: x,
        };
        Some(DragOverride {
            card,
            transform: self.drag_transform(x - start_x),
        })
    }

    /// Release the drag and classify it.
    ///
    /// Every release, committed or not, schedules a snap-back of the
    /// dragged card to its rest pose.
    pub fn end(&mut self) -> Option<SwipeRelease> {
        let SwipeState::Dragging {
            card,
            start_x,
            current_x,
        } = self.state
        else {
            return None;
        };
        self.state = SwipeState::Idle;

        let delta = current_x - start_x;
        let threshold = self.options.commit_threshold;
        let outcome = if delta > threshold {
            SwipeOutcome::Next
        } else if delta < -threshold {
            SwipeOutcome::Previous
        } else {
            SwipeOutcome::Cancelled
        };
        self.snap = Some(SnapBack {
            card,
            from: self.drag_transform(delta),
            started_ms: None,
        });
        log::debug!("swipe released on card {card}: delta={delta} {outcome:?}");
        Some(SwipeRelease {
            card,
            delta,
            outcome,
        })
    }

    /// Override to write at frame time `now_ms`, if any.
    ///
    /// During a drag this is the live transform; after release it eases
    /// back to rest and then disappears, handing the card back to the
    /// motion loop.
    pub fn visual(&mut self, now_ms: f64) -> Option<DragOverride> {
        if let SwipeState::Dragging {
            card,
            start_x,
            current_x,
        } = self.state
        {
            return Some(DragOverride {
                card,
                transform: self.drag_transform(current_x - start_x),
            });
        }

        let snap = self.snap.as_mut()?;
        let started = *snap.started_ms.get_or_insert(now_ms);
        let duration = self.options.snap_back_ms;
        let progress = if duration > 0.0 {
            ((now_ms - started) / duration) as f32
        } else {
            1.0
        };
        if progress >= 1.0 {
            self.snap = None;
            return None;
        }
        let remaining = 1.0 - self.easing.evaluate(progress);
        Some(DragOverride {
            card: snap.card,
            transform: CardTransform {
                translate: snap.from.translate * remaining,
                rot_deg: snap.from.rot_deg * remaining,
            },
        })
    }

    fn drag_transform(&self, delta: f32) -> CardTransform {
        // Tuning is unchecked; a negative or NaN limit must not panic.
        let max = self.options.max_rotation.abs().max(0.0);
        let rot = (delta / self.options.rotation_divisor).clamp(-max, max);
        CardTransform::new(delta, 0.0, rot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch_on(card: usize, active: usize, x: f32) -> SwipeStart {
        SwipeStart {
            card: Some(card),
            active: Some(active),
            x,
            mobile: true,
            touch: true,
        }
    }

    #[test]
    fn begin_requires_mobile_touch_and_active_card() {
        let mut swipe = SwipeTracker::new(SwipeOptions::default());
        assert!(!swipe.begin(SwipeStart {
            mobile: false,
            ..touch_on(0, 0, 10.0)
        }));
        assert!(!swipe.begin(SwipeStart {
            touch: false,
            ..touch_on(0, 0, 10.0)
        }));
        assert!(!swipe.begin(touch_on(1, 0, 10.0)));
        assert!(!swipe.begin(SwipeStart {
            card: None,
            ..touch_on(0, 0, 10.0)
        }));
        assert!(swipe.begin(touch_on(0, 0, 10.0)));
        assert!(swipe.is_dragging());
    }

    #[test]
    fn only_one_drag_at_a_time() {
        let mut swipe = SwipeTracker::new(SwipeOptions::default());
        assert!(swipe.begin(touch_on(2, 2, 100.0)));
        assert!(!swipe.begin(touch_on(2, 2, 300.0)));
        assert!(matches!(
            swipe.state(),
            SwipeState::Dragging { start_x, .. } if start_x == 100.0
        ));
    }

    #[test]
    fn live_override_tracks_delta_with_clamped_rotation() {
        let mut swipe = SwipeTracker::new(SwipeOptions::default());
        let _ = swipe.begin(touch_on(0, 0, 200.0));
        let o = swipe.update(260.0).unwrap();
        assert_eq!(o.card, 0);
        assert_eq!(o.transform, CardTransform::new(60.0, 0.0, 3.0));

        let far = swipe.update(-200.0).unwrap();
        assert_eq!(far.transform.tx(), -400.0);
        assert_eq!(far.transform.rot_deg, -10.0);
    }

    #[test]
    fn negative_max_rotation_clamps_by_magnitude() {
        let mut swipe = SwipeTracker::new(SwipeOptions {
            max_rotation: -5.0,
            ..SwipeOptions::default()
        });
        let _ = swipe.begin(touch_on(0, 0, 200.0));
        assert_eq!(swipe.update(400.0).unwrap().transform.rot_deg, 5.0);
        assert_eq!(swipe.update(0.0).unwrap().transform.rot_deg, -5.0);

        let mut flat = SwipeTracker::new(SwipeOptions {
            max_rotation: f32::NAN,
            ..SwipeOptions::default()
        });
        let _ = flat.begin(touch_on(0, 0, 200.0));
        assert_eq!(flat.update(290.0).unwrap().transform.rot_deg, 0.0);
    }

    #[test]
    fn release_classifies_by_threshold() {
        let mut swipe = SwipeTracker::new(SwipeOptions::default());
        for (delta, outcome) in [
            (90.0, SwipeOutcome::Next),
            (-90.0, SwipeOutcome::Previous),
            (80.0, SwipeOutcome::Cancelled),
            (-40.0, SwipeOutcome::Cancelled),
        ] {
            let _ = swipe.begin(touch_on(0, 0, 500.0));
            let _ = swipe.update(500.0 + delta);
            let release = swipe.end().unwrap();
            assert_eq!(release.outcome, outcome, "delta {delta}");
            assert_eq!(release.delta, delta);
        }
    }

    #[test]
    fn release_without_drag_is_none() {
        let mut swipe = SwipeTracker::new(SwipeOptions::default());
        assert!(swipe.end().is_none());
        assert!(swipe.update(10.0).is_none());
        assert!(swipe.visual(0.0).is_none());
    }

    #[test]
    fn snap_back_eases_to_rest_then_releases_card() {
        let mut swipe = SwipeTracker::new(SwipeOptions::default());
        let _ = swipe.begin(touch_on(1, 1, 0.0));
        let _ = swipe.update(50.0);
        let _ = swipe.end();
        assert!(swipe.is_settling());

        // Clock starts on the first frame after release.
        let start = swipe.visual(1000.0).unwrap();
        assert_eq!(start.card, 1);
        assert!((start.transform.tx() - 50.0).abs() < 1e-4);

        let mid = swipe.visual(1090.0).unwrap();
        assert!(mid.transform.tx() > 0.0 && mid.transform.tx() < 50.0);

        assert!(swipe.visual(1180.0).is_none());
        assert!(!swipe.is_settling());
        assert!(swipe.visual(1200.0).is_none());
    }

    #[test]
    fn new_drag_cancels_pending_snap_back() {
        let mut swipe = SwipeTracker::new(SwipeOptions::default());
        let _ = swipe.begin(touch_on(0, 0, 0.0));
        let _ = swipe.update(30.0);
        let _ = swipe.end();
        assert!(swipe.begin(touch_on(0, 0, 10.0)));
        assert!(!swipe.is_settling());
        let o = swipe.visual(0.0).unwrap();
        assert_eq!(o.transform, CardTransform::ZERO);
    }
}
