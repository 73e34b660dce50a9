//! Observable results of engine calls, applied by the presenter.

use crate::deck::{Announcement, CursorHint, DragOverride};
use crate::gallery::{LightboxView, LoadRequest, SessionId, SlideSwap};
use crate::modal::ModalView;
use crate::motion::CardTransform;
use crate::theme::ThemeView;

/// One animation step.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Host timestamp the frame was computed for.
    pub timestamp_ms: f64,
    /// Smoothed transform of every card, written as `--tx`, `--ty`,
    /// `--rot`.
    pub cards: Vec<CardTransform>,
    /// Direct transform of a dragged or settling card, written inline.
    /// `None` hands every card back to the custom properties.
    pub drag: Option<DragOverride>,
}

/// A side effect the presenter must apply.
#[derive(Debug, Clone, PartialEq)]
pub enum FolioEffect {
    /// Schedule the frame loop (first pointer activity or startup).
    RequestFrame,
    /// The active card changed; toggle `is-active` and announce.
    DeckChanged {
        /// Previously active card.
        previous: usize,
        /// Newly active card.
        active: usize,
        /// Live-region message.
        announcement: Announcement,
    },
    /// New deck cursor.
    Cursor(CursorHint),
    /// New modal state.
    Modal(ModalView),
    /// Scroll the modal content back to its top.
    ScrollModalToTop,
    /// Carousel `carousel` moved to `index` (`data-idx`).
    CarouselIndex {
        /// Carousel number.
        carousel: usize,
        /// New slide index.
        index: usize,
    },
    /// Start an off-screen load and report back.
    LoadSlide {
        /// Carousel number.
        carousel: usize,
        /// What to load.
        request: LoadRequest,
    },
    /// Swap a loaded slide into carousel `carousel`.
    SwapSlide {
        /// Carousel number.
        carousel: usize,
        /// New `src` and `alt`.
        swap: SlideSwap,
    },
    /// Warm the cache with `src`; no completion is reported.
    PreloadImage {
        /// Image URL.
        src: String,
    },
    /// Build a lightbox overlay for a new session.
    LightboxOpened(LightboxView),
    /// Re-render the open lightbox.
    LightboxUpdated(LightboxView),
    /// Tear down a lightbox overlay and all its listeners.
    LightboxClosed(SessionId),
    /// New theme state.
    Theme(ThemeView),
}

impl FolioEffect {
    /// Whether this effect moved the active card.
    #[must_use]
    pub fn moves_deck(&self) -> bool {
        matches!(self, Self::DeckChanged { .. })
    }
}
