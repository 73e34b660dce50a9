//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, pointer
//! gesture, click, or programmatic call, is represented as a
//! `FolioCommand`. Consumers construct commands and pass them to
//! [`FolioEngine::execute`](super::FolioEngine::execute).

use crate::gallery::{ImageClick, LightboxImage, LoadTicket};

/// A discrete request to one of the engine's controllers.
#[derive(Debug, Clone, PartialEq)]
pub enum FolioCommand {
    // ── Deck ──────────────────────────────────────────────────────────
    /// Activate the next card (wraps).
    DeckNext,
    /// Activate the previous card (wraps).
    DeckPrevious,
    /// Activate card `n`.
    DeckGoTo(usize),
    /// Click at a point on the deck: the active card's half decides the
    /// direction.
    ClickCard {
        /// Horizontal position in viewport px.
        x: f32,
        /// Vertical position in viewport px.
        y: f32,
    },

    // ── Pointer ───────────────────────────────────────────────────────
    /// Recompute magnet pull for a pointer position.
    TrackPointer {
        /// Horizontal position in viewport px.
        x: f32,
        /// Vertical position in viewport px.
        y: f32,
    },
    /// Drop all magnet pull (pointer left, window blurred).
    ResetMagnet,
    /// Recompute the deck cursor hint.
    UpdateCursor {
        /// Horizontal position in viewport px.
        x: f32,
        /// Vertical position in viewport px.
        y: f32,
        /// Pointer is over a card title link.
        over_title_link: bool,
    },

    // ── Swipe ─────────────────────────────────────────────────────────
    /// Pointer pressed; may start a touch drag.
    BeginSwipe {
        /// Card under the pointer.
        card: Option<usize>,
        /// Horizontal position in viewport px.
        x: f32,
        /// Touch pointer or touch-capable environment.
        touch: bool,
    },
    /// Pointer moved; follows an active drag.
    MoveSwipe {
        /// Horizontal position in viewport px.
        x: f32,
    },
    /// Pointer released or cancelled; resolves an active drag.
    EndSwipe,

    // ── Modal ─────────────────────────────────────────────────────────
    /// Open the modal at tab `n`.
    OpenModal(usize),
    /// Close the modal.
    CloseModal,
    /// Select tab `n` of the open modal.
    SelectTab(usize),
    /// In-modal previous (clamped).
    ModalBack,
    /// In-modal next (clamped).
    ModalForward,

    // ── Carousel ──────────────────────────────────────────────────────
    /// Show slide `index` (any integer) of carousel `carousel`.
    CarouselShow {
        /// Carousel number.
        carousel: usize,
        /// Requested slide, wrapped into range.
        index: isize,
    },
    /// Next slide of carousel `n`.
    CarouselNext(usize),
    /// Previous slide of carousel `n`.
    CarouselPrevious(usize),
    /// An image load issued for a carousel finished.
    CarouselLoaded {
        /// Carousel number.
        carousel: usize,
        /// Ticket from the load request.
        ticket: LoadTicket,
    },
    /// An image load issued for a carousel failed.
    CarouselLoadFailed {
        /// Carousel number.
        carousel: usize,
        /// Ticket from the load request.
        ticket: LoadTicket,
    },

    // ── Lightbox ──────────────────────────────────────────────────────
    /// Open a lightbox over explicit images.
    OpenLightbox {
        /// Images to show.
        images: Vec<LightboxImage>,
        /// Requested start (clamped).
        start: usize,
    },
    /// A modal image was clicked; opens the matching lightbox, if any.
    OpenImage(ImageClick),
    /// Close the lightbox.
    CloseLightbox,
    /// Next lightbox image (wraps).
    LightboxNext,
    /// Previous lightbox image (wraps).
    LightboxPrevious,

    // ── Theme ─────────────────────────────────────────────────────────
    /// Flip light/dark.
    ToggleTheme,
    /// Select palette `n` for the current theme.
    SelectPalette(usize),
}
