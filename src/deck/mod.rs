//! The project deck: which card is active and how touch swipes move it.

pub mod navigator;
pub mod swipe;

pub use navigator::{
    announcement_text, side_of, Announcement, CursorHint, DeckChange,
    DeckNavigator, Side,
};
pub use swipe::{
    DragOverride, SwipeOutcome, SwipeRelease, SwipeStart, SwipeState,
    SwipeTracker,
};
