//! Active-card tracking for the deck, plus click-side geometry.

use glam::Vec2;

use crate::motion::Rect;

/// Screen-reader message for a newly active card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// Text placed in the polite live region.
    pub message: String,
    /// Delay after which the live region node is removed.
    pub clear_after_ms: u32,
}

/// Result of moving the active card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckChange {
    /// Previously active card.
    pub previous: usize,
    /// Newly active card.
    pub active: usize,
    /// Text describing the new position.
    pub message: String,
}

/// Tracks which card of a fixed, ordered deck is active.
///
/// Exactly one card is active whenever the deck is non-empty. `next` and
/// `previous` wrap around.
#[derive(Debug, Clone)]
pub struct DeckNavigator {
    count: usize,
    active: usize,
}

impl DeckNavigator {
    /// Deck of `count` cards with card 0 active.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { count, active: 0 }
    }

    /// Number of cards.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Index of the active card, `None` for an empty deck.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        (self.count > 0).then_some(self.active)
    }

    /// Whether card `index` is the active one.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active() == Some(index)
    }

    /// Make card `index` active.
    ///
    /// Re-selecting the active card still reports a change so the position
    /// is announced again. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> Option<DeckChange> {
        if index >= self.count {
            log::debug!("deck go_to({index}) ignored, {} cards", self.count);
            return None;
        }
        let previous = self.active;
        self.active = index;
        log::debug!("deck active card {previous} -> {index}");
        Some(DeckChange {
            previous,
            active: index,
            message: announcement_text(index, self.count),
        })
    }

    /// Advance to the next card, wrapping to the first.
    pub fn next(&mut self) -> Option<DeckChange> {
        if self.count == 0 {
            return None;
        }
        self.go_to((self.active + 1) % self.count)
    }

    /// Step back to the previous card, wrapping to the last.
    pub fn previous(&mut self) -> Option<DeckChange> {
        if self.count == 0 {
            return None;
        }
        self.go_to((self.active + self.count - 1) % self.count)
    }
}

/// "Project i of N selected", 1-based.
#[must_use]
pub fn announcement_text(index: usize, count: usize) -> String {
    format!("Project {} of {count} selected", index + 1)
}

/// Horizontal half of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left of the vertical midline.
    Left,
    /// On or right of the vertical midline.
    Right,
}

/// Which half of `rect` contains `point`, `None` when outside.
#[must_use]
pub fn side_of(rect: &Rect, point: Vec2) -> Option<Side> {
    if !rect.contains(point) {
        return None;
    }
    if point.x < rect.center().x {
        Some(Side::Left)
    } else {
        Some(Side::Right)
    }
}

/// Cursor shown over the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    /// Let the stylesheet decide.
    #[default]
    Default,
    /// Over the left half of the active card.
    WResize,
    /// Over the right half of the active card.
    EResize,
}

impl CursorHint {
    /// CSS `cursor` value; empty clears the inline style.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::WResize => "w-resize",
            Self::EResize => "e-resize",
        }
    }

    /// Hint for a pointer at `point` given the active card's rect.
    ///
    /// The title link keeps its own cursor.
    #[must_use]
    pub fn for_pointer(
        active_rect: Option<&Rect>,
        point: Vec2,
        over_title_link: bool,
    ) -> Self {
        if over_title_link {
            return Self::Default;
        }
        match active_rect.and_then(|rect| side_of(rect, point)) {
            Some(Side::Left) => Self::WResize,
            Some(Side::Right) => Self::EResize,
            None => Self::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_card() {
        let deck = DeckNavigator::new(3);
        assert_eq!(deck.active(), Some(0));
        assert!(deck.is_active(0));
        assert!(!deck.is_active(1));
    }

    #[test]
    fn next_wraps_and_full_cycle_returns_home() {
        let mut deck = DeckNavigator::new(3);
        let _ = deck.go_to(1);
        for _ in 0..3 {
            let _ = deck.next();
        }
        assert_eq!(deck.active(), Some(1));

        let _ = deck.go_to(2);
        let change = deck.next().unwrap();
        assert_eq!(change.previous, 2);
        assert_eq!(change.active, 0);
    }

    #[test]
    fn previous_inverts_next() {
        let mut deck = DeckNavigator::new(5);
        for start in 0..5 {
            let _ = deck.go_to(start);
            let _ = deck.next();
            let _ = deck.previous();
            assert_eq!(deck.active(), Some(start));
        }
        let _ = deck.go_to(0);
        assert_eq!(deck.previous().unwrap().active, 4);
    }

    #[test]
    fn exactly_one_card_active() {
        let mut deck = DeckNavigator::new(4);
        let _ = deck.go_to(2);
        let active: Vec<usize> =
            (0..4).filter(|&i| deck.is_active(i)).collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn announcement_is_one_based() {
        let mut deck = DeckNavigator::new(3);
        let change = deck.go_to(1).unwrap();
        assert_eq!(change.message, "Project 2 of 3 selected");
        // Re-selecting announces again.
        assert_eq!(deck.go_to(1).unwrap().message, "Project 2 of 3 selected");
    }

    #[test]
    fn out_of_range_and_empty_are_no_ops() {
        let mut deck = DeckNavigator::new(3);
        assert!(deck.go_to(3).is_none());
        assert_eq!(deck.active(), Some(0));

        let mut empty = DeckNavigator::new(0);
        assert!(empty.active().is_none());
        assert!(empty.next().is_none());
        assert!(empty.previous().is_none());
        assert!(empty.go_to(0).is_none());
    }

    #[test]
    fn side_splits_on_midline() {
        let rect = Rect::from_xywh(100.0, 100.0, 200.0, 100.0);
        assert_eq!(side_of(&rect, Vec2::new(150.0, 150.0)), Some(Side::Left));
        assert_eq!(side_of(&rect, Vec2::new(200.0, 150.0)), Some(Side::Right));
        assert_eq!(side_of(&rect, Vec2::new(50.0, 150.0)), None);
    }

    #[test]
    fn cursor_hint_follows_side_and_title_link() {
        let rect = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let left = Vec2::new(10.0, 50.0);
        let right = Vec2::new(90.0, 50.0);
        assert_eq!(
            CursorHint::for_pointer(Some(&rect), left, false),
            CursorHint::WResize
        );
        assert_eq!(
            CursorHint::for_pointer(Some(&rect), right, false).css(),
            "e-resize"
        );
        assert_eq!(
            CursorHint::for_pointer(Some(&rect), right, true),
            CursorHint::Default
        );
        assert_eq!(
            CursorHint::for_pointer(None, right, false).css(),
            ""
        );
    }
}
