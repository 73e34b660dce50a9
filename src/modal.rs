//! Tabbed project modal.
//!
//! One overlay shows one of N project panels. Tabs select a panel
//! directly; the in-modal back/next links step by one and clamp at the
//! ends (the deck wraps, the modal does not).

/// Modal lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    /// Overlay hidden.
    Closed,
    /// Overlay visible with `tab` selected.
    Open {
        /// Selected tab.
        tab: usize,
    },
}

/// Everything the presenter needs to render the modal.
///
/// Tab `aria-selected` and panel `hidden` flags are pure functions of
/// `tab`: see [`ModalView::tab_selected`] and [`ModalView::panel_hidden`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    /// Overlay carries `is-open` and `aria-hidden="false"`; the document
    /// root carries `modal-open`.
    pub open: bool,
    /// Selected tab (kept while closed so panels stay stable).
    pub tab: usize,
    /// Number of declared tabs.
    pub tab_count: usize,
    /// Heading text, "Project N".
    pub title: String,
    /// Class put on the modal stack, `theme-proj-N`.
    pub theme_tag: String,
    /// Background scroll suppressed (narrow viewport at open time).
    pub scroll_locked: bool,
}

impl ModalView {
    /// Whether tab `index` is the selected one.
    #[must_use]
    pub fn tab_selected(&self, index: usize) -> bool {
        index == self.tab
    }

    /// Whether panel `index` is hidden.
    #[must_use]
    pub fn panel_hidden(&self, index: usize) -> bool {
        index != self.tab
    }
}

/// In-modal step direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Back link.
    Back,
    /// Next link.
    Forward,
}

/// Modal/tab state machine over a fixed number of tabs.
#[derive(Debug, Clone)]
pub struct ModalController {
    tab_count: usize,
    state: ModalState,
    /// Selection shown by panels, including while closed.
    tab: usize,
    scroll_locked: bool,
}

impl ModalController {
    /// Closed modal with `tab_count` tabs.
    #[must_use]
    pub fn new(tab_count: usize) -> Self {
        Self {
            tab_count,
            state: ModalState::Closed,
            tab: 0,
            scroll_locked: false,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Whether the overlay is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// Selected tab while open.
    #[must_use]
    pub fn active_tab(&self) -> Option<usize> {
        match self.state {
            ModalState::Open { tab } => Some(tab),
            ModalState::Closed => None,
        }
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> ModalView {
        ModalView {
            open: self.is_open(),
            tab: self.tab,
            tab_count: self.tab_count,
            title: format!("Project {}", self.tab + 1),
            theme_tag: format!("theme-proj-{}", self.tab),
            scroll_locked: self.scroll_locked,
        }
    }

    /// Open (or re-target) the modal at tab `index`.
    ///
    /// `narrow` is the mobile-width check at call time; it decides whether
    /// background scroll gets locked. Indices without a tab are ignored.
    pub fn open(&mut self, index: usize, narrow: bool) -> Option<ModalView> {
        if index >= self.tab_count {
            log::debug!("modal open({index}) ignored, {} tabs", self.tab_count);
            return None;
        }
        self.state = ModalState::Open { tab: index };
        self.tab = index;
        self.scroll_locked = self.scroll_locked || narrow;
        log::debug!("modal opened on tab {index}");
        Some(self.view())
    }

    /// Close the modal and release any scroll lock.
    ///
    /// Returns `None` when already closed.
    pub fn close(&mut self) -> Option<ModalView> {
        if !self.is_open() {
            return None;
        }
        self.state = ModalState::Closed;
        self.scroll_locked = false;
        log::debug!("modal closed");
        Some(self.view())
    }

    /// Select tab `index` in an open modal.
    ///
    /// Out-of-range indices are rejected, not clamped.
    pub fn select_tab(&mut self, index: usize) -> Option<ModalView> {
        if !self.is_open() || index >= self.tab_count {
            return None;
        }
        self.state = ModalState::Open { tab: index };
        self.tab = index;
        log::debug!("modal tab {index}");
        Some(self.view())
    }

    /// Move one tab back or forward, stopping at the ends.
    ///
    /// Returns `None` when nothing changed (closed, or already at the end),
    /// so callers only scroll the content when the panel really switched.
    pub fn step(&mut self, step: Step) -> Option<ModalView> {
        let current = self.active_tab()?;
        let target = match step {
            Step::Back => current.checked_sub(1)?,
            Step::Forward => current + 1,
        };
        if target >= self.tab_count {
            return None;
        }
        self.select_tab(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_sets_title_theme_and_panels() {
        let mut modal = ModalController::new(3);
        let view = modal.open(1, false).unwrap();
        assert!(view.open);
        assert_eq!(view.tab, 1);
        assert_eq!(view.title, "Project 2");
        assert_eq!(view.theme_tag, "theme-proj-1");
        assert!(view.tab_selected(1));
        assert!(!view.tab_selected(0));
        assert!(view.panel_hidden(0));
        assert!(!view.panel_hidden(1));
        assert!(!view.scroll_locked);
    }

    #[test]
    fn out_of_range_tab_is_rejected() {
        let mut modal = ModalController::new(3);
        let _ = modal.open(1, false);
        assert!(modal.select_tab(5).is_none());
        assert_eq!(modal.active_tab(), Some(1));
        assert!(modal.open(3, false).is_none());
        assert_eq!(modal.active_tab(), Some(1));
    }

    #[test]
    fn select_tab_requires_open_modal() {
        let mut modal = ModalController::new(3);
        assert!(modal.select_tab(2).is_none());
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn steps_clamp_without_wrapping() {
        let mut modal = ModalController::new(3);
        let _ = modal.open(0, false);
        assert!(modal.step(Step::Back).is_none());
        assert_eq!(modal.step(Step::Forward).unwrap().tab, 1);
        assert_eq!(modal.step(Step::Forward).unwrap().tab, 2);
        assert!(modal.step(Step::Forward).is_none());
        assert_eq!(modal.active_tab(), Some(2));
        assert_eq!(modal.step(Step::Back).unwrap().theme_tag, "theme-proj-1");
    }

    #[test]
    fn narrow_open_locks_scroll_and_close_releases_it() {
        let mut modal = ModalController::new(3);
        assert!(modal.open(2, true).unwrap().scroll_locked);
        // Re-targeting keeps the lock.
        assert!(modal.open(0, false).unwrap().scroll_locked);
        let closed = modal.close().unwrap();
        assert!(!closed.open);
        assert!(!closed.scroll_locked);
        assert_eq!(closed.tab, 0);
    }

    #[test]
    fn close_is_idempotent() {
        let mut modal = ModalController::new(3);
        assert!(modal.close().is_none());
        let _ = modal.open(1, false);
        assert!(modal.close().is_some());
        assert!(modal.close().is_none());
        assert!(modal.step(Step::Forward).is_none());
    }

    #[test]
    fn zero_tabs_never_open() {
        let mut modal = ModalController::new(0);
        assert!(modal.open(0, true).is_none());
        assert!(!modal.is_open());
    }
}
