//! Full-screen viewer over a snapshot of images.
//!
//! Each open creates a fresh session with its own id. The presenter builds
//! the overlay (and its listeners) per session and drops it when the
//! session closes, so a second open always tears the first one down.

/// One image shown in the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxImage {
    /// Image URL.
    pub src: String,
    /// Alt text (may be empty).
    pub alt: String,
}

impl LightboxImage {
    /// Image from its source and alt text.
    #[must_use]
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Identifier of one open/close cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

#[derive(Debug, Clone)]
struct Session {
    id: SessionId,
    images: Vec<LightboxImage>,
    index: usize,
}

/// What the overlay currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    /// Session this view belongs to.
    pub session: SessionId,
    /// Current image.
    pub image: LightboxImage,
    /// Position of `image`.
    pub index: usize,
    /// Number of images in the session.
    pub count: usize,
    /// Arrows are rendered at all (hidden, not disabled, for one image).
    pub arrows_visible: bool,
}

/// Outcome of [`LightboxController::open`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxOpened {
    /// Session torn down by this open, if one was showing.
    pub replaced: Option<SessionId>,
    /// The new session's first view.
    pub view: LightboxView,
}

/// Lightbox state machine: closed, or one open session.
#[derive(Debug, Clone, Default)]
pub struct LightboxController {
    session: Option<Session>,
    next_id: u64,
}

impl LightboxController {
    /// Closed lightbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Id of the open session.
    #[must_use]
    pub fn session(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id)
    }

    /// Current view, `None` when closed.
    #[must_use]
    pub fn view(&self) -> Option<LightboxView> {
        let session = self.session.as_ref()?;
        let image = session.images.get(session.index)?.clone();
        Some(LightboxView {
            session: session.id,
            image,
            index: session.index,
            count: session.images.len(),
            arrows_visible: session.images.len() > 1,
        })
    }

    /// Open a new session at `start`, clamped into range.
    ///
    /// Any open session is closed first. An empty image list opens
    /// nothing and leaves the current session alone.
    pub fn open(
        &mut self,
        images: Vec<LightboxImage>,
        start: usize,
    ) -> Option<LightboxOpened> {
        if images.is_empty() {
            return None;
        }
        let replaced = self.close();
        let index = start.min(images.len() - 1);
        let id = SessionId(self.next_id);
        self.next_id += 1;
        log::debug!(
            "lightbox session {} opened at {index}/{}",
            id.0,
            images.len()
        );
        self.session = Some(Session { id, images, index });
        let view = self.view()?;
        Some(LightboxOpened { replaced, view })
    }

    /// Close the open session. Calling it again is harmless.
    ///
    /// Returns the id of the session that was closed.
    pub fn close(&mut self) -> Option<SessionId> {
        let session = self.session.take()?;
        log::debug!("lightbox session {} closed", session.id.0);
        Some(session.id)
    }

    /// Show the next image, wrapping to the first.
    pub fn next(&mut self) -> Option<LightboxView> {
        let session = self.session.as_mut()?;
        session.index = (session.index + 1) % session.images.len();
        self.view()
    }

    /// Show the previous image, wrapping to the last.
    pub fn previous(&mut self) -> Option<LightboxView> {
        let session = self.session.as_mut()?;
        let len = session.images.len();
        session.index = (session.index + len - 1) % len;
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<LightboxImage> {
        ["a", "b", "c"]
            .iter()
            .map(|src| LightboxImage::new(*src, ""))
            .collect()
    }

    #[test]
    fn start_clamps_and_next_wraps() {
        let mut lightbox = LightboxController::new();
        let opened = lightbox.open(abc(), 5).unwrap();
        assert_eq!(opened.view.index, 2);
        assert_eq!(opened.view.image.src, "c");
        assert!(opened.replaced.is_none());

        let view = lightbox.next().unwrap();
        assert_eq!(view.index, 0);
        assert_eq!(view.image.src, "a");
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut lightbox = LightboxController::new();
        let _ = lightbox.open(abc(), 0);
        assert_eq!(lightbox.previous().unwrap().index, 2);
        assert_eq!(lightbox.next().unwrap().index, 0);
    }

    #[test]
    fn single_image_hides_arrows() {
        let mut lightbox = LightboxController::new();
        let opened = lightbox
            .open(vec![LightboxImage::new("solo.png", "Solo")], 0)
            .unwrap();
        assert!(!opened.view.arrows_visible);
        assert_eq!(opened.view.image.alt, "Solo");
        assert_eq!(lightbox.next().unwrap().index, 0);

        let _ = lightbox.close();
        assert!(lightbox.open(abc(), 0).unwrap().view.arrows_visible);
    }

    #[test]
    fn second_open_replaces_first_session() {
        let mut lightbox = LightboxController::new();
        let first = lightbox.open(abc(), 0).unwrap().view.session;
        let second = lightbox.open(abc(), 1).unwrap();
        assert_eq!(second.replaced, Some(first));
        assert_ne!(second.view.session, first);

        assert_eq!(lightbox.close(), Some(second.view.session));
        assert!(!lightbox.is_open());
        assert!(lightbox.close().is_none());
    }

    #[test]
    fn closed_lightbox_ignores_navigation() {
        let mut lightbox = LightboxController::new();
        assert!(lightbox.next().is_none());
        assert!(lightbox.previous().is_none());
        assert!(lightbox.view().is_none());
    }

    #[test]
    fn empty_open_keeps_current_session() {
        let mut lightbox = LightboxController::new();
        let id = lightbox.open(abc(), 1).unwrap().view.session;
        assert!(lightbox.open(Vec::new(), 0).is_none());
        assert_eq!(lightbox.session(), Some(id));
    }
}
