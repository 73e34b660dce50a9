//! Per-root image carousel with load-then-swap slide changes.

use super::lightbox::LightboxImage;

/// Split a `|`-delimited source attribute, trimming and dropping empties.
#[must_use]
pub fn parse_sources(attribute: &str) -> Vec<String> {
    attribute
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Ticket identifying one outstanding slide load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(pub u64);

/// Request to fetch `src` off-screen and report back with `ticket`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// Identifies the completion.
    pub ticket: LoadTicket,
    /// Slide index the load is for.
    pub index: usize,
    /// Image URL.
    pub src: String,
}

/// Result of [`Carousel::show`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideChange {
    /// Normalized current index (exposed as `data-idx`).
    pub index: usize,
    /// Load to start, `None` when the source is already shown or on its
    /// way.
    pub load: Option<LoadRequest>,
}

/// A completed load to swap into the visible slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSwap {
    /// New `src`.
    pub src: String,
    /// New `alt`, "<label> slide N".
    pub alt: String,
}

/// One carousel instance.
#[derive(Debug, Clone)]
pub struct Carousel {
    label: String,
    sources: Vec<String>,
    index: usize,
    /// Source currently in the visible `<img>`.
    displayed: Option<String>,
    pending: Option<LoadRequest>,
    next_ticket: u64,
}

impl Carousel {
    /// Carousel over `sources`; `None` when there is nothing to show.
    ///
    /// `label` prefixes slide alt text.
    #[must_use]
    pub fn new(label: impl Into<String>, sources: Vec<String>) -> Option<Self> {
        if sources.is_empty() {
            return None;
        }
        Some(Self {
            label: label.into(),
            sources,
            index: 0,
            displayed: None,
            pending: None,
            next_ticket: 0,
        })
    }

    /// Carousel from a `data-images` attribute value.
    #[must_use]
    pub fn from_attribute(
        label: impl Into<String>,
        attribute: &str,
    ) -> Option<Self> {
        Self::new(label, parse_sources(attribute))
    }

    /// Mark `src` as already present in the markup so showing it again
    /// does not reload it.
    #[must_use]
    pub fn with_displayed(mut self, src: impl Into<String>) -> Self {
        self.displayed = Some(src.into());
        self
    }

    /// Alt-text prefix.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Ordered sources.
    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Always `false`: empty carousels are never built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Current slide index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Source in the visible slide, once one has loaded.
    #[must_use]
    pub fn displayed(&self) -> Option<&str> {
        self.displayed.as_deref()
    }

    /// Show slide `index`, wrapping in both directions.
    ///
    /// The index moves immediately; the visible image changes only when
    /// the returned load completes.
    pub fn show(&mut self, index: isize) -> SlideChange {
        let len = self.sources.len() as isize;
        self.index = index.rem_euclid(len) as usize;
        let src = &self.sources[self.index];

        let already_shown = self.displayed.as_deref() == Some(src.as_str());
        if already_shown {
            self.pending = None;
            return SlideChange {
                index: self.index,
                load: None,
            };
        }
        if self.pending.as_ref().is_some_and(|p| &p.src == src) {
            return SlideChange {
                index: self.index,
                load: None,
            };
        }

        let request = LoadRequest {
            ticket: LoadTicket(self.next_ticket),
            index: self.index,
            src: src.clone(),
        };
        self.next_ticket += 1;
        self.pending = Some(request.clone());
        SlideChange {
            index: self.index,
            load: Some(request),
        }
    }

    /// Step forward one slide.
    pub fn next(&mut self) -> SlideChange {
        self.show(self.index as isize + 1)
    }

    /// Step back one slide.
    pub fn previous(&mut self) -> SlideChange {
        self.show(self.index as isize - 1)
    }

    /// A load finished. Returns the swap to apply, or `None` when a later
    /// `show` superseded this load.
    pub fn on_loaded(&mut self, ticket: LoadTicket) -> Option<SlideSwap> {
        if self.pending.as_ref().map(|p| p.ticket) != Some(ticket) {
            log::trace!("stale carousel load {ticket:?} ignored");
            return None;
        }
        let request = self.pending.take()?;
        self.displayed = Some(request.src.clone());
        Some(SlideSwap {
            src: request.src,
            alt: format!("{} slide {}", self.label, request.index + 1),
        })
    }

    /// A load failed. The stale image stays; a later `show` may retry.
    pub fn on_load_failed(&mut self, ticket: LoadTicket) {
        if self.pending.as_ref().map(|p| p.ticket) == Some(ticket) {
            if let Some(request) = self.pending.take() {
                log::warn!("carousel image failed to load: {}", request.src);
            }
        }
    }

    /// Source to warm the cache with after the first render.
    #[must_use]
    pub fn preload_source(&self) -> &str {
        self.sources
            .get(1)
            .or_else(|| self.sources.first())
            .map_or("", String::as_str)
    }

    /// Every slide as a lightbox image, all sharing `alt`.
    #[must_use]
    pub fn lightbox_images(&self, alt: &str) -> Vec<LightboxImage> {
        self.sources
            .iter()
            .map(|src| LightboxImage::new(src.clone(), alt))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> Carousel {
        Carousel::from_attribute("Research", " a.png | b.png ||c.png ").unwrap()
    }

    #[test]
    fn parses_trimmed_non_empty_sources() {
        assert_eq!(
            parse_sources(" a.png | b.png ||c.png "),
            vec!["a.png", "b.png", "c.png"]
        );
        assert!(parse_sources(" | ").is_empty());
        assert!(Carousel::from_attribute("x", "").is_none());
    }

    #[test]
    fn show_normalizes_any_index() {
        let mut carousel = three();
        for i in -10_isize..10 {
            let change = carousel.show(i);
            assert!(change.index < 3);
            assert_eq!(change.index, i.rem_euclid(3) as usize);
        }
        assert_eq!(carousel.show(-1).index, 2);
    }

    #[test]
    fn repeated_show_triggers_one_load() {
        let mut carousel = three();
        let first = carousel.show(1);
        assert!(first.load.is_some());
        assert!(carousel.show(1).load.is_none());

        let ticket = first.load.unwrap().ticket;
        let _ = carousel.on_loaded(ticket);
        assert!(carousel.show(1).load.is_none());
    }

    #[test]
    fn swap_happens_only_after_load() {
        let mut carousel = three();
        let load = carousel.show(0).load.unwrap();
        assert!(carousel.displayed().is_none());
        let swap = carousel.on_loaded(load.ticket).unwrap();
        assert_eq!(swap.src, "a.png");
        assert_eq!(swap.alt, "Research slide 1");
        assert_eq!(carousel.displayed(), Some("a.png"));
    }

    #[test]
    fn superseded_load_is_ignored() {
        let mut carousel = three();
        let old = carousel.next().load.unwrap();
        let new = carousel.next().load.unwrap();
        assert!(carousel.on_loaded(old.ticket).is_none());
        let swap = carousel.on_loaded(new.ticket).unwrap();
        assert_eq!(swap.src, "c.png");
        assert_eq!(swap.alt, "Research slide 3");
    }

    #[test]
    fn failed_load_keeps_stale_image() {
        let mut carousel = three();
        let first = carousel.show(0).load.unwrap();
        let _ = carousel.on_loaded(first.ticket);
        let failing = carousel.next().load.unwrap();
        carousel.on_load_failed(failing.ticket);
        assert_eq!(carousel.displayed(), Some("a.png"));
        assert_eq!(carousel.index(), 1);
        // Retry is allowed once the failure cleared the pending load.
        assert!(carousel.show(1).load.is_some());
    }

    #[test]
    fn markup_source_is_not_reloaded() {
        let mut carousel = three().with_displayed("a.png");
        assert!(carousel.show(0).load.is_none());
    }

    #[test]
    fn preload_prefers_second_source() {
        assert_eq!(three().preload_source(), "b.png");
        let single = Carousel::new("x", vec!["only.png".into()]).unwrap();
        assert_eq!(single.preload_source(), "only.png");
    }

    #[test]
    fn lightbox_images_share_alt() {
        let images = three().lightbox_images("chart");
        assert_eq!(images.len(), 3);
        assert!(images.iter().all(|i| i.alt == "chart"));
        assert_eq!(images[2].src, "c.png");
    }
}
