//! Live page geometry as seen by the engine.

use crate::motion::Rect;

/// Source of fresh layout on every query.
///
/// Rects are re-read each time they are needed, never cached, so layout
/// changes (resize, scroll, the drift itself) are always reflected.
pub trait Viewport {
    /// Bounding box of every deck card, in card order.
    fn card_rects(&self) -> Vec<Rect>;

    /// Current viewport width in px.
    fn width(&self) -> f32;
}

/// Fixed geometry, for the preview binary and tests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StaticViewport {
    /// Card rects returned by every query.
    pub rects: Vec<Rect>,
    /// Viewport width.
    pub width: f32,
}

impl StaticViewport {
    /// Row of `count` cards, `card_w` × `card_h`, separated by `gap`.
    #[must_use]
    pub fn row(count: usize, card_w: f32, card_h: f32, gap: f32) -> Self {
        let rects: Vec<Rect> = (0..count)
            .map(|i| Rect::from_xywh(i as f32 * (card_w + gap), 0.0, card_w, card_h))
            .collect();
        let width = count as f32 * (card_w + gap);
        Self { rects, width }
    }

    /// Same layout at another viewport width.
    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

impl Viewport for StaticViewport {
    fn card_rects(&self) -> Vec<Rect> {
        self.rects.clone()
    }

    fn width(&self) -> f32 {
        self.width
    }
}
