//! Proximity field: pointer attraction per card with radius falloff.

use glam::Vec2;

use super::transform::CardTransform;
use crate::options::MagnetOptions;

/// Axis-aligned rectangle in viewport px (a card's bounding box).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub min: Vec2,
    /// Bottom-right corner.
    pub max: Vec2,
}

impl Rect {
    /// Rectangle from its left/top edge and size.
    #[must_use]
    pub fn from_xywh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(left, top),
            max: Vec2::new(left + width, top + height),
        }
    }

    /// Width in px.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height in px.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Whether `point` lies inside or on the edge.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Attraction of one card towards the pointer.
///
/// Cards whose center is at or beyond `radius` get exactly
/// [`CardTransform::ZERO`]; inside, the pull points from the card center
/// towards the pointer and its magnitude never grows with distance.
#[must_use]
pub fn attraction(
    options: &MagnetOptions,
    pointer: Vec2,
    card: &Rect,
) -> CardTransform {
    let delta = pointer - card.center();
    let distance = delta.length();
    if distance >= options.radius {
        return CardTransform::ZERO;
    }

    let falloff = 1.0 - (distance / options.radius).min(1.0);
    let strength = falloff.powf(options.falloff_exponent);
    // A pointer exactly on the center has no direction to pull in.
    let norm = if distance > 0.0 {
        delta / distance
    } else {
        Vec2::ZERO
    };
    CardTransform {
        translate: norm * options.max_translate * strength,
        rot_deg: norm.x * options.max_rotate * strength,
    }
}

/// Attraction for every card, in card order.
#[must_use]
pub fn attraction_field(
    options: &MagnetOptions,
    pointer: Vec2,
    cards: &[Rect],
) -> Vec<CardTransform> {
    cards
        .iter()
        .map(|card| attraction(options, pointer, card))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_at(center: Vec2) -> Rect {
        Rect::from_xywh(center.x - 100.0, center.y - 60.0, 200.0, 120.0)
    }

    #[test]
    fn outside_radius_is_exactly_zero() {
        let opts = MagnetOptions::default();
        let card = card_at(Vec2::new(500.0, 500.0));
        for pointer in [
            Vec2::new(500.0 + 260.0, 500.0),
            Vec2::new(500.0, 500.0 - 400.0),
            Vec2::new(-3000.0, 9000.0),
        ] {
            assert_eq!(attraction(&opts, pointer, &card), CardTransform::ZERO);
        }
    }

    #[test]
    fn pulls_towards_pointer() {
        let opts = MagnetOptions::default();
        let card = card_at(Vec2::new(500.0, 500.0));
        let pull = attraction(&opts, Vec2::new(600.0, 500.0), &card);
        assert!(pull.tx() > 0.0);
        assert!(pull.ty().abs() < 1e-6);
        assert!(pull.rot_deg > 0.0);

        let pull = attraction(&opts, Vec2::new(500.0, 400.0), &card);
        assert!(pull.ty() < 0.0);
        assert!(pull.rot_deg.abs() < 1e-6);
    }

    #[test]
    fn strength_follows_power_falloff() {
        let opts = MagnetOptions::default();
        let card = card_at(Vec2::ZERO);
        let pull = attraction(&opts, Vec2::new(130.0, 0.0), &card);
        let expected = 0.5_f32.powf(1.5);
        assert!((pull.tx() - 28.0 * expected).abs() < 1e-4);
        assert!((pull.rot_deg - 9.0 * expected).abs() < 1e-4);
    }

    #[test]
    fn magnitude_is_non_increasing_in_distance() {
        let opts = MagnetOptions::default();
        let card = card_at(Vec2::new(300.0, 300.0));
        let dir = Vec2::new(0.6, -0.8);
        let mut prev = f32::INFINITY;
        for step in 1..=300 {
            let d = step as f32;
            let pull = attraction(&opts, card.center() + dir * d, &card);
            let magnitude = pull.translate.length();
            assert!(magnitude <= prev + 1e-5, "grew at distance {d}");
            prev = magnitude;
        }
        assert_eq!(prev, 0.0);
    }

    #[test]
    fn pointer_on_center_yields_no_pull() {
        let opts = MagnetOptions::default();
        let card = card_at(Vec2::new(10.0, 10.0));
        let pull = attraction(&opts, card.center(), &card);
        assert_eq!(pull, CardTransform::ZERO);
    }

    #[test]
    fn field_handles_mixed_and_empty_sets() {
        let opts = MagnetOptions::default();
        let cards = [
            card_at(Vec2::new(0.0, 0.0)),
            card_at(Vec2::new(1000.0, 0.0)),
        ];
        let field = attraction_field(&opts, Vec2::new(50.0, 0.0), &cards);
        assert_eq!(field.len(), 2);
        assert!(field[0].tx() > 0.0);
        assert_eq!(field[1], CardTransform::ZERO);
        assert!(attraction_field(&opts, Vec2::ZERO, &[]).is_empty());
    }

    #[test]
    fn rect_geometry() {
        let r = Rect::from_xywh(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.center(), Vec2::new(60.0, 45.0));
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(!r.contains(Vec2::new(9.9, 30.0)));
    }
}
