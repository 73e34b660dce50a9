//! Per-card visual transform and exponential smoothing.

use std::ops::Add;

use glam::Vec2;

/// Translation (px) plus rotation (degrees) applied to one card.
///
/// This is the whole styling contract between the motion system and the
/// presenter: `tx`, `ty` and `rot` per card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardTransform {
    /// Translation in px.
    pub translate: Vec2,
    /// Rotation in degrees.
    pub rot_deg: f32,
}

impl CardTransform {
    /// The rest pose.
    pub const ZERO: Self = Self {
        translate: Vec2::ZERO,
        rot_deg: 0.0,
    };

    /// Transform from components.
    #[must_use]
    pub const fn new(tx: f32, ty: f32, rot_deg: f32) -> Self {
        Self {
            translate: Vec2::new(tx, ty),
            rot_deg,
        }
    }

    /// Horizontal translation (px).
    #[must_use]
    pub fn tx(&self) -> f32 {
        self.translate.x
    }

    /// Vertical translation (px).
    #[must_use]
    pub fn ty(&self) -> f32 {
        self.translate.y
    }

    /// Component-wise exponential smoothing step towards `target`.
    #[must_use]
    pub fn smooth_towards(&self, target: &Self, factor: f32) -> Self {
        Self::new(
            smooth(self.tx(), target.tx(), factor),
            smooth(self.ty(), target.ty(), factor),
            smooth(self.rot_deg, target.rot_deg, factor),
        )
    }
}

impl Add for CardTransform {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            translate: self.translate + rhs.translate,
            rot_deg: self.rot_deg + rhs.rot_deg,
        }
    }
}

/// Move `prev` a fraction `factor` of the way towards `target`.
///
/// With `factor` in (0, 1] and a constant target, repeated application
/// converges monotonically without overshooting.
#[inline]
#[must_use]
pub fn smooth(prev: f32, target: f32, factor: f32) -> f32 {
    prev + (target - prev) * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_covers_the_given_fraction() {
        assert!((smooth(0.0, 10.0, 0.18) - 1.8).abs() < 1e-6);
        assert!((smooth(10.0, 0.0, 0.18) - 8.2).abs() < 1e-6);
        assert_eq!(smooth(3.0, 3.0, 0.18), 3.0);
    }

    #[test]
    fn smooth_converges_without_overshoot() {
        let target = 28.0;
        let mut value = 0.0;
        let mut prev_gap = target - value;
        for _ in 0..200 {
            value = smooth(value, target, 0.18);
            assert!(value <= target, "overshot: {value}");
            let gap = target - value;
            assert!(gap <= prev_gap);
            prev_gap = gap;
        }
        assert!((value - target).abs() < 1e-4);
    }

    #[test]
    fn smooth_towards_applies_per_component() {
        let from = CardTransform::ZERO;
        let to = CardTransform::new(10.0, -20.0, 5.0);
        let next = from.smooth_towards(&to, 0.5);
        assert_eq!(next, CardTransform::new(5.0, -10.0, 2.5));
    }

    #[test]
    fn add_sums_components() {
        let a = CardTransform::new(1.0, 2.0, 3.0);
        let b = CardTransform::new(-1.0, 0.5, 0.25);
        assert_eq!(a + b, CardTransform::new(0.0, 2.5, 3.25));
    }
}
