//! Easing functions for timed transitions.
//!
//! The swipe snap-back is the only timed transition in the deck; it follows
//! the same `ease` curve a CSS `transition` would use so native and browser
//! presenters look identical.

/// Easing curve for timed transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// CSS-style cubic Bézier through (0,0), (x1,y1), (x2,y2), (1,1).
    CubicBezier {
        /// First control point x, in [0, 1].
        x1: f32,
        /// First control point y.
        y1: f32,
        /// Second control point x, in [0, 1].
        x2: f32,
        /// Second control point y.
        y2: f32,
    },
}

/// Newton iterations before falling back to bisection.
const NEWTON_STEPS: usize = 8;
/// Bisection iterations for flat-slope regions.
const BISECT_STEPS: usize = 24;
const EPSILON: f32 = 1e-6;

impl EasingFunction {
    /// The CSS `ease` keyword: `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    pub const EASE: EasingFunction = EasingFunction::CubicBezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    };

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]. Endpoints map to exactly 0 and 1.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let Self::CubicBezier { x1, y1, x2, y2 } = *self;
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let s = solve_curve_x(t, x1, x2);
        bezier(s, y1, y2)
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::EASE
    }
}

/// One axis of a cubic Bézier anchored at 0 and 1.
#[inline]
fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
    let oms = 1.0 - s;
    3.0 * oms * oms * s * p1 + 3.0 * oms * s * s * p2 + s * s * s
}

#[inline]
fn bezier_slope(s: f32, p1: f32, p2: f32) -> f32 {
    let oms = 1.0 - s;
    3.0 * oms * oms * p1 + 6.0 * oms * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x equals `x`.
fn solve_curve_x(x: f32, x1: f32, x2: f32) -> f32 {
    let mut s = x;
    for _ in 0..NEWTON_STEPS {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < EPSILON {
            return s;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < EPSILON {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..BISECT_STEPS {
        let value = bezier(s, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        let ease = EasingFunction::EASE;
        assert_eq!(ease.evaluate(0.0), 0.0);
        assert_eq!(ease.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_ease_matches_css_reference_points() {
        // Reference values from the CSS `ease` curve.
        let ease = EasingFunction::EASE;
        assert!((ease.evaluate(0.25) - 0.4085).abs() < 2e-3);
        assert!((ease.evaluate(0.5) - 0.8024).abs() < 2e-3);
        assert!((ease.evaluate(0.75) - 0.9604).abs() < 2e-3);
    }

    #[test]
    fn test_ease_is_monotonic() {
        let ease = EasingFunction::EASE;
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease.evaluate(i as f32 / 100.0);
            assert!(v >= prev - 1e-5, "ease dipped at step {i}: {v} < {prev}");
            prev = v;
        }
    }

    #[test]
    fn test_input_clamping() {
        let ease = EasingFunction::EASE;
        assert_eq!(ease.evaluate(-0.5), 0.0);
        assert_eq!(ease.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_default_is_css_ease() {
        assert_eq!(EasingFunction::default(), EasingFunction::EASE);
    }
}
