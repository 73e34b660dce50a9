//! Card motion: idle drift blended with pointer attraction and smoothed
//! every frame.
//!
//! The pieces compose leaf-first: [`transform::smooth`] and
//! [`drift::drift_offset`] are pure functions, [`field::attraction`] is pure
//! geometry, and [`MotionLoop`] owns the per-card state and steps it once
//! per host frame.

pub mod animator;
pub mod drift;
pub mod field;
pub mod transform;

pub use animator::{CardMotion, LoopState, MotionLoop};
pub use field::Rect;
pub use transform::CardTransform;
