//! Shared utilities: easing curves for timed transitions and frame pacing
//! statistics.

/// Easing curves.
pub mod easing;
/// Frame rate and step cost tracking.
pub mod frame_timing;
