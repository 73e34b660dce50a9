use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Swipe", inline)]
#[serde(default)]
/// Touch drag on the active card.
pub struct SwipeOptions {
    /// Horizontal displacement beyond which a release navigates (px).
    #[schemars(title = "Commit Threshold", range(min = 10.0, max = 300.0), extend("step" = 5.0))]
    pub commit_threshold: f32,
    /// Drag distance per degree of tilt (px).
    #[schemars(title = "Rotation Divisor", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub rotation_divisor: f32,
    /// Tilt clamp in either direction (degrees).
    #[schemars(title = "Max Rotation", range(min = 0.0, max = 45.0), extend("step" = 0.5))]
    pub max_rotation: f32,
    /// Duration of the snap back to rest after release (ms).
    #[schemars(title = "Snap Back", range(min = 0.0, max = 1000.0), extend("step" = 10.0))]
    pub snap_back_ms: f64,
}

impl Default for SwipeOptions {
    fn default() -> Self {
        Self {
            commit_threshold: 80.0,
            rotation_divisor: 20.0,
            max_rotation: 10.0,
            snap_back_ms: 180.0,
        }
    }
}
