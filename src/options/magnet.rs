use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Magnet", inline)]
#[serde(default)]
/// Pointer attraction of deck cards and the per-frame smoothing factor.
pub struct MagnetOptions {
    /// Distance from a card's center within which the pointer pulls it (px).
    #[schemars(title = "Radius", range(min = 40.0, max = 800.0), extend("step" = 10.0))]
    pub radius: f32,
    /// Translation at full strength (px).
    #[schemars(title = "Max Translate", range(min = 0.0, max = 80.0), extend("step" = 1.0))]
    pub max_translate: f32,
    /// Rotation at full strength (degrees).
    #[schemars(title = "Max Rotate", range(min = 0.0, max = 30.0), extend("step" = 0.5))]
    pub max_rotate: f32,
    /// Exponent applied to the linear falloff; above 1 concentrates the
    /// pull near the cursor.
    #[schemars(title = "Falloff Exponent", range(min = 0.5, max = 4.0), extend("step" = 0.1))]
    pub falloff_exponent: f32,
    /// Fraction of the remaining distance covered each frame.
    #[schemars(title = "Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub smoothing: f32,
}

impl Default for MagnetOptions {
    fn default() -> Self {
        Self {
            radius: 260.0,
            max_translate: 28.0,
            max_rotate: 9.0,
            falloff_exponent: 1.5,
            smoothing: 0.18,
        }
    }
}
