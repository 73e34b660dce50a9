use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Drift", inline)]
#[serde(default)]
/// Idle periodic motion applied to every card.
pub struct DriftOptions {
    /// Horizontal amplitude (px).
    #[schemars(title = "Amplitude X", range(min = 0.0, max = 40.0), extend("step" = 0.5))]
    pub amplitude_x: f32,
    /// Vertical amplitude (px).
    #[schemars(title = "Amplitude Y", range(min = 0.0, max = 40.0), extend("step" = 0.5))]
    pub amplitude_y: f32,
    /// Rotation amplitude (degrees).
    #[schemars(title = "Amplitude Rotation", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub amplitude_rot: f32,
    /// Horizontal angular speed (radians per ms).
    #[schemars(skip)]
    pub speed_x: f64,
    /// Vertical angular speed (radians per ms).
    #[schemars(skip)]
    pub speed_y: f64,
    /// Rotational angular speed (radians per ms).
    #[schemars(skip)]
    pub speed_rot: f64,
    /// Horizontal phase offset per card index.
    #[schemars(skip)]
    pub phase_x: f64,
    /// Vertical phase offset per card index.
    #[schemars(skip)]
    pub phase_y: f64,
    /// Rotational phase offset per card index.
    #[schemars(skip)]
    pub phase_rot: f64,
}

impl Default for DriftOptions {
    fn default() -> Self {
        Self {
            amplitude_x: 6.0,
            amplitude_y: 6.0,
            amplitude_rot: 0.8,
            speed_x: 0.000_22,
            speed_y: 0.000_18,
            speed_rot: 0.000_16,
            phase_x: 0.9,
            phase_y: 1.1,
            phase_rot: 0.7,
        }
    }
}
