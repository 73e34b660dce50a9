use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Viewport", inline)]
#[serde(default)]
/// Breakpoints and screen-reader announcement timing.
pub struct ViewportOptions {
    /// Widest viewport still treated as mobile (px). Enables swipe and the
    /// modal scroll lock.
    #[schemars(title = "Mobile Max Width", range(min = 320.0, max = 1440.0), extend("step" = 1.0))]
    pub mobile_max_width: f32,
    /// How long a deck announcement stays in the live region (ms).
    #[schemars(title = "Announcement Lifetime", range(min = 100.0, max = 10000.0), extend("step" = 100.0))]
    pub announcement_ms: u32,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            mobile_max_width: 768.0,
            announcement_ms: 1000,
        }
    }
}

impl ViewportOptions {
    /// Whether a viewport of `width` px counts as mobile.
    #[must_use]
    pub fn is_mobile(&self, width: f32) -> bool {
        width <= self.mobile_max_width
    }
}
