use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Palette selection defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Theme", inline)]
#[serde(default)]
pub struct ThemeOptions {
    /// Palette used on a first visit and when no index is stored.
    #[schemars(title = "Default Palette", range(min = 0, max = 3))]
    pub default_palette: usize,
    /// Re-rolls allowed when the random palette repeats the last one.
    #[schemars(skip)]
    pub reroll_attempts: u32,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            default_palette: 2,
            reroll_attempts: 5,
        }
    }
}
