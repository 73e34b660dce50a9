//! Centralized interaction options with TOML preset support.
//!
//! Every tuned constant (magnet radius, drift speeds, swipe threshold,
//! mobile breakpoint, palette defaults, key bindings) lives here. Options
//! serialize to/from TOML so a page can ship its own tuning.

mod drift;
mod keybindings;
mod magnet;
mod swipe;
mod theme;
mod viewport;

use std::path::Path;

pub use drift::DriftOptions;
pub use keybindings::{KeyAction, KeybindingOptions};
pub use magnet::MagnetOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use swipe::SwipeOptions;
pub use theme::ThemeOptions;
pub use viewport::ViewportOptions;

use crate::error::FolioError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[magnet]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Pointer attraction of deck cards.
    pub magnet: MagnetOptions,
    /// Idle drift of deck cards.
    pub drift: DriftOptions,
    /// Touch swipe on the active card.
    pub swipe: SwipeOptions,
    /// Breakpoints and announcement timing.
    pub viewport: ViewportOptions,
    /// Palette selection defaults.
    pub theme: ThemeOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the tunable options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, FolioError> {
        toml::from_str(content)
            .map_err(|e| FolioError::OptionsParse(e.to_string()))
    }

    /// Parse options from a JSON string. Missing fields use defaults.
    pub fn from_json_str(content: &str) -> Result<Self, FolioError> {
        serde_json::from_str(content)
            .map_err(|e| FolioError::OptionsParse(e.to_string()))
    }

    /// Copy with `section.field` replaced by `value`.
    ///
    /// Unknown sections or fields, and values of the wrong type, are
    /// rejected and leave nothing changed.
    pub fn with_field(
        &self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<Self, FolioError> {
        let mut root = serde_json::to_value(self)
            .map_err(|e| FolioError::OptionsParse(e.to_string()))?;
        let slot = root
            .get_mut(section)
            .and_then(|s| s.get_mut(field))
            .ok_or_else(|| {
                FolioError::OptionsParse(format!("unknown option {section}.{field}"))
            })?;
        *slot = value;
        serde_json::from_value(root)
            .map_err(|e| FolioError::OptionsParse(format!("{section}.{field}: {e}")))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FolioError> {
        let content = std::fs::read_to_string(path).map_err(FolioError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FolioError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FolioError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FolioError::Io)?;
        }
        std::fs::write(path, content).map_err(FolioError::Io)
    }
}
