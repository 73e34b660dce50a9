use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Interaction actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// previous = ["ArrowLeft"]
/// advance = [" ", "Enter"]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Step back (deck, focused carousel, open lightbox).
    Previous,
    /// Step forward (deck, focused carousel, open lightbox).
    Next,
    /// Dismiss the lightbox.
    Close,
    /// Advance the lightbox.
    Advance,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to `KeyboardEvent.key`
/// strings.
pub struct KeybindingOptions {
    /// Maps action → key strings (e.g. `Advance` → `[" ", "Enter"]`).
    pub bindings: HashMap<KeyAction, Vec<String>>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::Previous, vec!["ArrowLeft".into()]),
            (KeyAction::Next, vec!["ArrowRight".into()]),
            (KeyAction::Close, vec!["Escape".into()]),
            (KeyAction::Advance, vec![" ".into(), "Enter".into()]),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|(_, keys)| keys.iter().any(|k| k == key))
            .map(|(action, _)| *action)
    }
}
