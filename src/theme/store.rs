//! String key-value persistence for theme preferences.

use std::collections::HashMap;

use crate::error::FolioError;

/// Persistent string store (browser `localStorage` or an in-memory map).
pub trait KeyValueStore {
    /// Value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), FolioError>;
}

/// In-process store, used natively and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `entries`.
    #[must_use]
    pub fn with_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FolioError> {
        let _ = self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let mut store = MemoryStore::new();
        assert!(store.get("theme").is_none());
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn prefilled_entries() {
        let store = MemoryStore::with_entries([("paletteIndexDark", "3")]);
        assert_eq!(store.get("paletteIndexDark").as_deref(), Some("3"));
    }
}
