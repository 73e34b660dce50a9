//! `localStorage`-backed key-value store.

use web_sys::Storage;

use super::dom::js_error;
use crate::error::FolioError;
use crate::theme::KeyValueStore;

/// The window's `localStorage`.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open the window's storage; fails where it is disabled (some
    /// private browsing modes) or missing.
    pub fn open(window: &web_sys::Window) -> Result<Self, FolioError> {
        let storage = window
            .local_storage()
            .map_err(|e| js_error("localStorage", &e))?
            .ok_or_else(|| FolioError::Dom("localStorage unavailable".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FolioError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| js_error(key, &e))
    }
}
