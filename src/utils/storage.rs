//! `localStorage` backend for the theme store.

use termfolio_core::{StorageError, ThemeStorage};

use super::dom;

/// Theme persistence in the browser's `localStorage`.
///
/// Holds no handle; the storage object is looked up on every call so the
/// type stays `Send + Sync` for the reactive store.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl ThemeStorage for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }
}
