//! Local Cache
//!
//! Whole-list load/save over a KeyValueStore. Neither operation reports
//! failure to the caller: bad data loads as empty, failed writes are logged.

use super::traits::KeyValueStore;
use crate::codec::{decode_list, encode_list};
use crate::domain::ItemList;

/// Fixed key the list is stored under
pub const STORAGE_KEY: &str = "todos";

#[derive(Debug, Clone)]
pub struct LocalCache<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> LocalCache<S> {
    /// Cache under the default `"todos"` key
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Previously saved list, or empty when missing or malformed
    pub fn load(&self) -> ItemList {
        let Some(raw) = self.store.get_item(&self.key) else {
            return ItemList::new();
        };
        match decode_list(&raw) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("discarding malformed cache entry '{}': {}", self.key, e);
                ItemList::new()
            }
        }
    }

    /// Overwrite the stored list
    pub fn save(&self, list: &ItemList) {
        if let Err(e) = self.store.set_item(&self.key, &encode_list(list)) {
            log::error!("failed to persist {} item(s) under '{}': {}", list.len(), self.key, e);
        }
    }
}
