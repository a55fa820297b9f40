//! Cache Layer - Storage Trait
//!
//! The minimal string key-value surface LocalCache needs. Calls are
//! synchronous, matching `window.localStorage`.

use crate::error::StorageError;

pub trait KeyValueStore {
    /// Stored value for `key`, or None when absent or unreadable
    fn get_item(&self, key: &str) -> Option<String>;

    /// Overwrite the value for `key`
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}
