//! Cache Layer
//!
//! LocalCache persists the whole list under one key of a key-value store.
//! The browser provides localStorage; `MemoryStore` backs tests.

mod traits;
mod local_cache;
mod memory;

pub use traits::KeyValueStore;
pub use local_cache::{LocalCache, STORAGE_KEY};
pub use memory::MemoryStore;
