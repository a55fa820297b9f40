//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use todo_core::{Action, LocalCache};

use crate::services::{now_millis, BrowserStorage};
use crate::store::{store_dispatch, BoardStore};

/// Store plus the cache every mutation is persisted to
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: BoardStore,
    cache: StoredValue<LocalCache<BrowserStorage>>,
}

impl AppContext {
    pub fn new(store: BoardStore, cache: LocalCache<BrowserStorage>) -> Self {
        Self {
            store,
            cache: StoredValue::new(cache),
        }
    }

    fn dispatch(&self, action: Action) -> bool {
        self.cache
            .with_value(|cache| store_dispatch(&self.store, cache, action))
    }

    /// Append a new item; false when the title is blank
    pub fn add(&self, title: String) -> bool {
        self.dispatch(Action::Add { title, stamp: now_millis() })
    }

    pub fn remove(&self, id: i64) {
        self.dispatch(Action::Remove { id });
    }

    pub fn toggle(&self, id: i64) {
        self.dispatch(Action::Toggle { id });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
