//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All writes go
//! through the reducer in todo-core; the helpers here commit and persist.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{dispatch, Action, KeyValueStore, LocalCache};

use crate::models::ItemList;

/// In-memory list backing the rendered view
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Items in insertion order
    pub items: ItemList,
}

impl BoardState {
    pub fn hydrated(items: ItemList) -> Self {
        Self { items }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run `action` through `todo_core::dispatch` on a copy of the list; the
/// store is only written (and its subscribers notified) when it changed
///
/// Returns whether the list changed.
pub fn store_dispatch<S: KeyValueStore>(
    store: &BoardStore,
    cache: &LocalCache<S>,
    action: Action,
) -> bool {
    let mut items = store.items().get_untracked();
    let changed = dispatch(&mut items, cache, action);
    if changed {
        *store.items().write() = items;
    }
    changed
}

/// Replace the whole list (startup merge); the caller has already persisted it
pub fn store_replace(store: &BoardStore, items: ItemList) {
    *store.items().write() = items;
}
