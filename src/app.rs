//! TodoBoard App
//!
//! Hydrates from localStorage, renders immediately, then folds in the seed
//! list from `/api` once it arrives.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_core::{hydrate, reconcile_remote, LocalCache};

use crate::components::{NewItemForm, TodoList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::services::{BrowserStorage, HttpSource};
use crate::store::{store_replace, BoardState, BoardStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    let cache = LocalCache::with_key(BrowserStorage, config.storage_key);

    // Synchronous hydration: the board is usable before the fetch resolves
    let store = Store::new(BoardState::hydrated(hydrate(&cache)));
    provide_context(store);
    provide_context(AppContext::new(store, cache.clone()));

    let mounted = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let mounted = Arc::clone(&mounted);
        move || mounted.store(false, Ordering::Relaxed)
    });

    let remote = HttpSource::new(config.api_path);
    spawn_local(async move {
        let Some(merged) = reconcile_remote(&cache, &remote).await else {
            return;
        };
        if mounted.load(Ordering::Relaxed) {
            store_replace(&store, merged);
        } else {
            log::debug!("board unmounted before fetch resolved, merged list not rendered");
        }
    });

    let summary = move || {
        store.items().with(|items| {
            format!("{} items, {} done", items.len(), items.completed_count())
        })
    };

    view! {
        <main class="main-content">
            <h1>"To-Do List"</h1>

            <NewItemForm />

            <TodoList />

            <p class="item-count">{summary}</p>
        </main>
    }
}
