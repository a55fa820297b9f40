//! Startup Flow
//!
//! Hydrate synchronously, then fold the remote list into whatever the
//! cache holds once the fetch completes.

use crate::cache::{KeyValueStore, LocalCache};
use crate::domain::ItemList;
use crate::reconcile::merge;
use crate::remote::RemoteSource;

/// Initial list shown before the fetch resolves
pub fn hydrate<S: KeyValueStore>(cache: &LocalCache<S>) -> ItemList {
    let list = cache.load();
    log::info!("hydrated {} item(s) from '{}'", list.len(), cache.key());
    list
}

/// Fetch the remote list, merge it into the cached one, persist the result
///
/// The merge base is the cache as it reads after the fetch, not the list
/// hydrated earlier. Returns None when the fetch fails; nothing is written
/// in that case.
pub async fn reconcile_remote<S, R>(cache: &LocalCache<S>, remote: &R) -> Option<ItemList>
where
    S: KeyValueStore,
    R: RemoteSource + ?Sized,
{
    let incoming = match remote.fetch().await {
        Ok(list) => list,
        Err(e) => {
            log::error!("remote fetch failed, keeping cached list: {}", e);
            return None;
        }
    };
    let base = cache.load();
    let merged = merge(&base, &incoming);
    cache.save(&merged);
    log::info!(
        "merged remote list: {} fetched, {} appended, {} total",
        incoming.len(),
        merged.len() - base.len(),
        merged.len()
    );
    Some(merged)
}
