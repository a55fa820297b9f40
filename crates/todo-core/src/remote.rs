//! Remote Source
//!
//! The seed list read once at startup. Implementations make a single
//! attempt: no retry, no pagination, no timeout.

use async_trait::async_trait;

use crate::domain::ItemList;
use crate::error::FetchError;

/// One-shot asynchronous read of an item list
///
/// Futures are `?Send`: the page runs on a single-threaded event loop.
#[async_trait(?Send)]
pub trait RemoteSource {
    async fn fetch(&self) -> Result<ItemList, FetchError>;
}
