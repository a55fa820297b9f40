//! TodoBoard Core
//!
//! Platform-independent rules behind the to-do page:
//! - domain: Item and ItemList with the unique-id invariant
//! - codec: validating JSON decode shared by storage and network boundaries
//! - reconcile: append-only merge of a remote list into a local one
//! - board: pure reducer for add / remove / toggle, and dispatch-then-persist
//! - cache: LocalCache over an abstract key-value store
//! - remote: RemoteSource seam for the one-shot startup fetch
//! - startup: hydration and remote reconciliation flow

pub mod domain;
pub mod codec;
pub mod reconcile;
pub mod id_alloc;
pub mod board;
pub mod cache;
pub mod remote;
pub mod startup;
mod error;

pub use domain::{Item, ItemList, LOCAL_OWNER};
pub use error::{DecodeError, FetchError, StorageError};
pub use reconcile::merge;
pub use id_alloc::allocate_id;
pub use board::{apply, dispatch, Action, Transition};
pub use cache::{KeyValueStore, LocalCache, MemoryStore, STORAGE_KEY};
pub use remote::RemoteSource;
pub use startup::{hydrate, reconcile_remote};
