//! Frontend Models
//!
//! The page renders the core item types directly.

pub use todo_core::{Item, ItemList};
