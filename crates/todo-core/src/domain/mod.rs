//! Domain Layer
//!
//! The item entity and the ordered, id-unique list that holds it.
//! No I/O lives here.

mod item;
mod item_list;

pub use item::{Item, LOCAL_OWNER};
pub use item_list::ItemList;
