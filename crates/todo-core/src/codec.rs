//! Item List Codec
//!
//! The single decode path for both localStorage and `GET /api` bodies.
//! A document either decodes completely or is rejected as a whole.

use crate::domain::{Item, ItemList};
use crate::error::DecodeError;

/// Decode a JSON array of items
///
/// All four fields are required with their exact types. Duplicate ids
/// are collapsed, first occurrence wins.
pub fn decode_list(raw: &str) -> Result<ItemList, DecodeError> {
    let items: Vec<Item> = serde_json::from_str(raw)?;
    let decoded = items.len();
    let list = ItemList::from_items(items);
    if list.len() != decoded {
        log::warn!(
            "dropped {} item(s) with duplicate ids while decoding",
            decoded - list.len()
        );
    }
    Ok(list)
}

/// Encode a list as a JSON array
pub fn encode_list(list: &ItemList) -> String {
    // Item has only plain fields, serialization cannot fail
    serde_json::to_string(list).unwrap_or_else(|_| String::from("[]"))
}
