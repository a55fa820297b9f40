//! Id Allocation
//!
//! Local items get ids derived from a millisecond clock reading, bumped
//! past the current maximum when the clock alone would collide.

use std::collections::HashSet;

use crate::domain::ItemList;

/// Pick an id for a new item that no item in `existing` uses
pub fn allocate_id(existing: &ItemList, stamp: i64) -> i64 {
    let Some(max) = existing.max_id() else {
        return stamp;
    };
    if stamp > max {
        return stamp;
    }
    match max.checked_add(1) {
        Some(next) => next,
        None => smallest_unused(existing),
    }
}

// The list is finite, so some id in 0..=len is free.
fn smallest_unused(existing: &ItemList) -> i64 {
    let used: HashSet<i64> = existing.iter().map(|item| item.id).collect();
    (0..).find(|id| !used.contains(id)).unwrap_or(0)
}
