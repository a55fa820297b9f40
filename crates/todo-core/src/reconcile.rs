//! Reconciler
//!
//! One-way merge of a fetched list into a local one.

use crate::domain::ItemList;

/// Append every incoming item whose id is not already present
///
/// Items already in `base` keep their local fields even when the incoming
/// copy differs. Merging the same `incoming` again adds nothing.
pub fn merge(base: &ItemList, incoming: &ItemList) -> ItemList {
    let mut merged = base.clone();
    let mut appended = 0usize;
    for item in incoming {
        if merged.push(item.clone()) {
            appended += 1;
        }
    }
    log::debug!(
        "merge: {} local + {} incoming -> {} appended",
        base.len(),
        incoming.len(),
        appended
    );
    merged
}
