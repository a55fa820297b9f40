//! Item List
//!
//! Insertion-ordered items where no two share an id.

use std::collections::HashSet;
use serde::Serialize;

use super::item::Item;

/// Ordered sequence of items, unique by id
///
/// Every constructor and mutator keeps the invariant, so a list that
/// exists is always valid to persist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemList(Vec<Item>);

impl ItemList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build from arbitrary items, keeping the first occurrence of each id
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut seen = HashSet::with_capacity(items.len());
        let items = items
            .into_iter()
            .filter(|item| seen.insert(item.id))
            .collect();
        Self(items)
    }

    pub fn items(&self) -> &[Item] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_id(&self, id: i64) -> bool {
        self.0.iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: i64) -> Option<&Item> {
        self.0.iter().find(|item| item.id == id)
    }

    /// Largest id in the list, if any
    pub fn max_id(&self) -> Option<i64> {
        self.0.iter().map(|item| item.id).max()
    }

    pub fn completed_count(&self) -> usize {
        self.0.iter().filter(|item| item.completed).count()
    }

    /// Append an item; returns false (and leaves the list alone) on id clash
    pub fn push(&mut self, item: Item) -> bool {
        if self.contains_id(item.id) {
            return false;
        }
        self.0.push(item);
        true
    }

    /// Remove the item with `id`; returns whether anything was removed
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.0.len();
        self.0.retain(|item| item.id != id);
        self.0.len() != before
    }

    /// Replace the item with `id` by `f(item)`, keeping its id and position
    pub fn update<F>(&mut self, id: i64, f: F) -> bool
    where
        F: FnOnce(&Item) -> Item,
    {
        match self.0.iter_mut().find(|item| item.id == id) {
            Some(slot) => {
                let updated = f(slot);
                *slot = Item { id, ..updated };
                true
            }
            None => false,
        }
    }

    pub fn into_vec(self) -> Vec<Item> {
        self.0
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
