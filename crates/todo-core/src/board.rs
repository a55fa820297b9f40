//! Board Reducer
//!
//! `(list, action) -> transition` with no side effects, plus `dispatch`,
//! which commits a `Changed` list and persists it.

use crate::cache::{KeyValueStore, LocalCache};
use crate::domain::{Item, ItemList};
use crate::id_alloc::allocate_id;

/// A user-initiated mutation intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a new item; `stamp` is the millisecond clock at submit time
    Add { title: String, stamp: i64 },
    Remove { id: i64 },
    Toggle { id: i64 },
}

/// Result of applying an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Changed(ItemList),
    /// Rejected title or unknown id
    Unchanged,
}

impl Transition {
    pub fn is_changed(&self) -> bool {
        matches!(self, Transition::Changed(_))
    }

    /// The list after the transition, given the list before it
    pub fn resolve(self, before: &ItemList) -> ItemList {
        match self {
            Transition::Changed(list) => list,
            Transition::Unchanged => before.clone(),
        }
    }
}

pub fn apply(state: &ItemList, action: Action) -> Transition {
    match action {
        Action::Add { title, stamp } => add(state, &title, stamp),
        Action::Remove { id } => remove(state, id),
        Action::Toggle { id } => toggle(state, id),
    }
}

/// Apply `action` to `list` in place; on change, save the new list to `cache`
///
/// Returns whether the list changed. Unchanged actions write nothing.
pub fn dispatch<S: KeyValueStore>(
    list: &mut ItemList,
    cache: &LocalCache<S>,
    action: Action,
) -> bool {
    match apply(list, action) {
        Transition::Changed(next) => {
            *list = next;
            cache.save(list);
            true
        }
        Transition::Unchanged => false,
    }
}

fn add(state: &ItemList, title: &str, stamp: i64) -> Transition {
    let title = title.trim();
    if title.is_empty() {
        return Transition::Unchanged;
    }
    let id = allocate_id(state, stamp);
    let mut next = state.clone();
    if !next.push(Item::new_local(id, title)) {
        return Transition::Unchanged;
    }
    Transition::Changed(next)
}

fn remove(state: &ItemList, id: i64) -> Transition {
    let mut next = state.clone();
    if next.remove(id) {
        Transition::Changed(next)
    } else {
        Transition::Unchanged
    }
}

fn toggle(state: &ItemList, id: i64) -> Transition {
    let mut next = state.clone();
    if next.update(id, Item::toggled) {
        Transition::Changed(next)
    } else {
        Transition::Unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LOCAL_OWNER;

    fn seeded() -> ItemList {
        ItemList::from_items(vec![
            Item { owner: 5, id: 1, title: "A".to_string(), completed: false },
            Item { owner: 5, id: 2, title: "B".to_string(), completed: true },
        ])
    }

    fn add_action(title: &str) -> Action {
        Action::Add { title: title.to_string(), stamp: 1_700_000_000_000 }
    }

    #[test]
    fn test_add_blank_titles_are_ignored() {
        let state = seeded();
        assert_eq!(apply(&state, add_action("")), Transition::Unchanged);
        assert_eq!(apply(&state, add_action("   ")), Transition::Unchanged);
        assert_eq!(apply(&state, add_action("\t\n")), Transition::Unchanged);
    }

    #[test]
    fn test_add_appends_one_fresh_item() {
        let state = seeded();
        let next = apply(&state, add_action("Buy milk")).resolve(&state);

        assert_eq!(next.len(), state.len() + 1);
        let added = next.items().last().unwrap();
        assert_eq!(added.title, "Buy milk");
        assert!(!added.completed);
        assert_eq!(added.owner, LOCAL_OWNER);
        assert!(!state.contains_id(added.id));
        assert_eq!(&next.items()[..2], state.items());
    }

    #[test]
    fn test_add_trims_title() {
        let next = apply(&ItemList::new(), add_action("  Call mom ")).resolve(&ItemList::new());
        assert_eq!(next.items()[0].title, "Call mom");
    }

    #[test]
    fn test_add_with_colliding_stamp() {
        let state = seeded();
        let next = apply(&state, Action::Add { title: "C".to_string(), stamp: 2 }).resolve(&state);
        assert_eq!(next.items()[2].id, 3);
    }

    #[test]
    fn test_remove_existing_and_missing() {
        let state = seeded();
        let next = apply(&state, Action::Remove { id: 1 }).resolve(&state);
        assert_eq!(next.len(), 1);
        assert!(!next.contains_id(1));

        assert_eq!(apply(&state, Action::Remove { id: 404 }), Transition::Unchanged);
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let state = seeded();
        let once = apply(&state, Action::Toggle { id: 1 }).resolve(&state);
        assert!(once.get(1).unwrap().completed);
        assert_eq!(once.get(1).unwrap().title, "A");
        assert_eq!(once.get(1).unwrap().owner, 5);
        assert_eq!(once.get(2), state.get(2));

        let twice = apply(&once, Action::Toggle { id: 1 }).resolve(&once);
        assert_eq!(twice, state);
    }

    #[test]
    fn test_toggle_missing_id() {
        assert!(!apply(&seeded(), Action::Toggle { id: 77 }).is_changed());
    }
}
