//! Generative Tests
//!
//! Merge, id allocation and reducer laws over arbitrary lists.

use proptest::prelude::*;
use proptest::sample::Index;
use todo_core::{allocate_id, apply, merge, Action, Item, ItemList, Transition};

/// Small id space so base and incoming overlap often
fn item_strategy() -> impl Strategy<Value = Item> {
    (0i64..3, 0i64..12, "[a-z ]{0,6}", any::<bool>()).prop_map(|(owner, id, title, completed)| {
        Item { owner, id, title, completed }
    })
}

fn list_strategy() -> impl Strategy<Value = ItemList> {
    prop::collection::vec(item_strategy(), 0..10).prop_map(ItemList::from_items)
}

fn wide_id() -> impl Strategy<Value = i64> {
    prop_oneof![
        any::<i64>(),
        -5i64..5,
        Just(i64::MAX),
        Just(i64::MAX - 1),
        Just(i64::MIN),
    ]
}

fn wide_list_strategy() -> impl Strategy<Value = ItemList> {
    prop::collection::vec(wide_id(), 0..20).prop_map(|ids| {
        ItemList::from_items(ids.into_iter().map(|id| Item::new_local(id, "t")).collect())
    })
}

proptest! {
    #[test]
    fn merge_keeps_base_then_appends_new_incoming(
        base in list_strategy(),
        incoming in list_strategy(),
    ) {
        let merged = merge(&base, &incoming);

        prop_assert_eq!(&merged.items()[..base.len()], base.items());
        let expected_tail: Vec<Item> = incoming
            .iter()
            .filter(|item| !base.contains_id(item.id))
            .cloned()
            .collect();
        prop_assert_eq!(&merged.items()[base.len()..], &expected_tail[..]);
    }

    #[test]
    fn merge_is_idempotent(base in list_strategy(), incoming in list_strategy()) {
        let once = merge(&base, &incoming);
        let twice = merge(&once, &incoming);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn allocated_id_is_never_in_use(
        list in wide_list_strategy(),
        stamp in prop_oneof![any::<i64>(), Just(i64::MAX), Just(0i64)],
    ) {
        let id = allocate_id(&list, stamp);
        prop_assert!(!list.contains_id(id));
    }

    #[test]
    fn add_appends_exactly_one_fresh_item(
        list in list_strategy(),
        title in "[a-z ]{0,8}",
        stamp in any::<i64>(),
    ) {
        let action = Action::Add { title: title.clone(), stamp };
        match apply(&list, action) {
            Transition::Changed(next) => {
                prop_assert!(!title.trim().is_empty());
                prop_assert_eq!(next.len(), list.len() + 1);
                prop_assert_eq!(&next.items()[..list.len()], list.items());
                let added = &next.items()[list.len()];
                prop_assert!(!list.contains_id(added.id));
                prop_assert_eq!(added.title.as_str(), title.trim());
                prop_assert!(!added.completed);
            }
            Transition::Unchanged => prop_assert!(title.trim().is_empty()),
        }
    }

    #[test]
    fn toggle_twice_is_identity(list in list_strategy(), pick in any::<Index>()) {
        prop_assume!(!list.is_empty());
        let target = pick.get(list.items()).clone();

        let once = apply(&list, Action::Toggle { id: target.id }).resolve(&list);
        for (before, after) in list.iter().zip(once.iter()) {
            if before.id == target.id {
                prop_assert_eq!(after, &before.toggled());
            } else {
                prop_assert_eq!(after, before);
            }
        }

        let twice = apply(&once, Action::Toggle { id: target.id }).resolve(&once);
        prop_assert_eq!(twice, list);
    }

    #[test]
    fn remove_existing_drops_exactly_that_id(list in list_strategy(), pick in any::<Index>()) {
        prop_assume!(!list.is_empty());
        let id = pick.get(list.items()).id;

        let next = apply(&list, Action::Remove { id }).resolve(&list);
        prop_assert_eq!(next.len(), list.len() - 1);
        prop_assert!(!next.contains_id(id));
    }

    #[test]
    fn remove_or_toggle_missing_id_is_unchanged(list in list_strategy(), id in any::<i64>()) {
        prop_assume!(!list.contains_id(id));
        prop_assert_eq!(apply(&list, Action::Remove { id }), Transition::Unchanged);
        prop_assert_eq!(apply(&list, Action::Toggle { id }), Transition::Unchanged);
    }
}
