//! Selection-set algebra.
//!
//! The selection is logically a set of item identities. The functions here
//! are the pure transitions over that set; [`MultiSelectModel`](crate::MultiSelectModel)
//! wires them to state, signals, and the list handle.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::traits::SelectionItem;

/// Collects the identity set of an item slice.
pub fn id_set<T: SelectionItem>(items: &[T]) -> BTreeSet<T::Id> {
    items.iter().map(|item| item.id()).collect()
}

/// The all-or-nothing toggle behind "select all".
///
/// If `selected` already covers exactly the identities of `items`, the
/// result is the empty selection; otherwise it is the full identity set.
/// Calling it twice therefore always returns to empty. Equality is set
/// equality, so a selection holding stray identities (not present in
/// `items`) toggles to the full set rather than clearing.
pub fn toggle_all<T: SelectionItem>(items: &[T], selected: &BTreeSet<T::Id>) -> BTreeSet<T::Id> {
    let all = id_set(items);
    if *selected == all {
        BTreeSet::new()
    } else {
        all
    }
}

/// Outcome of comparing an incoming external snapshot against the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResyncAction {
    /// Same snapshot reference as last time; internal state stands.
    Keep,
    /// A new snapshot reference; internal selection must be rebuilt from it.
    Replace,
}

/// Decides whether an external selection snapshot must be adopted.
///
/// The gate is reference equality of the `Arc`, not value equality: a host
/// that re-supplies the same allocation is saying "nothing changed", even if
/// an equal-valued list arrives under a new reference. With no previously
/// seen snapshot the incoming one is always adopted.
pub fn resync<T>(last_seen: Option<&Arc<Vec<T>>>, incoming: &Arc<Vec<T>>) -> ResyncAction {
    match last_seen {
        Some(previous) if Arc::ptr_eq(previous, incoming) => ResyncAction::Keep,
        _ => ResyncAction::Replace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: u64,
        label: String,
    }

    impl Row {
        fn new(id: u64, label: &str) -> Self {
            Self {
                id,
                label: label.into(),
            }
        }
    }

    impl SelectionItem for Row {
        type Id = u64;

        fn id(&self) -> u64 {
            self.id
        }

        fn label(&self) -> &str {
            &self.label
        }
    }

    fn rows() -> Vec<Row> {
        vec![Row::new(0, "a"), Row::new(1, "b"), Row::new(2, "c")]
    }

    #[test]
    fn test_id_set_collects_identities() {
        let ids = id_set(&rows());
        assert_eq!(ids, BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn test_id_set_collapses_duplicates() {
        let items = vec![Row::new(7, "x"), Row::new(7, "y")];
        assert_eq!(id_set(&items), BTreeSet::from([7]));
    }

    #[test]
    fn test_toggle_all_from_empty_selects_everything() {
        let next = toggle_all(&rows(), &BTreeSet::new());
        assert_eq!(next, BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn test_toggle_all_from_partial_selects_everything() {
        let next = toggle_all(&rows(), &BTreeSet::from([1]));
        assert_eq!(next, BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn test_toggle_all_from_full_clears() {
        let next = toggle_all(&rows(), &BTreeSet::from([0, 1, 2]));
        assert_eq!(next, BTreeSet::new());
    }

    #[test]
    fn test_toggle_all_twice_returns_to_empty() {
        let items = rows();
        let once = toggle_all(&items, &BTreeSet::new());
        let twice = toggle_all(&items, &once);
        assert_eq!(twice, BTreeSet::new());
    }

    #[test]
    fn test_toggle_all_with_stray_identity_selects_everything() {
        // {0, 1, 2, 99} is not exactly the item set, so the toggle selects
        let next = toggle_all(&rows(), &BTreeSet::from([0, 1, 2, 99]));
        assert_eq!(next, BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn test_toggle_all_on_empty_items_clears() {
        let items: Vec<Row> = Vec::new();
        assert_eq!(toggle_all(&items, &BTreeSet::new()), BTreeSet::new());
        assert_eq!(toggle_all(&items, &BTreeSet::from([5])), BTreeSet::new());
    }

    #[test]
    fn test_resync_adopts_first_snapshot() {
        let incoming = Arc::new(rows());
        assert_eq!(resync(None, &incoming), ResyncAction::Replace);
    }

    #[test]
    fn test_resync_keeps_on_same_reference() {
        let snapshot = Arc::new(rows());
        let same = snapshot.clone();
        assert_eq!(resync(Some(&snapshot), &same), ResyncAction::Keep);
    }

    #[test]
    fn test_resync_replaces_on_new_reference_even_if_equal() {
        let first = Arc::new(vec![Row::new(2, "c")]);
        let second = Arc::new(vec![Row::new(2, "c")]);
        assert_eq!(resync(Some(&first), &second), ResyncAction::Replace);
    }
}
