//! Multi-select model over a fixed item list.
//!
//! This module provides [`MultiSelectModel`], which owns the selection and
//! filter state for a multi-select list view. The host renders the two
//! derived lists (`filtered_items`, `selected_items`), drives the model
//! through its mutators, and hears about selection changes through the
//! `selection_changed` signal and the attached [`ListHandle`].
//!
//! # Example
//!
//! ```
//! use multiselect::MultiSelectModel;
//!
//! let mut model = MultiSelectModel::new(vec![
//!     "Red".to_string(),
//!     "Green".to_string(),
//!     "Blue".to_string(),
//! ]);
//!
//! model.select_item("Green".to_string());
//! assert!(model.is_selected(&"Green".to_string()));
//!
//! model.filter_items("e");
//! assert_eq!(
//!     model.filtered_items(),
//!     vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()]
//! );
//!
//! model.filter_items("ee");
//! assert_eq!(model.filtered_items(), vec!["Green".to_string()]);
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use multiselect_core::Signal;

use crate::filter::LabelFilter;
use crate::selection::{id_set, resync, toggle_all, ResyncAction};
use crate::traits::{ListHandle, SelectionItem};

/// Selection and filter state for a multi-select list.
///
/// The item list is fixed at construction; the model tracks which identities
/// are selected and which rows pass the label filter, and materializes both
/// as owned item sequences on demand. Selections materialize in ascending
/// identity order regardless of the order items were selected in.
///
/// Every selection mutation emits `selection_changed` with the new selection
/// and then refreshes the attached list handle. Filtering is a view concern:
/// it changes `filtered_items` only and notifies nobody.
///
/// # Signals
///
/// - `selection_changed`: Emitted after every selection mutation with the
///   newly materialized selection, including mutations that leave the
///   selection value unchanged (an explicit `clear_all` on an empty
///   selection still notifies).
///
/// # Controlled Selection
///
/// A host that owns the selection supplies `Arc` snapshots: the constructor
/// [`with_selected_items`](Self::with_selected_items) seeds from one, and
/// [`sync_selected_items`](Self::sync_selected_items) adopts later ones.
/// Adoption is gated on `Arc` reference equality and never notifies; the
/// change came from the host, so echoing it back would be redundant.
pub struct MultiSelectModel<T: SelectionItem> {
    /// The full item list, fixed at construction.
    items: Vec<T>,

    /// Identities of the currently selected items.
    selected: BTreeSet<T::Id>,

    /// The active label filter.
    filter: LabelFilter,

    /// Rows of `items` passing the filter, in list order.
    visible_rows: Vec<usize>,

    /// Last external selection snapshot adopted from the host.
    external: Option<Arc<Vec<T>>>,

    /// The host's list view, refreshed after every selection mutation.
    list: Option<Box<dyn ListHandle>>,

    /// Emitted with the new selection after every selection mutation.
    pub selection_changed: Signal<Vec<T>>,
}

impl<T: SelectionItem + 'static> Default for MultiSelectModel<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: SelectionItem + 'static> MultiSelectModel<T> {
    /// Creates a model over `items` with nothing selected and no filter.
    pub fn new(items: Vec<T>) -> Self {
        let filter = LabelFilter::new();
        let visible_rows = filter.visible_rows(&items);
        Self {
            items,
            selected: BTreeSet::new(),
            filter,
            visible_rows,
            external: None,
            list: None,
            selection_changed: Signal::new(),
        }
    }

    /// Creates a model with no items.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Creates a model whose selection is seeded from an external snapshot.
    ///
    /// The snapshot's identities become the initial selection and the model
    /// starts out controlled: the `Arc` is remembered so a later
    /// [`sync_selected_items`](Self::sync_selected_items) with the same
    /// reference is recognized as "no change".
    pub fn with_selected_items(items: Vec<T>, selected_items: Arc<Vec<T>>) -> Self {
        let mut model = Self::new(items);
        model.selected = id_set(&selected_items);
        model.external = Some(selected_items);
        model
    }

    // =========================================================================
    // Items and Filtering
    // =========================================================================

    /// Returns the number of items in the model.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the model has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the full item list.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the current filter text.
    pub fn filter_text(&self) -> &str {
        self.filter.pattern()
    }

    /// Materializes the items passing the current filter.
    ///
    /// The result is a subsequence of [`items`](Self::items): original order,
    /// exactly the items whose label contains the filter text. With no filter
    /// set it equals the full list.
    pub fn filtered_items(&self) -> Vec<T> {
        self.visible_rows
            .iter()
            .map(|&row| self.items[row].clone())
            .collect()
    }

    /// Replaces the filter text and recomputes the visible rows.
    ///
    /// Filtering notifies nobody: `selection_changed` stays silent and the
    /// list handle is not refreshed. The selection is untouched, even for
    /// selected items the new filter hides.
    pub fn filter_items(&mut self, text: impl Into<String>) {
        self.filter.set_pattern(text);
        self.rebuild_visible_rows();
    }

    /// Clears the filter, making every item visible again.
    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.rebuild_visible_rows();
    }

    // =========================================================================
    // Selection Queries
    // =========================================================================

    /// Checks if an identity is currently selected.
    pub fn is_selected(&self, id: &T::Id) -> bool {
        self.selected.contains(id)
    }

    /// Returns `true` if any identity is selected.
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Returns the number of selected identities.
    ///
    /// This counts identities, not materialized items: a stray identity with
    /// no matching item counts here but never appears in
    /// [`selected_items`](Self::selected_items).
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Materializes the current selection as items.
    ///
    /// Contains exactly the items from [`items`](Self::items) whose identity
    /// is selected, in ascending identity order. Items sharing an identity
    /// all materialize, keeping their relative list order.
    pub fn selected_items(&self) -> Vec<T> {
        let mut selected: Vec<T> = self
            .items
            .iter()
            .filter(|item| self.selected.contains(&item.id()))
            .cloned()
            .collect();
        selected.sort_by(|a, b| a.id().cmp(&b.id()));
        selected
    }

    // =========================================================================
    // Selection Operations
    // =========================================================================

    /// Toggles between "everything selected" and "nothing selected".
    ///
    /// If the selection covers exactly the identities of all items it is
    /// cleared; otherwise it becomes the full identity set. Either way the
    /// change is notified, so two calls in a row produce two notifications
    /// and end on an empty selection.
    pub fn select_all(&mut self) {
        self.selected = toggle_all(&self.items, &self.selected);
        self.notify_selection_changed();
    }

    /// Toggles a single identity's membership in the selection.
    ///
    /// Identities are not validated: toggling an identity with no matching
    /// item grows the selection set without changing
    /// [`selected_items`](Self::selected_items), and a second toggle removes
    /// it again. Notifies after every call.
    pub fn select_item(&mut self, id: T::Id) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        self.notify_selection_changed();
    }

    /// Unconditionally empties the selection.
    ///
    /// Notifies even when the selection was already empty: every explicit
    /// clear counts as a mutation for notification purposes.
    pub fn clear_all(&mut self) {
        self.selected.clear();
        self.notify_selection_changed();
    }

    // =========================================================================
    // External Synchronization
    // =========================================================================

    /// Returns `true` if the model has adopted an external selection snapshot.
    pub fn is_controlled(&self) -> bool {
        self.external.is_some()
    }

    /// Returns the last external snapshot the model adopted, if any.
    pub fn external_selection(&self) -> Option<&Arc<Vec<T>>> {
        self.external.as_ref()
    }

    /// Reconciles the selection with an external snapshot from the host.
    ///
    /// If `selected_items` is the same `Arc` as the previously adopted
    /// snapshot nothing happens and `false` is returned. Otherwise the
    /// snapshot's identities replace the selection wholesale, the reference
    /// is remembered, and `true` is returned. Adoption never emits
    /// `selection_changed` and never refreshes the list handle.
    pub fn sync_selected_items(&mut self, selected_items: Arc<Vec<T>>) -> bool {
        match resync(self.external.as_ref(), &selected_items) {
            ResyncAction::Keep => false,
            ResyncAction::Replace => {
                self.selected = id_set(&selected_items);
                self.external = Some(selected_items);
                true
            }
        }
    }

    // =========================================================================
    // List Handle
    // =========================================================================

    /// Attaches the host's list view.
    ///
    /// Replaces any previously attached handle. Attaching has no side
    /// effects; the handle is only reached through its `update` after
    /// selection mutations.
    pub fn set_list<H: ListHandle + 'static>(&mut self, handle: H) {
        self.list = Some(Box::new(handle));
    }

    /// Detaches the list view, if any.
    pub fn clear_list(&mut self) {
        self.list = None;
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn notify_selection_changed(&self) {
        self.selection_changed.emit(self.selected_items());
        if let Some(list) = &self.list {
            list.update();
        }
    }

    fn rebuild_visible_rows(&mut self) {
        self.visible_rows = self.filter.visible_rows(&self.items);
    }
}

// Ensure MultiSelectModel is Send + Sync
static_assertions::assert_impl_all!(MultiSelectModel<String>: Send, Sync);
