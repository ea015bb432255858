//! Multi-select list state for item views.
//!
//! This crate provides [`MultiSelectModel`], a selection-state controller for
//! list UIs that need multi-select with a substring filter. The model owns no
//! rendering: a host view renders [`filtered_items`](MultiSelectModel::filtered_items)
//! and [`selected_items`](MultiSelectModel::selected_items), calls the mutators
//! in response to user input, and observes changes through the model's
//! [`selection_changed`](MultiSelectModel::selection_changed) signal.
//!
//! # Core Types
//!
//! - [`MultiSelectModel`]: selection + filter state over a fixed item list
//! - [`SelectionItem`]: trait items implement to expose identity and label
//! - [`ListHandle`]: capability handed in by the host's list view, refreshed
//!   after every selection mutation
//! - [`LabelFilter`]: the case-sensitive substring filter over item labels
//!
//! # Example
//!
//! ```
//! use multiselect::MultiSelectModel;
//!
//! let mut model = MultiSelectModel::new(vec![
//!     "Apple".to_string(),
//!     "Banana".to_string(),
//!     "Cherry".to_string(),
//! ]);
//!
//! // Observe selection changes
//! model.selection_changed.connect(|selection| {
//!     println!("Selection is now: {:?}", selection);
//! });
//!
//! // Toggle a single item
//! model.select_item("Banana".to_string());
//! assert_eq!(model.selected_items(), vec!["Banana".to_string()]);
//!
//! // Narrow the visible list; selection is untouched
//! model.filter_items("an");
//! assert_eq!(model.filtered_items(), vec!["Banana".to_string()]);
//! assert_eq!(model.selected_count(), 1);
//! ```
//!
//! # Controlled Selection
//!
//! A host that owns the selection itself can seed the model via
//! [`MultiSelectModel::with_selected_items`] and push later snapshots through
//! [`MultiSelectModel::sync_selected_items`]. Resynchronization is gated on
//! reference equality of the supplied `Arc`, so handing the same snapshot back
//! is a no-op.

mod filter;
mod multi_select;
mod selection;
mod traits;

pub use filter::LabelFilter;
pub use multi_select::MultiSelectModel;
pub use selection::{id_set, resync, toggle_all, ResyncAction};
pub use traits::{ListHandle, SelectionItem};

// Re-export the signal types hosts interact with through `selection_changed`.
pub use multiselect_core::{ConnectionGuard, ConnectionId, Signal};
