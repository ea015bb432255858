//! Core traits for the multiselect model.
//!
//! These are the two seams between the state core and its host: items expose
//! identity and label through [`SelectionItem`], and the host's list view is
//! reached through [`ListHandle`].

/// Trait for items that can be managed by a
/// [`MultiSelectModel`](crate::MultiSelectModel).
///
/// Implement this trait for types that should be selectable and filterable.
/// The model clones items when materializing derived lists and signal
/// payloads, so implementors must be `Clone`.
///
/// # Example
///
/// ```
/// use multiselect::SelectionItem;
///
/// #[derive(Clone)]
/// struct Contact {
///     id: u64,
///     name: String,
/// }
///
/// impl SelectionItem for Contact {
///     type Id = u64;
///
///     fn id(&self) -> u64 {
///         self.id
///     }
///
///     fn label(&self) -> &str {
///         &self.name
///     }
/// }
/// ```
pub trait SelectionItem: Clone + Send + Sync {
    /// The item's identity type. Selection membership and the ascending order
    /// of materialized selections are both defined by this type's `Ord`.
    type Id: Ord + Clone + Send + Sync;

    /// Returns the stable identity of this item.
    fn id(&self) -> Self::Id;

    /// Returns the text the substring filter matches against.
    fn label(&self) -> &str;
}

/// Implement SelectionItem for String for convenience.
///
/// The string serves as both identity and label, which is enough for simple
/// string lists with distinct entries.
impl SelectionItem for String {
    type Id = String;

    fn id(&self) -> String {
        self.clone()
    }

    fn label(&self) -> &str {
        self
    }
}

/// Capability interface for the host's list view.
///
/// The model calls [`update`](Self::update) after every selection mutation so
/// the view can refresh. The handle is opaque to the model; what `update`
/// does internally (repaint, re-layout, recompute virtualization) is the
/// host's business.
pub trait ListHandle: Send + Sync {
    /// Refresh the view after a selection change.
    fn update(&self);
}

/// Implement ListHandle for plain closures for convenience.
impl<F: Fn() + Send + Sync> ListHandle for F {
    fn update(&self) {
        self();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_string_is_its_own_identity_and_label() {
        let item = "Apple".to_string();
        assert_eq!(item.id(), "Apple");
        assert_eq!(item.label(), "Apple");
    }

    #[test]
    fn test_closure_as_list_handle() {
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_clone = calls.clone();
        let handle = move || {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        };

        ListHandle::update(&handle);
        ListHandle::update(&handle);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
