//! Substring filter over item labels.
//!
//! [`LabelFilter`] owns the current filter text and decides which rows of an
//! item list are visible. The match is a case-sensitive substring test on
//! each item's `label`; an empty pattern passes everything.

use crate::traits::SelectionItem;

/// The label filter applied to an item list.
///
/// The filter never reorders rows: [`visible_rows`](Self::visible_rows)
/// returns the indices of passing items in their original order, so the
/// filtered view is always a subsequence of the source list.
#[derive(Debug, Clone, Default)]
pub struct LabelFilter {
    pattern: String,
}

impl LabelFilter {
    /// Creates a filter with an empty pattern (all rows pass).
    pub fn new() -> Self {
        Self {
            pattern: String::new(),
        }
    }

    /// Returns the current filter pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Replaces the filter pattern.
    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    /// Clears the pattern, making all rows pass again.
    pub fn clear(&mut self) {
        self.pattern.clear();
    }

    /// Returns `true` if no pattern is set.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Checks a single label against the pattern.
    ///
    /// An empty pattern matches every label; otherwise the label must contain
    /// the pattern as a case-sensitive substring.
    pub fn matches(&self, label: &str) -> bool {
        self.pattern.is_empty() || label.contains(&self.pattern)
    }

    /// Collects the rows of `items` that pass the filter, in list order.
    pub fn visible_rows<T: SelectionItem>(&self, items: &[T]) -> Vec<usize> {
        (0..items.len())
            .filter(|&row| self.matches(items[row].label()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Vec<String> {
        vec![
            "Apple".to_string(),
            "Banana".to_string(),
            "Cherry".to_string(),
            "apple pie".to_string(),
        ]
    }

    #[test]
    fn test_empty_pattern_passes_all_rows() {
        let filter = LabelFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.visible_rows(&fruit()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_substring_match() {
        let mut filter = LabelFilter::new();
        filter.set_pattern("an");

        assert!(filter.matches("Banana"));
        assert!(!filter.matches("Apple"));
        assert_eq!(filter.visible_rows(&fruit()), vec![1]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let mut filter = LabelFilter::new();
        filter.set_pattern("App");

        // "apple pie" stays out: the match never folds case
        assert_eq!(filter.visible_rows(&fruit()), vec![0]);

        filter.set_pattern("app");
        assert_eq!(filter.visible_rows(&fruit()), vec![3]);
    }

    #[test]
    fn test_no_matches_yields_empty_mapping() {
        let mut filter = LabelFilter::new();
        filter.set_pattern("zzz");
        assert_eq!(filter.visible_rows(&fruit()), Vec::<usize>::new());
    }

    #[test]
    fn test_clear_restores_all_rows() {
        let mut filter = LabelFilter::new();
        filter.set_pattern("Cherry");
        assert_eq!(filter.visible_rows(&fruit()), vec![2]);

        filter.clear();
        assert!(filter.is_empty());
        assert_eq!(filter.visible_rows(&fruit()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_rows_keep_list_order() {
        let mut filter = LabelFilter::new();
        filter.set_pattern("e");

        // Apple, Cherry, apple pie contain "e"; Banana does not
        assert_eq!(filter.visible_rows(&fruit()), vec![0, 2, 3]);
    }
}
