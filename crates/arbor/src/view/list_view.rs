//! Flat, sorted list view state.
//!
//! [`ListView`] keeps a one-column [`TreeStore`] with sort-on-insert enabled
//! and only top-level nodes, which is the data a list widget shows.

use arbor_core::logging::targets;
use arbor_core::{MatchFlags, MatchMode, NodeId, TreeStore};

use crate::error::Result;
use crate::view::selection::{Selection, SelectionMode};

/// Non-visual state of a sorted list widget.
#[derive(Debug, Clone)]
pub struct ListView {
    store: TreeStore,
    selection: Selection,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    /// Creates an empty list with sorting enabled.
    pub fn new() -> Self {
        let mut store = TreeStore::new();
        store.set_sort_on_insert(true);
        Self {
            store,
            selection: Selection::new(),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &TreeStore {
        &self.store
    }

    /// The selection state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Number of items.
    pub fn count(&self) -> usize {
        self.store.top_level().len()
    }

    /// Inserts one item at its sorted position. Duplicates are allowed.
    pub fn add_item(&mut self, name: &str) -> NodeId {
        self.store.add_root_item(name)
    }

    /// Merges `items` into the list, dropping duplicates.
    ///
    /// The list is rebuilt, so the selection is cleared.
    pub fn add_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.store.add_unique_sorted(items);
        self.selection.clear();
    }

    /// Item texts in display order.
    pub fn name_list(&self) -> Vec<&str> {
        self.texts(self.store.top_level())
    }

    /// Texts of the selected items, in selection order.
    pub fn selected_name_list(&self) -> Vec<&str> {
        self.texts(self.selection.selected())
    }

    /// Items whose text equals `value` exactly (case-sensitive).
    pub fn find_items(&self, value: &str) -> Vec<NodeId> {
        self.store.find_by_text(0, value, MatchMode::Exact)
    }

    /// Returns whether an item with exactly this text exists.
    pub fn item_exists(&self, value: &str) -> bool {
        !self.find_items(value).is_empty()
    }

    /// Makes the first item containing `name` current.
    ///
    /// Does nothing when no item matches.
    pub fn select(&mut self, name: &str) -> Option<NodeId> {
        let id = self
            .store
            .find_by_text_with(0, name, MatchFlags::contains())
            .into_iter()
            .next()?;
        self.selection.set_current(id);
        Some(id)
    }

    /// Adds `id` to the selection according to the selection mode.
    pub fn select_item(&mut self, id: NodeId) {
        if self.store.contains(id) {
            self.selection.select(id);
        }
    }

    /// Removes the selected items. Returns how many were removed.
    pub fn remove_selected(&mut self) -> usize {
        let selected = self.selection.selected().to_vec();
        let removed = self.store.remove(selected);
        self.selection.clear();
        tracing::debug!(target: targets::VIEW, removed, "removed selected list items");
        removed
    }

    /// Marks every current item as editable.
    pub fn set_editable(&mut self) -> Result<()> {
        self.store.set_all_editable(0, true)?;
        Ok(())
    }

    /// Switches to extended (multi-item) selection.
    pub fn set_multi_selection(&mut self) {
        self.selection.set_mode(SelectionMode::Extended);
    }

    /// Removes all items.
    pub fn clear(&mut self) {
        self.store.clear();
        self.selection.clear();
    }

    fn texts(&self, ids: &[NodeId]) -> Vec<&str> {
        ids.iter().filter_map(|&id| self.store.text(id, 0)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_items_sorted_unique() {
        let mut list = ListView::new();
        list.add_items(["pear", "apple"]);
        list.add_items(["fig", "apple"]);
        assert_eq!(list.name_list(), ["apple", "fig", "pear"]);
    }

    #[test]
    fn test_add_item_keeps_sorted() {
        let mut list = ListView::new();
        list.add_items(["b", "d"]);
        list.add_item("c");
        assert_eq!(list.name_list(), ["b", "c", "d"]);
    }

    #[test]
    fn test_find_is_case_sensitive_exact() {
        let mut list = ListView::new();
        list.add_items(["Apple", "apple pie"]);
        assert!(list.item_exists("Apple"));
        assert!(!list.item_exists("apple"));
        assert_eq!(list.find_items("apple pie").len(), 1);
    }

    #[test]
    fn test_select_first_substring_match() {
        let mut list = ListView::new();
        list.add_items(["shot_020", "shot_010", "asset"]);
        let id = list.select("shot").unwrap();
        assert_eq!(list.store().text(id, 0), Some("shot_010"));
        assert_eq!(list.selected_name_list(), ["shot_010"]);
        assert_eq!(list.select("missing"), None);
    }

    #[test]
    fn test_remove_selected_multi() {
        let mut list = ListView::new();
        list.set_multi_selection();
        list.add_items(["a", "b", "c"]);
        let ids = list.store().top_level().to_vec();
        list.select_item(ids[0]);
        list.select_item(ids[2]);

        assert_eq!(list.remove_selected(), 2);
        assert_eq!(list.name_list(), ["b"]);
        assert!(list.selected_name_list().is_empty());
    }

    #[test]
    fn test_set_editable() {
        let mut list = ListView::new();
        list.add_items(["a"]);
        list.set_editable().unwrap();
        let id = list.store().top_level()[0];
        assert!(list.store().is_editable(id, 0));
    }
}
