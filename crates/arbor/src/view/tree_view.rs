//! Tree view state.
//!
//! [`TreeView`] pairs a [`TreeStore`] with a [`Selection`] and the
//! [`ViewOptions`] a rendering shim needs. Helper calls such as
//! "select by name" and "remove selected" are expressed as store operations.
//!
//! # Example
//!
//! ```
//! use arbor::view::TreeView;
//!
//! let mut view = TreeView::new();
//! view.store_mut().add_item("Dog", Some("Animals"));
//!
//! view.select(0, "Dog");
//! assert_eq!(view.selected_names(), ["Dog"]);
//!
//! view.remove_selected();
//! assert_eq!(view.store().len(), 1);
//! ```

use arbor_core::logging::targets;
use arbor_core::{HeaderSchema, NodeId, TreeStore};

use crate::config::{HeaderConfig, ViewOptions};
use crate::error::Result;
use crate::view::selection::{Selection, SelectionMode};

/// Non-visual state of a tree widget.
#[derive(Debug, Clone, Default)]
pub struct TreeView {
    store: TreeStore,
    selection: Selection,
    options: ViewOptions,
}

impl TreeView {
    /// Creates an empty view with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty view configured from `options`.
    pub fn from_options(options: ViewOptions) -> Result<Self> {
        let mut store = TreeStore::new();
        let schema = options.schema();
        if !schema.is_empty() {
            store.set_headers(schema)?;
        }
        store.set_sort_on_insert(options.sort_on_insert);
        store.set_input_policy(options.input_policy.into());

        Ok(Self {
            store,
            selection: Selection::with_mode(options.selection_mode),
            options,
        })
    }

    /// The underlying store.
    pub fn store(&self) -> &TreeStore {
        &self.store
    }

    /// Mutable access to the underlying store.
    ///
    /// After removing nodes directly, call [`sync_selection`](Self::sync_selection).
    pub fn store_mut(&mut self) -> &mut TreeStore {
        &mut self.store
    }

    /// The selection state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Mutable access to the selection state.
    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// The view options.
    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// Declares the column headers.
    pub fn set_headers(&mut self, schema: HeaderSchema) -> Result<()> {
        self.store.set_headers(schema.clone())?;
        self.options.headers = schema
            .iter()
            .map(|h| HeaderConfig {
                name: h.name.clone(),
                width: h.width,
            })
            .collect();
        Ok(())
    }

    /// Switches to extended (multi-item) selection.
    pub fn set_multi_selection(&mut self) {
        self.set_selection_mode(SelectionMode::Extended);
    }

    /// Changes the selection mode.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.options.selection_mode = mode;
        self.selection.set_mode(mode);
    }

    /// Keeps every row at a fixed height.
    pub fn set_fixed_row_height(&mut self, height: u32) {
        self.options.fixed_row_height = Some(height);
    }

    /// Hides the header row.
    pub fn hide_header(&mut self) {
        self.options.header_visible = false;
    }

    /// Enables or disables sorting by the first column.
    pub fn set_sorting_enabled(&mut self, enabled: bool) {
        self.options.sort_on_insert = enabled;
        self.store.set_sort_on_insert(enabled);
    }

    /// Makes the first node whose `column` equals `name` current.
    ///
    /// Does nothing when no node matches. Returns the node made current.
    pub fn select(&mut self, column: usize, name: &str) -> Option<NodeId> {
        let id = self.store.get_or_create(column, name, None, false)?;
        self.selection.set_current(id);
        Some(id)
    }

    /// Column-0 texts of the selected nodes, in selection order.
    pub fn selected_names(&self) -> Vec<&str> {
        self.selection
            .selected()
            .iter()
            .filter_map(|&id| self.store.text(id, 0))
            .collect()
    }

    /// Removes every selected node together with its subtree.
    ///
    /// Returns the number of nodes destroyed.
    pub fn remove_selected(&mut self) -> usize {
        let selected = self.selection.selected().to_vec();
        let removed = self.store.remove(selected);
        self.selection.clear();
        tracing::debug!(target: targets::VIEW, removed, "removed selected nodes");
        removed
    }

    /// Drops selection entries that refer to removed nodes.
    pub fn sync_selection(&mut self) {
        self.selection.retain_live(&self.store);
    }

    /// Removes all nodes and clears the selection.
    pub fn clear(&mut self) {
        self.store.clear();
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_missing_is_noop() {
        let mut view = TreeView::new();
        view.store_mut().add_root_item("present");
        assert_eq!(view.select(0, "absent"), None);
        assert!(view.selection().is_empty());
        assert!(view.store().find_top_level("absent").is_none());
    }

    #[test]
    fn test_remove_selected_cascades() {
        let mut view = TreeView::new();
        view.set_multi_selection();
        view.store_mut().add_item("Puppy", Some("Dog"));
        view.store_mut().add_item("Cat", None);
        view.store_mut().add_item("Cow", None);

        view.select(0, "Dog");
        view.select(0, "Cat");
        assert_eq!(view.selected_names(), ["Dog", "Cat"]);

        assert_eq!(view.remove_selected(), 3);
        assert!(view.selection().is_empty());
        assert_eq!(view.store().len(), 1);
    }

    #[test]
    fn test_from_options() {
        let options = ViewOptions {
            sort_on_insert: true,
            selection_mode: SelectionMode::Extended,
            ..ViewOptions::default()
        }
        .with_headers([("Name", 200), ("Type", 60)]);

        let mut view = TreeView::from_options(options).unwrap();
        assert_eq!(view.store().column_count(), 2);
        assert_eq!(view.store().header_index("Type"), Some(1));
        assert_eq!(view.selection().mode(), SelectionMode::Extended);

        view.store_mut().add_items(["b", "a"]);
        let first = view.store().top_level()[0];
        assert_eq!(view.store().text(first, 0), Some("a"));
    }

    #[test]
    fn test_presentation_options() {
        let mut view = TreeView::new();
        view.hide_header();
        view.set_fixed_row_height(18);
        assert!(!view.options().header_visible);
        assert_eq!(view.options().fixed_row_height, Some(18));
    }

    #[test]
    fn test_sync_selection_after_direct_removal() {
        let mut view = TreeView::new();
        let a = view.store_mut().add_root_item("a");
        view.select(0, "a");
        view.store_mut().remove([a]);
        view.sync_selection();
        assert!(view.selection().is_empty());
        assert_eq!(view.selection().current(), None);
    }
}
