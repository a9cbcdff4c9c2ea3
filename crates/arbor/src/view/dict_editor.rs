//! Key/value editor state.
//!
//! [`DictEditor`] is a two-column [`TreeView`] (`Key`, `Value`) kept sorted by
//! key, where every cell is editable. It reads and writes its contents as a
//! flat string mapping and offers a small context menu.
//!
//! # Example
//!
//! ```
//! use arbor::view::{ContextAction, DictEditor};
//!
//! let mut editor = DictEditor::new()?;
//! editor.set_value([("size", "10"), ("color", "red")])?;
//! editor.trigger(ContextAction::AddNew)?;
//!
//! let value = editor.value()?;
//! assert_eq!(value["color"], "red");
//! assert_eq!(value["key"], "value");
//! # Ok::<(), arbor::Error>(())
//! ```

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use arbor_core::{NodeId, StoreError, TreeStore};
use serde_json::Value;

use crate::config::ViewOptions;
use crate::error::Result;
use crate::view::tree_view::TreeView;

/// Default header layout: key column 160 wide, value column stretches.
pub const DICT_HEADERS: [(&str, u32); 2] = [("Key", 160), ("Value", 0)];

const KEY_COLUMN: usize = 0;
const VALUE_COLUMN: usize = 1;

/// Actions offered by the editor's context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextAction {
    /// Insert a placeholder `key` / `value` entry.
    AddNew,
}

impl ContextAction {
    /// Menu label for the action.
    pub fn label(self) -> &'static str {
        match self {
            Self::AddNew => "Add new",
        }
    }
}

impl Display for ContextAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Editable key/value table.
#[derive(Debug, Clone)]
pub struct DictEditor {
    view: TreeView,
}

impl DictEditor {
    /// Creates an empty editor with the default headers.
    pub fn new() -> Result<Self> {
        let options = ViewOptions {
            sort_on_insert: true,
            alternating_row_colors: false,
            ..ViewOptions::default()
        }
        .with_headers(DICT_HEADERS);
        Self::from_options(options)
    }

    /// Creates an editor from custom options.
    ///
    /// Fails unless the options declare exactly two headers.
    pub fn from_options(options: ViewOptions) -> Result<Self> {
        let view = TreeView::from_options(options)?;
        let columns = view.store().column_count();
        if columns != DICT_HEADERS.len() {
            return Err(StoreError::invalid_schema(format!(
                "key/value editor needs 2 columns, got {columns}"
            ))
            .into());
        }
        Ok(Self { view })
    }

    /// The underlying view.
    pub fn view(&self) -> &TreeView {
        &self.view
    }

    /// Mutable access to the underlying view.
    pub fn view_mut(&mut self) -> &mut TreeView {
        &mut self.view
    }

    /// The underlying store.
    pub fn store(&self) -> &TreeStore {
        self.view.store()
    }

    /// Current contents as a key/value mapping.
    pub fn value(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.view.store().to_mapping()?)
    }

    /// Replaces the contents with `data`.
    pub fn set_value<I, K, V>(&mut self, data: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Display,
        V: Display,
    {
        self.view.selection_mut().clear();
        self.view.store_mut().from_mapping(data)?;
        self.mark_all_editable()
    }

    /// Replaces the contents from untyped JSON input.
    ///
    /// See [`TreeStore::from_json`] for how values and non-object input are
    /// handled.
    pub fn set_json(&mut self, data: &Value) -> Result<()> {
        self.view.selection_mut().clear();
        self.view.store_mut().from_json(data)?;
        self.mark_all_editable()
    }

    /// Adds one entry. A `None` value leaves the value cell empty.
    pub fn add_entry(&mut self, key: &str, value: Option<&str>) -> Result<NodeId> {
        let store = self.view.store_mut();
        let id = store.add_root_item(key);
        if let Some(value) = value {
            store.set_text(id, VALUE_COLUMN, value)?;
        }
        store.set_editable(id, KEY_COLUMN, true)?;
        store.set_editable(id, VALUE_COLUMN, true)?;
        Ok(id)
    }

    /// Actions to show in the context menu.
    pub fn context_actions(&self) -> &'static [ContextAction] {
        &[ContextAction::AddNew]
    }

    /// Performs a context-menu action. Returns the node it created.
    pub fn trigger(&mut self, action: ContextAction) -> Result<NodeId> {
        match action {
            ContextAction::AddNew => self.add_entry("key", Some("value")),
        }
    }

    fn mark_all_editable(&mut self) -> Result<()> {
        let store = self.view.store_mut();
        store.set_all_editable(KEY_COLUMN, true)?;
        store.set_all_editable(VALUE_COLUMN, true)?;
        Ok(())
    }
}
