//! Selection state for item views.
//!
//! [`Selection`] tracks which nodes of a [`TreeStore`] are selected and which
//! one is current (has keyboard focus). It stores plain [`NodeId`]s, so after
//! the store is mutated, [`Selection::retain_live`] drops handles to nodes
//! that no longer exist.

use arbor_core::{NodeId, TreeStore};
use serde::{Deserialize, Serialize};

/// Selection behavior mode for views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// No items can be selected.
    NoSelection,
    /// Only one item can be selected at a time (default).
    #[default]
    Single,
    /// Each selection request toggles membership without clearing others.
    Multi,
    /// Multiple items, accumulated until explicitly cleared.
    Extended,
}

impl SelectionMode {
    /// Whether more than one item may be selected.
    pub fn allows_multiple(self) -> bool {
        matches!(self, Self::Multi | Self::Extended)
    }
}

/// Selected nodes plus the current node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    mode: SelectionMode,
    current: Option<NodeId>,
    selected: Vec<NodeId>,
}

impl Selection {
    /// Creates an empty selection in single-selection mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty selection with the given mode.
    pub fn with_mode(mode: SelectionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// The selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Changes the selection mode.
    ///
    /// Narrowing to single selection keeps only the most recent item;
    /// switching to no selection clears everything.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        match mode {
            SelectionMode::NoSelection => self.clear(),
            SelectionMode::Single => {
                if let Some(last) = self.selected.pop() {
                    self.selected = vec![last];
                }
            }
            SelectionMode::Multi | SelectionMode::Extended => {}
        }
    }

    /// The current node, if any.
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Makes `id` current and selects it.
    pub fn set_current(&mut self, id: NodeId) {
        if self.mode == SelectionMode::NoSelection {
            return;
        }
        self.current = Some(id);
        if !self.is_selected(id) {
            self.select(id);
        }
    }

    /// Selects `id` according to the selection mode.
    ///
    /// Single mode replaces the previous selection, multi mode toggles, and
    /// extended mode adds.
    pub fn select(&mut self, id: NodeId) {
        match self.mode {
            SelectionMode::NoSelection => {}
            SelectionMode::Single => self.selected = vec![id],
            SelectionMode::Multi => {
                if self.is_selected(id) {
                    self.deselect(id);
                } else {
                    self.selected.push(id);
                }
            }
            SelectionMode::Extended => {
                if !self.is_selected(id) {
                    self.selected.push(id);
                }
            }
        }
    }

    /// Removes `id` from the selection.
    pub fn deselect(&mut self, id: NodeId) {
        self.selected.retain(|&selected| selected != id);
    }

    /// Returns whether `id` is selected.
    pub fn is_selected(&self, id: NodeId) -> bool {
        self.selected.contains(&id)
    }

    /// Selected nodes in the order they were selected.
    pub fn selected(&self) -> &[NodeId] {
        &self.selected
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clears the selection and the current node.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.current = None;
    }

    /// Drops handles to nodes that no longer exist in `store`.
    pub fn retain_live(&mut self, store: &TreeStore) {
        self.selected.retain(|&id| store.contains(id));
        if self.current.is_some_and(|id| !store.contains(id)) {
            self.current = None;
        }
    }
}
