//! The labeled tree store.
//!
//! [`TreeStore`] owns an ordered, multi-column tree of labeled nodes. Nodes
//! live in a [`SlotMap`] arena and are addressed by stable [`NodeId`] handles;
//! parent links are lookups only, ownership flows from the store's top-level
//! list down to the leaves.
//!
//! # Example
//!
//! ```
//! use arbor_core::{MatchMode, TreeStore};
//!
//! let mut store = TreeStore::new();
//! let animals = store.get_or_create(0, "Animals", None, true).unwrap();
//! let dog = store.get_or_create(0, "Dog", Some("Animals"), true).unwrap();
//!
//! assert_eq!(store.all_nodes(), vec![animals, dog]);
//! assert_eq!(store.parent(dog).unwrap(), Some(animals));
//! assert_eq!(store.find_by_text(0, "og", MatchMode::Contains), vec![dog]);
//! ```

use std::collections::BTreeSet;
use std::mem;

use slotmap::{SlotMap, new_key_type};

use crate::error::{Result, StoreError};
use crate::logging::targets;
use crate::schema::HeaderSchema;
use crate::search::{MatchFlags, MatchMode};

new_key_type! {
    /// A stable handle to a node in a [`TreeStore`].
    ///
    /// Handles stay valid while the node exists and become invalid once the
    /// node (or one of its ancestors) is removed or the store is cleared.
    pub struct NodeId;
}

/// How untyped input that has the wrong shape is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Reject with [`StoreError::InvalidArgument`].
    #[default]
    Strict,
    /// Log a warning, clear the store and carry on.
    Lenient,
}

/// Internal data stored in the arena for each node.
#[derive(Debug, Clone)]
struct NodeData {
    columns: Vec<String>,
    editable: Vec<bool>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    fn new(column_count: usize, name: &str, parent: Option<NodeId>) -> Self {
        let mut columns = vec![String::new(); column_count];
        columns[0] = name.to_string();
        Self {
            columns,
            editable: vec![false; column_count],
            parent,
            children: Vec::new(),
        }
    }

    fn name(&self) -> &str {
        &self.columns[0]
    }
}

/// An ordered, multi-column, mutable tree of labeled nodes.
///
/// Column 0 holds each node's name, which identity operations such as
/// [`get_or_create`](Self::get_or_create) and
/// [`find_top_level`](Self::find_top_level) compare against. Every node has
/// exactly [`column_count`](Self::column_count) columns.
///
/// The store is not internally synchronized. Wrap it in
/// [`SharedTreeStore`](crate::SharedTreeStore) to share it between threads.
#[derive(Debug, Clone, Default)]
pub struct TreeStore {
    nodes: SlotMap<NodeId, NodeData>,
    top_level: Vec<NodeId>,
    schema: HeaderSchema,
    sort_on_insert: bool,
    input_policy: InputPolicy,
}

impl TreeStore {
    /// Creates an empty store with one implicit unnamed column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given header schema.
    pub fn with_headers(schema: HeaderSchema) -> Result<Self> {
        let mut store = Self::new();
        store.set_headers(schema)?;
        Ok(store)
    }

    // =========================================================================
    // Schema
    // =========================================================================

    /// Declares the column count and order.
    ///
    /// Fails if `schema` is empty, or if nodes already exist and `schema`
    /// would change the column count.
    #[tracing::instrument(skip(self), target = "arbor_core::store", level = "trace")]
    pub fn set_headers(&mut self, schema: HeaderSchema) -> Result<()> {
        if schema.is_empty() {
            return Err(StoreError::invalid_schema("schema declares no columns"));
        }
        if !self.nodes.is_empty() && schema.len() != self.column_count() {
            return Err(StoreError::invalid_schema(format!(
                "store holds {} node(s) with {} column(s), schema declares {}",
                self.nodes.len(),
                self.column_count(),
                schema.len()
            )));
        }

        tracing::debug!(target: targets::STORE, %schema, "headers set");
        self.schema = schema;
        Ok(())
    }

    /// The declared header schema. Empty if none was set.
    pub fn headers(&self) -> &HeaderSchema {
        &self.schema
    }

    /// Number of columns every node carries. Never zero.
    pub fn column_count(&self) -> usize {
        self.schema.len().max(1)
    }

    /// Column index of the header with the given label.
    pub fn header_index(&self, name: &str) -> Option<usize> {
        self.schema.index_of(name)
    }

    /// Whether children are kept sorted by column 0.
    pub fn sort_on_insert(&self) -> bool {
        self.sort_on_insert
    }

    /// Enables or disables sort-on-insert.
    ///
    /// Enabling it sorts every existing child list by column 0 once; later
    /// insertions are placed at their sorted position.
    pub fn set_sort_on_insert(&mut self, enabled: bool) {
        if enabled && !self.sort_on_insert {
            self.sort_all();
        }
        self.sort_on_insert = enabled;
    }

    /// How [`from_json`](Self::from_json) treats non-object input.
    pub fn input_policy(&self) -> InputPolicy {
        self.input_policy
    }

    /// Sets the input policy.
    pub fn set_input_policy(&mut self, policy: InputPolicy) {
        self.input_policy = policy;
    }

    // =========================================================================
    // Node access
    // =========================================================================

    /// Total number of nodes in the store.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the store holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check if a node exists in the store.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Top-level nodes in stored order.
    pub fn top_level(&self) -> &[NodeId] {
        &self.top_level
    }

    /// Text of one column of a node.
    ///
    /// Returns `None` for a removed node or an out-of-range column.
    pub fn text(&self, id: NodeId, column: usize) -> Option<&str> {
        self.nodes
            .get(id)
            .and_then(|n| n.columns.get(column))
            .map(String::as_str)
    }

    /// All column texts of a node.
    pub fn texts(&self, id: NodeId) -> Result<&[String]> {
        self.nodes
            .get(id)
            .map(|n| n.columns.as_slice())
            .ok_or(StoreError::InvalidNodeId)
    }

    /// Sets the text of one column.
    ///
    /// With sort-on-insert enabled, renaming column 0 moves the node to its
    /// sorted position among its siblings.
    pub fn set_text(&mut self, id: NodeId, column: usize, text: impl Into<String>) -> Result<()> {
        self.check_column(column)?;
        let node = self.nodes.get_mut(id).ok_or(StoreError::InvalidNodeId)?;
        node.columns[column] = text.into();

        if column == 0 && self.sort_on_insert {
            let parent = node.parent;
            self.detach(id, parent);
            self.attach(id, parent);
        }
        Ok(())
    }

    /// Whether external editors may change a column of a node.
    pub fn is_editable(&self, id: NodeId, column: usize) -> bool {
        self.nodes
            .get(id)
            .and_then(|n| n.editable.get(column).copied())
            .unwrap_or(false)
    }

    /// Marks a column of a node as editable or read-only.
    pub fn set_editable(&mut self, id: NodeId, column: usize, editable: bool) -> Result<()> {
        self.check_column(column)?;
        let node = self.nodes.get_mut(id).ok_or(StoreError::InvalidNodeId)?;
        node.editable[column] = editable;
        Ok(())
    }

    /// Marks a column of every node as editable or read-only.
    pub fn set_all_editable(&mut self, column: usize, editable: bool) -> Result<()> {
        self.check_column(column)?;
        for node in self.nodes.values_mut() {
            node.editable[column] = editable;
        }
        Ok(())
    }

    /// Get the parent of a node. `None` for top-level nodes.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        self.nodes
            .get(id)
            .map(|n| n.parent)
            .ok_or(StoreError::InvalidNodeId)
    }

    /// Get the children of a node in stored order.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .ok_or(StoreError::InvalidNodeId)
    }

    /// Number of direct children of a node.
    pub fn child_count(&self, id: NodeId) -> Result<usize> {
        self.children(id).map(<[NodeId]>::len)
    }

    /// Distance from the top level. Top-level nodes have depth 0.
    pub fn depth(&self, id: NodeId) -> Result<usize> {
        let mut depth = 0;
        let mut current = self.parent(id)?;
        while let Some(parent_id) = current {
            depth += 1;
            current = self.nodes.get(parent_id).and_then(|n| n.parent);
        }
        Ok(depth)
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Creates a top-level node with `name` in column 0.
    ///
    /// No uniqueness is enforced; use [`get_or_create`](Self::get_or_create)
    /// for that.
    pub fn add_root_item(&mut self, name: &str) -> NodeId {
        self.insert_node(None, name)
    }

    /// Creates a node with `name` in column 0 under an existing node.
    pub fn add_child(&mut self, parent: NodeId, name: &str) -> Result<NodeId> {
        if !self.nodes.contains_key(parent) {
            return Err(StoreError::InvalidNodeId);
        }
        Ok(self.insert_node(Some(parent), name))
    }

    /// Always creates a new node, under the node named `parent_name` if given.
    ///
    /// The parent is resolved with `get_or_create(0, parent_name, None, true)`,
    /// so a missing parent is created at the top level first.
    pub fn add_item(&mut self, name: &str, parent_name: Option<&str>) -> NodeId {
        let parent = parent_name.and_then(|p| self.get_or_create(0, p, None, true));
        self.insert_node(parent, name)
    }

    /// Clears the store and adds each name as a top-level node.
    pub fn add_items<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clear();
        for name in names {
            self.insert_node(None, name.as_ref());
        }
    }

    /// Returns the first node, anywhere in the tree, whose `column` equals
    /// `name`; creates one if none exists and `create` is set.
    ///
    /// The lookup covers the whole tree, not just the children of
    /// `parent_name`: a node with the same name under any parent is returned
    /// as is. A created node carries `name` in column 0 and is attached under
    /// the node resolved by `get_or_create(0, parent_name, None, true)`, or at
    /// the top level when `parent_name` is `None`.
    ///
    /// Returns `None` only when nothing matched and `create` is false.
    pub fn get_or_create(
        &mut self,
        column: usize,
        name: &str,
        parent_name: Option<&str>,
        create: bool,
    ) -> Option<NodeId> {
        if let Some(found) = self.find_first(column, name) {
            return Some(found);
        }
        if !create {
            return None;
        }

        let parent = parent_name.and_then(|p| self.get_or_create(0, p, None, true));
        Some(self.insert_node(parent, name))
    }

    /// Merges `values` with the current top-level names, removes duplicates
    /// and rebuilds the store as a sorted flat list.
    pub fn add_unique_sorted<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: BTreeSet<String> = self
            .top_level
            .iter()
            .filter_map(|&id| self.nodes.get(id))
            .map(|n| n.name().to_string())
            .collect();
        names.extend(values.into_iter().map(Into::into));

        self.clear();
        for name in &names {
            self.insert_node(None, name);
        }
    }

    // =========================================================================
    // Traversal and search
    // =========================================================================

    /// Iterates over every node in pre-order.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder::new(self, self.top_level.iter().rev().copied().collect())
    }

    /// Every node in pre-order: top-level nodes in stored order, each
    /// followed by its own subtree.
    pub fn all_nodes(&self) -> Vec<NodeId> {
        self.iter().collect()
    }

    /// A node followed by all of its descendants, in pre-order.
    pub fn subtree(&self, id: NodeId) -> Result<Vec<NodeId>> {
        if !self.nodes.contains_key(id) {
            return Err(StoreError::InvalidNodeId);
        }
        Ok(PreOrder::new(self, vec![id]).collect())
    }

    /// First top-level node whose column 0 equals `name`.
    pub fn find_top_level(&self, name: &str) -> Option<NodeId> {
        self.top_level
            .iter()
            .copied()
            .find(|&id| self.text(id, 0) == Some(name))
    }

    /// All nodes whose `column` matches `needle`, in pre-order.
    ///
    /// Matching is case-sensitive.
    pub fn find_by_text(&self, column: usize, needle: &str, mode: MatchMode) -> Vec<NodeId> {
        self.find_by_text_with(column, needle, mode.into())
    }

    /// All nodes whose `column` matches `needle` under `flags`, in pre-order.
    pub fn find_by_text_with(&self, column: usize, needle: &str, flags: MatchFlags) -> Vec<NodeId> {
        self.iter()
            .filter(|&id| {
                self.text(id, column)
                    .is_some_and(|text| flags.matches(text, needle))
            })
            .collect()
    }

    fn find_first(&self, column: usize, name: &str) -> Option<NodeId> {
        self.iter().find(|&id| self.text(id, column) == Some(name))
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Removes each node together with its subtree.
    ///
    /// Nodes that no longer exist, including ones already removed through an
    /// ancestor earlier in the same batch, are skipped. Returns the number of
    /// nodes destroyed.
    #[tracing::instrument(skip(self, nodes), target = "arbor_core::store", level = "trace")]
    pub fn remove<I>(&mut self, nodes: I) -> usize
    where
        I: IntoIterator<Item = NodeId>,
    {
        let mut destroyed = 0;
        for id in nodes {
            let Some(parent) = self.nodes.get(id).map(|n| n.parent) else {
                continue;
            };

            let doomed: Vec<NodeId> = PreOrder::new(self, vec![id]).collect();
            self.detach(id, parent);
            for node_id in &doomed {
                self.nodes.remove(*node_id);
            }

            tracing::trace!(target: targets::STORE, ?id, count = doomed.len(), "removed subtree");
            destroyed += doomed.len();
        }
        destroyed
    }

    /// Destroys all nodes. The schema and flags are kept.
    pub fn clear(&mut self) {
        if self.nodes.is_empty() {
            return;
        }
        tracing::trace!(target: targets::STORE, count = self.nodes.len(), "clearing store");
        self.nodes.clear();
        self.top_level.clear();
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn check_column(&self, column: usize) -> Result<()> {
        if column < self.column_count() {
            Ok(())
        } else {
            Err(StoreError::ColumnOutOfRange {
                column,
                column_count: self.column_count(),
            })
        }
    }

    fn insert_node(&mut self, parent: Option<NodeId>, name: &str) -> NodeId {
        let id = self
            .nodes
            .insert(NodeData::new(self.column_count(), name, parent));
        self.attach(id, parent);
        tracing::trace!(target: targets::STORE, ?id, ?parent, name, "inserted node");
        id
    }

    fn siblings(&self, parent: Option<NodeId>) -> &[NodeId] {
        match parent {
            None => &self.top_level,
            Some(parent_id) => self
                .nodes
                .get(parent_id)
                .map(|n| n.children.as_slice())
                .unwrap_or(&[]),
        }
    }

    fn siblings_mut(&mut self, parent: Option<NodeId>) -> Option<&mut Vec<NodeId>> {
        match parent {
            None => Some(&mut self.top_level),
            Some(parent_id) => self.nodes.get_mut(parent_id).map(|n| &mut n.children),
        }
    }

    fn attach(&mut self, id: NodeId, parent: Option<NodeId>) {
        let position = if self.sort_on_insert {
            let name = self.text(id, 0).unwrap_or_default();
            self.siblings(parent)
                .partition_point(|&sibling| self.text(sibling, 0).unwrap_or_default() <= name)
        } else {
            self.siblings(parent).len()
        };

        if let Some(siblings) = self.siblings_mut(parent) {
            siblings.insert(position, id);
        }
    }

    fn detach(&mut self, id: NodeId, parent: Option<NodeId>) {
        if let Some(siblings) = self.siblings_mut(parent) {
            siblings.retain(|&sibling| sibling != id);
        }
    }

    fn sort_all(&mut self) {
        let mut top_level = mem::take(&mut self.top_level);
        self.sort_ids(&mut top_level);
        self.top_level = top_level;

        let parents: Vec<NodeId> = self.nodes.keys().collect();
        for parent_id in parents {
            let Some(node) = self.nodes.get_mut(parent_id) else {
                continue;
            };
            let mut children = mem::take(&mut node.children);
            self.sort_ids(&mut children);
            if let Some(node) = self.nodes.get_mut(parent_id) {
                node.children = children;
            }
        }
    }

    fn sort_ids(&self, ids: &mut [NodeId]) {
        ids.sort_by(|&a, &b| {
            self.text(a, 0)
                .unwrap_or_default()
                .cmp(self.text(b, 0).unwrap_or_default())
        });
    }
}

/// Pre-order iterator over a [`TreeStore`].
///
/// Uses an explicit stack, so arbitrarily deep trees do not grow the call stack.
#[derive(Debug)]
pub struct PreOrder<'a> {
    store: &'a TreeStore,
    stack: Vec<NodeId>,
}

impl<'a> PreOrder<'a> {
    /// `stack` holds the starting nodes in reverse visiting order.
    fn new(store: &'a TreeStore, stack: Vec<NodeId>) -> Self {
        Self { store, stack }
    }
}

impl Iterator for PreOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.store.nodes.get(id) {
            self.stack.extend(node.children.iter().rev().copied());
        }
        Some(id)
    }
}
