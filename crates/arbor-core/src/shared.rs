//! Lock-guarded wrapper for sharing a store between threads.

use parking_lot::RwLock;

use crate::search::MatchMode;
use crate::store::{NodeId, TreeStore};

/// Thread-safe wrapper around [`TreeStore`].
///
/// The store itself has no internal synchronization; this wrapper is the
/// external lock. Every call takes the lock for its whole duration, so
/// compound operations should go through [`with_write`](Self::with_write).
#[derive(Debug, Default)]
pub struct SharedTreeStore {
    inner: RwLock<TreeStore>,
}

impl SharedTreeStore {
    /// Create a shared store around an empty [`TreeStore`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing store.
    pub fn from_store(store: TreeStore) -> Self {
        Self {
            inner: RwLock::new(store),
        }
    }

    /// Execute a function with read access to the store.
    pub fn with_read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&TreeStore) -> R,
    {
        f(&*self.inner.read())
    }

    /// Execute a function with write access to the store.
    pub fn with_write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut TreeStore) -> R,
    {
        f(&mut *self.inner.write())
    }

    /// See [`TreeStore::get_or_create`].
    pub fn get_or_create(
        &self,
        column: usize,
        name: &str,
        parent_name: Option<&str>,
        create: bool,
    ) -> Option<NodeId> {
        self.inner
            .write()
            .get_or_create(column, name, parent_name, create)
    }

    /// See [`TreeStore::remove`].
    pub fn remove<I>(&self, nodes: I) -> usize
    where
        I: IntoIterator<Item = NodeId>,
    {
        self.inner.write().remove(nodes)
    }

    /// See [`TreeStore::all_nodes`].
    pub fn all_nodes(&self) -> Vec<NodeId> {
        self.inner.read().all_nodes()
    }

    /// See [`TreeStore::find_by_text`].
    pub fn find_by_text(&self, column: usize, needle: &str, mode: MatchMode) -> Vec<NodeId> {
        self.inner.read().find_by_text(column, needle, mode)
    }

    /// Text of one column of a node, as an owned string.
    pub fn text(&self, id: NodeId, column: usize) -> Option<String> {
        self.inner.read().text(id, column).map(str::to_string)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns true if the store holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Consume the wrapper and return the store.
    pub fn into_inner(self) -> TreeStore {
        self.inner.into_inner()
    }
}
