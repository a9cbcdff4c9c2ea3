//! Core of Arbor: a labeled tree store.
//!
//! This crate provides a toolkit-independent, ordered, multi-column tree of
//! labeled nodes, the data structure that tree, list and key/value editor
//! widgets keep behind their rendering:
//!
//! - **Store**: [`TreeStore`], an arena of nodes addressed by [`NodeId`]
//! - **Schema**: [`HeaderSchema`], the ordered column layout of a store
//! - **Search**: pre-order traversal plus exact/substring lookups ([`MatchMode`])
//! - **Mappings**: two-column stores read and written as key/value maps
//! - **Sharing**: [`SharedTreeStore`] for stores accessed from several threads
//! - **Diagnostics**: tracing targets and [`logging::TreeDump`]
//!
//! # Example
//!
//! ```
//! use arbor_core::{HeaderSchema, TreeStore};
//!
//! let mut store = TreeStore::with_headers(HeaderSchema::from_pairs([("Key", 160), ("Value", 0)]))?;
//! store.from_mapping([("color", "red"), ("size", "10")])?;
//!
//! assert_eq!(store.all_nodes().len(), 2);
//! assert_eq!(store.to_mapping()?["color"], "red");
//! # Ok::<(), arbor_core::StoreError>(())
//! ```
//!
//! # Threading
//!
//! [`TreeStore`] is single-threaded: every mutation takes `&mut self`. Hosts
//! that need to share one store wrap it in a [`SharedTreeStore`].

pub mod error;
pub mod logging;
mod mapping;
pub mod schema;
pub mod search;
mod shared;
pub mod store;

pub use error::{Result, StoreError};
pub use schema::{Header, HeaderSchema};
pub use search::{MatchFlags, MatchMode};
pub use shared::SharedTreeStore;
pub use store::{InputPolicy, NodeId, PreOrder, TreeStore};
