//! Logging and debugging facilities.
//!
//! This module provides:
//! - Target names for filtering the `tracing` output of each subsystem
//! - [`TreeDump`], a human-readable rendering of a [`TreeStore`]
//!
//! # Tracing Integration
//!
//! The crates only emit events; they never install a subscriber. To see logs,
//! install one in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("arbor_core=trace,arbor=debug")
//!     .init();
//! ```
//!
//! # Debug Visualization
//!
//! ```
//! use arbor_core::TreeStore;
//! use arbor_core::logging::{TreeDump, TreeFormatOptions};
//!
//! let mut store = TreeStore::new();
//! store.add_item("Dog", Some("Animals"));
//!
//! let dump = TreeDump::with_options(TreeFormatOptions::minimal()).format(&store);
//! assert!(dump.contains("Dog"));
//! ```

use std::fmt::Write as FmtWrite;

use crate::store::{NodeId, TreeStore};

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Tree store target.
    pub const STORE: &str = "arbor_core::store";
    /// Mapping (de)serialization target.
    pub const MAPPING: &str = "arbor_core::mapping";
    /// View-state models target.
    pub const VIEW: &str = "arbor::view";
    /// Persistence target.
    pub const PERSIST: &str = "arbor::persist";
    /// Configuration target.
    pub const CONFIG: &str = "arbor::config";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact single-line representation.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show node IDs.
    pub show_ids: bool,
    /// Whether to show every column instead of only column 0.
    pub show_columns: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_columns: true,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Options for minimal output: names only, ASCII branches.
    pub fn minimal() -> Self {
        Self {
            style: TreeStyle::Ascii,
            show_ids: false,
            show_columns: false,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing a [`TreeStore`].
#[derive(Debug, Clone, Default)]
pub struct TreeDump {
    options: TreeFormatOptions,
}

impl TreeDump {
    /// Create a visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format the whole store.
    ///
    /// Walks the tree with an explicit stack, so deep trees do not grow the
    /// call stack.
    pub fn format(&self, store: &TreeStore) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "Tree ({} nodes):", store.len());

        let top_level = store.top_level();
        if top_level.is_empty() {
            output.push_str("  (empty)\n");
        }

        let mut stack: Vec<(NodeId, usize, bool)> = Vec::new();
        push_children(&mut stack, top_level, 0);
        while let Some((id, depth, is_last)) = stack.pop() {
            self.format_line(store, id, depth, is_last, &mut output);
            if self.options.max_depth.is_none_or(|max| depth < max) {
                push_children(&mut stack, store.children(id).unwrap_or(&[]), depth + 1);
            }
        }
        output
    }

    fn format_line(
        &self,
        store: &TreeStore,
        id: NodeId,
        depth: usize,
        is_last: bool,
        output: &mut String,
    ) {
        output.push_str(&self.build_prefix(depth, is_last));
        match store.texts(id) {
            Ok(columns) if self.options.show_columns && columns.len() > 1 => {
                output.push_str(&columns.join(" | "));
            }
            _ => {
                let name = store.text(id, 0).unwrap_or_default();
                output.push_str(if name.is_empty() { "(unnamed)" } else { name });
            }
        }
        if self.options.show_ids {
            let _ = write!(output, " [{id:?}]");
        }
        output.push('\n');
    }

    fn build_prefix(&self, depth: usize, is_last: bool) -> String {
        let (branch, corner, last) = match self.options.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("", "-", "-"),
        };

        let mut prefix = String::new();
        for _ in 0..depth {
            prefix.push_str(branch);
            prefix.push_str(&" ".repeat(self.options.indent_size));
        }
        prefix.push_str(if is_last { last } else { corner });
        prefix.push(' ');
        prefix
    }
}

/// Pushes `ids` so that the first one is popped first.
fn push_children(stack: &mut Vec<(NodeId, usize, bool)>, ids: &[NodeId], depth: usize) {
    let last = ids.len().saturating_sub(1);
    stack.extend(
        ids.iter()
            .enumerate()
            .rev()
            .map(|(i, &id)| (id, depth, i == last)),
    );
}
