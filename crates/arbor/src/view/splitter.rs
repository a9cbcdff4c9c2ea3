//! Splitter state: pane sizes along one axis.

use arbor_core::logging::targets;
use serde::{Deserialize, Serialize};

/// Direction in which a splitter lays out its panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Panes side by side.
    #[default]
    Horizontal,
    /// Panes stacked top to bottom.
    Vertical,
}

/// Pane sizes of a splitter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Splitter {
    name: String,
    orientation: Orientation,
    sizes: Vec<u32>,
}

impl Splitter {
    /// Creates a splitter with no panes.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    /// Creates a side-by-side splitter.
    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Creates a top-to-bottom splitter.
    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Sets the name used when logging size changes.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The splitter's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The layout direction.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Appends a pane of the given size.
    pub fn add_pane(&mut self, size: u32) {
        self.sizes.push(size);
    }

    /// Pane sizes in layout order.
    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    /// Replaces the pane sizes.
    pub fn set_sizes(&mut self, sizes: impl Into<Vec<u32>>) {
        self.sizes = sizes.into();
    }

    /// Moves handle `index` (between pane `index` and `index + 1`) to `pos`,
    /// measured from the start of the splitter.
    ///
    /// Only the two adjacent panes change size; their combined size is kept,
    /// saturating at `u32::MAX`. Returns false if there is no such handle.
    pub fn moved(&mut self, index: usize, pos: u32) -> bool {
        let Some(next) = index.checked_add(1).filter(|&next| next < self.sizes.len()) else {
            return false;
        };

        let start = self.sizes[..index]
            .iter()
            .fold(0u64, |sum, &size| sum.saturating_add(u64::from(size)));
        let pair = self.sizes[index].saturating_add(self.sizes[next]);
        let offset = u64::from(pos).saturating_sub(start);
        let first = u32::try_from(offset).unwrap_or(u32::MAX).min(pair);
        self.sizes[index] = first;
        self.sizes[next] = pair - first;

        tracing::debug!(target: targets::VIEW, splitter = %self.name, sizes = ?self.sizes, "splitter moved");
        true
    }
}
