//! View configuration.
//!
//! [`ViewOptions`] gathers the settings a tree or list view is set up with:
//! column headers, selection mode, sorting and a few presentation hints that
//! a rendering shim reads. Every field has a default, so a configuration file
//! only needs to name what it changes.
//!
//! # TOML Format
//!
//! ```toml
//! selection_mode = "extended"
//! sort_on_insert = true
//! fixed_row_height = 22
//!
//! [[headers]]
//! name = "Key"
//! width = 160
//!
//! [[headers]]
//! name = "Value"
//! width = 0
//! ```

use std::path::Path;

use arbor_core::logging::targets;
use arbor_core::{HeaderSchema, InputPolicy};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::view::SelectionMode;

/// A column header as written in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Column label.
    pub name: String,
    /// Display-width hint.
    #[serde(default)]
    pub width: u32,
}

/// Serializable mirror of [`InputPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicyConfig {
    /// Reject malformed mapping input.
    #[default]
    Strict,
    /// Log and ignore malformed mapping input.
    Lenient,
}

impl From<InputPolicyConfig> for InputPolicy {
    fn from(policy: InputPolicyConfig) -> Self {
        match policy {
            InputPolicyConfig::Strict => InputPolicy::Strict,
            InputPolicyConfig::Lenient => InputPolicy::Lenient,
        }
    }
}

/// Settings for a tree or list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    /// Column headers in display order. Empty means one unnamed column.
    pub headers: Vec<HeaderConfig>,
    /// Selection behavior.
    pub selection_mode: SelectionMode,
    /// Keep children sorted by their first column.
    pub sort_on_insert: bool,
    /// Whether the header row is shown.
    pub header_visible: bool,
    /// Fixed height for every row, in pixels.
    pub fixed_row_height: Option<u32>,
    /// Alternate row background colors.
    pub alternating_row_colors: bool,
    /// Treatment of malformed mapping input.
    pub input_policy: InputPolicyConfig,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            selection_mode: SelectionMode::default(),
            sort_on_insert: false,
            header_visible: true,
            fixed_row_height: None,
            alternating_row_colors: false,
            input_policy: InputPolicyConfig::default(),
        }
    }
}

impl ViewOptions {
    /// Parses options from TOML text.
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let options = Self::from_toml_str(&text).map_err(|e| Error::config(path, e))?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded view options");
        Ok(options)
    }

    /// The headers as a store schema.
    pub fn schema(&self) -> HeaderSchema {
        self.headers
            .iter()
            .map(|h| (h.name.clone(), h.width))
            .collect()
    }

    /// Replaces the headers from `(name, width)` pairs.
    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        self.headers = headers
            .into_iter()
            .map(|(name, width)| HeaderConfig {
                name: name.into(),
                width,
            })
            .collect();
        self
    }
}
