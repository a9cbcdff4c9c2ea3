//! Text matching used by the store's search operations.

/// How a needle is compared against a column's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Whole-text equality.
    #[default]
    Exact,
    /// The needle occurs anywhere in the text.
    Contains,
    /// The text starts with the needle.
    StartsWith,
    /// The text ends with the needle.
    EndsWith,
}

/// Flags for matching items in searches.
///
/// Matching is case-sensitive unless `case_sensitive` is cleared. Case folding
/// uses [`str::to_lowercase`]; whitespace is never normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchFlags {
    /// Comparison mode.
    pub mode: MatchMode,
    /// Case-sensitive matching.
    pub case_sensitive: bool,
}

impl Default for MatchFlags {
    fn default() -> Self {
        Self::exact()
    }
}

impl MatchFlags {
    /// Case-sensitive exact match.
    pub fn exact() -> Self {
        Self {
            mode: MatchMode::Exact,
            case_sensitive: true,
        }
    }

    /// Case-sensitive contains match.
    pub fn contains() -> Self {
        Self {
            mode: MatchMode::Contains,
            case_sensitive: true,
        }
    }

    /// Returns the same flags with case-insensitive comparison.
    pub fn ignore_case(self) -> Self {
        Self {
            case_sensitive: false,
            ..self
        }
    }

    /// Tests `text` against `needle`.
    pub fn matches(&self, text: &str, needle: &str) -> bool {
        if self.case_sensitive {
            compare(self.mode, text, needle)
        } else {
            compare(self.mode, &text.to_lowercase(), &needle.to_lowercase())
        }
    }
}

impl From<MatchMode> for MatchFlags {
    fn from(mode: MatchMode) -> Self {
        Self {
            mode,
            case_sensitive: true,
        }
    }
}

fn compare(mode: MatchMode, text: &str, needle: &str) -> bool {
    match mode {
        MatchMode::Exact => text == needle,
        MatchMode::Contains => text.contains(needle),
        MatchMode::StartsWith => text.starts_with(needle),
        MatchMode::EndsWith => text.ends_with(needle),
    }
}
