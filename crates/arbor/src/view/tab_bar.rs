//! Tab view state.

use arbor_core::MatchFlags;

/// Ordered tab titles with a current tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabBar {
    titles: Vec<String>,
    current: Option<usize>,
}

impl TabBar {
    /// Creates a tab bar with no tabs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tab and returns its index. The first tab becomes current.
    pub fn add_tab(&mut self, title: impl Into<String>) -> usize {
        self.titles.push(title.into());
        if self.current.is_none() {
            self.current = Some(0);
        }
        self.titles.len() - 1
    }

    /// Number of tabs.
    pub fn count(&self) -> usize {
        self.titles.len()
    }

    /// Title of the tab at `index`.
    pub fn tab_text(&self, index: usize) -> Option<&str> {
        self.titles.get(index).map(String::as_str)
    }

    /// Title of the current tab.
    pub fn current_text(&self) -> Option<&str> {
        self.current.and_then(|i| self.tab_text(i))
    }

    /// The current tab index.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Makes the tab titled `name` current, ignoring case.
    ///
    /// When several titles match, the last one wins. Returns whether any tab
    /// matched.
    pub fn select(&mut self, name: &str) -> bool {
        let flags = MatchFlags::exact().ignore_case();
        let found = self
            .titles
            .iter()
            .rposition(|title| flags.matches(title, name));
        if found.is_some() {
            self.current = found;
        }
        found.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_ignores_case() {
        let mut tabs = TabBar::new();
        tabs.add_tab("Shots");
        tabs.add_tab("Assets");
        assert!(tabs.select("assets"));
        assert_eq!(tabs.current_text(), Some("Assets"));
    }

    #[test]
    fn test_select_last_match_and_miss() {
        let mut tabs = TabBar::new();
        tabs.add_tab("Log");
        tabs.add_tab("Other");
        tabs.add_tab("LOG");
        assert!(tabs.select("log"));
        assert_eq!(tabs.current_index(), Some(2));

        assert!(!tabs.select("missing"));
        assert_eq!(tabs.current_index(), Some(2));
    }
}
