//! Combo box state.

/// An ordered list of choices with a current index.
///
/// # Example
///
/// ```
/// use arbor::view::ChoiceBox;
///
/// let mut choices = ChoiceBox::new();
/// choices.add_items(["low", "medium", "high"]);
///
/// choices.select("high");
/// assert_eq!(choices.current_text(), Some("high"));
///
/// // Unknown names fall back to the first choice.
/// choices.select("ultra");
/// assert_eq!(choices.current_index(), Some(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceBox {
    items: Vec<String>,
    current: Option<usize>,
}

impl ChoiceBox {
    /// Creates an empty choice box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a choice. The first choice added becomes current.
    pub fn add_item(&mut self, text: impl Into<String>) {
        self.items.push(text.into());
        if self.current.is_none() {
            self.current = Some(0);
        }
    }

    /// Appends several choices.
    pub fn add_items(&mut self, texts: impl IntoIterator<Item = impl Into<String>>) {
        for text in texts {
            self.add_item(text);
        }
    }

    /// Number of choices.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// All choices in order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Index of the first choice equal to `text`.
    pub fn find_text(&self, text: &str) -> Option<usize> {
        self.items.iter().position(|item| item == text)
    }

    /// Makes the choice named `name` current, or the first choice if there is
    /// no such name. Does nothing on an empty list.
    pub fn select(&mut self, name: &str) {
        if self.items.is_empty() {
            return;
        }
        self.current = Some(self.find_text(name).unwrap_or(0));
    }

    /// Sets the current index. Out-of-range indices clear the current choice.
    pub fn set_current_index(&mut self, index: usize) {
        self.current = (index < self.items.len()).then_some(index);
    }

    /// The current index.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Text of the current choice.
    pub fn current_text(&self) -> Option<&str> {
        self.current
            .and_then(|i| self.items.get(i))
            .map(String::as_str)
    }

    /// Removes all choices.
    pub fn clear(&mut self) {
        self.items.clear();
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_empty_is_noop() {
        let mut choices = ChoiceBox::new();
        choices.select("anything");
        assert_eq!(choices.current_index(), None);
    }

    #[test]
    fn test_select_exact_only() {
        let mut choices = ChoiceBox::new();
        choices.add_items(["Maya", "maya", "Houdini"]);
        choices.select("maya");
        assert_eq!(choices.current_index(), Some(1));
        choices.select("Houd");
        assert_eq!(choices.current_index(), Some(0));
    }

    #[test]
    fn test_set_current_index_bounds() {
        let mut choices = ChoiceBox::new();
        choices.add_items(["a", "b"]);
        choices.set_current_index(1);
        assert_eq!(choices.current_text(), Some("b"));
        choices.set_current_index(5);
        assert_eq!(choices.current_text(), None);
    }
}
