//! Menu bar state: menus by title, each with ordered action labels.

/// A menu with ordered actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    title: String,
    actions: Vec<String>,
}

impl Menu {
    /// Creates an empty menu.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            actions: Vec::new(),
        }
    }

    /// The menu title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Appends an action.
    pub fn add_action(&mut self, label: impl Into<String>) {
        self.actions.push(label.into());
    }

    /// Action labels in order.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }
}

/// Ordered collection of menus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuBar {
    menus: Vec<Menu>,
}

impl MenuBar {
    /// Creates an empty menu bar.
    pub fn new() -> Self {
        Self::default()
    }

    /// The first menu with the given title.
    pub fn menu(&self, title: &str) -> Option<&Menu> {
        self.menus.iter().find(|m| m.title == title)
    }

    /// Returns the menu with the given title, appending a new one if absent.
    pub fn get_or_create_menu(&mut self, title: &str) -> &mut Menu {
        let index = match self.menus.iter().position(|m| m.title == title) {
            Some(index) => index,
            None => {
                self.menus.push(Menu::new(title));
                self.menus.len() - 1
            }
        };
        &mut self.menus[index]
    }

    /// Menus in order.
    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }
}
