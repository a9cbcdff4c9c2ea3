//! View-state models backed by a [`TreeStore`](arbor_core::TreeStore).
//!
//! These types hold the state a widget front end renders: rows, selection,
//! headers and layout sizes. They do not draw anything.

mod choice_box;
mod dict_editor;
mod list_view;
mod menu_bar;
mod selection;
mod splitter;
mod tab_bar;
mod tree_view;

pub use choice_box::ChoiceBox;
pub use dict_editor::{ContextAction, DICT_HEADERS, DictEditor};
pub use list_view::ListView;
pub use menu_bar::{Menu, MenuBar};
pub use selection::{Selection, SelectionMode};
pub use splitter::{Orientation, Splitter};
pub use tab_bar::TabBar;
pub use tree_view::TreeView;
