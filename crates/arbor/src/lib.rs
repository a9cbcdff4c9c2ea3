//! Arbor: view-state models on top of a labeled tree store.
//!
//! [`arbor_core`] holds the data; this crate adds what a widget front end
//! keeps around it:
//!
//! - **Views**: [`view::TreeView`], [`view::ListView`] and
//!   [`view::DictEditor`], plus small helpers for choice boxes, tab bars,
//!   splitters and menu bars
//! - **Configuration**: [`config::ViewOptions`], loadable from TOML
//! - **Persistence**: [`persist`] saves and loads key/value mappings as JSON
//!
//! # Example
//!
//! ```
//! use arbor::config::ViewOptions;
//! use arbor::view::{SelectionMode, TreeView};
//!
//! let options = ViewOptions {
//!     selection_mode: SelectionMode::Extended,
//!     sort_on_insert: true,
//!     ..ViewOptions::default()
//! }
//! .with_headers([("Name", 200), ("Kind", 80)]);
//!
//! let mut view = TreeView::from_options(options)?;
//! let store = view.store_mut();
//! let dog = store.add_item("Dog", Some("Animals"));
//! store.set_text(dog, 1, "mammal")?;
//! store.add_item("Cat", Some("Animals"));
//!
//! let animals = view.store().find_top_level("Animals").unwrap();
//! let names: Vec<_> = view
//!     .store()
//!     .children(animals)?
//!     .iter()
//!     .filter_map(|&id| view.store().text(id, 0))
//!     .collect();
//! assert_eq!(names, ["Cat", "Dog"]);
//! # Ok::<(), arbor::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod persist;
pub mod view;

pub use arbor_core;
pub use error::{Error, Result};
