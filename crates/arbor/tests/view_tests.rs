//! Integration tests for the view models, configuration and persistence.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use arbor::Error;
use arbor::config::{InputPolicyConfig, ViewOptions};
use arbor::persist;
use arbor::view::{DICT_HEADERS, DictEditor, ListView, SelectionMode, TreeView};
use arbor_core::StoreError;
use serde_json::json;
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log output so tests can assert on it.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_captured_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

#[test]
fn test_tree_view_from_toml() {
    let options = ViewOptions::from_toml_str(
        r#"
        selection_mode = "extended"
        sort_on_insert = true
        header_visible = false

        [[headers]]
        name = "Name"
        width = 200

        [[headers]]
        name = "Kind"
        "#,
    )
    .unwrap();

    let mut view = TreeView::from_options(options).unwrap();
    assert_eq!(view.store().column_count(), 2);
    assert_eq!(view.store().header_index("Kind"), Some(1));
    assert_eq!(view.selection().mode(), SelectionMode::Extended);
    assert!(!view.options().header_visible);

    view.store_mut().add_item("pear", Some("Fruit"));
    view.store_mut().add_item("apple", Some("Fruit"));
    let fruit = view.store().find_top_level("Fruit").unwrap();
    let children: Vec<_> = view
        .store()
        .children(fruit)
        .unwrap()
        .iter()
        .map(|&id| view.store().text(id, 0).unwrap())
        .collect();
    assert_eq!(children, ["apple", "pear"]);
}

#[test]
fn test_tree_view_remove_selected_subtrees() {
    let mut view = TreeView::new();
    view.set_multi_selection();
    view.store_mut().add_item("Dog", Some("Animals"));
    view.store_mut().add_item("Oak", Some("Plants"));

    view.select(0, "Animals").unwrap();
    view.select(0, "Oak").unwrap();
    assert_eq!(view.selected_names(), ["Animals", "Oak"]);

    assert_eq!(view.remove_selected(), 3);
    assert!(view.selection().is_empty());
    let names: Vec<_> = view
        .store()
        .iter()
        .map(|id| view.store().text(id, 0).unwrap())
        .collect();
    assert_eq!(names, ["Plants"]);
}

#[test]
fn test_tree_view_sync_after_direct_removal() {
    let mut view = TreeView::new();
    let dog = view.store_mut().add_item("Dog", Some("Animals"));
    view.select(0, "Dog");

    view.store_mut().remove([dog]);
    view.sync_selection();
    assert!(view.selection().is_empty());
    assert_eq!(view.selection().current(), None);
}

#[test]
fn test_list_view_workflow() {
    let mut list = ListView::new();
    list.add_items(["shot_020", "shot_010", "shot_020", "shot_030"]);
    assert_eq!(list.name_list(), ["shot_010", "shot_020", "shot_030"]);

    list.set_multi_selection();
    let first = list.select("010").unwrap();
    let third = list.find_items("shot_030")[0];
    list.select_item(third);
    assert_eq!(list.selection().current(), Some(first));
    assert_eq!(list.selected_name_list(), ["shot_010", "shot_030"]);

    assert_eq!(list.remove_selected(), 2);
    assert_eq!(list.name_list(), ["shot_020"]);
    assert!(!list.item_exists("shot_010"));
}

#[test]
fn test_dict_editor_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut editor = DictEditor::new().unwrap();
    editor.set_value([("color", "red"), ("size", "10")]).unwrap();
    editor.add_entry("notes", None).unwrap();
    persist::save_mapping(&path, &editor.value().unwrap()).unwrap();

    let mut reloaded = DictEditor::new().unwrap();
    persist::load_into(&path, &mut reloaded).unwrap();
    let value = reloaded.value().unwrap();
    assert_eq!(value.len(), 3);
    assert_eq!(value["color"], "red");
    assert_eq!(value["notes"], "");
}

#[test]
fn test_dict_editor_lenient_input_logs_warning() {
    let options = ViewOptions {
        input_policy: InputPolicyConfig::Lenient,
        ..ViewOptions::default()
    }
    .with_headers(DICT_HEADERS);
    let mut editor = DictEditor::from_options(options).unwrap();
    editor.set_value([("stale", "1")]).unwrap();

    let (result, logs) = with_captured_logs(|| editor.set_json(&json!(["not", "a", "map"])));
    result.unwrap();
    assert!(editor.value().unwrap().is_empty());
    assert!(logs.contains("WARN"));
    assert!(logs.contains("not an object"));
}

#[test]
fn test_dict_editor_strict_input_keeps_contents() {
    let mut editor = DictEditor::new().unwrap();
    editor.set_value([("kept", "yes")]).unwrap();

    let err = editor.set_json(&json!("text")).unwrap_err();
    assert!(matches!(
        err,
        Error::Store(StoreError::InvalidArgument { got: "a string", .. })
    ));
    assert_eq!(editor.value().unwrap()["kept"], "yes");
}

#[test]
fn test_persist_logs_saves() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let map = BTreeMap::from([("a".to_string(), "1".to_string())]);

    let (result, logs) = with_captured_logs(|| persist::save_mapping(&path, &map));
    result.unwrap();
    assert!(logs.contains("saved mapping"));
    assert!(logs.contains("arbor::persist"));
}

#[test]
fn test_view_options_load_errors() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.toml");
    assert!(matches!(ViewOptions::load(&missing), Err(Error::Io { .. })));

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "selection_mode = \"sideways\"").unwrap();
    assert!(matches!(ViewOptions::load(&bad), Err(Error::Config { .. })));
}
