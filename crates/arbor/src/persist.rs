//! Saving and loading key/value mappings as JSON files.
//!
//! A mapping is written as a pretty-printed JSON object. Writes go through a
//! temporary file in the target directory which is then renamed over the
//! target, so an interrupted save leaves any previous file intact.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use arbor_core::logging::targets;
use arbor_core::{HeaderSchema, TreeStore};
use directories::ProjectDirs;
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::view::{DICT_HEADERS, DictEditor};

/// Writes `map` to `path` as a JSON object, creating parent directories.
pub fn save_mapping(path: impl AsRef<Path>, map: &BTreeMap<String, String>) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;

    let json = serde_json::to_string_pretty(map)?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| Error::io(path, e))?;
    temp.write_all(json.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| Error::io(path, e))?;
    temp.persist(path).map_err(|e| Error::io(path, e.error))?;

    tracing::debug!(target: targets::PERSIST, path = %path.display(), entries = map.len(), "saved mapping");
    Ok(())
}

/// Reads a mapping previously written by [`save_mapping`].
///
/// Any JSON object is accepted. Non-string values are kept as their JSON
/// text and `null` becomes an empty string. Other JSON input is rejected.
pub fn load_mapping(path: impl AsRef<Path>) -> Result<BTreeMap<String, String>> {
    let path = path.as_ref();
    let value = read_json(path)?;

    let mut store = TreeStore::with_headers(HeaderSchema::from_pairs(DICT_HEADERS))?;
    store.from_json(&value)?;
    let map = store.to_mapping()?;

    tracing::debug!(target: targets::PERSIST, path = %path.display(), entries = map.len(), "loaded mapping");
    Ok(map)
}

/// Replaces the contents of `editor` with the JSON file at `path`.
///
/// Non-object input is handled according to the editor store's input policy.
pub fn load_into(path: impl AsRef<Path>, editor: &mut DictEditor) -> Result<()> {
    let path = path.as_ref();
    let value = read_json(path)?;
    editor.set_json(&value)?;
    tracing::debug!(target: targets::PERSIST, path = %path.display(), "loaded editor contents");
    Ok(())
}

/// Per-user data file location for `application`, e.g.
/// `~/.local/share/<application>/<file_name>` on Linux.
pub fn default_path(
    qualifier: &str,
    organization: &str,
    application: &str,
    file_name: &str,
) -> Result<PathBuf> {
    let dirs = ProjectDirs::from(qualifier, organization, application).ok_or(Error::NoConfigDir)?;
    Ok(dirs.data_dir().join(file_name))
}

fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_core::StoreError;
    use tempfile::tempdir;

    fn sample() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("color".to_string(), "red".to_string()),
            ("size".to_string(), "10".to_string()),
        ])
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        save_mapping(&path, &sample()).unwrap();
        assert_eq!(load_mapping(&path).unwrap(), sample());
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");

        save_mapping(&path, &sample()).unwrap();
        save_mapping(&path, &BTreeMap::new()).unwrap();
        assert!(load_mapping(&path).unwrap().is_empty());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_load_converts_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mixed.json");
        fs::write(&path, r#"{"a": 1, "b": null, "c": true, "d": "x"}"#).unwrap();

        let map = load_mapping(&path).unwrap();
        assert_eq!(map["a"], "1");
        assert_eq!(map["b"], "");
        assert_eq!(map["c"], "true");
        assert_eq!(map["d"], "x");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        assert!(matches!(load_mapping(&missing), Err(Error::Io { .. })));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(load_mapping(&broken), Err(Error::Json(_))));

        let list = dir.path().join("list.json");
        fs::write(&list, "[1, 2]").unwrap();
        assert!(matches!(
            load_mapping(&list),
            Err(Error::Store(StoreError::InvalidArgument { got: "an array", .. }))
        ));
    }

    #[test]
    fn test_default_path_in_data_dir() {
        match default_path("org", "Example", "App", "state.json") {
            Ok(path) => {
                let dirs = ProjectDirs::from("org", "Example", "App").unwrap();
                assert_eq!(path, dirs.data_dir().join("state.json"));
                assert!(path.ends_with("state.json"));
            }
            Err(err) => {
                assert!(ProjectDirs::from("org", "Example", "App").is_none());
                assert!(matches!(err, Error::NoConfigDir));
            }
        }
    }

    #[test]
    fn test_load_into_editor() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        save_mapping(&path, &sample()).unwrap();

        let mut editor = DictEditor::new().unwrap();
        load_into(&path, &mut editor).unwrap();
        assert_eq!(editor.value().unwrap(), sample());
    }
}
