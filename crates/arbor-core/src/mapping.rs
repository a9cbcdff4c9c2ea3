//! Key/value materialization for two-column flat stores.
//!
//! A store with exactly two columns can be read as a mapping (column 0 is the
//! key, column 1 the value) and rebuilt from one. This is the only
//! persistence contract the store defines.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde_json::Value;

use crate::error::{Result, StoreError};
use crate::logging::targets;
use crate::store::{InputPolicy, TreeStore};

impl TreeStore {
    /// Reads the store as a key/value mapping.
    ///
    /// Every node contributes one entry; when keys repeat, the last node in
    /// pre-order wins. Fails on stores that are not two columns wide.
    pub fn to_mapping(&self) -> Result<BTreeMap<String, String>> {
        self.check_pair_schema()?;
        Ok(self
            .iter()
            .filter_map(|id| {
                let key = self.text(id, 0)?;
                let value = self.text(id, 1)?;
                Some((key.to_string(), value.to_string()))
            })
            .collect())
    }

    /// Replaces the contents with one top-level node per entry.
    ///
    /// Keys and values are rendered with [`Display`].
    pub fn from_mapping<I, K, V>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Display,
        V: Display,
    {
        self.check_pair_schema()?;
        self.clear();
        for (key, value) in entries {
            self.insert_pair(&key.to_string(), Some(value.to_string()))?;
        }
        Ok(())
    }

    /// Like [`from_mapping`](Self::from_mapping), but a `None` value leaves
    /// the value column empty instead of rendering a value.
    pub fn from_optional_mapping<I, K, V>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Display,
        V: Display,
    {
        self.check_pair_schema()?;
        self.clear();
        for (key, value) in entries {
            self.insert_pair(&key.to_string(), value.map(|v| v.to_string()))?;
        }
        Ok(())
    }

    /// Replaces the contents from an untyped JSON value.
    ///
    /// An object yields one node per member: strings are taken verbatim,
    /// `null` leaves the value column empty, anything else is stored as its
    /// JSON text. Any other input is rejected with
    /// [`StoreError::InvalidArgument`] under [`InputPolicy::Strict`]; under
    /// [`InputPolicy::Lenient`] the store is cleared and a warning logged.
    pub fn from_json(&mut self, value: &Value) -> Result<()> {
        self.check_pair_schema()?;

        let Some(object) = value.as_object() else {
            let got = json_kind(value);
            return match self.input_policy() {
                InputPolicy::Strict => Err(StoreError::invalid_argument("a JSON object", got)),
                InputPolicy::Lenient => {
                    tracing::warn!(target: targets::MAPPING, got, %value, "mapping input is not an object, ignoring");
                    self.clear();
                    Ok(())
                }
            };
        };

        self.clear();
        for (key, member) in object {
            let cell = match member {
                Value::Null => None,
                Value::String(text) => Some(text.clone()),
                other => Some(other.to_string()),
            };
            self.insert_pair(key, cell)?;
        }
        tracing::trace!(target: targets::MAPPING, count = object.len(), "loaded mapping");
        Ok(())
    }

    fn insert_pair(&mut self, key: &str, value: Option<String>) -> Result<()> {
        let id = self.add_root_item(key);
        if let Some(value) = value {
            self.set_text(id, 1, value)?;
        }
        Ok(())
    }

    fn check_pair_schema(&self) -> Result<()> {
        if self.column_count() == 2 {
            Ok(())
        } else {
            Err(StoreError::invalid_schema(format!(
                "key/value mapping needs 2 columns, store has {}",
                self.column_count()
            )))
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeaderSchema;
    use serde_json::json;

    fn pair_store() -> TreeStore {
        TreeStore::with_headers(HeaderSchema::from_pairs([("Key", 160), ("Value", 0)])).unwrap()
    }

    #[test]
    fn test_from_mapping_forces_strings() {
        let mut store = pair_store();
        store.from_mapping([(1, 2.5), (2, 3.0)]).unwrap();
        let mapping = store.to_mapping().unwrap();
        assert_eq!(mapping.get("1").map(String::as_str), Some("2.5"));
        assert_eq!(mapping.get("2").map(String::as_str), Some("3"));
    }

    #[test]
    fn test_from_mapping_replaces_contents() {
        let mut store = pair_store();
        store.from_mapping([("a", "1")]).unwrap();
        store.from_mapping([("b", "2")]).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.to_mapping().unwrap().contains_key("b"));
    }

    #[test]
    fn test_from_optional_mapping_leaves_absent_empty() {
        let mut store = pair_store();
        store
            .from_optional_mapping([("set", Some(5)), ("unset", None)])
            .unwrap();

        let unset = store.find_top_level("unset").unwrap();
        assert_eq!(store.text(unset, 1), Some(""));
        assert_eq!(store.to_mapping().unwrap()["set"], "5");
    }

    #[test]
    fn test_from_json_values() {
        let mut store = pair_store();
        store
            .from_json(&json!({"name": "red", "size": 10, "note": null, "empty": ""}))
            .unwrap();

        let mapping = store.to_mapping().unwrap();
        assert_eq!(mapping["name"], "red");
        assert_eq!(mapping["size"], "10");
        assert_eq!(mapping["note"], "");
        assert_eq!(mapping["empty"], "");
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_from_json_strict_rejects_non_object() {
        let mut store = pair_store();
        store.from_mapping([("keep", "me")]).unwrap();

        let err = store.from_json(&json!(["a", "b"])).unwrap_err();
        assert_eq!(err, StoreError::invalid_argument("a JSON object", "an array"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_from_json_lenient_clears() {
        let mut store = pair_store();
        store.set_input_policy(InputPolicy::Lenient);
        store.from_mapping([("drop", "me")]).unwrap();

        store.from_json(&json!("not a mapping")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_mapping_requires_two_columns() {
        let mut store = TreeStore::new();
        assert!(matches!(
            store.to_mapping(),
            Err(StoreError::InvalidSchema { .. })
        ));
        assert!(matches!(
            store.from_mapping([("a", "b")]),
            Err(StoreError::InvalidSchema { .. })
        ));
    }
}
