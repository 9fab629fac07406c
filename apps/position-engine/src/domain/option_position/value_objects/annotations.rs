//! Caller-defined annotations attached to a position.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// String-keyed bag of arbitrary values.
///
/// Strategies use it to tag positions (entry signal, leg name, ...). The
/// position stores it and never reads it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotations(BTreeMap<String, Value>);

impl Annotations {
    /// Empty annotations.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a value, returning the previous one for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Remove a value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Annotations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_get_remove() {
        let mut annotations = Annotations::new();
        assert!(annotations.is_empty());

        annotations.insert("leg", "short_put");
        annotations.insert("signal", json!({"rsi": 28}));
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations.get("leg"), Some(&json!("short_put")));
        assert!(annotations.contains_key("signal"));

        let previous = annotations.insert("leg", "long_put");
        assert_eq!(previous, Some(json!("short_put")));

        assert!(annotations.remove("signal").is_some());
        assert!(!annotations.contains_key("signal"));
    }

    #[test]
    fn collect_and_serialize_as_map() {
        let annotations: Annotations = [("a", 1), ("b", 2)].into_iter().collect();
        let json = serde_json::to_value(&annotations).unwrap();
        assert_eq!(json, json!({"a": 1, "b": 2}));
        let keys: Vec<&String> = annotations.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
    }
}
