use super::Value;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// The entries of one table.
///
/// Keeps every recorded key in insertion order, repeated keys included, next to a map that only
/// holds the last value written for each key.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Table {
    keys: Vec<String>,
    values: HashMap<String, Value>,
}

impl Table {
    pub(crate) fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) {
        let key = key.into();
        self.keys.push(key.clone());
        self.values.insert(key, value.into());
    }

    /// All recorded keys in the order they were written.
    ///
    /// A key written more than once is listed once per write.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Get the value of a key.
    pub fn get<S: AsRef<str>>(&self, key: S) -> Option<&Value> {
        self.values.get(key.as_ref())
    }

    /// Iterate over the distinct keys in order of first appearance, with their final value.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.keys
            .iter()
            .enumerate()
            .filter(move |(index, key)| !self.keys[..*index].contains(*key))
            .filter_map(move |(_, key)| Some((key.as_str(), self.values.get(key)?)))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for Table {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
