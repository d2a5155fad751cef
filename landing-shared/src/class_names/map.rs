use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::truthy::Truthy;

/// An insertion-ordered map from class name to condition.
///
/// Re-inserting a key updates its condition but keeps its original position,
/// the same way assigning to an existing object property does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassMap {
    entries: Vec<(String, bool)>,
}

impl ClassMap {
    /// Creates an empty map.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets the condition for `key`, coercing it with [`Truthy`].
    pub fn insert(&mut self, key: impl Into<String>, condition: impl Truthy) {
        let key = key.into();
        let enabled = condition.is_truthy();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = enabled,
            None => self.entries.push((key, enabled)),
        }
    }

    /// Builder form of [`ClassMap::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, condition: impl Truthy) -> Self {
        self.insert(key, condition);
        self
    }

    /// Condition recorded for `key`, if present.
    pub fn get(&self, key: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, enabled)| *enabled)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries
            .iter()
            .map(|(key, enabled)| (key.as_str(), *enabled))
    }

    /// Keys whose condition is enabled, in insertion order.
    pub fn enabled_keys(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter_map(|(key, enabled)| enabled.then_some(key))
    }
}

impl<K, C> FromIterator<(K, C)> for ClassMap
where
    K: Into<String>,
    C: Truthy,
{
    fn from_iter<I: IntoIterator<Item = (K, C)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, condition) in iter {
            map.insert(key, condition);
        }
        map
    }
}

impl<K, C, const N: usize> From<[(K, C); N]> for ClassMap
where
    K: Into<String>,
    C: Truthy,
{
    fn from(entries: [(K, C); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for ClassMap {
    fn from(object: serde_json::Map<String, serde_json::Value>) -> Self {
        object.into_iter().collect()
    }
}

impl Serialize for ClassMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, enabled) in &self.entries {
            map.serialize_entry(key, enabled)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ClassMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(Self::from(object))
    }
}

#[cfg(test)]
mod tests {
    use super::ClassMap;

    #[test]
    fn test_insertion_order_is_kept() {
        let map = ClassMap::new()
            .with("foo", true)
            .with("bar", false)
            .with("baz", 1);

        let keys: Vec<_> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["foo", "bar", "baz"]);
        assert_eq!(map.enabled_keys().collect::<Vec<_>>(), vec!["foo", "baz"]);
    }

    #[test]
    fn test_reinsert_updates_in_place() {
        let mut map = ClassMap::from([("a", true), ("b", true)]);
        map.insert("a", false);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(false));
        assert_eq!(map.enabled_keys().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_deserialize_keeps_document_order() {
        let map: ClassMap = serde_json::from_str(r#"{"zeta":1,"alpha":"yes","mid":null}"#).unwrap();
        assert_eq!(map.enabled_keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        assert_eq!(map.get("mid"), Some(false));
    }

    #[test]
    fn test_serialize_round_trips_conditions() {
        let map = ClassMap::from([("on", true), ("off", false)]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"on":true,"off":false}"#);
    }
}
