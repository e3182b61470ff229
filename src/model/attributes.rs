//! Ordered HTML attribute mappings with array-style recursive merge.

use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single HTML attribute value.
///
/// Values are either scalar, an ordered list (the shape used for CSS
/// classes), or a nested mapping. When two mappings collide during a merge
/// they are merged key-by-key rather than replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// A single scalar value.
    Value(String),
    /// An ordered multi-value entry.
    List(Vec<String>),
    /// A nested attribute mapping.
    Map(AttributeMap),
}

impl AttributeValue {
    /// Flatten this value into its leaf strings, in order.
    pub fn leaf_values(&self) -> Vec<String> {
        match self {
            Self::Value(v) => vec![v.clone()],
            Self::List(vs) => vs.clone(),
            Self::Map(map) => map.iter().flat_map(|(_, v)| v.leaf_values()).collect(),
        }
    }

    fn into_leaf_values(self) -> Vec<String> {
        match self {
            Self::Value(v) => vec![v],
            Self::List(vs) => vs,
            Self::Map(map) => map
                .entries
                .into_iter()
                .flat_map(|(_, v)| v.into_leaf_values())
                .collect(),
        }
    }

    /// Merge two values array-style.
    ///
    /// Two mappings merge key-by-key. Any other combination concatenates
    /// the left operand's leaf values followed by the right operand's;
    /// nothing is ever overwritten.
    fn merge(self, other: AttributeValue) -> AttributeValue {
        match (self, other) {
            (Self::Map(a), Self::Map(b)) => Self::Map(AttributeMap::merge_recursive(a, b)),
            (a, b) => {
                let mut values = a.into_leaf_values();
                values.extend(b.into_leaf_values());
                Self::List(values)
            }
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(str::to_string).collect())
    }
}

impl From<AttributeMap> for AttributeValue {
    fn from(map: AttributeMap) -> Self {
        Self::Map(map)
    }
}

/// An insertion-ordered mapping from attribute name to value.
///
/// Attribute mappings are small, so lookups are linear scans; iteration
/// and serialization preserve insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(String, AttributeValue)>,
}

impl AttributeMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Insert a value, replacing any existing entry with the same name in
    /// place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Insert a value, returning the mapping for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Merge two mappings array-style.
    ///
    /// The result keeps `left`'s keys in their order, then `right`-only
    /// keys in theirs. For keys present in both sides the values merge per
    /// [`AttributeValue`]: nested mappings key-by-key, everything else by
    /// concatenating left's values before right's.
    pub fn merge_recursive(left: Self, right: Self) -> Self {
        let mut result = left;
        for (name, value) in right.entries {
            match result.entries.iter().position(|(n, _)| *n == name) {
                Some(idx) => {
                    let existing =
                        std::mem::replace(&mut result.entries[idx].1, AttributeValue::List(Vec::new()));
                    result.entries[idx].1 = existing.merge(value);
                }
                None => result.entries.push((name, value)),
            }
        }
        result
    }
}

impl FromIterator<(String, AttributeValue)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (String, AttributeValue)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

// Serde is implemented by hand: the map is Vec-backed to preserve
// insertion order, and a derive would expose that as a sequence of pairs
// instead of a JSON object.

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributeMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = AttributeMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an attribute mapping")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = AttributeMap::new();
                while let Some((name, value)) = access.next_entry::<String, AttributeValue>()? {
                    map.insert(name, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_str(v),
            Self::List(vs) => {
                let mut seq = serializer.serialize_seq(Some(vs.len()))?;
                for v in vs {
                    seq.serialize_element(v)?;
                }
                seq.end()
            }
            Self::Map(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for AttributeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = AttributeValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, number, boolean, sequence, or attribute mapping")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(AttributeValue::Value(v.to_string()))
            }

            fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(AttributeValue::Value(v.to_string()))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(AttributeValue::Value(v.to_string()))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(AttributeValue::Value(v.to_string()))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(AttributeValue::Value(v.to_string()))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut values = Vec::new();
                while let Some(element) = access.next_element::<AttributeValue>()? {
                    values.extend(element.into_leaf_values());
                }
                Ok(AttributeValue::List(values))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = AttributeMap::new();
                while let Some((name, value)) = access.next_entry::<String, AttributeValue>()? {
                    map.insert(name, value);
                }
                Ok(AttributeValue::Map(map))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_order() {
        let map = AttributeMap::new()
            .with("data-id", "42")
            .with("class", vec!["a", "b"])
            .with("title", "demo");

        let names: Vec<&str> = map.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["data-id", "class", "title"]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let map = AttributeMap::new()
            .with("class", "a")
            .with("title", "demo")
            .with("class", "b");

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("class"), Some(&AttributeValue::Value("b".to_string())));
        let names: Vec<&str> = map.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["class", "title"]);
    }

    #[test]
    fn merge_concatenates_colliding_keys() {
        let left = AttributeMap::new().with("class", vec!["extra-class"]);
        let right = AttributeMap::new().with("class", vec!["base-class", "embed-responsive-item"]);

        let merged = AttributeMap::merge_recursive(left, right);
        assert_eq!(
            merged.get("class").unwrap().leaf_values(),
            vec!["extra-class", "base-class", "embed-responsive-item"]
        );
    }

    #[test]
    fn merge_keeps_left_key_order_first() {
        let left = AttributeMap::new().with("data-id", "42").with("class", "x");
        let right = AttributeMap::new().with("class", "y").with("title", "demo");

        let merged = AttributeMap::merge_recursive(left, right);
        let names: Vec<&str> = merged.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["data-id", "class", "title"]);
    }

    #[test]
    fn merge_scalars_into_list() {
        let left = AttributeMap::new().with("rel", "a");
        let right = AttributeMap::new().with("rel", "b");

        let merged = AttributeMap::merge_recursive(left, right);
        assert_eq!(
            merged.get("rel"),
            Some(&AttributeValue::List(vec!["a".to_string(), "b".to_string()]))
        );
    }

    #[test]
    fn merge_nested_maps_key_by_key() {
        let left = AttributeMap::new().with(
            "data",
            AttributeMap::new().with("track", "intro").with("lang", "en"),
        );
        let right = AttributeMap::new().with(
            "data",
            AttributeMap::new().with("lang", "de").with("chapter", "1"),
        );

        let merged = AttributeMap::merge_recursive(left, right);
        let Some(AttributeValue::Map(data)) = merged.get("data") else {
            panic!("expected nested map");
        };
        assert_eq!(data.get("track").unwrap().leaf_values(), vec!["intro"]);
        assert_eq!(data.get("lang").unwrap().leaf_values(), vec!["en", "de"]);
        assert_eq!(data.get("chapter").unwrap().leaf_values(), vec!["1"]);
    }

    #[test]
    fn merge_map_with_scalar_flattens_leaves() {
        let left = AttributeMap::new().with(
            "data",
            AttributeMap::new().with("a", "1").with("b", "2"),
        );
        let right = AttributeMap::new().with("data", "3");

        let merged = AttributeMap::merge_recursive(left, right);
        assert_eq!(merged.get("data").unwrap().leaf_values(), vec!["1", "2", "3"]);
    }

    #[test]
    fn collects_from_pairs() {
        let map: AttributeMap = vec![
            ("class".to_string(), AttributeValue::from(vec!["a"])),
            ("data-id".to_string(), AttributeValue::from("42")),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("data-id").unwrap().leaf_values(), vec!["42"]);
    }

    #[test]
    fn serde_round_trip_preserves_order_and_shape() {
        let map = AttributeMap::new()
            .with("class", vec!["a", "b"])
            .with("data-id", "42")
            .with("data", AttributeMap::new().with("lang", "en"));

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            r#"{"class":["a","b"],"data-id":"42","data":{"lang":"en"}}"#
        );

        let back: AttributeMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn deserialize_coerces_numbers_to_strings() {
        let map: AttributeMap =
            serde_json::from_str(r#"{"width":640,"async":true}"#).unwrap();
        assert_eq!(map.get("width").unwrap().leaf_values(), vec!["640"]);
        assert_eq!(map.get("async").unwrap().leaf_values(), vec!["true"]);
    }

    #[test]
    fn deserialize_rejects_non_mapping() {
        let result: Result<AttributeMap, _> = serde_json::from_str(r#""not-a-map""#);
        assert!(result.is_err());
    }
}
