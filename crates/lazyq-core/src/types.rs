//! Element shapes produced by sources and stages.

use serde::{Deserialize, Serialize};

/// A key/value pair. Produced when iterating a map source and consumed by
/// `to_map`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KeyValue<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> KeyValue<K, V> {
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K, V> From<(K, V)> for KeyValue<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

/// All elements whose derived key compared equal, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group<K, V> {
    pub key: K,
    pub group: Vec<V>,
}

impl<K, V> Group<K, V> {
    pub fn len(&self) -> usize {
        self.group.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_from_tuple() {
        let kv: KeyValue<&str, i32> = ("a", 1).into();
        assert_eq!(kv, KeyValue::new("a", 1));
    }

    #[test]
    fn group_json_shape() {
        let g = Group {
            key: 7u8,
            group: vec!["x", "y"],
        };
        assert_eq!(g.len(), 2);
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"key":7,"group":["x","y"]}"#);
    }
}
