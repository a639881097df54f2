//! `Lookup`: an insertion-ordered multi-map from key to elements.
//!
//! Join and group-join build one of these over their inner operand once per
//! cursor. It is also the materialized result of `to_lookup`, where unlike
//! `group_by` the key order is deterministic (first-seen).

use std::collections::HashMap;
use std::hash::Hash;

use lazyq_core::Group;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "K: Serialize, V: Serialize"))]
pub struct Lookup<K, V> {
    #[serde(skip)]
    index: HashMap<K, usize>,
    groups: Vec<Group<K, V>>,
}

impl<K, V> Lookup<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            groups: Vec::with_capacity(capacity),
        }
    }

    /// Append `value` to the group for `key`, creating the group on first use.
    pub fn push(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&slot) => self.groups[slot].group.push(value),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push(Group {
                    key,
                    group: vec![value],
                });
            }
        }
    }

    /// Elements stored under `key`, in insertion order.
    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.index
            .get(key)
            .map(|&slot| self.groups[slot].group.as_slice())
    }

    pub(crate) fn slot_of(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub(crate) fn slot(&self, slot: usize) -> &[V] {
        &self.groups[slot].group
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of stored elements across all keys.
    pub fn rows(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Groups in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = &Group<K, V>> {
        self.groups.iter()
    }

    pub fn into_groups(self) -> Vec<Group<K, V>> {
        self.groups
    }
}

impl<K, V> Default for Lookup<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<K, V> FromIterator<(K, V)> for Lookup<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut lookup = Self::default();
        for (key, value) in iter {
            lookup.push(key, value);
        }
        lookup
    }
}
