//! Terminals that materialize a query or inspect a bounded prefix of it.
//!
//! Short-circuiting terminals (`first`, `any`, `element_at`, ...) stop pulling
//! as soon as they have an answer; the rest drain the cursor.

use std::collections::HashMap;
use std::hash::Hash;

use lazyq_core::{Error, KeyValue, Query, Result};

use crate::aggregate::try_aggregate_with_seed;

pub fn to_vec<T: 'static>(source: &Query<T>) -> Vec<T> {
    source.iterate().collect()
}

/// Collect `KeyValue` elements into a map; a repeated key keeps the last
/// value.
pub fn to_map<K, V>(source: &Query<KeyValue<K, V>>) -> HashMap<K, V>
where
    K: Eq + Hash + 'static,
    V: 'static,
{
    let mut map = HashMap::with_capacity(source.config().lookup_capacity);
    map.extend(source.iterate().map(|kv| (kv.key, kv.value)));
    map
}

/// Collect into a map with derived keys and values; last write wins.
pub fn to_map_by<T, K, V, FK, FV>(source: &Query<T>, key: FK, value: FV) -> HashMap<K, V>
where
    T: 'static,
    K: Eq + Hash,
    FK: Fn(&T) -> K,
    FV: Fn(T) -> V,
{
    let mut map = HashMap::with_capacity(source.config().lookup_capacity);
    for item in source.iterate() {
        map.insert(key(&item), value(item));
    }
    map
}

/// Like `to_map_by`, but a repeated key is an error.
pub fn try_to_map_by<T, K, V, FK, FV>(source: &Query<T>, key: FK, value: FV) -> Result<HashMap<K, V>>
where
    T: 'static,
    K: Eq + Hash,
    FK: Fn(&T) -> K,
    FV: Fn(T) -> V,
{
    let map = HashMap::with_capacity(source.config().lookup_capacity);
    try_aggregate_with_seed(source, map, |mut map, item| {
        let k = key(&item);
        if map.contains_key(&k) {
            return Err(Error::DuplicateKey { op: "try_to_map_by" });
        }
        map.insert(k, value(item));
        Ok(map)
    })
}

pub fn for_each<T, F>(source: &Query<T>, f: F)
where
    T: 'static,
    F: FnMut(T),
{
    source.iterate().for_each(f);
}

pub fn first<T: 'static>(source: &Query<T>) -> Option<T> {
    source.iterate().next()
}

pub fn first_where<T, P>(source: &Query<T>, predicate: P) -> Option<T>
where
    T: 'static,
    P: Fn(&T) -> bool,
{
    source.iterate().find(|item| predicate(item))
}

pub fn last<T: 'static>(source: &Query<T>) -> Option<T> {
    source.iterate().last()
}

pub fn last_where<T, P>(source: &Query<T>, predicate: P) -> Option<T>
where
    T: 'static,
    P: Fn(&T) -> bool,
{
    source.iterate().filter(|item| predicate(item)).last()
}

/// The only element. Stops pulling after the second element.
pub fn single<T: 'static>(source: &Query<T>) -> Result<T> {
    let mut next = source.iterate();
    let item = next.next().ok_or(Error::Empty { op: "single" })?;
    if next.next().is_some() {
        return Err(Error::MoreThanOne { op: "single" });
    }
    Ok(item)
}

pub fn single_where<T, P>(source: &Query<T>, predicate: P) -> Result<T>
where
    T: 'static,
    P: Fn(&T) -> bool,
{
    let mut matches = source.iterate().filter(|item| predicate(item));
    let item = matches.next().ok_or(Error::Empty { op: "single_where" })?;
    if matches.next().is_some() {
        return Err(Error::MoreThanOne { op: "single_where" });
    }
    Ok(item)
}

pub fn element_at<T: 'static>(source: &Query<T>, index: usize) -> Option<T> {
    source.iterate().nth(index)
}

/// Zero-based position of the first element matching `predicate`.
pub fn index_of<T, P>(source: &Query<T>, predicate: P) -> Option<usize>
where
    T: 'static,
    P: Fn(&T) -> bool,
{
    source.iterate().position(|item| predicate(&item))
}

pub fn any<T: 'static>(source: &Query<T>) -> bool {
    source.iterate().next().is_some()
}

pub fn any_where<T, P>(source: &Query<T>, predicate: P) -> bool
where
    T: 'static,
    P: Fn(&T) -> bool,
{
    source.iterate().any(|item| predicate(&item))
}

/// True for an empty sequence.
pub fn all<T, P>(source: &Query<T>, predicate: P) -> bool
where
    T: 'static,
    P: Fn(&T) -> bool,
{
    source.iterate().all(|item| predicate(&item))
}

pub fn contains<T>(source: &Query<T>, value: &T) -> bool
where
    T: PartialEq + 'static,
{
    source.iterate().any(|item| &item == value)
}

/// Same length and pairwise equal elements, in order.
pub fn sequence_equal<T>(source: &Query<T>, other: &Query<T>) -> bool
where
    T: PartialEq + 'static,
{
    source.iterate().eq(other.iterate())
}
