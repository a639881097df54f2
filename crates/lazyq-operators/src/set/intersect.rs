use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use lazyq_core::{Cursor, Query};

use crate::metrics;

/// Elements of `source` that also appear in `other`.
///
/// A value is removed from the set on its first match, so each distinct value
/// of `other` admits at most one element of `source`.
pub fn intersect<T>(source: &Query<T>, other: &Query<T>) -> Query<T>
where
    T: Eq + Hash + 'static,
{
    let upstream = source.clone();
    let other = other.clone();
    let capacity = source.config().lookup_capacity;
    source.derive(move || {
        let mut next = upstream.iterate();

        let mut remaining: HashSet<T> = HashSet::with_capacity(capacity);
        let mut rows = 0usize;
        for item in other.iterate() {
            remaining.insert(item);
            rows += 1;
        }
        metrics::record_lookup("intersect", remaining.len(), rows);

        Cursor::new(move || next.find(|item| remaining.remove(item)))
    })
}

/// Keyed form of `intersect`; the first element of `source` per matching key
/// wins and consumes that key.
pub fn intersect_by<T, K, F>(source: &Query<T>, other: &Query<T>, selector: F) -> Query<T>
where
    T: 'static,
    K: Eq + Hash + 'static,
    F: Fn(&T) -> K + 'static,
{
    let upstream = source.clone();
    let other = other.clone();
    let capacity = source.config().lookup_capacity;
    let selector = Rc::new(selector);
    source.derive(move || {
        let mut next = upstream.iterate();
        let selector = Rc::clone(&selector);

        let mut remaining: HashSet<K> = HashSet::with_capacity(capacity);
        let mut rows = 0usize;
        for item in other.iterate() {
            remaining.insert(selector(&item));
            rows += 1;
        }
        metrics::record_lookup("intersect_by", remaining.len(), rows);

        Cursor::new(move || next.find(|item| remaining.remove(&selector(item))))
    })
}
