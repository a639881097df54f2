use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use lazyq_core::{Cursor, Query};

use crate::metrics;

/// Elements of `source` that do not appear in `other`.
///
/// Duplicates in `source` are kept; only membership in `other` matters.
pub fn except<T>(source: &Query<T>, other: &Query<T>) -> Query<T>
where
    T: Eq + Hash + 'static,
{
    let upstream = source.clone();
    let other = other.clone();
    let capacity = source.config().lookup_capacity;
    source.derive(move || {
        let mut next = upstream.iterate();

        let mut excluded: HashSet<T> = HashSet::with_capacity(capacity);
        let mut rows = 0usize;
        for item in other.iterate() {
            excluded.insert(item);
            rows += 1;
        }
        metrics::record_lookup("except", excluded.len(), rows);

        Cursor::new(move || next.find(|item| !excluded.contains(item)))
    })
}

/// Elements of `source` whose key does not appear among the keys of `other`.
pub fn except_by<T, K, F>(source: &Query<T>, other: &Query<T>, selector: F) -> Query<T>
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

        let mut excluded: HashSet<K> = HashSet::with_capacity(capacity);
        let mut rows = 0usize;
        for item in other.iterate() {
            excluded.insert(selector(&item));
            rows += 1;
        }
        metrics::record_lookup("except_by", excluded.len(), rows);

        Cursor::new(move || next.find(|item| !excluded.contains(&selector(item))))
    })
}
