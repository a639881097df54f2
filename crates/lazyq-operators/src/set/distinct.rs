use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use lazyq_core::{Cursor, Query};

/// Unique elements in first-seen order.
pub fn distinct<T>(source: &Query<T>) -> Query<T>
where
    T: Eq + Hash + Clone + 'static,
{
    let upstream = source.clone();
    let capacity = source.config().lookup_capacity;
    source.derive(move || {
        let mut next = upstream.iterate();
        let mut seen: HashSet<T> = HashSet::with_capacity(capacity);
        Cursor::new(move || next.find(|item| seen.insert(item.clone())))
    })
}

/// First element for each distinct `selector` key.
pub fn distinct_by<T, K, F>(source: &Query<T>, selector: F) -> Query<T>
where
    T: 'static,
    K: Eq + Hash + 'static,
    F: Fn(&T) -> K + 'static,
{
    let upstream = source.clone();
    let capacity = source.config().lookup_capacity;
    let selector = Rc::new(selector);
    source.derive(move || {
        let mut next = upstream.iterate();
        let selector = Rc::clone(&selector);
        let mut seen: HashSet<K> = HashSet::with_capacity(capacity);
        Cursor::new(move || next.find(|item| seen.insert(selector(item))))
    })
}
