//! GroupBy: drain the source into a key -> elements multi-map, then emit one
//! `Group` per key.
//!
//! Groups come out in hash-iteration order, which is not stable across runs
//! or across two cursors of the same query. Elements inside a group keep
//! their source order. Callers needing a stable key order should sort the
//! groups or use `to_lookup`, which keeps first-seen key order.

use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use lazyq_core::{Cursor, Group, Query};

use crate::metrics;

pub fn group_by<T, K, E, FK, FE>(source: &Query<T>, key: FK, element: FE) -> Query<Group<K, E>>
where
    T: 'static,
    K: Eq + Hash + 'static,
    E: 'static,
    FK: Fn(&T) -> K + 'static,
    FE: Fn(T) -> E + 'static,
{
    let upstream = source.clone();
    let capacity = source.config().lookup_capacity;
    let key = Rc::new(key);
    let element = Rc::new(element);
    source.derive(move || {
        let mut groups: HashMap<K, Vec<E>> = HashMap::with_capacity(capacity);
        let mut rows = 0usize;
        for item in upstream.iterate() {
            let k = key(&item);
            groups.entry(k).or_default().push(element(item));
            rows += 1;
        }
        metrics::record_lookup("group_by", groups.len(), rows);

        let mut drain = groups.into_iter();
        Cursor::new(move || {
            drain
                .next()
                .map(|(key, group)| Group { key, group })
        })
    })
}
