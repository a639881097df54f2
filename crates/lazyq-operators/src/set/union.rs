use std::collections::HashSet;
use std::hash::Hash;

use lazyq_core::{Cursor, Query};

/// Distinct elements of `source` followed by the distinct elements of
/// `other` not already produced. Both sides are pulled lazily.
pub fn union<T>(source: &Query<T>, other: &Query<T>) -> Query<T>
where
    T: Eq + Hash + Clone + 'static,
{
    let upstream = source.clone();
    let other = other.clone();
    let capacity = source.config().lookup_capacity;
    source.derive(move || {
        let mut first = upstream.iterate();
        let other = other.clone();
        let mut second: Option<Cursor<T>> = None;
        let mut seen: HashSet<T> = HashSet::with_capacity(capacity);
        Cursor::new(move || {
            if second.is_none() {
                if let Some(item) = first.find(|item| seen.insert(item.clone())) {
                    return Some(item);
                }
            }
            second
                .get_or_insert_with(|| other.iterate())
                .find(|item| seen.insert(item.clone()))
        })
    })
}
