//! Whole-sequence reshaping: concatenation, single-element edges, reverse.

use lazyq_core::{Cursor, Query};

use crate::metrics;

/// All of `source`, then all of `other`.
pub fn concat<T>(source: &Query<T>, other: &Query<T>) -> Query<T>
where
    T: 'static,
{
    let upstream = source.clone();
    let other = other.clone();
    source.derive(move || {
        let mut first = upstream.iterate();
        let other = other.clone();
        let mut second: Option<Cursor<T>> = None;
        Cursor::new(move || {
            if second.is_none() {
                if let Some(item) = first.next() {
                    return Some(item);
                }
            }
            second.get_or_insert_with(|| other.iterate()).next()
        })
    })
}

pub fn append<T>(source: &Query<T>, item: T) -> Query<T>
where
    T: Clone + 'static,
{
    let upstream = source.clone();
    source.derive(move || {
        let mut next = upstream.iterate();
        let mut tail = Some(item.clone());
        Cursor::new(move || next.next().or_else(|| tail.take()))
    })
}

pub fn prepend<T>(source: &Query<T>, item: T) -> Query<T>
where
    T: Clone + 'static,
{
    let upstream = source.clone();
    source.derive(move || {
        let mut next = upstream.iterate();
        let mut head = Some(item.clone());
        Cursor::new(move || head.take().or_else(|| next.next()))
    })
}

/// `value` alone if the upstream turns out to be empty.
pub fn default_if_empty<T>(source: &Query<T>, value: T) -> Query<T>
where
    T: Clone + 'static,
{
    let upstream = source.clone();
    source.derive(move || {
        let mut next = upstream.iterate();
        let mut fallback = Some(value.clone());
        Cursor::new(move || match next.next() {
            Some(item) => {
                fallback = None;
                Some(item)
            }
            None => fallback.take(),
        })
    })
}

/// Buffers the whole upstream on the first pull, then streams it backwards.
pub fn reverse<T>(source: &Query<T>) -> Query<T>
where
    T: 'static,
{
    let upstream = source.clone();
    let capacity = source.config().sort_buffer_capacity;
    source.derive(move || {
        let upstream = upstream.clone();
        let mut buffer: Option<Vec<T>> = None;
        Cursor::new(move || {
            let items = buffer.get_or_insert_with(|| {
                let mut items = Vec::with_capacity(capacity);
                items.extend(upstream.iterate());
                metrics::record_materialize("reverse", items.len());
                items
            });
            items.pop()
        })
    })
}

