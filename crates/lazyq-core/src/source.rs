//! Sequence sources: adapters that turn a concrete collection into a `Query`.
//!
//! The only contract a source has with the engine is "produce a fresh cursor
//! on demand". Sources backed by owned data are replayable; `from_channel` is
//! one-shot and re-iterating it continues from wherever the channel is.

use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;
use std::sync::mpsc::Receiver;

use crate::cursor::Cursor;
use crate::query::Query;
use crate::types::KeyValue;

/// Implemented by custom collections that can hand out fresh cursors.
pub trait Iterable<T> {
    fn iterate(&self) -> Cursor<T>;
}

/// Replayable source over an owned vector. Elements are cloned out on pull.
pub fn from_vec<T>(source: Vec<T>) -> Query<T>
where
    T: Clone + 'static,
{
    let items: Rc<[T]> = source.into();
    Query::new(move || {
        let items = Rc::clone(&items);
        let mut index = 0;
        Cursor::new(move || {
            let item = items.get(index)?.clone();
            index += 1;
            Some(item)
        })
    })
}

/// Replayable source over a copy of `source`.
pub fn from_slice<T>(source: &[T]) -> Query<T>
where
    T: Clone + 'static,
{
    from_vec(source.to_vec())
}

/// Key/value pairs of `source`, in unspecified order.
///
/// Each cursor snapshots the key order once, so a single iteration is
/// consistent even though two iterations need not agree.
pub fn from_map<K, V>(source: HashMap<K, V>) -> Query<KeyValue<K, V>>
where
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
{
    let map = Rc::new(source);
    Query::new(move || {
        let map = Rc::clone(&map);
        let keys: Vec<K> = map.keys().cloned().collect();
        let mut index = 0;
        Cursor::new(move || {
            let key = keys.get(index)?;
            index += 1;
            let value = map.get(key)?.clone();
            Some(KeyValue::new(key.clone(), value))
        })
    })
}

/// Pulls block until a value arrives or every sender has hung up.
///
/// The receiver is shared by all cursors; a second `iterate()` after the
/// channel closed yields an exhausted cursor.
pub fn from_channel<T>(source: Receiver<T>) -> Query<T>
where
    T: 'static,
{
    let rx = Rc::new(source);
    Query::new(move || {
        let rx = Rc::clone(&rx);
        Cursor::new(move || rx.recv().ok())
    })
}

/// The characters of `source`.
pub fn from_string(source: &str) -> Query<char> {
    let chars: Rc<[char]> = source.chars().collect();
    Query::new(move || {
        let chars = Rc::clone(&chars);
        let mut index = 0;
        Cursor::new(move || {
            let c = *chars.get(index)?;
            index += 1;
            Some(c)
        })
    })
}

/// Wrap a custom collection.
pub fn from_iterable<T, I>(source: I) -> Query<T>
where
    T: 'static,
    I: Iterable<T> + 'static,
{
    let source = Rc::new(source);
    Query::new(move || source.iterate())
}

/// Wrap any cloneable `IntoIterator`; each cursor iterates a fresh clone.
pub fn from_iter<I>(source: I) -> Query<I::Item>
where
    I: IntoIterator + Clone + 'static,
    I::Item: 'static,
    I::IntoIter: 'static,
{
    Query::new(move || Cursor::adapt(source.clone()))
}

/// `count` consecutive integers starting at `start`.
///
/// Ends early, without wrapping, once the next value would pass `i64::MAX`.
pub fn range(start: i64, count: usize) -> Query<i64> {
    Query::new(move || {
        let mut emitted = 0usize;
        Cursor::new(move || {
            if emitted >= count {
                return None;
            }
            let value = i64::try_from(emitted)
                .ok()
                .and_then(|offset| start.checked_add(offset))?;
            emitted += 1;
            Some(value)
        })
    })
}

/// `value` repeated `count` times.
pub fn repeat<T>(value: T, count: usize) -> Query<T>
where
    T: Clone + 'static,
{
    Query::new(move || {
        let value = value.clone();
        let mut emitted = 0usize;
        Cursor::new(move || {
            if emitted >= count {
                return None;
            }
            emitted += 1;
            Some(value.clone())
        })
    })
}

pub fn empty<T: 'static>() -> Query<T> {
    Query::new(Cursor::empty)
}
