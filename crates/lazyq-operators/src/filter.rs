//! Stateless narrowing stages: filter, take/skip and their `_while` forms.
//!
//! None of these buffer; each pull does at most as much upstream work as it
//! needs to decide on one element.

use std::rc::Rc;

use lazyq_core::{Cursor, Query};

pub fn filter<T, P>(source: &Query<T>, predicate: P) -> Query<T>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    let upstream = source.clone();
    let predicate = Rc::new(predicate);
    source.derive(move || {
        let mut next = upstream.iterate();
        let predicate = Rc::clone(&predicate);
        Cursor::new(move || next.find(|item| predicate(item)))
    })
}

/// `predicate` also receives the zero-based upstream position.
pub fn filter_indexed<T, P>(source: &Query<T>, predicate: P) -> Query<T>
where
    T: 'static,
    P: Fn(usize, &T) -> bool + 'static,
{
    let upstream = source.clone();
    let predicate = Rc::new(predicate);
    source.derive(move || {
        let mut next = upstream.iterate();
        let predicate = Rc::clone(&predicate);
        let mut index = 0usize;
        Cursor::new(move || {
            for item in next.by_ref() {
                let at = index;
                index += 1;
                if predicate(at, &item) {
                    return Some(item);
                }
            }
            None
        })
    })
}

/// At most `count` leading elements. Stops pulling upstream once satisfied.
pub fn take<T>(source: &Query<T>, count: usize) -> Query<T>
where
    T: 'static,
{
    let upstream = source.clone();
    source.derive(move || {
        let mut next = upstream.iterate();
        let mut remaining = count;
        Cursor::new(move || {
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            next.next()
        })
    })
}

pub fn skip<T>(source: &Query<T>, count: usize) -> Query<T>
where
    T: 'static,
{
    let upstream = source.clone();
    source.derive(move || {
        let mut next = upstream.iterate();
        let mut to_skip = count;
        Cursor::new(move || {
            while to_skip > 0 {
                to_skip -= 1;
                next.next()?;
            }
            next.next()
        })
    })
}

pub fn take_while<T, P>(source: &Query<T>, predicate: P) -> Query<T>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    let upstream = source.clone();
    let predicate = Rc::new(predicate);
    source.derive(move || {
        let mut next = upstream.iterate();
        let predicate = Rc::clone(&predicate);
        let mut done = false;
        Cursor::new(move || {
            if done {
                return None;
            }
            match next.next() {
                Some(item) if predicate(&item) => Some(item),
                _ => {
                    done = true;
                    None
                }
            }
        })
    })
}

pub fn skip_while<T, P>(source: &Query<T>, predicate: P) -> Query<T>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    let upstream = source.clone();
    let predicate = Rc::new(predicate);
    source.derive(move || {
        let mut next = upstream.iterate();
        let predicate = Rc::clone(&predicate);
        let mut skipping = true;
        Cursor::new(move || {
            if skipping {
                skipping = false;
                return next.find(|item| !predicate(item));
            }
            next.next()
        })
    })
}
