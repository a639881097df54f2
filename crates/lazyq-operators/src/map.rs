//! Projection stages.

use std::rc::Rc;

use lazyq_core::{Cursor, Query};

pub fn select<T, U, F>(source: &Query<T>, selector: F) -> Query<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    let upstream = source.clone();
    let selector = Rc::new(selector);
    source.derive(move || {
        let mut next = upstream.iterate();
        let selector = Rc::clone(&selector);
        Cursor::new(move || next.next().map(|item| selector(item)))
    })
}

/// `selector` also receives the zero-based position of the element.
pub fn select_indexed<T, U, F>(source: &Query<T>, selector: F) -> Query<U>
where
    T: 'static,
    U: 'static,
    F: Fn(usize, T) -> U + 'static,
{
    let upstream = source.clone();
    let selector = Rc::new(selector);
    source.derive(move || {
        let mut next = upstream.iterate();
        let selector = Rc::clone(&selector);
        let mut index = 0usize;
        Cursor::new(move || {
            let item = next.next()?;
            let out = selector(index, item);
            index += 1;
            Some(out)
        })
    })
}

/// Flatten the sequence produced for each element, in order.
pub fn select_many<T, I, F>(source: &Query<T>, selector: F) -> Query<I::Item>
where
    T: 'static,
    I: IntoIterator + 'static,
    I::Item: 'static,
    I::IntoIter: 'static,
    F: Fn(T) -> I + 'static,
{
    let upstream = source.clone();
    let selector = Rc::new(selector);
    source.derive(move || {
        let mut next = upstream.iterate();
        let selector = Rc::clone(&selector);
        let mut inner: Option<I::IntoIter> = None;
        Cursor::new(move || loop {
            if let Some(item) = inner.as_mut().and_then(Iterator::next) {
                return Some(item);
            }
            inner = Some(selector(next.next()?).into_iter());
        })
    })
}

/// Pair elements positionally; stops at the shorter side.
pub fn zip<T, U, R, F>(source: &Query<T>, other: &Query<U>, result: F) -> Query<R>
where
    T: 'static,
    U: 'static,
    R: 'static,
    F: Fn(T, U) -> R + 'static,
{
    let upstream = source.clone();
    let other = other.clone();
    let result = Rc::new(result);
    source.derive(move || {
        let mut left = upstream.iterate();
        let mut right = other.iterate();
        let result = Rc::clone(&result);
        Cursor::new(move || {
            let a = left.next()?;
            let b = right.next()?;
            Some(result(a, b))
        })
    })
}
