//! Group join: left-outer, hierarchical correlation.
//!
//! Exactly one result per outer element, in outer order, paired with every
//! matching inner element (an empty slice when nothing matches).

use std::hash::Hash;
use std::rc::Rc;

use lazyq_core::{Cursor, Query};

use super::build_lookup;

pub fn group_join<O, I, K, R, FO, FI, FR>(
    outer: &Query<O>,
    inner: &Query<I>,
    outer_key: FO,
    inner_key: FI,
    result: FR,
) -> Query<R>
where
    O: 'static,
    I: 'static,
    K: Eq + Hash + Clone + 'static,
    R: 'static,
    FO: Fn(&O) -> K + 'static,
    FI: Fn(&I) -> K + 'static,
    FR: Fn(O, &[I]) -> R + 'static,
{
    let upstream = outer.clone();
    let inner = inner.clone();
    let capacity = outer.config().lookup_capacity;
    let outer_key = Rc::new(outer_key);
    let inner_key = Rc::new(inner_key);
    let result = Rc::new(result);
    outer.derive(move || {
        let mut next = upstream.iterate();
        let lookup = build_lookup("group_join", &inner, &*inner_key, capacity);
        let outer_key = Rc::clone(&outer_key);
        let result = Rc::clone(&result);

        Cursor::new(move || {
            let item = next.next()?;
            let group = lookup.get(&outer_key(&item)).unwrap_or(&[]);
            Some(result(item, group))
        })
    })
}
