//! Inner hash join.
//!
//! Preserves the order of the outer query and, within one outer element, the
//! order of its matching inner elements. Outer elements without a match
//! produce nothing.

use std::hash::Hash;
use std::rc::Rc;

use lazyq_core::{Cursor, Query};

use super::build_lookup;

pub fn join<O, I, K, R, FO, FI, FR>(
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
    FR: Fn(&O, &I) -> R + 'static,
{
    let upstream = outer.clone();
    let inner = inner.clone();
    let capacity = outer.config().lookup_capacity;
    let outer_key = Rc::new(outer_key);
    let inner_key = Rc::new(inner_key);
    let result = Rc::new(result);
    outer.derive(move || {
        let mut next = upstream.iterate();
        let lookup = build_lookup("join", &inner, &*inner_key, capacity);
        let outer_key = Rc::clone(&outer_key);
        let result = Rc::clone(&result);

        // (outer element, slot of its inner group, position within the group)
        let mut current: Option<(O, usize, usize)> = None;

        Cursor::new(move || loop {
            if let Some((item, slot, pos)) = current.as_mut() {
                let group = lookup.slot(*slot);
                if *pos < group.len() {
                    let out = result(&*item, &group[*pos]);
                    *pos += 1;
                    return Some(out);
                }
            }
            current = None;
            let item = next.next()?;
            if let Some(slot) = lookup.slot_of(&outer_key(&item)) {
                current = Some((item, slot, 0));
            }
        })
    })
}
