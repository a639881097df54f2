//! Equality-key correlation of two queries.
//!
//! Both stages build a `Lookup` from inner key to the ordered inner elements
//! sharing it, eagerly, when their cursor is created. That turns a nested-loop
//! correlation into one pass over each side.

pub mod group;
pub mod hash;

pub use group::group_join;
pub use hash::join;

use std::hash::Hash;

use lazyq_core::Query;

use crate::lookup::Lookup;
use crate::metrics;

/// Drain `inner` into a lookup keyed by `key`.
pub(crate) fn build_lookup<I, K, F>(
    stage: &'static str,
    inner: &Query<I>,
    key: &F,
    capacity: usize,
) -> Lookup<K, I>
where
    I: 'static,
    K: Eq + Hash + Clone,
    F: Fn(&I) -> K + ?Sized,
{
    let mut lookup = Lookup::with_capacity(capacity);
    for item in inner.iterate() {
        lookup.push(key(&item), item);
    }
    metrics::record_lookup(stage, lookup.len(), lookup.rows());
    lookup
}
