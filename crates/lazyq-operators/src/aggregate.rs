//! Folding terminals.
//!
//! Every fold drains its cursor completely and applies the accumulator
//! strictly left to right in iteration order, so the accumulator need not be
//! associative or commutative.

use std::hash::Hash;
use std::ops::Add;

use lazyq_core::{Query, Result};

use crate::lookup::Lookup;
use crate::metrics;

/// The first element seeds the fold. `None` on an empty sequence.
pub fn aggregate<T, F>(source: &Query<T>, f: F) -> Option<T>
where
    T: 'static,
    F: Fn(T, T) -> T,
{
    let mut next = source.iterate();
    let seed = next.next()?;
    Some(next.fold(seed, f))
}

pub fn aggregate_with_seed<T, A, F>(source: &Query<T>, seed: A, f: F) -> A
where
    T: 'static,
    F: Fn(A, T) -> A,
{
    source.iterate().fold(seed, f)
}

/// Seeded fold whose final accumulator is passed through `result`.
pub fn aggregate_with_seed_by<T, A, R, F, FR>(source: &Query<T>, seed: A, f: F, result: FR) -> R
where
    T: 'static,
    F: Fn(A, T) -> A,
    FR: FnOnce(A) -> R,
{
    result(aggregate_with_seed(source, seed, f))
}

pub fn count<T: 'static>(source: &Query<T>) -> usize {
    aggregate_with_seed(source, 0usize, |n, _| n + 1)
}

pub fn count_by<T, P>(source: &Query<T>, predicate: P) -> usize
where
    T: 'static,
    P: Fn(&T) -> bool,
{
    aggregate_with_seed(source, 0usize, |n, item| n + usize::from(predicate(&item)))
}

/// Sum starting from `T::default()`; an empty sequence sums to the default.
pub fn sum<T>(source: &Query<T>) -> T
where
    T: Add<Output = T> + Default + 'static,
{
    aggregate_with_seed(source, T::default(), |acc, item| acc + item)
}

/// Smallest element; the first one wins among equals.
pub fn min<T>(source: &Query<T>) -> Option<T>
where
    T: Ord + 'static,
{
    aggregate(source, |acc, item| if item < acc { item } else { acc })
}

/// Largest element; the first one wins among equals.
pub fn max<T>(source: &Query<T>) -> Option<T>
where
    T: Ord + 'static,
{
    aggregate(source, |acc, item| if item > acc { item } else { acc })
}

pub fn min_by_key<T, K, F>(source: &Query<T>, key: F) -> Option<T>
where
    T: 'static,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut next = source.iterate();
    let first = next.next()?;
    let first_key = key(&first);
    let (best, _) = next.fold((first, first_key), |(best, best_key), item| {
        let k = key(&item);
        if k < best_key {
            (item, k)
        } else {
            (best, best_key)
        }
    });
    Some(best)
}

pub fn max_by_key<T, K, F>(source: &Query<T>, key: F) -> Option<T>
where
    T: 'static,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut next = source.iterate();
    let first = next.next()?;
    let first_key = key(&first);
    let (best, _) = next.fold((first, first_key), |(best, best_key), item| {
        let k = key(&item);
        if k > best_key {
            (item, k)
        } else {
            (best, best_key)
        }
    });
    Some(best)
}

/// Arithmetic mean of `selector` over the sequence. `None` when empty.
pub fn average<T, F>(source: &Query<T>, selector: F) -> Option<f64>
where
    T: 'static,
    F: Fn(&T) -> f64,
{
    let (total, n) = aggregate_with_seed(source, (0.0f64, 0usize), |(total, n), item| {
        (total + selector(&item), n + 1)
    });
    (n > 0).then(|| total / n as f64)
}

/// Materialize into a `Lookup`, keeping first-seen key order.
pub fn to_lookup<T, K, E, FK, FE>(source: &Query<T>, key: FK, element: FE) -> Lookup<K, E>
where
    T: 'static,
    K: Eq + Hash + Clone,
    FK: Fn(&T) -> K,
    FE: Fn(T) -> E,
{
    let capacity = source.config().lookup_capacity;
    let lookup = aggregate_with_seed(source, Lookup::with_capacity(capacity), |mut lookup, item| {
        lookup.push(key(&item), element(item));
        lookup
    });
    metrics::record_lookup("to_lookup", lookup.len(), lookup.rows());
    lookup
}

/// Fold that may fail; stops at the first error.
pub fn try_aggregate_with_seed<T, A, F>(source: &Query<T>, seed: A, f: F) -> Result<A>
where
    T: 'static,
    F: Fn(A, T) -> Result<A>,
{
    let mut acc = seed;
    for item in source.iterate() {
        acc = f(acc, item)?;
    }
    Ok(acc)
}
