//! `QueryExt`: the combinator and terminal surface of a `Query`.
//!
//! Stages return a new `Query` (or `OrderedQuery`) without evaluating
//! anything. Terminals pull. Each method delegates to the module that
//! implements it, so the free functions remain usable on their own.
//!
//! Bounds are per method: only stages that hash an element or key ask for
//! `Eq + Hash`, only stages that keep a copy of an element they also emit ask
//! for `Clone`, and only ordering stages ask for `Ord`.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Add;

use lazyq_core::{Group, KeyValue, Query, Result};

use crate::lookup::Lookup;
use crate::sort::OrderedQuery;
use crate::{aggregate, filter, group_by, join, map, sequence, set, sort, terminal};

pub trait QueryExt<T: 'static> {
    fn as_query(&self) -> &Query<T>;

    // ---- stateless stages -------------------------------------------------

    fn filter<P>(&self, predicate: P) -> Query<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        filter::filter(self.as_query(), predicate)
    }

    fn filter_indexed<P>(&self, predicate: P) -> Query<T>
    where
        P: Fn(usize, &T) -> bool + 'static,
    {
        filter::filter_indexed(self.as_query(), predicate)
    }

    fn take(&self, count: usize) -> Query<T> {
        filter::take(self.as_query(), count)
    }

    fn skip(&self, count: usize) -> Query<T> {
        filter::skip(self.as_query(), count)
    }

    fn take_while<P>(&self, predicate: P) -> Query<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        filter::take_while(self.as_query(), predicate)
    }

    fn skip_while<P>(&self, predicate: P) -> Query<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        filter::skip_while(self.as_query(), predicate)
    }

    fn select<U, F>(&self, selector: F) -> Query<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        map::select(self.as_query(), selector)
    }

    fn select_indexed<U, F>(&self, selector: F) -> Query<U>
    where
        U: 'static,
        F: Fn(usize, T) -> U + 'static,
    {
        map::select_indexed(self.as_query(), selector)
    }

    fn select_many<I, F>(&self, selector: F) -> Query<I::Item>
    where
        I: IntoIterator + 'static,
        I::Item: 'static,
        I::IntoIter: 'static,
        F: Fn(T) -> I + 'static,
    {
        map::select_many(self.as_query(), selector)
    }

    fn zip<U, R, F>(&self, other: &Query<U>, result: F) -> Query<R>
    where
        U: 'static,
        R: 'static,
        F: Fn(T, U) -> R + 'static,
    {
        map::zip(self.as_query(), other, result)
    }

    fn concat(&self, other: &Query<T>) -> Query<T> {
        sequence::concat(self.as_query(), other)
    }

    fn append(&self, item: T) -> Query<T>
    where
        T: Clone,
    {
        sequence::append(self.as_query(), item)
    }

    fn prepend(&self, item: T) -> Query<T>
    where
        T: Clone,
    {
        sequence::prepend(self.as_query(), item)
    }

    fn default_if_empty(&self, value: T) -> Query<T>
    where
        T: Clone,
    {
        sequence::default_if_empty(self.as_query(), value)
    }

    fn reverse(&self) -> Query<T> {
        sequence::reverse(self.as_query())
    }

    // ---- set stages -------------------------------------------------------

    fn distinct(&self) -> Query<T>
    where
        T: Eq + Hash + Clone,
    {
        set::distinct(self.as_query())
    }

    fn distinct_by<K, F>(&self, selector: F) -> Query<T>
    where
        K: Eq + Hash + 'static,
        F: Fn(&T) -> K + 'static,
    {
        set::distinct_by(self.as_query(), selector)
    }

    fn except(&self, other: &Query<T>) -> Query<T>
    where
        T: Eq + Hash,
    {
        set::except(self.as_query(), other)
    }

    fn except_by<K, F>(&self, other: &Query<T>, selector: F) -> Query<T>
    where
        K: Eq + Hash + 'static,
        F: Fn(&T) -> K + 'static,
    {
        set::except_by(self.as_query(), other, selector)
    }

    fn intersect(&self, other: &Query<T>) -> Query<T>
    where
        T: Eq + Hash,
    {
        set::intersect(self.as_query(), other)
    }

    fn intersect_by<K, F>(&self, other: &Query<T>, selector: F) -> Query<T>
    where
        K: Eq + Hash + 'static,
        F: Fn(&T) -> K + 'static,
    {
        set::intersect_by(self.as_query(), other, selector)
    }

    fn union(&self, other: &Query<T>) -> Query<T>
    where
        T: Eq + Hash + Clone,
    {
        set::union(self.as_query(), other)
    }

    // ---- correlation ------------------------------------------------------

    fn join<I, K, R, FO, FI, FR>(
        &self,
        inner: &Query<I>,
        outer_key: FO,
        inner_key: FI,
        result: FR,
    ) -> Query<R>
    where
        I: 'static,
        K: Eq + Hash + Clone + 'static,
        R: 'static,
        FO: Fn(&T) -> K + 'static,
        FI: Fn(&I) -> K + 'static,
        FR: Fn(&T, &I) -> R + 'static,
    {
        join::join(self.as_query(), inner, outer_key, inner_key, result)
    }

    fn group_join<I, K, R, FO, FI, FR>(
        &self,
        inner: &Query<I>,
        outer_key: FO,
        inner_key: FI,
        result: FR,
    ) -> Query<R>
    where
        I: 'static,
        K: Eq + Hash + Clone + 'static,
        R: 'static,
        FO: Fn(&T) -> K + 'static,
        FI: Fn(&I) -> K + 'static,
        FR: Fn(T, &[I]) -> R + 'static,
    {
        join::group_join(self.as_query(), inner, outer_key, inner_key, result)
    }

    /// Group order is not guaranteed; see `group_by` module docs.
    fn group_by<K, E, FK, FE>(&self, key: FK, element: FE) -> Query<Group<K, E>>
    where
        K: Eq + Hash + 'static,
        E: 'static,
        FK: Fn(&T) -> K + 'static,
        FE: Fn(T) -> E + 'static,
    {
        group_by::group_by(self.as_query(), key, element)
    }

    fn group_by_key<K, FK>(&self, key: FK) -> Query<Group<K, T>>
    where
        K: Eq + Hash + 'static,
        FK: Fn(&T) -> K + 'static,
    {
        group_by::group_by(self.as_query(), key, |item| item)
    }

    // ---- ordering ---------------------------------------------------------

    fn order_by<K, F>(&self, key: F) -> OrderedQuery<T>
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        sort::order_by(self.as_query(), key)
    }

    fn order_by_descending<K, F>(&self, key: F) -> OrderedQuery<T>
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        sort::order_by_descending(self.as_query(), key)
    }

    fn sort_by<F>(&self, compare: F) -> OrderedQuery<T>
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        sort::sort_by(self.as_query(), compare)
    }

    // ---- aggregates -------------------------------------------------------

    fn aggregate<F>(&self, f: F) -> Option<T>
    where
        F: Fn(T, T) -> T,
    {
        aggregate::aggregate(self.as_query(), f)
    }

    fn aggregate_with_seed<A, F>(&self, seed: A, f: F) -> A
    where
        F: Fn(A, T) -> A,
    {
        aggregate::aggregate_with_seed(self.as_query(), seed, f)
    }

    fn aggregate_with_seed_by<A, R, F, FR>(&self, seed: A, f: F, result: FR) -> R
    where
        F: Fn(A, T) -> A,
        FR: FnOnce(A) -> R,
    {
        aggregate::aggregate_with_seed_by(self.as_query(), seed, f, result)
    }

    fn count(&self) -> usize {
        aggregate::count(self.as_query())
    }

    fn count_by<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        aggregate::count_by(self.as_query(), predicate)
    }

    fn sum(&self) -> T
    where
        T: Add<Output = T> + Default,
    {
        aggregate::sum(self.as_query())
    }

    fn min(&self) -> Option<T>
    where
        T: Ord,
    {
        aggregate::min(self.as_query())
    }

    fn max(&self) -> Option<T>
    where
        T: Ord,
    {
        aggregate::max(self.as_query())
    }

    fn min_by_key<K, F>(&self, key: F) -> Option<T>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        aggregate::min_by_key(self.as_query(), key)
    }

    fn max_by_key<K, F>(&self, key: F) -> Option<T>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        aggregate::max_by_key(self.as_query(), key)
    }

    fn average<F>(&self, selector: F) -> Option<f64>
    where
        F: Fn(&T) -> f64,
    {
        aggregate::average(self.as_query(), selector)
    }

    fn to_lookup<K, E, FK, FE>(&self, key: FK, element: FE) -> Lookup<K, E>
    where
        K: Eq + Hash + Clone,
        FK: Fn(&T) -> K,
        FE: Fn(T) -> E,
    {
        aggregate::to_lookup(self.as_query(), key, element)
    }

    // ---- other terminals --------------------------------------------------

    fn to_vec(&self) -> Vec<T> {
        terminal::to_vec(self.as_query())
    }

    fn to_map_by<K, V, FK, FV>(&self, key: FK, value: FV) -> HashMap<K, V>
    where
        K: Eq + Hash,
        FK: Fn(&T) -> K,
        FV: Fn(T) -> V,
    {
        terminal::to_map_by(self.as_query(), key, value)
    }

    fn try_to_map_by<K, V, FK, FV>(&self, key: FK, value: FV) -> Result<HashMap<K, V>>
    where
        K: Eq + Hash,
        FK: Fn(&T) -> K,
        FV: Fn(T) -> V,
    {
        terminal::try_to_map_by(self.as_query(), key, value)
    }

    fn for_each<F>(&self, f: F)
    where
        F: FnMut(T),
    {
        terminal::for_each(self.as_query(), f);
    }

    fn first(&self) -> Option<T> {
        terminal::first(self.as_query())
    }

    fn first_where<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        terminal::first_where(self.as_query(), predicate)
    }

    fn last(&self) -> Option<T> {
        terminal::last(self.as_query())
    }

    fn last_where<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        terminal::last_where(self.as_query(), predicate)
    }

    fn single(&self) -> Result<T> {
        terminal::single(self.as_query())
    }

    fn single_where<P>(&self, predicate: P) -> Result<T>
    where
        P: Fn(&T) -> bool,
    {
        terminal::single_where(self.as_query(), predicate)
    }

    fn element_at(&self, index: usize) -> Option<T> {
        terminal::element_at(self.as_query(), index)
    }

    fn index_of<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&T) -> bool,
    {
        terminal::index_of(self.as_query(), predicate)
    }

    fn any(&self) -> bool {
        terminal::any(self.as_query())
    }

    fn any_where<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        terminal::any_where(self.as_query(), predicate)
    }

    fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        terminal::all(self.as_query(), predicate)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        terminal::contains(self.as_query(), value)
    }

    fn sequence_equal(&self, other: &Query<T>) -> bool
    where
        T: PartialEq,
    {
        terminal::sequence_equal(self.as_query(), other)
    }
}

impl<T: 'static> QueryExt<T> for Query<T> {
    fn as_query(&self) -> &Query<T> {
        self
    }
}

/// Map materialization for queries of `KeyValue` pairs.
pub trait KeyValueQueryExt<K, V> {
    /// Last write wins for repeated keys.
    fn to_map(&self) -> HashMap<K, V>;
}

impl<K, V> KeyValueQueryExt<K, V> for Query<KeyValue<K, V>>
where
    K: Eq + Hash + 'static,
    V: 'static,
{
    fn to_map(&self) -> HashMap<K, V> {
        terminal::to_map(self)
    }
}
