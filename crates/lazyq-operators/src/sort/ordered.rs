//! `OrderedQuery`: a query that carries its order clauses.
//!
//! The unsorted upstream is kept alongside the clauses so `then_by` can
//! rebuild the sort with one more tie-breaker instead of sorting twice. The
//! sort runs when the cursor is first pulled, not when it is created, and is
//! stable: elements equal under every clause keep their upstream order.

use std::cmp::Ordering;
use std::ops::Deref;
use std::rc::Rc;

use lazyq_core::{Cursor, Query};
use serde::{Deserialize, Serialize};

use crate::metrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

type Compare<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

struct OrderClause<T> {
    compare: Compare<T>,
    direction: SortDirection,
}

impl<T> Clone for OrderClause<T> {
    fn clone(&self) -> Self {
        Self {
            compare: Rc::clone(&self.compare),
            direction: self.direction,
        }
    }
}

impl<T> OrderClause<T> {
    fn by_key<K, F>(key: F, direction: SortDirection) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        Self {
            compare: Rc::new(move |a: &T, b: &T| key(a).cmp(&key(b))),
            direction,
        }
    }

    fn apply(&self, a: &T, b: &T) -> Ordering {
        let ord = (self.compare)(a, b);
        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

fn compare_all<T>(orders: &[OrderClause<T>], a: &T, b: &T) -> Ordering {
    orders
        .iter()
        .map(|clause| clause.apply(a, b))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

pub struct OrderedQuery<T> {
    query: Query<T>,
    source: Query<T>,
    orders: Rc<[OrderClause<T>]>,
}

impl<T> Clone for OrderedQuery<T> {
    fn clone(&self) -> Self {
        Self {
            query: self.query.clone(),
            source: self.source.clone(),
            orders: Rc::clone(&self.orders),
        }
    }
}

impl<T> Deref for OrderedQuery<T> {
    type Target = Query<T>;

    fn deref(&self) -> &Query<T> {
        &self.query
    }
}

impl<T: 'static> OrderedQuery<T> {
    fn build(source: Query<T>, orders: Rc<[OrderClause<T>]>) -> Self {
        let query = sorted(&source, Rc::clone(&orders));
        Self {
            query,
            source,
            orders,
        }
    }

    fn push(&self, clause: OrderClause<T>) -> Self {
        let mut orders: Vec<OrderClause<T>> = self.orders.to_vec();
        orders.push(clause);
        Self::build(self.source.clone(), orders.into())
    }

    /// Directions of the accumulated clauses, primary first.
    pub fn directions(&self) -> Vec<SortDirection> {
        self.orders.iter().map(|clause| clause.direction).collect()
    }

    /// Tie-break elements that compare equal so far by `key`, ascending.
    pub fn then_by<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        self.push(OrderClause::by_key(key, SortDirection::Ascending))
    }

    pub fn then_by_descending<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        self.push(OrderClause::by_key(key, SortDirection::Descending))
    }

    /// Tie-break with an arbitrary comparator.
    pub fn then_sort_by<F>(&self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        self.push(OrderClause {
            compare: Rc::new(compare),
            direction: SortDirection::Ascending,
        })
    }

    /// Drop the order clauses.
    pub fn into_query(self) -> Query<T> {
        self.query
    }

    /// Adjacent dedup: skip elements equal to the previously emitted one.
    ///
    /// Constant extra state instead of a hash set. Correct because the sort
    /// places equal elements next to each other, provided equality agrees
    /// with the order clauses.
    pub fn distinct(&self) -> Self
    where
        T: PartialEq + Clone,
    {
        self.distinct_by(T::clone)
    }

    /// Adjacent dedup on a derived key.
    pub fn distinct_by<K, F>(&self, selector: F) -> Self
    where
        K: PartialEq + 'static,
        F: Fn(&T) -> K + 'static,
    {
        let upstream = self.query.clone();
        let selector = Rc::new(selector);
        let query = self.query.derive(move || {
            let mut next = upstream.iterate();
            let selector = Rc::clone(&selector);
            let mut prev: Option<K> = None;
            Cursor::new(move || {
                for item in next.by_ref() {
                    let key = selector(&item);
                    if prev.as_ref() != Some(&key) {
                        prev = Some(key);
                        return Some(item);
                    }
                }
                None
            })
        });
        Self {
            query: query.clone(),
            source: query,
            orders: Rc::clone(&self.orders),
        }
    }
}

fn sorted<T>(source: &Query<T>, orders: Rc<[OrderClause<T>]>) -> Query<T>
where
    T: 'static,
{
    let upstream = source.clone();
    let capacity = source.config().sort_buffer_capacity;
    source.derive(move || {
        let upstream = upstream.clone();
        let orders = Rc::clone(&orders);
        let mut buffer: Option<std::vec::IntoIter<T>> = None;
        Cursor::new(move || {
            buffer
                .get_or_insert_with(|| {
                    let mut items = Vec::with_capacity(capacity);
                    items.extend(upstream.iterate());
                    items.sort_by(|a, b| compare_all(&orders, a, b));
                    metrics::record_materialize("order_by", items.len());
                    items.into_iter()
                })
                .next()
        })
    })
}

pub fn order_by<T, K, F>(source: &Query<T>, key: F) -> OrderedQuery<T>
where
    T: 'static,
    K: Ord,
    F: Fn(&T) -> K + 'static,
{
    OrderedQuery::build(
        source.clone(),
        Rc::from(vec![OrderClause::by_key(key, SortDirection::Ascending)]),
    )
}

pub fn order_by_descending<T, K, F>(source: &Query<T>, key: F) -> OrderedQuery<T>
where
    T: 'static,
    K: Ord,
    F: Fn(&T) -> K + 'static,
{
    OrderedQuery::build(
        source.clone(),
        Rc::from(vec![OrderClause::by_key(key, SortDirection::Descending)]),
    )
}

/// Order by an arbitrary comparator.
pub fn sort_by<T, F>(source: &Query<T>, compare: F) -> OrderedQuery<T>
where
    T: 'static,
    F: Fn(&T, &T) -> Ordering + 'static,
{
    OrderedQuery::build(
        source.clone(),
        Rc::from(vec![OrderClause {
            compare: Rc::new(compare),
            direction: SortDirection::Ascending,
        }]),
    )
}
