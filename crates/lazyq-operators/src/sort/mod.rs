//! Ordered queries: stable multi-key sort, materialized on first pull.

pub mod ordered;

pub use ordered::{order_by, order_by_descending, sort_by, OrderedQuery, SortDirection};
