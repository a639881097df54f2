#![forbid(unsafe_code)]
//! lazyq: deferred-execution query combinators over in-memory sequences.
//!
//! Build a pipeline from a source, chain stages on it, and nothing runs until
//! a terminal (or a manual `iterate()`) pulls:
//!
//! ```
//! use lazyq::prelude::*;
//!
//! let q = source::from_vec(vec![1, 2, 2, 3, 1]).distinct();
//! assert_eq!(q.to_vec(), vec![1, 2, 3]);
//! // Re-iterating re-runs the pipeline from the source.
//! assert_eq!(q.count(), 3);
//! ```

pub use lazyq_core::{config, cursor, error, query, source, types};
pub use lazyq_core::{Cursor, Error, Group, Iterable, KeyValue, Query, QueryConfig, Result};
pub use lazyq_operators::{
    aggregate, filter, group_by, join, lookup, map, metrics, sequence, set, sort, terminal,
};
pub use lazyq_operators::{KeyValueQueryExt, Lookup, OrderedQuery, QueryExt, SortDirection};

pub mod prelude {
    pub use lazyq_operators::prelude::*;
}
