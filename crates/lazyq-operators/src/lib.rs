#![forbid(unsafe_code)]
//! lazyq-operators: deferred stages and terminals over `lazyq_core::Query`.
//!
//! Design intent:
//! - Every stage only records how to build its cursor; nothing is pulled
//!   until a terminal (or a manual `iterate()`) asks for it.
//! - Stateful stages build their hash structures once per cursor, inside the
//!   cursor, so two cursors from the same query never share state.
//! - `QueryExt` is the method surface; each method delegates to a free
//!   function in the module that implements it.

pub mod aggregate;
pub mod filter;
pub mod group_by;
pub mod join;
pub mod lookup;
pub mod map;
pub mod metrics;
pub mod sequence;
pub mod set;
pub mod sort;
pub mod terminal;
pub mod traits;

pub use lookup::Lookup;
pub use sort::{OrderedQuery, SortDirection};
pub use traits::{KeyValueQueryExt, QueryExt};

pub mod prelude {
    pub use crate::lookup::Lookup;
    pub use crate::sort::{OrderedQuery, SortDirection};
    pub use crate::traits::{KeyValueQueryExt, QueryExt};
    pub use lazyq_core::prelude::*;
}
