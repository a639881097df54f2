//! Convenient re-exports for downstream crates.

pub use crate::config::QueryConfig;
pub use crate::cursor::Cursor;
pub use crate::error::{Error, Result};
pub use crate::query::Query;
pub use crate::source::{self, Iterable};
pub use crate::types::{Group, KeyValue};
