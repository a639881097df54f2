#![forbid(unsafe_code)]
//! lazyq-core: the pull contract and the re-iterable query handle.
//!
//! Design intent:
//! - A `Cursor` is a single-use, fused pull cursor.
//! - A `Query` is an immutable recipe that manufactures a fresh `Cursor` on
//!   every `iterate()` call. Nothing runs until a cursor is pulled.
//! - Stages live in `lazyq-operators`; this crate only knows how to compose
//!   factories and how to wrap concrete collections as sources.

pub mod config;
pub mod cursor;
pub mod error;
pub mod prelude;
pub mod query;
pub mod source;
pub mod types;

pub use config::QueryConfig;
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use query::Query;
pub use source::Iterable;
pub use types::{Group, KeyValue};
