use thiserror::Error;

/// Canonical result for lazyq terminals.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surface only at terminal evaluation; stage construction cannot
/// fail. A failed terminal never affects later `iterate()` calls on the same
/// query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{op}: sequence contains no elements")]
    Empty { op: &'static str },

    #[error("{op}: sequence contains more than one element")]
    MoreThanOne { op: &'static str },

    #[error("{op}: duplicate key")]
    DuplicateKey { op: &'static str },

    #[error("Invalid configuration: {0}")]
    Config(String),
}
