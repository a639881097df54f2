//! Query configuration carried by every `Query` and inherited by its stages.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Initial capacity for stage-local hash sets and multi-maps.
    pub lookup_capacity: usize,

    /// Initial capacity for buffers that materialize a whole upstream
    /// (ordered queries, `reverse`).
    pub sort_buffer_capacity: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            lookup_capacity: 16,
            sort_buffer_capacity: 64,
        }
    }
}

const LOOKUP_CAPACITY_VAR: &str = "LAZYQ_LOOKUP_CAPACITY";
const SORT_BUFFER_CAPACITY_VAR: &str = "LAZYQ_SORT_BUFFER_CAPACITY";

impl QueryConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `LAZYQ_LOOKUP_CAPACITY`: initial lookup table capacity
    /// - `LAZYQ_SORT_BUFFER_CAPACITY`: initial sort buffer capacity
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var(LOOKUP_CAPACITY_VAR) {
            if let Ok(v) = s.trim().parse::<usize>() {
                cfg.lookup_capacity = v;
            }
        }

        if let Ok(s) = std::env::var(SORT_BUFFER_CAPACITY_VAR) {
            if let Ok(v) = s.trim().parse::<usize>() {
                cfg.sort_buffer_capacity = v;
            }
        }

        cfg
    }

    /// Like `from_env`, but an unparsable override is an error instead of
    /// being ignored.
    pub fn try_from_env() -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(v) = parse_var(LOOKUP_CAPACITY_VAR)? {
            cfg.lookup_capacity = v;
        }
        if let Some(v) = parse_var(SORT_BUFFER_CAPACITY_VAR)? {
            cfg.sort_buffer_capacity = v;
        }
        Ok(cfg)
    }
}

fn parse_var(name: &str) -> Result<Option<usize>> {
    match std::env::var(name) {
        Ok(s) => s
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|e| Error::Config(format!("{name}={s:?}: {e}"))),
        Err(_) => Ok(None),
    }
}
