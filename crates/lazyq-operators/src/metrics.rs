//! Tracing hooks for buffering stages (feature: `tracing`).
//!
//! Every stage that must see a whole operand before emitting reports how much
//! it buffered. Without the feature these compile to nothing.

#[cfg(feature = "tracing")]
pub fn record_lookup(stage: &'static str, keys: usize, rows: usize) {
    tracing::trace!(stage, keys, rows, "lookup built");
}

#[cfg(not(feature = "tracing"))]
pub fn record_lookup(_stage: &'static str, _keys: usize, _rows: usize) { /* no-op */
}

#[cfg(feature = "tracing")]
pub fn record_materialize(stage: &'static str, rows: usize) {
    tracing::trace!(stage, rows, "materialized");
}

#[cfg(not(feature = "tracing"))]
pub fn record_materialize(_stage: &'static str, _rows: usize) { /* no-op */
}
