//! Hash-based set stages.
//!
//! `distinct` and `union` build their set incrementally and never pull more
//! than they emit. `except` and `intersect` drain the whole second operand
//! into a set when their cursor is created; that operand must be finite.

pub mod distinct;
pub mod except;
pub mod intersect;
pub mod union;

pub use distinct::{distinct, distinct_by};
pub use except::{except, except_by};
pub use intersect::{intersect, intersect_by};
pub use union::union;
