//! The pull contract every stage speaks.
//!
//! A `Cursor` yields `Some(item)` while it has elements and `None` once it is
//! exhausted. Exhaustion is permanent: the pull closure (and anything it owns,
//! such as a stage's lookup table) is dropped on the first `None`.

use std::fmt;
use std::iter::FusedIterator;

type Pull<'a, T> = Box<dyn FnMut() -> Option<T> + 'a>;

/// Single-use, stateful pull cursor.
///
/// Owned by exactly one consumer. Not safe for concurrent pulls.
pub struct Cursor<T> {
    pull: Option<Pull<'static, T>>,
}

impl<T: 'static> Cursor<T> {
    /// Wrap a pull closure. The closure is never called again after it
    /// returns `None`.
    pub fn new<F>(pull: F) -> Self
    where
        F: FnMut() -> Option<T> + 'static,
    {
        Self {
            pull: Some(Box::new(pull)),
        }
    }

    /// Adapt any std iterator into a cursor.
    pub fn adapt<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        let mut iter = iter.into_iter();
        Self::new(move || iter.next())
    }

    /// A cursor that is exhausted from the start.
    pub fn empty() -> Self {
        Self { pull: None }
    }

    /// True once the cursor has returned `None`.
    pub fn is_exhausted(&self) -> bool {
        self.pull.is_none()
    }
}

impl<T> Iterator for Cursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let pull = self.pull.as_mut()?;
        match pull() {
            Some(item) => Some(item),
            None => {
                self.pull = None;
                None
            }
        }
    }
}

impl<T> FusedIterator for Cursor<T> {}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("exhausted", &self.pull.is_none())
            .finish()
    }
}
