//! Errors reported by views.
//!
//! Checked element access is the only view operation that can fail
//! recoverably. Everything else that can go wrong (dangling storage, a pointer
//! that does not cover `N` elements) is a caller precondition.

use thiserror::Error;

/// A checked access was given an index outside `0..len`.
///
/// Carries the offending index. The view is never modified when this is
/// returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("index {index} out of range for view of length {len}")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

impl OutOfRange {
    #[cold]
    pub(crate) fn new(index: usize, len: usize) -> Self {
        tracing::debug!(index, len, "checked access out of range");
        OutOfRange { index, len }
    }
}

/// A slice could not be bound to a view because its length differs from `N`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("cannot view slice of length {actual} as {expected} elements")]
pub struct LengthMismatch {
    pub expected: usize,
    pub actual: usize,
}
