//! Errors reported by tree cursors.
//!
//! Looking up, inserting, or deleting keys never fails: absence is reported through `Option`
//! and `bool` results. The only error is reading the element of a cursor that isn't on one.

use thiserror::Error;

/// Errors that can occur while using a [`Tree`][crate::Tree] cursor.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The cursor has run past its last element, or was produced by a
    /// [`seek`][crate::Tree::seek] for a key that isn't in the tree.
    ///
    /// This is a caller bug rather than a condition to recover from. It's surfaced as an
    /// error so the caller decides how loudly to fail instead of getting a default value.
    #[error("iterator out of range")]
    OutOfRange,
}

/// A `Result` type alias using this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
