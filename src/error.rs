//! Error types for the container operations.
//!
//! Every fallible operation reports failure through [`Error`]; nothing in
//! the crate panics on a bad key or a full allocator. Callers are expected
//! to check insert/push results before assuming a container changed.

use thiserror::Error;

/// The error type shared by all containers in this crate.
///
/// Failed operations leave the container exactly as it was before the call;
/// there is no observable partial mutation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Memory for a new node or block could not be reserved.
    #[error("allocation failed")]
    OutOfMemory,

    /// The key being inserted compares equal to one already stored.
    #[error("key already present")]
    Duplicate,

    /// An indexed or cursor-based mutation was requested outside the
    /// valid range of positions.
    #[error("position out of range")]
    InvalidPosition,
}

/// Shorthand result type used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
