//! The pluggable comparison and hashing contracts.
//!
//! Ordered containers never require `T: Ord` at the type level; they store
//! a [`Comparator`] chosen at construction time, so the same element type
//! can live in differently-ordered trees. The convenience constructors
//! default to [`Ord::cmp`].

use core::cmp::Ordering;

/// A three-way comparison function.
///
/// The container guarantees that both arguments are elements already
/// stored, or about to be stored, in that container instance.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// A hash function returning an unsigned key.
///
/// Keyed containers outside this crate's core consume this shape; it is
/// defined here so core-adjacent code agrees on the contract.
pub type HashFn<T> = fn(&T) -> u64;

/// The comparator used by the `T: Ord` constructors.
pub(crate) fn default_comparator<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}
