//! Ordered-set containers built on one shared engine.
//!
//! [`Tree`] owns the engine state; a [`Balance`] strategy type decides what
//! happens structurally on insert and remove. [`AvlTree`] plugs in
//! worst-case rebalancing, [`BstTree`] plugs in nothing; the same engine
//! code runs either way.

pub mod avl;
pub mod plain;

mod cursor;
mod iter;

pub use avl::{Avl, AvlTree};
pub use cursor::{Cursor, CursorMut};
pub use iter::Iter;
pub use plain::{BstTree, Plain};

use core::fmt;
use core::marker::PhantomData;

use crate::compare::{default_comparator, Comparator};
use crate::error::{Error, Result};
use crate::raw::RawTree;

mod sealed {
    use crate::error::Result;
    use crate::raw::{NodeId, RawTree};

    /// The structural insert/remove policy a tree variant plugs into the
    /// engine. Implementations never touch the arena directly; they drive
    /// the topology operations of [`RawTree`].
    pub trait Strategy {
        /// Whether this strategy maintains balance factors the invariant
        /// checker should verify.
        const MAINTAINS_BALANCE: bool;

        fn insert<T>(raw: &mut RawTree<T>, value: T) -> Result<()>;
        fn remove<T>(raw: &mut RawTree<T>, id: NodeId) -> T;
    }
}

pub(crate) use sealed::Strategy;

/// A balance discipline for [`Tree`]. Sealed; the two implementations are
/// [`Avl`] and [`Plain`].
pub trait Balance: Strategy {}

impl<B: Strategy> Balance for B {}

/// An ordered set over a pluggable comparator, generic over its balance
/// strategy.
///
/// One mutation at a time, single-threaded by contract: cursors hold raw
/// positions that any structural change elsewhere in the same container
/// invalidates, which the borrow checker enforces here by construction.
///
///```
/// use holt::AvlTree;
///
/// let mut tree: AvlTree<i32> = (1..=100).collect();
/// assert!(tree.contains(&41));
/// assert_eq!(tree.remove(&41), Some(41));
/// assert!(!tree.contains(&41));
/// # tree.assert_invariants();
///```
pub struct Tree<T, B: Balance> {
    pub(crate) raw: RawTree<T>,
    _strategy: PhantomData<B>,
}

impl<T: Ord, B: Balance> Tree<T, B> {
    /// Creates an empty tree ordered by [`Ord::cmp`].
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T, B: Balance> Tree<T, B> {
    /// Creates an empty tree ordered by `cmp`.
    ///
    /// The comparator is fixed for the container's lifetime; every stored
    /// element is compared with it and nothing else.
    pub const fn with_comparator(cmp: Comparator<T>) -> Self {
        Tree {
            raw: RawTree::new(cmp),
            _strategy: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.raw.len
    }

    pub fn is_empty(&self) -> bool {
        self.raw.len == 0
    }

    /// Inserts `value`, keeping the in-order sequence sorted.
    ///
    /// Returns [`Error::Duplicate`] if an equal key is already stored and
    /// [`Error::OutOfMemory`] if node storage could not grow; the tree is
    /// unchanged in both cases.
    pub fn insert(&mut self, value: T) -> Result<()> {
        B::insert(&mut self.raw, value)
    }

    /// Whether an element comparing equal to `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.raw.find(value).is_some()
    }

    /// Removes the element comparing equal to `value`, if any.
    /// Absent keys are a no-op, not an error.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let id = self.raw.find(value)?;
        Some(B::remove(&mut self.raw, id))
    }

    /// A reference to the element equal to `value`, if stored.
    pub fn get(&self, value: &T) -> Option<&T> {
        let id = self.raw.find(value)?;
        Some(&self.raw.node(id).value)
    }

    /// The smallest stored element.
    pub fn first(&self) -> Option<&T> {
        let id = self.raw.first()?;
        Some(&self.raw.node(id).value)
    }

    /// The largest stored element.
    pub fn last(&self) -> Option<&T> {
        let id = self.raw.last()?;
        Some(&self.raw.node(id).value)
    }

    /// Drops every element. The comparator is retained.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// An in-order, double-ended iterator over the stored elements.
    pub fn iter(&self) -> Iter<'_, T, B> {
        Iter::new(self)
    }

    /// A cursor parked on the smallest element (or past the end when
    /// empty).
    pub fn cursor(&self) -> Cursor<'_, T, B> {
        Cursor::at_first(self)
    }

    /// A cursor parked before the first element.
    pub fn cursor_before_begin(&self) -> Cursor<'_, T, B> {
        Cursor::before_begin(self)
    }

    /// A cursor parked past the last element.
    pub fn cursor_after_end(&self) -> Cursor<'_, T, B> {
        Cursor::after_end(self)
    }

    /// A cursor parked on the element equal to `value`, or past the end
    /// when no such element is stored.
    pub fn position(&self, value: &T) -> Cursor<'_, T, B> {
        Cursor::at_value(self, value)
    }

    /// A mutable cursor parked on the smallest element.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T, B> {
        CursorMut::at_first(self)
    }

    /// A mutable cursor parked on the element equal to `value`, or past
    /// the end when absent.
    pub fn position_mut(&mut self, value: &T) -> CursorMut<'_, T, B> {
        CursorMut::at_value(self, value)
    }

    /// Panics unless every structural invariant holds: parent/child link
    /// agreement, strict comparator-ascending in-order sequence, and (for
    /// strategies that maintain them) exact balance factors within
    /// `-1..=1`.
    ///
    /// Intended for tests and debugging; takes `O(n)` time.
    pub fn assert_invariants(&self) {
        self.raw.assert_structure(B::MAINTAINS_BALANCE);
    }
}

impl<T: Ord, B: Balance> Default for Tree<T, B> {
    fn default() -> Self {
        Tree::new()
    }
}

impl<T: Ord, B: Balance> FromIterator<T> for Tree<T, B> {
    /// Collects into a tree, skipping duplicate keys.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord, B: Balance> Extend<T> for Tree<T, B> {
    /// Inserts every element, skipping duplicate keys.
    ///
    /// # Panics
    /// On allocation failure; `Extend` has no error channel. Use
    /// [`Tree::insert`] to observe [`Error::OutOfMemory`] instead.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            match self.insert(value) {
                Ok(()) | Err(Error::Duplicate) => {}
                Err(err) => panic!("tree extend failed: {}", err),
            }
        }
    }
}

impl<'a, T, B: Balance> IntoIterator for &'a Tree<T, B> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, B>;

    fn into_iter(self) -> Iter<'a, T, B> {
        self.iter()
    }
}

impl<T: fmt::Debug, B: Balance> fmt::Debug for Tree<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
