//! Cursors: positions inside one tree, including the two sentinel
//! positions bracketing the sequence.
//!
//! A cursor is bound to exactly one container and holds a raw position in
//! it; structural changes made through anything other than the cursor
//! itself would invalidate that position, which the borrow rules rule out.

use super::{Balance, Tree};
use crate::raw::NodeId;

/// A logical position: one of the stored nodes, or one of the two
/// non-data-bearing boundary positions.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Position {
    BeforeBegin,
    Inside(NodeId),
    AfterEnd,
}

impl Position {
    fn of(node: Option<NodeId>, fallback: Position) -> Position {
        match node {
            Some(id) => Position::Inside(id),
            None => fallback,
        }
    }
}

/// A read-only cursor over a [`Tree`].
///
/// `next`/`prev` report whether the new position still denotes a stored
/// element: they return `false` exactly when crossing into a sentinel,
/// which is a normal outcome, not an error.
///
///```
/// use holt::AvlTree;
///
/// let tree: AvlTree<i32> = [3, 1, 2].into_iter().collect();
/// let mut cursor = tree.cursor_before_begin();
/// let mut seen = Vec::new();
/// while cursor.next() {
///     seen.push(*cursor.value().unwrap());
/// }
/// assert_eq!(seen, vec![1, 2, 3]);
/// assert!(cursor.value().is_none()); // parked past the end
///```
pub struct Cursor<'a, T, B: Balance> {
    tree: &'a Tree<T, B>,
    pos: Position,
}

impl<'a, T, B: Balance> Cursor<'a, T, B> {
    pub(crate) fn before_begin(tree: &'a Tree<T, B>) -> Self {
        Cursor {
            tree,
            pos: Position::BeforeBegin,
        }
    }

    pub(crate) fn after_end(tree: &'a Tree<T, B>) -> Self {
        Cursor {
            tree,
            pos: Position::AfterEnd,
        }
    }

    pub(crate) fn at_first(tree: &'a Tree<T, B>) -> Self {
        Cursor {
            pos: Position::of(tree.raw.first(), Position::AfterEnd),
            tree,
        }
    }

    pub(crate) fn at_value(tree: &'a Tree<T, B>, value: &T) -> Self {
        Cursor {
            pos: Position::of(tree.raw.find(value), Position::AfterEnd),
            tree,
        }
    }

    /// The element under the cursor; `None` on either sentinel.
    pub fn value(&self) -> Option<&'a T> {
        match self.pos {
            Position::Inside(id) => Some(&self.tree.raw.node(id).value),
            _ => None,
        }
    }

    pub fn is_before_begin(&self) -> bool {
        self.pos == Position::BeforeBegin
    }

    pub fn is_after_end(&self) -> bool {
        self.pos == Position::AfterEnd
    }

    /// Moves to the in-order successor. Returns `false` when the move
    /// crossed past the last element (the cursor then parks after the
    /// end and stays there).
    pub fn next(&mut self) -> bool {
        self.pos = match self.pos {
            Position::BeforeBegin => Position::of(self.tree.raw.first(), Position::AfterEnd),
            Position::Inside(id) => Position::of(self.tree.raw.successor(id), Position::AfterEnd),
            Position::AfterEnd => Position::AfterEnd,
        };
        matches!(self.pos, Position::Inside(_))
    }

    /// Moves to the in-order predecessor; mirror of [`Cursor::next`].
    pub fn prev(&mut self) -> bool {
        self.pos = match self.pos {
            Position::AfterEnd => Position::of(self.tree.raw.last(), Position::BeforeBegin),
            Position::Inside(id) => Position::of(self.tree.raw.predecessor(id), Position::BeforeBegin),
            Position::BeforeBegin => Position::BeforeBegin,
        };
        matches!(self.pos, Position::Inside(_))
    }
}

/// A cursor that can also erase the element it is parked on.
pub struct CursorMut<'a, T, B: Balance> {
    tree: &'a mut Tree<T, B>,
    pos: Position,
}

impl<'a, T, B: Balance> CursorMut<'a, T, B> {
    pub(crate) fn at_first(tree: &'a mut Tree<T, B>) -> Self {
        CursorMut {
            pos: Position::of(tree.raw.first(), Position::AfterEnd),
            tree,
        }
    }

    pub(crate) fn at_value(tree: &'a mut Tree<T, B>, value: &T) -> Self {
        CursorMut {
            pos: Position::of(tree.raw.find(value), Position::AfterEnd),
            tree,
        }
    }

    /// The element under the cursor; `None` on either sentinel.
    pub fn value(&self) -> Option<&T> {
        match self.pos {
            Position::Inside(id) => Some(&self.tree.raw.node(id).value),
            _ => None,
        }
    }

    /// See [`Cursor::next`].
    pub fn next(&mut self) -> bool {
        self.pos = match self.pos {
            Position::BeforeBegin => Position::of(self.tree.raw.first(), Position::AfterEnd),
            Position::Inside(id) => Position::of(self.tree.raw.successor(id), Position::AfterEnd),
            Position::AfterEnd => Position::AfterEnd,
        };
        matches!(self.pos, Position::Inside(_))
    }

    /// See [`Cursor::prev`].
    pub fn prev(&mut self) -> bool {
        self.pos = match self.pos {
            Position::AfterEnd => Position::of(self.tree.raw.last(), Position::BeforeBegin),
            Position::Inside(id) => Position::of(self.tree.raw.predecessor(id), Position::BeforeBegin),
            Position::BeforeBegin => Position::BeforeBegin,
        };
        matches!(self.pos, Position::Inside(_))
    }

    /// Removes the element under the cursor through the tree's balance
    /// strategy and advances to its successor.
    ///
    /// On either sentinel this is a no-op returning `None`.
    pub fn remove_current(&mut self) -> Option<T> {
        let id = match self.pos {
            Position::Inside(id) => id,
            _ => return None,
        };
        // the successor keeps its handle through the removal; only the
        // removed node's slot is recycled
        self.pos = Position::of(self.tree.raw.successor(id), Position::AfterEnd);
        Some(B::remove(&mut self.tree.raw, id))
    }
}
