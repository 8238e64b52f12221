//! Cursors over a segmented deque.
//!
//! A cursor holds a block/offset address rather than a logical index, so
//! stepping is block arithmetic and never rescans. The two sentinel
//! positions bracket the sequence the same way the tree cursors do.

use super::pos::Pos;
use super::SegDeque;
use crate::error::{Error, Result};

#[derive(Clone, Copy, PartialEq, Eq)]
enum DequePosition {
    BeforeBegin,
    Inside(Pos),
    AfterEnd,
}

/// A read-only cursor over a [`SegDeque`].
///
/// `next`/`prev` return `false` exactly when crossing into a sentinel.
///
///```
/// use holt::SegDeque;
///
/// let deque: SegDeque<i32> = [10, 20, 30].into_iter().collect();
/// let mut cursor = deque.cursor_before_begin();
/// let mut seen = Vec::new();
/// while cursor.next() {
///     seen.push(*cursor.value().unwrap());
/// }
/// assert_eq!(seen, vec![10, 20, 30]);
///```
pub struct DequeCursor<'a, T> {
    deque: &'a SegDeque<T>,
    pos: DequePosition,
}

impl<'a, T> DequeCursor<'a, T> {
    pub(crate) fn before_begin(deque: &'a SegDeque<T>) -> Self {
        DequeCursor {
            deque,
            pos: DequePosition::BeforeBegin,
        }
    }

    pub(crate) fn after_end(deque: &'a SegDeque<T>) -> Self {
        DequeCursor {
            deque,
            pos: DequePosition::AfterEnd,
        }
    }

    pub(crate) fn at_front(deque: &'a SegDeque<T>) -> Self {
        DequeCursor {
            pos: position_at(deque, 0),
            deque,
        }
    }

    /// The element under the cursor; `None` on either sentinel.
    pub fn value(&self) -> Option<&'a T> {
        match self.pos {
            DequePosition::Inside(pos) => {
                Some(self.deque.slot_ref(pos.to_linear(self.deque.block_cap())))
            }
            _ => None,
        }
    }

    pub fn is_before_begin(&self) -> bool {
        self.pos == DequePosition::BeforeBegin
    }

    pub fn is_after_end(&self) -> bool {
        self.pos == DequePosition::AfterEnd
    }

    /// The logical index of the current element, if any.
    pub fn index(&self) -> Option<usize> {
        match self.pos {
            DequePosition::Inside(pos) => Some(
                pos.to_linear(self.deque.block_cap()) - self.deque.start_slot(),
            ),
            _ => None,
        }
    }

    /// Steps toward the back. Returns `false` when the move crossed past
    /// the last element (the cursor then parks after the end).
    pub fn next(&mut self) -> bool {
        self.pos = step_forward(self.deque, self.pos);
        matches!(self.pos, DequePosition::Inside(_))
    }

    /// Steps toward the front; mirror of [`DequeCursor::next`].
    pub fn prev(&mut self) -> bool {
        self.pos = step_back(self.deque, self.pos);
        matches!(self.pos, DequePosition::Inside(_))
    }
}

/// A cursor that can also splice elements around its position and erase
/// the element it is parked on.
pub struct DequeCursorMut<'a, T> {
    deque: &'a mut SegDeque<T>,
    pos: DequePosition,
}

impl<'a, T> DequeCursorMut<'a, T> {
    pub(crate) fn at_index(deque: &'a mut SegDeque<T>, index: usize) -> Self {
        DequeCursorMut {
            pos: position_at(deque, index),
            deque,
        }
    }

    /// The element under the cursor; `None` on either sentinel.
    pub fn value(&self) -> Option<&T> {
        match self.pos {
            DequePosition::Inside(pos) => {
                Some(self.deque.slot_ref(pos.to_linear(self.deque.block_cap())))
            }
            _ => None,
        }
    }

    /// Mutable access to the element under the cursor.
    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self.pos {
            DequePosition::Inside(pos) => {
                let slot = pos.to_linear(self.deque.block_cap());
                Some(self.deque.slot_mut(slot))
            }
            _ => None,
        }
    }

    /// The logical index of the current element, if any.
    pub fn index(&self) -> Option<usize> {
        match self.pos {
            DequePosition::Inside(pos) => Some(
                pos.to_linear(self.deque.block_cap()) - self.deque.start_slot(),
            ),
            _ => None,
        }
    }

    /// See [`DequeCursor::next`].
    pub fn next(&mut self) -> bool {
        self.pos = step_forward(self.deque, self.pos);
        matches!(self.pos, DequePosition::Inside(_))
    }

    /// See [`DequeCursor::prev`].
    pub fn prev(&mut self) -> bool {
        self.pos = step_back(self.deque, self.pos);
        matches!(self.pos, DequePosition::Inside(_))
    }

    /// Inserts `value` just before the current element. The cursor keeps
    /// pointing at the same element.
    ///
    /// Before-begin has no "before" side: that is
    /// [`Error::InvalidPosition`]. After-end inserts at the back.
    pub fn insert_before(&mut self, value: T) -> Result<()> {
        let current = self.index();
        let index = match self.pos {
            DequePosition::BeforeBegin => return Err(Error::InvalidPosition),
            DequePosition::Inside(_) => current.unwrap_or(0),
            DequePosition::AfterEnd => self.deque.len(),
        };
        let result = self.deque.insert_at(index, value);
        // the shift moved our element one logical slot over; a failed
        // attempt may still have regrown the block array, so recompute
        // from the logical index either way
        if let Some(at) = current {
            let landed = if result.is_ok() { at + 1 } else { at };
            self.pos = position_at(self.deque, landed);
        }
        result
    }

    /// Inserts `value` just after the current element. The cursor keeps
    /// pointing at the same element.
    ///
    /// After-end has no "after" side: that is [`Error::InvalidPosition`].
    /// Before-begin inserts at the front.
    pub fn insert_after(&mut self, value: T) -> Result<()> {
        let current = self.index();
        let index = match self.pos {
            DequePosition::AfterEnd => return Err(Error::InvalidPosition),
            DequePosition::Inside(_) => current.unwrap_or(0) + 1,
            DequePosition::BeforeBegin => 0,
        };
        let result = self.deque.insert_at(index, value);
        if let Some(at) = current {
            self.pos = position_at(self.deque, at);
        }
        result
    }

    /// Removes the element under the cursor and advances to the one after
    /// it (or past the end). On either sentinel this is a no-op returning
    /// `None`.
    pub fn remove_current(&mut self) -> Option<T> {
        let index = self.index()?;
        let value = self.deque.remove_at(index);
        self.pos = position_at(self.deque, index);
        value
    }
}

fn position_at<T>(deque: &SegDeque<T>, index: usize) -> DequePosition {
    if index < deque.len() {
        DequePosition::Inside(Pos::from_linear(
            deque.start_slot() + index,
            deque.block_cap(),
        ))
    } else {
        DequePosition::AfterEnd
    }
}

fn step_forward<T>(deque: &SegDeque<T>, pos: DequePosition) -> DequePosition {
    let cap = deque.block_cap();
    let last = match deque.len().checked_sub(1) {
        Some(offset) => deque.start_slot() + offset,
        None => return DequePosition::AfterEnd,
    };
    match pos {
        DequePosition::BeforeBegin => {
            DequePosition::Inside(Pos::from_linear(deque.start_slot(), cap))
        }
        DequePosition::Inside(at) if at.to_linear(cap) < last => {
            DequePosition::Inside(at.advance(cap))
        }
        _ => DequePosition::AfterEnd,
    }
}

fn step_back<T>(deque: &SegDeque<T>, pos: DequePosition) -> DequePosition {
    let cap = deque.block_cap();
    let last = match deque.len().checked_sub(1) {
        Some(offset) => deque.start_slot() + offset,
        None => return DequePosition::BeforeBegin,
    };
    match pos {
        DequePosition::AfterEnd => DequePosition::Inside(Pos::from_linear(last, cap)),
        DequePosition::Inside(at) if at.to_linear(cap) > deque.start_slot() => {
            DequePosition::Inside(at.retreat(cap))
        }
        _ => DequePosition::BeforeBegin,
    }
}
