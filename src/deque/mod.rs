//! A segmented double-ended deque.
//!
//! Storage is an array of fixed-size element blocks plus a logical
//! start/end slot pair. Pushing at either end is amortized `O(1)`, random
//! access is `O(1)` block/offset arithmetic, and there is no per-element
//! heap node. Growing never copies element bytes, only block pointers
//! move.

mod cursor;
mod pos;

pub use cursor::{DequeCursor, DequeCursorMut};

use core::fmt;
use core::mem::{self, MaybeUninit};

use crate::error::{Error, Result};
use pos::Pos;

/// Target byte footprint of one block; a block holds as many elements as
/// fit, but always at least one.
const BLOCK_BYTES: usize = 512;

/// Block-pointer slots allocated on first use.
const INITIAL_BLOCKS: usize = 8;

fn block_capacity<T>() -> usize {
    let size = mem::size_of::<T>();
    if size == 0 {
        BLOCK_BYTES
    } else {
        (BLOCK_BYTES / size).max(1)
    }
}

/// A double-ended queue of elements stored in fixed-size blocks.
///
/// The block-pointer array is lazily populated: a block is allocated the
/// first time a slot inside it is written, and blocks are only released by
/// [`SegDeque::clear`] or drop. The start/end pair begins in the middle of
/// the addressable span so either end can grow before the first
/// reallocation.
///
///```
/// use holt::SegDeque;
///
/// let mut deque: SegDeque<u64> = SegDeque::new();
/// deque.push_back(2).unwrap();
/// deque.push_front(1).unwrap();
/// deque.push_back(3).unwrap();
/// assert_eq!(deque.get(1), Some(&2));
/// assert_eq!(deque.pop_front(), Some(1));
/// assert_eq!(deque.pop_back(), Some(3));
///```
pub struct SegDeque<T> {
    blocks: Vec<Option<Box<[MaybeUninit<T>]>>>,
    /// Linear slot index of the first element.
    start: usize,
    /// Linear slot index one past the last element.
    end: usize,
    /// Slots per block; fixed at creation from the element size.
    cap: usize,
}

impl<T> SegDeque<T> {
    /// Creates an empty deque. No blocks are allocated until the first
    /// push.
    pub fn new() -> Self {
        SegDeque {
            blocks: Vec::new(),
            start: 0,
            end: 0,
            cap: block_capacity::<T>(),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Total slots currently addressable without growing.
    fn span(&self) -> usize {
        self.blocks.len() * self.cap
    }

    pub(crate) fn start_slot(&self) -> usize {
        self.start
    }

    pub(crate) fn block_cap(&self) -> usize {
        self.cap
    }

    /// Appends an element at the back.
    ///
    /// Fails with [`Error::OutOfMemory`] when storage could not grow; the
    /// deque's contents are unchanged in that case.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        if self.end == self.span() {
            self.grow()?;
        }
        let slot = self.end;
        self.ensure_block(slot / self.cap)?;
        self.write_slot(slot, value);
        self.end += 1;
        Ok(())
    }

    /// Prepends an element at the front. Same failure contract as
    /// [`SegDeque::push_back`].
    pub fn push_front(&mut self, value: T) -> Result<()> {
        if self.start == 0 {
            self.grow()?;
        }
        let slot = self.start - 1;
        self.ensure_block(slot / self.cap)?;
        self.write_slot(slot, value);
        self.start = slot;
        Ok(())
    }

    /// Removes and returns the first element; `None` on an empty deque.
    /// Blocks are retained for reuse.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = unsafe { self.read_slot(self.start) };
        self.start += 1;
        Some(value)
    }

    /// Removes and returns the last element; `None` on an empty deque.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.end -= 1;
        Some(unsafe { self.read_slot(self.end) })
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }

    /// The element at logical position `index` (0 is the front).
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        Some(self.slot_ref(self.start + index))
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len() {
            return None;
        }
        let slot = self.start + index;
        Some(self.slot_mut(slot))
    }

    /// Inserts `value` so it ends up at logical position `index`, shifting
    /// whichever side of the insertion point is shorter by one slot.
    ///
    /// `index == len` appends. `index > len` is [`Error::InvalidPosition`].
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(Error::InvalidPosition);
        }
        if index <= len - index {
            // shift the front side left
            if self.start == 0 {
                self.grow()?;
            }
            self.ensure_block((self.start - 1) / self.cap)?;
            for offset in 0..index {
                unsafe { self.move_slot(self.start + offset, self.start - 1 + offset) };
            }
            self.start -= 1;
        } else {
            // shift the back side right
            if self.end == self.span() {
                self.grow()?;
            }
            self.ensure_block(self.end / self.cap)?;
            for offset in (index..len).rev() {
                unsafe { self.move_slot(self.start + offset, self.start + offset + 1) };
            }
            self.end += 1;
        }
        self.write_slot(self.start + index, value);
        Ok(())
    }

    /// Removes and returns the element at logical position `index`,
    /// shifting the shorter side to close the gap. Out-of-range positions
    /// are a no-op returning `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let len = self.len();
        if index >= len {
            return None;
        }
        let value = unsafe { self.read_slot(self.start + index) };
        if index < len - 1 - index {
            for offset in (0..index).rev() {
                unsafe { self.move_slot(self.start + offset, self.start + offset + 1) };
            }
            self.start += 1;
        } else {
            for offset in index + 1..len {
                unsafe { self.move_slot(self.start + offset, self.start + offset - 1) };
            }
            self.end -= 1;
        }
        Some(value)
    }

    /// Drops every element and re-anchors the start/end pair at the middle
    /// of the span. Block allocations are kept.
    pub fn clear(&mut self) {
        for slot in self.start..self.end {
            unsafe { self.drop_slot(slot) };
        }
        let middle = self.span() / 2;
        self.start = middle;
        self.end = middle;
    }

    /// A double-ended iterator from front to back.
    pub fn iter(&self) -> SegDequeIter<'_, T> {
        SegDequeIter {
            deque: self,
            front: 0,
            remaining: self.len(),
        }
    }

    /// A cursor parked on the front element (or past the end when empty).
    pub fn cursor(&self) -> DequeCursor<'_, T> {
        DequeCursor::at_front(self)
    }

    /// A cursor parked before the first element.
    pub fn cursor_before_begin(&self) -> DequeCursor<'_, T> {
        DequeCursor::before_begin(self)
    }

    /// A cursor parked past the last element.
    pub fn cursor_after_end(&self) -> DequeCursor<'_, T> {
        DequeCursor::after_end(self)
    }

    /// A mutable cursor parked on the element at `index`, or past the end
    /// when `index >= len`.
    pub fn cursor_mut_at(&mut self, index: usize) -> DequeCursorMut<'_, T> {
        DequeCursorMut::at_index(self, index)
    }

    /// Grows the block-pointer array, adding half the current block count
    /// of empty slots on each side (at least one per side), and shifts the
    /// start/end pair to keep every element where it was. Only block
    /// pointers move; element bytes are untouched.
    ///
    /// On the very first call this lays out the initial span and anchors
    /// start/end at its middle.
    fn grow(&mut self) -> Result<()> {
        if self.blocks.is_empty() {
            self.blocks.try_reserve_exact(INITIAL_BLOCKS).map_err(|_| Error::OutOfMemory)?;
            self.blocks.extend((0..INITIAL_BLOCKS).map(|_| None));
            let middle = self.span() / 2;
            self.start = middle;
            self.end = middle;
            return Ok(());
        }

        let old = self.blocks.len();
        let added = (old / 2).max(1);
        let mut grown: Vec<Option<Box<[MaybeUninit<T>]>>> = Vec::new();
        grown.try_reserve_exact(old + 2 * added).map_err(|_| Error::OutOfMemory)?;
        grown.extend((0..added).map(|_| None));
        grown.append(&mut self.blocks);
        grown.extend((0..added).map(|_| None));
        self.blocks = grown;

        let shift = added * self.cap;
        self.start += shift;
        self.end += shift;
        Ok(())
    }

    /// Allocates the block holding `block` if it is still null.
    fn ensure_block(&mut self, block: usize) -> Result<()> {
        if self.blocks[block].is_some() {
            return Ok(());
        }
        let mut storage: Vec<MaybeUninit<T>> = Vec::new();
        storage.try_reserve_exact(self.cap).map_err(|_| Error::OutOfMemory)?;
        storage.extend((0..self.cap).map(|_| MaybeUninit::uninit()));
        self.blocks[block] = Some(storage.into_boxed_slice());
        Ok(())
    }

    /// Writes into a slot known to be uninitialized (or already moved
    /// out). The surrounding bookkeeping makes the slot part of the live
    /// range afterwards.
    fn write_slot(&mut self, slot: usize, value: T) {
        let pos = Pos::from_linear(slot, self.cap);
        let block = self.blocks[pos.block].as_mut().expect("write into an unallocated block");
        block[pos.offset] = MaybeUninit::new(value);
    }

    /// Reads a slot out of the live range.
    ///
    /// # Safety
    /// `slot` must hold an initialized element, and the caller must remove
    /// it from the live range (or overwrite it) so it is not read twice.
    unsafe fn read_slot(&mut self, slot: usize) -> T {
        let pos = Pos::from_linear(slot, self.cap);
        let block = self.blocks[pos.block].as_ref().expect("read from an unallocated block");
        block[pos.offset].assume_init_read()
    }

    /// Moves the element in `from` into `to` (which must be allocated and
    /// outside the live range or already vacated).
    ///
    /// # Safety
    /// `from` must hold an initialized element.
    unsafe fn move_slot(&mut self, from: usize, to: usize) {
        let value = self.read_slot(from);
        self.write_slot(to, value);
    }

    /// # Safety
    /// `slot` must hold an initialized element not read again afterwards.
    unsafe fn drop_slot(&mut self, slot: usize) {
        let pos = Pos::from_linear(slot, self.cap);
        let block = self.blocks[pos.block].as_mut().expect("drop in an unallocated block");
        block[pos.offset].assume_init_drop();
    }

    fn slot_ref(&self, slot: usize) -> &T {
        let pos = Pos::from_linear(slot, self.cap);
        let block = self.blocks[pos.block].as_ref().expect("read from an unallocated block");
        unsafe { block[pos.offset].assume_init_ref() }
    }

    fn slot_mut(&mut self, slot: usize) -> &mut T {
        let pos = Pos::from_linear(slot, self.cap);
        let block = self.blocks[pos.block].as_mut().expect("read from an unallocated block");
        unsafe { block[pos.offset].assume_init_mut() }
    }
}

impl<T> Drop for SegDeque<T> {
    fn drop(&mut self) {
        for slot in self.start..self.end {
            unsafe { self.drop_slot(slot) };
        }
    }
}

impl<T> Default for SegDeque<T> {
    fn default() -> Self {
        SegDeque::new()
    }
}

impl<T> Extend<T> for SegDeque<T> {
    /// Appends every element at the back.
    ///
    /// # Panics
    /// On allocation failure; `Extend` has no error channel. Use
    /// [`SegDeque::push_back`] to observe [`Error::OutOfMemory`] instead.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if let Err(err) = self.push_back(value) {
                panic!("deque extend failed: {}", err);
            }
        }
    }
}

impl<T> FromIterator<T> for SegDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = SegDeque::new();
        deque.extend(iter);
        deque
    }
}

impl<'a, T> IntoIterator for &'a SegDeque<T> {
    type Item = &'a T;
    type IntoIter = SegDequeIter<'a, T>;

    fn into_iter(self) -> SegDequeIter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for SegDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Front-to-back iterator over a [`SegDeque`]. Created by
/// [`SegDeque::iter`].
pub struct SegDequeIter<'a, T> {
    deque: &'a SegDeque<T>,
    front: usize,
    remaining: usize,
}

impl<'a, T> Iterator for SegDequeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.deque.get(self.front);
        self.front += 1;
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for SegDequeIter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.deque.get(self.front + self.remaining)
    }
}

impl<'a, T> ExactSizeIterator for SegDequeIter<'a, T> {}
