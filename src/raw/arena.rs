use core::num::NonZeroU32;

use crate::error::{Error, Result};

/// A handle to a slot in an [`Arena`].
///
/// Stored `+1` so that `Option<NodeId>` is pointer-niche sized; a node with
/// three links and a balance byte stays compact.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct NodeId(NonZeroU32);

impl NodeId {
    /// The largest slot index a handle can address.
    pub(crate) const MAX: usize = (u32::MAX - 1) as usize;

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "arena is at maximum capacity");
        NodeId(NonZeroU32::new(index as u32 + 1).unwrap())
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

/// Slot storage with a free list.
///
/// Handles stay valid until their slot is freed; freeing never moves other
/// slots, which is what lets tree nodes refer to each other by `NodeId`
/// while rotations rewire them.
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<NodeId>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Stores `element` and returns its handle.
    ///
    /// Reuses a freed slot when one exists; otherwise reserves room first,
    /// so a failed allocation leaves the arena untouched.
    pub(crate) fn alloc(&mut self, element: T) -> Result<NodeId> {
        if let Some(id) = self.free.pop() {
            self.slots[id.index()] = Some(element);
            return Ok(id);
        }
        if self.slots.len() > NodeId::MAX {
            return Err(Error::OutOfMemory);
        }
        self.slots.try_reserve(1).map_err(|_| Error::OutOfMemory)?;
        // `take()` pushes to the free list infallibly, so room for every
        // live slot is reserved here, while the free list is empty
        self.free
            .try_reserve(self.slots.len() + 1)
            .map_err(|_| Error::OutOfMemory)?;
        self.slots.push(Some(element));
        Ok(NodeId::from_index(self.slots.len() - 1))
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &T {
        self.slots[id.index()].as_ref().expect("stale arena handle")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut T {
        self.slots[id.index()].as_mut().expect("stale arena handle")
    }

    /// Removes the element behind `id` and recycles the slot.
    pub(crate) fn take(&mut self, id: NodeId) -> T {
        let element = self.slots[id.index()].take().expect("stale arena handle");
        self.free.push(id);
        element
    }

    #[cfg(test)]
    fn free_capacity(&self) -> usize {
        self.free.capacity()
    }

    /// Drops every element. All outstanding handles become invalid.
    ///
    /// Teardown is a flat sweep over the slot vector; nodes do not own each
    /// other, so no recursion happens regardless of tree shape.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_round_trip() {
        for index in [0usize, 1, 7, 100_000] {
            assert_eq!(NodeId::from_index(index).index(), index);
        }
    }

    #[test]
    fn alloc_reuses_freed_slots() {
        let mut arena: Arena<i32> = Arena::new();
        let a = arena.alloc(1).unwrap();
        let b = arena.alloc(2).unwrap();
        assert_eq!(arena.take(a), 1);
        let c = arena.alloc(3).unwrap();
        assert_eq!(c, a); // slot recycled
        assert_eq!(*arena.get(b), 2);
        assert_eq!(*arena.get(c), 3);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn free_list_capacity_covers_every_live_slot() {
        let mut arena: Arena<u32> = Arena::new();
        let ids: Vec<NodeId> = (0..100).map(|i| arena.alloc(i).unwrap()).collect();
        // every take() must be able to push its slot without the free
        // list reallocating behind the error-handling contract's back
        assert!(arena.free_capacity() >= arena.len());
        let cap_before = arena.free_capacity();
        for id in ids {
            arena.take(id);
        }
        assert_eq!(arena.free_capacity(), cap_before);
    }

    #[test]
    fn clear_resets_everything() {
        let mut arena: Arena<String> = Arena::new();
        for i in 0..10 {
            arena.alloc(i.to_string()).unwrap();
        }
        arena.clear();
        assert_eq!(arena.len(), 0);
        let id = arena.alloc("fresh".to_string()).unwrap();
        assert_eq!(id.index(), 0);
    }
}
