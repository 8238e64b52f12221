//! Block/offset addressing for the segmented deque.
//!
//! All index arithmetic lives here as pure functions over a small value
//! type, so every block-boundary crossing is decided in exactly one place
//! and can be tested without touching deque memory.

/// The physical address of a slot: which block, and where inside it.
///
/// A deque slot span is addressed linearly as `block * cap + offset`;
/// `cap` is the per-block slot count fixed at container creation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Pos {
    pub(crate) block: usize,
    pub(crate) offset: usize,
}

impl Pos {
    #[inline]
    pub(crate) fn from_linear(slot: usize, cap: usize) -> Pos {
        Pos {
            block: slot / cap,
            offset: slot % cap,
        }
    }

    #[inline]
    pub(crate) fn to_linear(self, cap: usize) -> usize {
        self.block * cap + self.offset
    }

    /// The next slot, crossing into the following block when the offset
    /// runs off the end.
    #[inline]
    pub(crate) fn advance(self, cap: usize) -> Pos {
        if self.offset + 1 == cap {
            Pos {
                block: self.block + 1,
                offset: 0,
            }
        } else {
            Pos {
                block: self.block,
                offset: self.offset + 1,
            }
        }
    }

    /// The previous slot, crossing into the preceding block from offset
    /// zero. Must not be called at the very first slot.
    #[inline]
    pub(crate) fn retreat(self, cap: usize) -> Pos {
        if self.offset == 0 {
            Pos {
                block: self.block - 1,
                offset: cap - 1,
            }
        } else {
            Pos {
                block: self.block,
                offset: self.offset - 1,
            }
        }
    }

    /// Number of slots from `self` up to (not including) `other`.
    #[inline]
    pub(crate) fn distance(self, other: Pos, cap: usize) -> usize {
        other.to_linear(cap) - self.to_linear(cap)
    }
}

#[cfg(test)]
mod tests {
    use super::Pos;

    const CAP: usize = 4;

    #[test]
    fn linear_round_trip() {
        for slot in 0..64 {
            assert_eq!(Pos::from_linear(slot, CAP).to_linear(CAP), slot);
        }
    }

    #[test]
    fn advance_crosses_block_boundaries() {
        let mut pos = Pos::from_linear(0, CAP);
        for slot in 1..=17 {
            pos = pos.advance(CAP);
            assert_eq!(pos, Pos::from_linear(slot, CAP));
        }
        assert_eq!(pos, Pos { block: 4, offset: 1 });
    }

    #[test]
    fn retreat_crosses_block_boundaries() {
        // landing exactly on an offset-zero slot must step into the
        // previous block's last slot
        let pos = Pos { block: 3, offset: 0 };
        assert_eq!(pos.retreat(CAP), Pos { block: 2, offset: 3 });
        assert_eq!(pos.retreat(CAP).advance(CAP), pos);
    }

    #[test]
    fn distance_spans_blocks() {
        let a = Pos { block: 1, offset: 2 };
        let b = Pos { block: 3, offset: 1 };
        assert_eq!(a.distance(b, CAP), 7);
        assert_eq!(a.distance(a, CAP), 0);
    }
}
