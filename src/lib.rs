//! Ordered and sequential containers built on shared, pluggable engines.
//!
//! The crate has two families:
//!
//! * Intrusive-style binary search trees with a single structural engine
//!   and swappable balance strategies. [`AvlTree`] keeps worst-case
//!   logarithmic height with balance-factor retracing; [`BstTree`] is the
//!   same engine with no rebalancing at all.
//! * [`SegDeque`], a segmented double-ended queue storing elements in
//!   fixed-size blocks behind a growable block-pointer array, so growth
//!   moves pointers but never elements.
//!
//! Both families expose cursors with explicit before-begin/after-end
//! sentinel positions, and report allocation failure as
//! [`Error::OutOfMemory`] instead of aborting.
//!
//!```
//! use holt::{AvlTree, SegDeque};
//!
//! let mut tree: AvlTree<i32> = AvlTree::new();
//! tree.insert(3).unwrap();
//! tree.insert(1).unwrap();
//! assert!(tree.contains(&1));
//!
//! let mut deque: SegDeque<i32> = SegDeque::new();
//! deque.push_front(1).unwrap();
//! deque.push_back(2).unwrap();
//! assert_eq!(deque.pop_front(), Some(1));
//!```

mod compare;
mod error;
mod raw;

pub mod deque;
pub mod tree;

pub use compare::{Comparator, HashFn};
pub use error::{Error, Result};

pub use deque::{DequeCursor, DequeCursorMut, SegDeque};
pub use tree::{
    avl::{Avl, AvlTree},
    plain::{BstTree, Plain},
    Balance, Cursor, CursorMut, Iter, Tree,
};
