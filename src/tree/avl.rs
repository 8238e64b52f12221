//! The AVL balance strategy.
//!
//! Balanced by keeping a per-node balance factor (`height(right) -
//! height(left)`), giving worst-case `O(log n)` operations with one signed
//! byte of overhead per node.

use super::{Strategy, Tree};
use crate::error::{Error, Result};
use crate::raw::{Locate, NodeId, RawTree, Side};

/// An ordered set with AVL rebalancing.
///
///```
/// use holt::AvlTree;
///
/// let mut tree: AvlTree<i32> = AvlTree::new();
/// for key in [16, 8, 24, 4, 12, 20, 28] {
///     tree.insert(key).unwrap();
/// }
/// let sorted: Vec<i32> = tree.iter().copied().collect();
/// assert_eq!(sorted, vec![4, 8, 12, 16, 20, 24, 28]);
/// # tree.assert_invariants();
///```
pub type AvlTree<T> = Tree<T, Avl>;

/// Strategy type selecting AVL rebalancing. See [`AvlTree`].
pub enum Avl {}

impl Strategy for Avl {
    const MAINTAINS_BALANCE: bool = true;

    fn insert<T>(raw: &mut RawTree<T>, value: T) -> Result<()> {
        let slot = match raw.locate(&value) {
            Locate::Found(_) => return Err(Error::Duplicate),
            Locate::Vacant(slot) => slot,
        };
        let id = raw.link(slot, value)?;
        insert_retrace(raw, id);
        Ok(())
    }

    fn remove<T>(raw: &mut RawTree<T>, id: NodeId) -> T {
        let removal = raw.unlink(id);
        if let Some((at, side)) = removal.retrace_from {
            remove_retrace(raw, at, side);
        }
        removal.value
    }
}

/// Walks back up from a freshly linked leaf, bumping each ancestor's
/// balance factor by the side the path came from.
///
/// Climbing stops as soon as a factor returns to zero (the subtree height
/// is unchanged, so no ancestor above can be affected), and after a single
/// rebalancing rotation: one rotation always restores global balance
/// after an insertion.
fn insert_retrace<T>(raw: &mut RawTree<T>, id: NodeId) {
    let mut child = id;
    while let Some((parent, side)) = raw.parent_slot(child) {
        let updated = raw.node(parent).balance + side.sign();
        match updated {
            0 => {
                raw.node_mut(parent).balance = 0;
                break;
            }
            -1 | 1 => {
                raw.node_mut(parent).balance = updated;
                child = parent;
            }
            _ => {
                // reached ±2; the heavy side is the insertion side
                rebalance(raw, parent, side);
                break;
            }
        }
    }
}

/// Walks back up from the splice point of a removal.
///
/// Each step the subtree on `side` of `at` has lost one unit of height.
/// A factor settling at ±1 means the overall subtree height is unchanged
/// and the climb stops. Unlike insertion, a rotation does not end the
/// walk: when the rotated subtree came out shorter, ancestors further up
/// may need rotations of their own, decided from the shape the earlier
/// rotation left behind.
fn remove_retrace<T>(raw: &mut RawTree<T>, start: NodeId, start_side: Side) {
    let mut at = start;
    let mut side = start_side;
    loop {
        let updated = raw.node(at).balance - side.sign();
        let climb_from = match updated {
            -1 | 1 => {
                raw.node_mut(at).balance = updated;
                break;
            }
            0 => {
                raw.node_mut(at).balance = 0;
                at
            }
            _ => {
                let (new_root, shrank) = rebalance(raw, at, side.flip());
                if !shrank {
                    break;
                }
                new_root
            }
        };
        match raw.parent_slot(climb_from) {
            None => break,
            Some((parent, from)) => {
                at = parent;
                side = from;
            }
        }
    }
}

/// Restores the invariant at `x`, whose `heavy` side is two levels deeper
/// than the other. Returns the node now rooting the subtree and whether
/// the subtree came out one level shorter than `x`'s pre-violation height.
///
/// The four cases, keyed by the heavy son `z`'s factor:
/// - same sign as the heavy side (or zero): one single rotation;
/// - opposite sign: a double rotation through `z`'s inner son `y`.
///
/// The factor rewrites are the standard AVL case table. A single rotation
/// with `z` balanced leaves the heights uneven on purpose (`x` and `z`
/// split to ±1) and does not shorten the subtree; it only arises during
/// removal.
fn rebalance<T>(raw: &mut RawTree<T>, x: NodeId, heavy: Side) -> (NodeId, bool) {
    let z = raw.node(x).child(heavy).expect("heavy side without a son");
    let z_factor = raw.node(z).balance;

    if z_factor * heavy.sign() < 0 {
        // inner-grandchild case: double rotation (left-right / right-left)
        let y = raw.node(z).child(heavy.flip()).expect("double rotation without an inner son");
        let y_factor = raw.node(y).balance;
        raw.rotate(z, heavy);
        let new_root = raw.rotate(x, heavy.flip());
        debug_assert_eq!(new_root, y);

        let (x_factor, z_after) = if y_factor == 0 {
            (0, 0)
        } else if y_factor == heavy.sign() {
            (-heavy.sign(), 0)
        } else {
            (0, heavy.sign())
        };
        raw.node_mut(x).balance = x_factor;
        raw.node_mut(z).balance = z_after;
        raw.node_mut(y).balance = 0;
        (y, true)
    } else {
        // outer-grandchild case: single rotation
        let new_root = raw.rotate(x, heavy.flip());
        debug_assert_eq!(new_root, z);

        if z_factor == 0 {
            raw.node_mut(x).balance = heavy.sign();
            raw.node_mut(z).balance = -heavy.sign();
            (z, false)
        } else {
            raw.node_mut(x).balance = 0;
            raw.node_mut(z).balance = 0;
            (z, true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AvlTree;

    #[test]
    fn insert_produces_sorted_sequence() {
        let mut tree: AvlTree<i32> = AvlTree::new();
        for key in [5, 2, 8, 1, 3, 7, 9, 4, 6] {
            tree.insert(key).unwrap();
        }
        tree.assert_invariants();
        let keys: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(keys, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn ascending_insertions_stay_balanced() {
        let mut tree: AvlTree<u32> = AvlTree::new();
        for key in 0..1000 {
            tree.insert(key).unwrap();
            tree.assert_invariants();
        }
        assert_eq!(tree.len(), 1000);
    }

    #[test]
    fn removal_rotates_at_multiple_levels() {
        // a Fibonacci-shaped tree makes one deletion cascade rotations up
        // the spine; the invariant checker would catch a single-rotation
        // shortcut
        let mut tree: AvlTree<i32> = AvlTree::new();
        for key in [8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1] {
            tree.insert(key).unwrap();
        }
        tree.assert_invariants();
        assert_eq!(tree.remove(&12), Some(12));
        tree.assert_invariants();
        let keys: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(keys, (1..=11).collect::<Vec<_>>());
    }

    #[test]
    fn remove_every_element_in_turn() {
        let keys: Vec<i32> = (0..200).collect();
        for &victim in &keys {
            let mut tree: AvlTree<i32> = keys.iter().copied().collect();
            assert_eq!(tree.remove(&victim), Some(victim));
            tree.assert_invariants();
            assert_eq!(tree.len(), keys.len() - 1);
            assert!(!tree.contains(&victim));
        }
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut tree: AvlTree<i32> = AvlTree::new();
        tree.insert(1).unwrap();
        assert_eq!(tree.insert(1), Err(crate::Error::Duplicate));
        assert_eq!(tree.len(), 1);
        tree.assert_invariants();
    }
}
