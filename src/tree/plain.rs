//! The plain (non-balancing) strategy.
//!
//! Same engine, naive structural insert and remove. Worst-case depth is
//! linear in the insertion order; useful as a baseline and wherever input
//! is known to arrive well shuffled.

use super::{Strategy, Tree};
use crate::error::{Error, Result};
use crate::raw::{Locate, NodeId, RawTree};

/// An ordered set with no rebalancing.
///
///```
/// use holt::BstTree;
///
/// let mut tree: BstTree<&str> = BstTree::new();
/// tree.insert("pear").unwrap();
/// tree.insert("apple").unwrap();
/// assert_eq!(tree.iter().count(), 2);
/// # tree.assert_invariants();
///```
pub type BstTree<T> = Tree<T, Plain>;

/// Strategy type selecting naive insert/remove. See [`BstTree`].
pub enum Plain {}

impl Strategy for Plain {
    const MAINTAINS_BALANCE: bool = false;

    fn insert<T>(raw: &mut RawTree<T>, value: T) -> Result<()> {
        let slot = match raw.locate(&value) {
            Locate::Found(_) => return Err(Error::Duplicate),
            Locate::Vacant(slot) => slot,
        };
        raw.link(slot, value)?;
        Ok(())
    }

    fn remove<T>(raw: &mut RawTree<T>, id: NodeId) -> T {
        raw.unlink(id).value
    }
}

#[cfg(test)]
mod tests {
    use super::BstTree;

    #[test]
    fn in_order_sequence_is_sorted_for_adversarial_input() {
        // ascending input degenerates to a list; order must still hold
        let tree: BstTree<i32> = (0..100).collect();
        tree.assert_invariants();
        let keys: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(keys, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn two_child_removal_splices_the_successor() {
        let mut tree: BstTree<i32> = [50, 25, 75, 10, 30, 60, 90, 27, 35].iter().copied().collect();
        assert_eq!(tree.remove(&25), Some(25));
        tree.assert_invariants();
        assert_eq!(
            tree.iter().copied().collect::<Vec<_>>(),
            vec![10, 27, 30, 35, 50, 60, 75, 90]
        );
    }
}
