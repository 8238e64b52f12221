//! In-order iteration over a tree.

use super::{Balance, Tree};
use crate::raw::NodeId;

/// A double-ended, exact-size iterator yielding elements in comparator
/// order. Created by [`Tree::iter`].
pub struct Iter<'a, T, B: Balance> {
    tree: &'a Tree<T, B>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T, B: Balance> Iter<'a, T, B> {
    pub(crate) fn new(tree: &'a Tree<T, B>) -> Self {
        Iter {
            front: tree.raw.first(),
            back: tree.raw.last(),
            remaining: tree.len(),
            tree,
        }
    }
}

impl<'a, T, B: Balance> Iterator for Iter<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front.expect("iterator bounds out of sync");
        self.remaining -= 1;
        self.front = self.tree.raw.successor(id);
        Some(&self.tree.raw.node(id).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, B: Balance> DoubleEndedIterator for Iter<'a, T, B> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back.expect("iterator bounds out of sync");
        self.remaining -= 1;
        self.back = self.tree.raw.predecessor(id);
        Some(&self.tree.raw.node(id).value)
    }
}

impl<'a, T, B: Balance> ExactSizeIterator for Iter<'a, T, B> {}

#[cfg(test)]
mod tests {
    use crate::AvlTree;

    #[test]
    fn forward_and_backward_agree() {
        let tree: AvlTree<i32> = [4, 1, 3, 2].into_iter().collect();
        let forward: Vec<i32> = tree.iter().copied().collect();
        let backward: Vec<i32> = tree.iter().rev().copied().collect();
        assert_eq!(forward, vec![1, 2, 3, 4]);
        assert_eq!(backward, vec![4, 3, 2, 1]);
    }

    #[test]
    fn meeting_in_the_middle_terminates() {
        let tree: AvlTree<i32> = (0..7).collect();
        let mut iter = tree.iter();
        let mut collected = Vec::new();
        loop {
            match (iter.next(), iter.next_back()) {
                (Some(a), Some(b)) => {
                    collected.push((*a, *b));
                }
                (Some(a), None) => {
                    collected.push((*a, *a));
                    break;
                }
                _ => break,
            }
        }
        assert_eq!(collected, vec![(0, 6), (1, 5), (2, 4), (3, 3)]);
    }
}
