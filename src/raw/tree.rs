use core::cmp::Ordering;

use super::arena::{Arena, NodeId};
use super::node::{Node, Side};
use crate::compare::Comparator;
use crate::error::Result;

/// Result of descending towards a key.
pub(crate) enum Locate {
    /// An equal key is already stored at this node.
    Found(NodeId),
    /// The key is absent; it would be linked at this parent/side slot
    /// (`None` when the tree is empty).
    Vacant(Option<(NodeId, Side)>),
}

/// The outcome of structurally removing a node.
pub(crate) struct Removal<T> {
    pub(crate) value: T,
    /// Where a balance strategy should start retracing: the node whose
    /// subtree on the given side just lost one unit of height.
    /// `None` when the removed node was the root with no replacement
    /// below it.
    pub(crate) retrace_from: Option<(NodeId, Side)>,
}

/// The shared tree engine: arena, root link, size and comparator, plus all
/// the topology operations that the balance strategies have in common.
///
/// The strategies supply the structural insert/remove policy; everything
/// else (descent, linking, splicing, rotation mechanics, in-order
/// navigation) lives here and is written once.
pub(crate) struct RawTree<T> {
    arena: Arena<Node<T>>,
    pub(crate) root: Option<NodeId>,
    pub(crate) len: usize,
    pub(crate) cmp: Comparator<T>,
}

impl<T> RawTree<T> {
    pub(crate) const fn new(cmp: Comparator<T>) -> Self {
        RawTree {
            arena: Arena::new(),
            root: None,
            len: 0,
            cmp,
        }
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        self.arena.get(id)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.arena.get_mut(id)
    }

    /// Descends from the root by the comparator.
    pub(crate) fn locate(&self, value: &T) -> Locate {
        let mut cur = match self.root {
            None => return Locate::Vacant(None),
            Some(root) => root,
        };
        loop {
            let side = match (self.cmp)(value, &self.node(cur).value) {
                Ordering::Equal => return Locate::Found(cur),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            match self.node(cur).child(side) {
                Some(next) => cur = next,
                None => return Locate::Vacant(Some((cur, side))),
            }
        }
    }

    pub(crate) fn find(&self, value: &T) -> Option<NodeId> {
        match self.locate(value) {
            Locate::Found(id) => Some(id),
            Locate::Vacant(_) => None,
        }
    }

    /// Allocates a node for `value` and links it at the given vacancy.
    pub(crate) fn link(&mut self, slot: Option<(NodeId, Side)>, value: T) -> Result<NodeId> {
        let id = self.arena.alloc(Node::new(value))?;
        self.attach(slot, Some(id));
        self.len += 1;
        Ok(id)
    }

    /// Points `slot` (or the root link, for `None`) at `child`, fixing the
    /// child's parent pointer to match.
    pub(crate) fn attach(&mut self, slot: Option<(NodeId, Side)>, child: Option<NodeId>) {
        match slot {
            None => {
                self.root = child;
                if let Some(c) = child {
                    self.node_mut(c).parent = None;
                }
            }
            Some((parent, side)) => {
                self.node_mut(parent).set_child(side, child);
                if let Some(c) = child {
                    self.node_mut(c).parent = Some(parent);
                }
            }
        }
    }

    /// The parent/side slot currently holding `id`, or `None` for the root.
    pub(crate) fn parent_slot(&self, id: NodeId) -> Option<(NodeId, Side)> {
        let parent = self.node(id).parent?;
        let side = if self.node(parent).left == Some(id) {
            Side::Left
        } else {
            debug_assert_eq!(self.node(parent).right, Some(id));
            Side::Right
        };
        Some((parent, side))
    }

    /// Leftmost node of the subtree rooted at `id`.
    pub(crate) fn minimum(&self, id: NodeId) -> NodeId {
        let mut cur = id;
        while let Some(left) = self.node(cur).left {
            cur = left;
        }
        cur
    }

    /// Rightmost node of the subtree rooted at `id`.
    pub(crate) fn maximum(&self, id: NodeId) -> NodeId {
        let mut cur = id;
        while let Some(right) = self.node(cur).right {
            cur = right;
        }
        cur
    }

    pub(crate) fn first(&self) -> Option<NodeId> {
        self.root.map(|root| self.minimum(root))
    }

    pub(crate) fn last(&self) -> Option<NodeId> {
        self.root.map(|root| self.maximum(root))
    }

    /// In-order successor, by subtree descent or parent-pointer ascent.
    /// No auxiliary stack is involved.
    pub(crate) fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.neighbor(id, Side::Right)
    }

    /// In-order predecessor; mirror of [`RawTree::successor`].
    pub(crate) fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.neighbor(id, Side::Left)
    }

    fn neighbor(&self, id: NodeId, side: Side) -> Option<NodeId> {
        if let Some(child) = self.node(id).child(side) {
            let target = match side {
                Side::Right => self.minimum(child),
                Side::Left => self.maximum(child),
            };
            return Some(target);
        }
        // climb until we cross a link of the opposite side
        let mut cur = id;
        loop {
            let (parent, from) = self.parent_slot(cur)?;
            if from == side.flip() {
                return Some(parent);
            }
            cur = parent;
        }
    }

    /// Rotates at `x` in direction `dir` (`Side::Left` is a left rotation:
    /// the right son rises). Returns the node now rooting the subtree.
    ///
    /// Balance factors are left untouched; the caller knows the exact case
    /// and rewrites them from its table.
    pub(crate) fn rotate(&mut self, x: NodeId, dir: Side) -> NodeId {
        let rise = dir.flip();
        let z = self.node(x).child(rise).expect("rotation without a child to raise");
        let inner = self.node(z).child(dir);
        let slot = self.parent_slot(x);

        self.node_mut(x).set_child(rise, inner);
        if let Some(i) = inner {
            self.node_mut(i).parent = Some(x);
        }
        self.node_mut(z).set_child(dir, Some(x));
        self.node_mut(x).parent = Some(z);
        self.attach(slot, Some(z));
        z
    }

    /// Structurally removes `id`: splices out a node with at most one son,
    /// or grafts the in-order successor into its place.
    ///
    /// The successor carries over the removed node's balance factor, since
    /// it inherits the removed node's position in the shape. When the
    /// successor is the immediate right son there is no detachment step;
    /// that case relinks one pointer fewer and retraces from the successor
    /// itself.
    pub(crate) fn unlink(&mut self, id: NodeId) -> Removal<T> {
        let slot = self.parent_slot(id);
        let left = self.node(id).left;
        let right = self.node(id).right;

        let retrace_from = match (left, right) {
            (None, child) | (child, None) => {
                self.attach(slot, child);
                slot
            }
            (Some(left), Some(right)) => {
                let succ = self.minimum(right);
                let inherited = self.node(id).balance;
                if succ == right {
                    // successor is the immediate right son: graft directly
                    self.node_mut(succ).left = Some(left);
                    self.node_mut(left).parent = Some(succ);
                    self.node_mut(succ).balance = inherited;
                    self.attach(slot, Some(succ));
                    Some((succ, Side::Right))
                } else {
                    // detach the successor from deeper in the right
                    // subtree, splicing its own right son up
                    let succ_parent = self.node(succ).parent.expect("successor below right son has a parent");
                    let succ_right = self.node(succ).right;
                    self.attach(Some((succ_parent, Side::Left)), succ_right);

                    self.node_mut(succ).left = Some(left);
                    self.node_mut(left).parent = Some(succ);
                    self.node_mut(succ).right = Some(right);
                    self.node_mut(right).parent = Some(succ);
                    self.node_mut(succ).balance = inherited;
                    self.attach(slot, Some(succ));
                    Some((succ_parent, Side::Left))
                }
            }
        };

        self.len -= 1;
        let node = self.arena.take(id);
        Removal {
            value: node.value,
            retrace_from,
        }
    }

    /// Drops every node. Teardown is iterative: the arena sweeps its slot
    /// vector, so stack depth does not depend on tree shape.
    pub(crate) fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Panics unless the stored shape is consistent: parent links match
    /// child links, the in-order sequence is strictly ascending under the
    /// comparator, and (when `check_balance` is set) every stored balance
    /// factor equals the measured height difference and stays within
    /// `-1..=1`.
    pub(crate) fn assert_structure(&self, check_balance: bool) {
        match self.root {
            None => assert_eq!(self.len, 0, "empty tree with nonzero length"),
            Some(root) => {
                assert!(self.node(root).parent.is_none(), "root has a parent");
                let (_, count) = self.check_subtree(root, check_balance);
                assert_eq!(count, self.len, "length does not match node count");
            }
        }

        // the in-order sequence must be strictly ascending
        let mut cur = self.first();
        let mut visited = 0;
        while let Some(id) = cur {
            visited += 1;
            let next = self.successor(id);
            if let Some(next_id) = next {
                let order = (self.cmp)(&self.node(id).value, &self.node(next_id).value);
                assert_eq!(order, Ordering::Less, "in-order sequence out of order");
            }
            cur = next;
        }
        assert_eq!(visited, self.len, "in-order walk missed nodes");
    }

    fn check_subtree(&self, id: NodeId, check_balance: bool) -> (i32, usize) {
        let node = self.node(id);
        let (lh, lc) = match node.left {
            None => (0, 0),
            Some(left) => {
                assert_eq!(self.node(left).parent, Some(id), "broken parent link");
                self.check_subtree(left, check_balance)
            }
        };
        let (rh, rc) = match node.right {
            None => (0, 0),
            Some(right) => {
                assert_eq!(self.node(right).parent, Some(id), "broken parent link");
                self.check_subtree(right, check_balance)
            }
        };
        if check_balance {
            let measured = rh - lh;
            assert_eq!(i32::from(node.balance), measured, "stored balance factor is stale");
            assert!(measured.abs() <= 1, "balance invariant violated");
        }
        (lh.max(rh) + 1, lc + rc + 1)
    }
}
