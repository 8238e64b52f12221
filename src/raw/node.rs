use super::arena::NodeId;

/// Which son of a node a position refers to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// The contribution of this side to a balance factor
    /// (`right height - left height`).
    #[inline]
    pub(crate) fn sign(self) -> i8 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }
}

/// A tree node. Links are arena handles; the node owns only its value.
///
/// `balance` is `height(right) - height(left)` and stays in `-1..=1`
/// between operations. The AVL strategy lets it reach `±2` transiently
/// while deciding on a rotation; the plain strategy leaves it at zero.
pub(crate) struct Node<T> {
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) balance: i8,
    pub(crate) value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Node<T> {
        Node {
            parent: None,
            left: None,
            right: None,
            balance: 0,
            value,
        }
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}
