use std::cmp::Ordering;

use super::node::{Node, balance};
use super::rotation::{rotate_left, rotate_right};

/// How to tell a single-rotation imbalance from a double-rotation one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Pivot {
    /// How the mutated key compared against the heavy child's key.
    ///
    /// `Less` under a left-heavy node is Left-Left, `Greater` is Left-Right (mirrored on the right).
    Key(Ordering),
    /// Read the heavy child's own balance factor instead.
    Shape,
}

/// Restores the AVL invariant at `node`, whose children are already balanced
/// and whose height cache is already up to date. Returns the new subtree root.
///
/// Does nothing when `|balance| <= 1`.
pub(crate) fn rebalance<K>(mut node: Box<Node<K>>, pivot: Pivot) -> Box<Node<K>> {
    let factor = node.balance();

    if factor > 1 {
        let inner = match pivot {
            Pivot::Key(Ordering::Greater) => true,
            Pivot::Key(Ordering::Less) => false,
            // the key can't tell us anything here, fall back to the shape
            Pivot::Key(Ordering::Equal) | Pivot::Shape => balance(&node.left) < 0,
        };

        if inner {
            trace!("left-right rotation (balance {factor})");
            node.left = node.left.take().map(rotate_left);
        } else {
            trace!("left-left rotation (balance {factor})");
        }
        rotate_right(node)
    } else if factor < -1 {
        let inner = match pivot {
            Pivot::Key(Ordering::Less) => true,
            Pivot::Key(Ordering::Greater) => false,
            Pivot::Key(Ordering::Equal) | Pivot::Shape => balance(&node.right) > 0,
        };

        if inner {
            trace!("right-left rotation (balance {factor})");
            node.right = node.right.take().map(rotate_right);
        } else {
            trace!("right-right rotation (balance {factor})");
        }
        rotate_left(node)
    } else {
        node
    }
}
