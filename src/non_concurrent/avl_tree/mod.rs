use std::cmp::Ordering;
use std::fmt;

mod node;
mod rebalance;
mod rotation;
mod serialize;

use node::{Link, Node};
use rebalance::{Pivot, rebalance};

// https://en.wikipedia.org/wiki/AVL_tree

/// A self-balancing ordered set of unique keys.
///
/// Every node keeps the heights of its two subtrees within one of each other,
/// so `insert`, `delete` and `contains` all walk a path of length O(log(n)).
///
/// Not synchronized: share it across threads behind a lock.
pub struct AvlTree<K> {
    root: Link<K>,
}

impl<K> AvlTree<K> {
    pub const fn new() -> Self {
        Self { root: None }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of keys in the tree.
    ///
    /// Complexity: O(n)
    pub fn len(&self) -> usize {
        fn count<K>(link: &Link<K>) -> usize {
            link.as_ref().map_or(0, |node| 1 + count(&node.left) + count(&node.right))
        }
        count(&self.root)
    }

    /// Height of the tree, 0 when empty.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    pub fn clear(&mut self) {
        self.root = None;
    }
}

impl<K: Ord> AvlTree<K> {
    /// Complexity: O(log(n))
    pub fn contains(&self, key: &K) -> bool {
        let mut current = &self.root;
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Adds `key` to the tree, rebalancing on the way back up.
    ///
    /// Returns `false` (and leaves the tree exactly as it was) if `key` is already present.
    ///
    /// Complexity: O(log(n))
    pub fn insert(&mut self, key: K) -> bool {
        if self.contains(&key) {
            debug!("insert of a key already in the tree, ignoring");
            return false
        }
        let (root, _) = insert_node(self.root.take(), key);
        self.root = Some(root);
        true
    }

    /// Removes `key` from the tree, rebalancing every ancestor on the way back up.
    ///
    /// Returns `false` (and leaves the tree exactly as it was) if `key` isn't present.
    ///
    /// Complexity: O(log(n))
    pub fn delete(&mut self, key: &K) -> bool {
        if !self.contains(key) {
            debug!("delete of a key not in the tree, ignoring");
            return false
        }
        self.root = delete_node(self.root.take(), key);
        true
    }
}

/// Returns the new subtree root, along with how `key` compared against the
/// root this frame was handed (which is what the parent pivots on).
fn insert_node<K: Ord>(link: Link<K>, key: K) -> (Box<Node<K>>, Ordering) {
    let Some(mut node) = link else {
        return (Node::leaf(key), Ordering::Equal)
    };

    let ord = key.cmp(&node.key);
    let below = match ord {
        Ordering::Less => {
            let (child, below) = insert_node(node.left.take(), key);
            node.left = Some(child);
            below
        }
        Ordering::Greater => {
            let (child, below) = insert_node(node.right.take(), key);
            node.right = Some(child);
            below
        }
        // no duplicates
        Ordering::Equal => return (node, ord),
    };

    node.update_height();

    // only the side we just grew can be too tall, so `below` is the
    // comparison against the heavy child
    (rebalance(node, Pivot::Key(below)), ord)
}

fn delete_node<K: Ord>(link: Link<K>, key: &K) -> Link<K> {
    let mut node = link?;

    match key.cmp(&node.key) {
        Ordering::Less => node.left = delete_node(node.left.take(), key),
        Ordering::Greater => node.right = delete_node(node.right.take(), key),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => return child,
            (Some(left), Some(right)) => {
                // pull the in-order successor up into this node
                let (right, successor) = take_min(right);
                node.key = successor.key;
                node.left = Some(left);
                node.right = right;
            }
        },
    }

    node.update_height();
    Some(rebalance(node, Pivot::Shape))
}

/// Detaches the left-most node of `node`'s subtree.
///
/// Returns what's left of the subtree (rebalanced) and the detached node.
fn take_min<K>(mut node: Box<Node<K>>) -> (Link<K>, Box<Node<K>>) {
    let Some(left) = node.left.take() else {
        let rest = node.right.take();
        return (rest, node)
    };

    let (left, min) = take_min(left);
    node.left = left;
    node.update_height();
    (Some(rebalance(node, Pivot::Shape)), min)
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: fmt::Debug> fmt::Debug for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn walk<K: fmt::Debug>(link: &Link<K>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match link {
                None => f.write_str("_"),
                Some(node) => {
                    write!(f, "{:?}(", node.key)?;
                    walk(&node.left, f)?;
                    f.write_str(", ")?;
                    walk(&node.right, f)?;
                    f.write_str(")")
                }
            }
        }
        f.write_str("AvlTree ")?;
        walk(&self.root, f)
    }
}
