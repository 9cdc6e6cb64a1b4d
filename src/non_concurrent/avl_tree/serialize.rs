use std::fmt::{self, Display, Write};

use super::AvlTree;
use super::node::Link;

/// Token written in place of a missing child.
const ABSENT: &str = "X";

impl<K: Display> AvlTree<K> {
    /// Preorder encoding of the tree's exact shape: each key followed by its
    /// left then right subtree, `X` for every missing child, comma separated.
    ///
    /// ```
    /// use avl_store::non_concurrent::AvlTree;
    ///
    /// let tree: AvlTree<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(tree.serialize(), "2,1,X,X,3,X,X");
    /// assert_eq!(AvlTree::<i32>::new().serialize(), "X");
    /// ```
    ///
    /// Complexity: O(n)
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

fn write_preorder<K: Display>(link: &Link<K>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match link {
        None => f.write_str(ABSENT),
        Some(node) => {
            write!(f, "{}", node.key)?;
            f.write_char(',')?;
            write_preorder(&node.left, f)?;
            f.write_char(',')?;
            write_preorder(&node.right, f)
        }
    }
}

/// Same text as [`AvlTree::serialize`].
impl<K: Display> Display for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_preorder(&self.root, f)
    }
}
