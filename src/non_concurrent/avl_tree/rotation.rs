use super::node::Node;

//        y             x
//       / \           / \
//      x   C   =>    A   y
//     / \               / \
//    A   B             B   C

/// Lifts `y.left` into `y`'s place and returns it.
///
/// If `y` has no left child there is nothing to rotate, and `y` comes back untouched.
///
/// Complexity: O(1)
pub(crate) fn rotate_right<K>(mut y: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut x) = y.left.take() else {
        warn!("rotate_right on a node without a left child, ignoring");
        return y
    };

    y.left = x.right.take();

    // `y` is now below `x`, so it has to be fixed first
    y.update_height();
    x.right = Some(y);
    x.update_height();

    x
}

/// Mirror of [`rotate_right`]: lifts `x.right` into `x`'s place and returns it.
///
/// Complexity: O(1)
pub(crate) fn rotate_left<K>(mut x: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut y) = x.right.take() else {
        warn!("rotate_left on a node without a right child, ignoring");
        return x
    };

    x.right = y.left.take();

    x.update_height();
    y.left = Some(x);
    y.update_height();

    y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(key: i32, left: Option<Box<Node<i32>>>, right: Option<Box<Node<i32>>>) -> Box<Node<i32>> {
        let mut n = Node::leaf(key);
        n.left = left;
        n.right = right;
        n.update_height();
        n
    }

    #[test]
    fn right_moves_inner_subtree() {
        // 4(2(1, 3), 5)
        let y = node(4, Some(node(2, Some(node(1, None, None)), Some(node(3, None, None)))), Some(node(5, None, None)));

        let x = rotate_right(y);
        assert_eq!(x.key, 2);
        assert_eq!(x.height, 3);
        assert_eq!(x.left.as_ref().unwrap().key, 1);

        let y = x.right.as_ref().unwrap();
        assert_eq!(y.key, 4);
        assert_eq!(y.height, 2);
        assert_eq!(y.left.as_ref().unwrap().key, 3);
        assert_eq!(y.right.as_ref().unwrap().key, 5);
    }

    #[test]
    fn left_moves_inner_subtree() {
        // 2(1, 4(3, 5))
        let x = node(2, Some(node(1, None, None)), Some(node(4, Some(node(3, None, None)), Some(node(5, None, None)))));

        let y = rotate_left(x);
        assert_eq!(y.key, 4);
        assert_eq!(y.height, 3);
        assert_eq!(y.right.as_ref().unwrap().key, 5);

        let x = y.left.as_ref().unwrap();
        assert_eq!(x.key, 2);
        assert_eq!(x.height, 2);
        assert_eq!(x.left.as_ref().unwrap().key, 1);
        assert_eq!(x.right.as_ref().unwrap().key, 3);
    }

    #[test]
    fn missing_pivot_is_a_no_op() {
        let leaf = rotate_right(node(7, None, None));
        assert_eq!(leaf.key, 7);
        assert_eq!(leaf.height, 1);

        let leaf = rotate_left(leaf);
        assert_eq!(leaf.key, 7);
        assert!(leaf.left.is_none() && leaf.right.is_none());
    }
}
