/// An owning edge to a subtree. `None` is "no child", not an error.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

pub(crate) struct Node<K> {
    pub(crate) key: K,
    /// Cached height of the subtree rooted here (1 for a leaf).
    pub(crate) height: usize,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    pub(crate) fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            height: 1,
            left: None,
            right: None,
        })
    }

    /// Recomputes the cached height from the children.
    ///
    /// Both children's caches must already be correct.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(left) - height(right)`
    pub(crate) fn balance(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

/// Height of a subtree, 0 when absent.
pub(crate) fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Balance factor of a subtree, 0 when absent.
pub(crate) fn balance<K>(link: &Link<K>) -> isize {
    link.as_ref().map_or(0, |node| node.balance())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_metrics_are_zero() {
        let empty: Link<i32> = None;
        assert_eq!(height(&empty), 0);
        assert_eq!(balance(&empty), 0);
    }

    #[test]
    fn leaning_node() {
        let mut root = Node::leaf(5);
        let mut left = Node::leaf(3);
        left.left = Some(Node::leaf(1));
        left.update_height();
        root.left = Some(left);
        root.update_height();

        assert_eq!(root.height, 3);
        assert_eq!(root.balance(), 2);
        assert_eq!(balance(&root.left), 1);
        assert_eq!(height(&root.right), 0);
    }
}
