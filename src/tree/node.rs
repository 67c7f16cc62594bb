use crate::common_types::Point;

/// A node of the k-d tree.
///
/// Each node exclusively owns its point and its children; there are no parent
/// links, so dropping the root tears the whole tree down.
#[derive(Debug)]
pub struct TreeNode<F> {
    pub(crate) item: Point<F>,
    /// The dimension this node splits on (`depth % k`).
    pub(crate) axis: usize,
    /// The left child of this node.
    pub(crate) left: Option<Box<TreeNode<F>>>,
    /// The right child of this node.
    pub(crate) right: Option<Box<TreeNode<F>>>,
}

impl<F> TreeNode<F> {
    pub fn item(&self) -> &Point<F> {
        &self.item
    }

    pub fn axis(&self) -> usize {
        self.axis
    }

    pub fn left(&self) -> Option<&TreeNode<F>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode<F>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes on the longest path from this node down to a leaf.
    pub fn height(&self) -> usize {
        let left = self.left().map_or(0, TreeNode::height);
        let right = self.right().map_or(0, TreeNode::height);
        1 + left.max(right)
    }
}

#[cfg(test)]
mod tests {
    use super::TreeNode;
    use crate::common_types::Point;

    fn leaf(id: u64, x: f64) -> Box<TreeNode<f64>> {
        Box::new(TreeNode { item: Point::new(id, vec![x]), axis: 0, left: None, right: None })
    }

    #[test]
    fn test_leaf_and_children() {
        let node = TreeNode {
            item: Point::new(1, vec![2.0]),
            axis: 0,
            left: Some(leaf(0, 1.0)),
            right: None,
        };
        assert!(!node.is_leaf());
        assert_eq!(node.left().map(|n| n.item().id()), Some(0));
        assert!(node.right().is_none());
        assert!(node.left().unwrap().is_leaf());
        assert_eq!(node.axis(), 0);
    }

    #[test]
    fn test_height() {
        let mut mid = leaf(1, 1.0);
        mid.left = Some(leaf(0, 0.0));
        let root = TreeNode { item: Point::new(2, vec![2.0]), axis: 0, left: Some(mid), right: Some(leaf(3, 3.0)) };
        assert_eq!(root.height(), 3);
        assert_eq!(leaf(9, 0.0).height(), 1);
    }
}
