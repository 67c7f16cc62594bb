//! Depth-first traversal over a built tree.

use super::node::TreeNode;

/// Pre-order iterator yielding `(depth, node)` pairs, root first at depth 0.
///
/// Uses an explicit stack, so deep trees cannot overflow the call stack.
#[derive(Debug)]
pub struct Iter<'a, F> {
    stack: Vec<(usize, &'a TreeNode<F>)>,
}

impl<'a, F> Iter<'a, F> {
    pub(crate) fn new(root: Option<&'a TreeNode<F>>) -> Self {
        Iter { stack: root.map(|node| (0, node)).into_iter().collect() }
    }
}

impl<'a, F> Iterator for Iter<'a, F> {
    type Item = (usize, &'a TreeNode<F>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Right first so the left subtree comes out first.
        if let Some(right) = node.right() {
            self.stack.push((depth + 1, right));
        }
        if let Some(left) = node.left() {
            self.stack.push((depth + 1, left));
        }
        Some((depth, node))
    }
}
