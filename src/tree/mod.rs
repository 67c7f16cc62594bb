//! The static k-d tree: node type, construction, and traversal.

pub mod kd_tree;
pub mod node;
pub mod traversal;

pub use kd_tree::{BuildOptions, KdTree, MedianStrategy};
pub use node::TreeNode;
pub use traversal::Iter;
