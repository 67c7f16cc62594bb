//! A static, balanced k-d tree.
//!
//! Stage points in a [`PointSet`] (which enforces one dimensionality), then build a
//! [`KdTree`] from it. Construction splits each level at the positional median along
//! a rotating axis, so the tree stays balanced even when many points share
//! coordinates. The finished tree is immutable and exposes its bounds and its node
//! structure; [`NearestSearch`] answers k-nearest and radius queries on top of it.
//!
//! ```
//! use static_kdtree::{KdTree, NearestSearch, Point, PointSet};
//!
//! let mut points = PointSet::new(2);
//! for (id, xy) in [[1.2, 2.2], [2.3, 2.4], [3.2, 2.1], [1.1, 2.0], [1.3, 2.2]].into_iter().enumerate() {
//!     points.add_item(Point::new(id as u64, xy.to_vec()))?;
//! }
//!
//! let tree = KdTree::new(points);
//! assert_eq!(tree.item_count(), 5);
//! assert_eq!(tree.min_boundary(), &[1.1, 2.0]);
//! assert_eq!(tree.max_boundary(), &[3.2, 2.4]);
//!
//! let nearest = NearestSearch::new(&tree).nearest(&[3.0, 2.0], 1)?;
//! assert_eq!(nearest[0].point.id(), 2);
//! # Ok::<(), static_kdtree::KdTreeError>(())
//! ```
//!
//! Cargo features:
//! - `parallel`: build large subtrees concurrently with rayon.
//! - `serde`: serialize/deserialize [`Point`] and [`PointSet`].
//! - `python`: pyo3 extension module exposing the tree to Python.

pub mod common_types;
pub mod error;
pub mod point_set;
pub mod search;
pub mod tree;

#[cfg(feature = "python")]
mod python;

pub use common_types::Point;
pub use error::{KdTreeError, Result};
pub use point_set::PointSet;
pub use search::{NearestSearch, Neighbor};
pub use tree::{BuildOptions, KdTree, MedianStrategy, TreeNode};
