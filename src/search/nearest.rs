//! Nearest-neighbor and radius queries over a built [`KdTree`].
//!
//! Everything here goes through the tree's read-only accessors (`root`,
//! `dimension_count`, and each node's `item`/`axis`/`left`/`right`); the tree
//! itself knows nothing about queries.

use num_traits::{AsPrimitive, Float};
use tracing::warn;

use super::heap_utils::KBestNeighbors;
use crate::common_types::Point;
use crate::error::{KdTreeError, Result};
use crate::tree::{KdTree, TreeNode};

/// A point returned by a query, with its Euclidean distance to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a, F> {
    pub distance: f64,
    pub point: &'a Point<F>,
}

/// Query front-end borrowing a finished tree.
#[derive(Debug, Clone, Copy)]
pub struct NearestSearch<'a, F> {
    tree: &'a KdTree<F>,
}

impl<'a, F> NearestSearch<'a, F>
where
    F: Float + AsPrimitive<f64>,
{
    pub fn new(tree: &'a KdTree<F>) -> Self {
        NearestSearch { tree }
    }

    /// The `n_neighbors` points closest to `target`, nearest first.
    ///
    /// Asking for more neighbors than the tree holds returns every point.
    pub fn nearest(&self, target: &[F], n_neighbors: usize) -> Result<Vec<Neighbor<'a, F>>> {
        self.check_target(target)?;
        let n_neighbors = n_neighbors.min(self.tree.item_count());
        if n_neighbors == 0 {
            return Ok(Vec::new());
        }

        let mut best_n = KBestNeighbors::new(n_neighbors);
        Self::search_recursive(self.tree.root(), target, &mut best_n);
        Ok(best_n
            .into_sorted_entries()
            .into_iter()
            .map(|(distance, point)| Neighbor { distance, point })
            .collect())
    }

    /// Every point at distance `<= radius` from `target`, nearest first.
    ///
    /// `radius` must be positive; zero or negative radii match nothing.
    pub fn within_radius(&self, target: &[F], radius: f64) -> Result<Vec<Neighbor<'a, F>>> {
        self.check_target(target)?;
        if radius <= 0.0 {
            return Ok(Vec::new());
        }

        let mut found = Vec::new();
        Self::search_radius_recursive(self.tree.root(), target, radius, &mut found);
        found.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Ok(found)
    }

    /// An empty tree accepts any target; otherwise the lengths must agree.
    fn check_target(&self, target: &[F]) -> Result<()> {
        let expected = self.tree.dimension_count();
        if !self.tree.is_empty() && target.len() != expected {
            warn!(expected, found = target.len(), "query target dimensionality does not match tree");
            return Err(KdTreeError::DimensionMismatch { expected, found: target.len() });
        }
        Ok(())
    }

    fn search_recursive(
        current_node: Option<&'a TreeNode<F>>,
        target: &[F],
        best_n: &mut KBestNeighbors<&'a Point<F>>,
    ) {
        let Some(node) = current_node else {
            return;
        };

        let axis = node.axis();
        let node_coord = node.item().coordinates()[axis];
        let target_coord = target[axis];

        // Near side first.
        let (primary_child, secondary_child) = if target_coord < node_coord {
            (node.left(), node.right())
        } else {
            (node.right(), node.left())
        };

        Self::search_recursive(primary_child, target, best_n);

        best_n.add(euclidean_distance(target, node.item().coordinates()), node.item());

        let dist_to_hyperplane: f64 = (target_coord - node_coord).abs().as_();
        if best_n.current_farthest_distance().map_or(true, |radius| dist_to_hyperplane < radius) {
            Self::search_recursive(secondary_child, target, best_n);
        }
    }

    fn search_radius_recursive(
        current_node: Option<&'a TreeNode<F>>,
        target: &[F],
        radius: f64,
        found: &mut Vec<Neighbor<'a, F>>,
    ) {
        let Some(node) = current_node else {
            return;
        };

        let distance = euclidean_distance(target, node.item().coordinates());
        if distance <= radius {
            found.push(Neighbor { distance, point: node.item() });
        }

        let axis = node.axis();
        let node_coord = node.item().coordinates()[axis];
        let target_coord = target[axis];

        let (primary_child, secondary_child) = if target_coord < node_coord {
            (node.left(), node.right())
        } else {
            (node.right(), node.left())
        };

        Self::search_radius_recursive(primary_child, target, radius, found);

        let dist_to_hyperplane: f64 = (target_coord - node_coord).abs().as_();
        if dist_to_hyperplane <= radius {
            Self::search_radius_recursive(secondary_child, target, radius, found);
        }
    }
}

/// Calculates the Euclidean distance between two coordinate vectors.
fn euclidean_distance<F>(a: &[F], b: &[F]) -> f64
where
    F: Float + AsPrimitive<f64>,
{
    let sum_sq_diff = a.iter().zip(b).fold(F::zero(), |acc, (&x, &y)| {
        let diff = x - y;
        acc + diff * diff
    });
    let sum_sq_diff: f64 = sum_sq_diff.as_();
    sum_sq_diff.sqrt()
}
