//! This module contains the k-d tree and its construction.

use std::cmp::Ordering;

use num_traits::Float;
use tracing::{debug, debug_span};

use super::node::TreeNode;
use super::traversal::Iter;
use crate::common_types::Point;
use crate::point_set::PointSet;

/// How each node picks the median point along its splitting axis.
///
/// Both strategies split by position in the axis-sorted order, never by value,
/// so duplicate-heavy input still halves at every level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MedianStrategy {
    /// Quickselect (`select_nth_unstable_by`): average linear time per level.
    #[default]
    Selection,
    /// Stable sort per level. Slower, but equal keys keep their input order,
    /// which makes the layout reproducible.
    FullSort,
}

/// Knobs for [`KdTree::with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    pub median_strategy: MedianStrategy,
    /// Sublists at least this large build their two children concurrently.
    /// Only consulted with the `parallel` feature.
    pub parallel_threshold: usize,
}

impl BuildOptions {
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_median_strategy(mut self, median_strategy: MedianStrategy) -> Self {
        self.median_strategy = median_strategy;
        self
    }

    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            median_strategy: MedianStrategy::default(),
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// A static, balanced k-d tree.
///
/// Built once from a [`PointSet`] and immutable afterwards. Every node at depth `d`
/// splits on axis `d % k`: points in its left subtree are `<=` the node's
/// coordinate on that axis, points in its right subtree are `>=` it. Ties may land
/// on either side.
#[derive(Debug)]
pub struct KdTree<F> {
    root: Option<Box<TreeNode<F>>>,
    dimension_count: usize,
    item_count: usize,
    min_boundary: Vec<F>,
    max_boundary: Vec<F>,
}

impl<F> KdTree<F>
where
    F: Float + Send,
{
    /// Builds a tree with default [`BuildOptions`].
    pub fn new(point_set: PointSet<F>) -> Self {
        Self::with_options(point_set, BuildOptions::default())
    }

    pub fn with_options(point_set: PointSet<F>, options: BuildOptions) -> Self {
        let (declared_dimensions, points) = point_set.into_parts();
        let item_count = points.len();

        let span = debug_span!("kdtree_build", items = item_count, dimensions = declared_dimensions);
        let _enter = span.enter();

        let (min_boundary, max_boundary) = compute_boundaries(&points, declared_dimensions);

        // An empty set has no point to take a dimensionality from.
        let dimension_count = if points.is_empty() { 0 } else { declared_dimensions };
        debug_assert!(
            points.is_empty() || dimension_count > 0,
            "a non-empty point set must have at least one dimension"
        );

        let root = if dimension_count == 0 {
            None
        } else {
            build_recursive(points, dimension_count, 0, options)
        };

        let tree = KdTree { root, dimension_count, item_count, min_boundary, max_boundary };
        debug!(height = tree.height(), strategy = ?options.median_strategy, "built k-d tree");
        tree
    }
}

impl<F> KdTree<F> {
    /// Dimensionality of the stored points, or 0 for a tree built from an empty set.
    pub fn dimension_count(&self) -> usize {
        self.dimension_count
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Per-dimension minimum coordinate; `+inf` in every slot for an empty set.
    pub fn min_boundary(&self) -> &[F] {
        &self.min_boundary
    }

    /// Per-dimension maximum coordinate; `-inf` in every slot for an empty set.
    pub fn max_boundary(&self) -> &[F] {
        &self.max_boundary
    }

    pub fn root(&self) -> Option<&TreeNode<F>> {
        self.root.as_deref()
    }

    /// Number of levels, 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.root().map_or(0, TreeNode::height)
    }

    /// Depth-first, pre-order walk over `(depth, node)` pairs.
    pub fn iter(&self) -> Iter<'_, F> {
        Iter::new(self.root())
    }
}

impl<F> From<PointSet<F>> for KdTree<F>
where
    F: Float + Send,
{
    fn from(point_set: PointSet<F>) -> Self {
        KdTree::new(point_set)
    }
}

impl<'a, F> IntoIterator for &'a KdTree<F> {
    type Item = (usize, &'a TreeNode<F>);
    type IntoIter = Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One pass over every point: the per-dimension envelope.
fn compute_boundaries<F: Float>(points: &[Point<F>], dimensions: usize) -> (Vec<F>, Vec<F>) {
    let mut min_boundary = vec![F::infinity(); dimensions];
    let mut max_boundary = vec![F::neg_infinity(); dimensions];

    for point in points {
        let slots = min_boundary.iter_mut().zip(max_boundary.iter_mut());
        for ((min, max), &value) in slots.zip(point.coordinates()) {
            // Float::min/max ignore NaN.
            *min = F::min(*min, value);
            *max = F::max(*max, value);
        }
    }
    (min_boundary, max_boundary)
}

/// Total order on one axis. NaN sorts after every number, so selection never
/// sees an inconsistent comparator.
fn cmp_on_axis<F: Float>(a: &Point<F>, b: &Point<F>, axis: usize) -> Ordering {
    let (x, y) = (a.coordinates()[axis], b.coordinates()[axis]);
    x.partial_cmp(&y).unwrap_or_else(|| x.is_nan().cmp(&y.is_nan()))
}

fn build_recursive<F>(
    mut points: Vec<Point<F>>,
    k_dimensions: usize,
    depth: usize,
    options: BuildOptions,
) -> Option<Box<TreeNode<F>>>
where
    F: Float + Send,
{
    if points.is_empty() {
        return None;
    }

    let axis = depth % k_dimensions;
    let median_idx = points.len() / 2;

    match options.median_strategy {
        MedianStrategy::Selection => {
            points.select_nth_unstable_by(median_idx, |a, b| cmp_on_axis(a, b, axis));
        }
        MedianStrategy::FullSort => {
            points.sort_by(|a, b| cmp_on_axis(a, b, axis));
        }
    }

    // Split by position: [.. median_idx] | median | [median_idx + 1 ..]
    let right_points = points.split_off(median_idx + 1);
    let item = points.pop()?;
    let left_points = points;

    let (left, right) = build_children(left_points, right_points, k_dimensions, depth + 1, options);

    Some(Box::new(TreeNode { item, axis, left, right }))
}

#[cfg(feature = "parallel")]
fn build_children<F>(
    left_points: Vec<Point<F>>,
    right_points: Vec<Point<F>>,
    k_dimensions: usize,
    depth: usize,
    options: BuildOptions,
) -> (Option<Box<TreeNode<F>>>, Option<Box<TreeNode<F>>>)
where
    F: Float + Send,
{
    let size = left_points.len() + right_points.len();
    if size >= options.parallel_threshold {
        tracing::trace!(depth, size, "building subtrees in parallel");
        rayon::join(
            || build_recursive(left_points, k_dimensions, depth, options),
            || build_recursive(right_points, k_dimensions, depth, options),
        )
    } else {
        (
            build_recursive(left_points, k_dimensions, depth, options),
            build_recursive(right_points, k_dimensions, depth, options),
        )
    }
}

#[cfg(not(feature = "parallel"))]
fn build_children<F>(
    left_points: Vec<Point<F>>,
    right_points: Vec<Point<F>>,
    k_dimensions: usize,
    depth: usize,
    options: BuildOptions,
) -> (Option<Box<TreeNode<F>>>, Option<Box<TreeNode<F>>>)
where
    F: Float + Send,
{
    (
        build_recursive(left_points, k_dimensions, depth, options),
        build_recursive(right_points, k_dimensions, depth, options),
    )
}
