use std::collections::HashSet;

use rand::Rng;
use static_kdtree::{BuildOptions, KdTree, MedianStrategy, Point, PointSet, TreeNode};

fn point_set(dimensions: usize, coords: impl IntoIterator<Item = Vec<f64>>) -> PointSet<f64> {
    let points = coords.into_iter().enumerate().map(|(i, c)| Point::new(i as u64, c));
    PointSet::try_from_points(dimensions, points).expect("generated points must match dimensions")
}

fn random_set(n: usize, dimensions: usize) -> PointSet<f64> {
    let mut rng = rand::thread_rng();
    point_set(
        dimensions,
        (0..n).map(|_| (0..dimensions).map(|_| rng.gen_range(-10..=10) as f64).collect()),
    )
}

/// The data sets the tree has to handle: monotone diagonals, all-identical points,
/// a half-duplicate mix, and uniform random integers in 1 to 5 dimensions.
fn fixtures() -> Vec<PointSet<f64>> {
    let mut rng = rand::thread_rng();
    let mut sets = vec![
        point_set(5, (0..200).map(|i| vec![-10.0 + i as f64 * 0.1; 5])),
        point_set(5, (0..200).map(|i| vec![10.0 - i as f64 * 0.1; 5])),
        point_set(5, (0..100).map(|_| vec![0.0; 5])),
        point_set(
            2,
            (0..100).map(|i| {
                if i % 2 == 0 {
                    vec![rng.gen_range(-10..=10) as f64, rng.gen_range(-10..=10) as f64]
                } else {
                    vec![2.0, 2.0]
                }
            }),
        ),
    ];
    sets.extend((1..6).map(|d| random_set(100, d)));
    sets
}

fn subtree_values(node: Option<&TreeNode<f64>>, axis: usize, out: &mut Vec<f64>) {
    if let Some(node) = node {
        out.push(node.item().nth_dimension(axis).expect("axis is within dimensionality"));
        subtree_values(node.left(), axis, out);
        subtree_values(node.right(), axis, out);
    }
}

fn check_node(node: &TreeNode<f64>, depth: usize, k: usize) {
    let axis = depth % k;
    assert_eq!(node.axis(), axis);
    let value = node.item().nth_dimension(axis).expect("axis is within dimensionality");

    let mut left = Vec::new();
    subtree_values(node.left(), axis, &mut left);
    assert!(left.iter().all(|&v| v <= value), "left subtree exceeds {value} on axis {axis}");

    let mut right = Vec::new();
    subtree_values(node.right(), axis, &mut right);
    assert!(right.iter().all(|&v| v >= value), "right subtree below {value} on axis {axis}");

    for child in node.left().into_iter().chain(node.right()) {
        check_node(child, depth + 1, k);
    }
}

fn check_tree(tree: &KdTree<f64>, expected_items: usize) {
    assert_eq!(tree.item_count(), expected_items);

    let ids: Vec<u64> = tree.iter().map(|(_, n)| n.item().id()).collect();
    assert_eq!(ids.len(), expected_items, "traversal must visit every point once");
    let unique: HashSet<u64> = ids.iter().copied().collect();
    assert_eq!(unique.len(), expected_items, "no point may appear twice");

    if let Some(root) = tree.root() {
        check_node(root, 0, tree.dimension_count());
        let bound = (expected_items as f64).log2().floor() as usize + 1;
        assert!(tree.height() <= bound, "height {} exceeds {bound}", tree.height());
    }
}

#[test]
fn builds_valid_trees_for_every_fixture() {
    for strategy in [MedianStrategy::Selection, MedianStrategy::FullSort] {
        for set in fixtures() {
            let n = set.count();
            let k = set.dimension_count();
            let tree = KdTree::with_options(set, BuildOptions::new().with_median_strategy(strategy));
            assert_eq!(tree.dimension_count(), k);
            check_tree(&tree, n);
        }
    }
}

#[test]
fn reports_dimension_count() {
    assert_eq!(KdTree::new(random_set(10, 1)).dimension_count(), 1);
    assert_eq!(KdTree::new(random_set(10, 5)).dimension_count(), 5);
}

#[test]
fn reports_item_count() {
    assert_eq!(KdTree::new(random_set(0, 2)).item_count(), 0);
    assert_eq!(KdTree::new(random_set(10, 5)).item_count(), 10);
}

#[test]
fn empty_set_has_sentinel_bounds() {
    let tree = KdTree::new(random_set(0, 2));
    assert!(tree.root().is_none());
    assert_eq!(tree.min_boundary(), &[f64::INFINITY; 2]);
    assert_eq!(tree.max_boundary(), &[f64::NEG_INFINITY; 2]);
}

#[test]
fn bounds_match_input_envelope() {
    let coords = vec![vec![1.2, 2.2], vec![2.3, 2.4], vec![3.2, 2.1], vec![1.1, 2.0], vec![1.3, 2.2]];
    let tree = KdTree::new(point_set(2, coords));
    assert_eq!(tree.min_boundary(), &[1.1, 2.0]);
    assert_eq!(tree.max_boundary(), &[3.2, 2.4]);
    assert_eq!(tree.item_count(), 5);
    assert_eq!(tree.dimension_count(), 2);

    let set = random_set(100, 4);
    let mut min = [f64::INFINITY; 4];
    let mut max = [f64::NEG_INFINITY; 4];
    for p in &set {
        for (d, &c) in p.coordinates().iter().enumerate() {
            min[d] = min[d].min(c);
            max[d] = max[d].max(c);
        }
    }
    let tree = KdTree::new(set);
    assert_eq!(tree.min_boundary(), &min);
    assert_eq!(tree.max_boundary(), &max);
}

#[test]
fn identical_points_build_complete_tree() {
    let tree = KdTree::new(point_set(5, (0..100).map(|_| vec![0.0; 5])));
    check_tree(&tree, 100);
    assert!(tree.iter().all(|(_, n)| n.item().coordinates() == [0.0; 5]));
}

#[test]
fn tree_is_shareable_across_threads() {
    let tree = KdTree::new(random_set(500, 3));
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(tree.iter().count(), 500));
        }
    });
}
