//! Python bindings, built with the `python` feature.

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::common_types::Point;
use crate::error::KdTreeError;
use crate::point_set::PointSet;
use crate::search::{NearestSearch, Neighbor};
use crate::tree::KdTree;

impl From<KdTreeError> for PyErr {
    fn from(err: KdTreeError) -> PyErr {
        match err {
            KdTreeError::DimensionMismatch { .. } => PyValueError::new_err(err.to_string()),
            KdTreeError::IndexOutOfRange { .. } => PyIndexError::new_err(err.to_string()),
        }
    }
}

fn to_pairs(neighbors: Vec<Neighbor<'_, f64>>) -> Vec<(u64, f64)> {
    neighbors.into_iter().map(|n| (n.point.id(), n.distance)).collect()
}

/// Static k-d tree over `f64` coordinates.
#[pyclass(name = "KdTree")]
struct PyKdTree {
    tree: KdTree<f64>,
}

#[pymethods]
impl PyKdTree {
    /// `points` is a list of `(id, [coordinates])` tuples.
    #[new]
    fn new(dimensions: usize, points: Vec<(u64, Vec<f64>)>) -> PyResult<Self> {
        let staged = points.into_iter().map(|(id, coordinates)| Point::new(id, coordinates));
        let point_set = PointSet::try_from_points(dimensions, staged)?;
        Ok(PyKdTree { tree: KdTree::new(point_set) })
    }

    #[getter]
    fn dimension_count(&self) -> usize {
        self.tree.dimension_count()
    }

    #[getter]
    fn item_count(&self) -> usize {
        self.tree.item_count()
    }

    #[getter]
    fn min_boundary(&self) -> Vec<f64> {
        self.tree.min_boundary().to_vec()
    }

    #[getter]
    fn max_boundary(&self) -> Vec<f64> {
        self.tree.max_boundary().to_vec()
    }

    #[getter]
    fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns `[(id, distance)]` for the `k` nearest points, nearest first.
    fn nearest(&self, target: Vec<f64>, k: usize) -> PyResult<Vec<(u64, f64)>> {
        let found = NearestSearch::new(&self.tree).nearest(&target, k)?;
        Ok(to_pairs(found))
    }

    /// Returns `[(id, distance)]` for every point within `radius`, nearest first.
    fn within_radius(&self, target: Vec<f64>, radius: f64) -> PyResult<Vec<(u64, f64)>> {
        let found = NearestSearch::new(&self.tree).within_radius(&target, radius)?;
        Ok(to_pairs(found))
    }

    fn __len__(&self) -> usize {
        self.tree.item_count()
    }
}

/// The module name must match `lib.name` in `Cargo.toml`.
#[pymodule]
fn static_kdtree(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyKdTree>()?;
    Ok(())
}
