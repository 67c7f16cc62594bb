//! Dimension-checked staging collection that feeds tree construction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::common_types::Point;
use crate::error::{KdTreeError, Result};

/// An ordered collection of points that all share one declared dimensionality.
///
/// The dimensionality is fixed at construction; [`PointSet::add_item`] rejects any
/// point whose coordinate vector has a different length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawPointSet<F>")
)]
pub struct PointSet<F> {
    dimension_count: usize,
    items: Vec<Point<F>>,
}

impl<F> PointSet<F> {
    pub fn new(dimension_count: usize) -> Self {
        PointSet { dimension_count, items: Vec::new() }
    }

    pub fn with_capacity(dimension_count: usize, capacity: usize) -> Self {
        PointSet { dimension_count, items: Vec::with_capacity(capacity) }
    }

    /// Stages every point from `points`, stopping at the first one whose
    /// dimensionality disagrees with `dimension_count`.
    pub fn try_from_points<I>(dimension_count: usize, points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point<F>>,
    {
        let mut set = Self::new(dimension_count);
        for point in points {
            set.add_item(point)?;
        }
        Ok(set)
    }

    /// Appends `point`, or fails without touching the set if its length is wrong.
    ///
    /// A zero-dimensional set has no axis to split on, so it accepts no points.
    pub fn add_item(&mut self, point: Point<F>) -> Result<()> {
        if self.dimension_count == 0 || point.dimension_count() != self.dimension_count {
            return Err(KdTreeError::DimensionMismatch {
                expected: self.dimension_count,
                found: point.dimension_count(),
            });
        }
        self.items.push(point);
        Ok(())
    }

    pub fn dimension_count(&self) -> usize {
        self.dimension_count
    }

    pub fn items(&self) -> &[Point<F>] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Splits the set into its declared dimensionality and the owned points.
    pub(crate) fn into_parts(self) -> (usize, Vec<Point<F>>) {
        (self.dimension_count, self.items)
    }
}

impl<F> IntoIterator for PointSet<F> {
    type Item = Point<F>;
    type IntoIter = std::vec::IntoIter<Point<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, F> IntoIterator for &'a PointSet<F> {
    type Item = &'a Point<F>;
    type IntoIter = std::slice::Iter<'a, Point<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Unvalidated wire shape; deserialized sets go back through `add_item`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPointSet<F> {
    dimension_count: usize,
    items: Vec<Point<F>>,
}

#[cfg(feature = "serde")]
impl<F> TryFrom<RawPointSet<F>> for PointSet<F> {
    type Error = KdTreeError;

    fn try_from(raw: RawPointSet<F>) -> Result<Self> {
        Self::try_from_points(raw.dimension_count, raw.items)
    }
}
