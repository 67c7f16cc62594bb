//! This module contains the point type stored in point sets and tree nodes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{KdTreeError, Result};

/// A single point: an identifier plus a fixed-length coordinate vector.
///
/// - `F`: The coordinate type (e.g., `f64`, `f32`).
///
/// Points are immutable once created; the tree hands out shared references only.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<F> {
    id: u64,
    coordinates: Vec<F>,
}

impl<F> Point<F> {
    pub fn new(id: u64, coordinates: Vec<F>) -> Self {
        Point { id, coordinates }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn coordinates(&self) -> &[F] {
        &self.coordinates
    }

    /// Number of coordinates this point carries.
    pub fn dimension_count(&self) -> usize {
        self.coordinates.len()
    }
}

impl<F: Copy> Point<F> {
    /// Returns the coordinate along dimension `index`.
    ///
    /// Fails with [`KdTreeError::IndexOutOfRange`] when `index >= dimension_count()`.
    pub fn nth_dimension(&self, index: usize) -> Result<F> {
        self.coordinates
            .get(index)
            .copied()
            .ok_or(KdTreeError::IndexOutOfRange {
                index,
                dimensions: self.coordinates.len(),
            })
    }
}
