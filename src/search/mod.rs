//! Queries layered on top of a built tree's traversal accessors.

pub mod heap_utils;
pub mod nearest;

pub use nearest::{NearestSearch, Neighbor};
