//! Bounded max-heap that keeps the k nearest candidates of a query.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use ordered_float::OrderedFloat;

/// A candidate keyed by its distance to the query target.
#[derive(Debug)]
pub struct HeapElement<P> {
    pub distance: OrderedFloat<f64>,
    pub data: P,
}

impl<P> PartialEq for HeapElement<P> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}
impl<P> Eq for HeapElement<P> {}

impl<P> PartialOrd for HeapElement<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Ord for HeapElement<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Largest distance on top, so the worst kept candidate is evicted first.
        self.distance.cmp(&other.distance)
    }
}

/// Keeps the `capacity` items with the smallest distance seen so far.
#[derive(Debug)]
pub struct KBestNeighbors<P> {
    capacity: usize,
    heap: BinaryHeap<HeapElement<P>>,
}

impl<P> KBestNeighbors<P> {
    pub fn new(capacity: usize) -> Self {
        KBestNeighbors {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, distance: f64, data: P) {
        if self.capacity == 0 {
            return;
        }
        let item = HeapElement { distance: OrderedFloat(distance), data };
        if self.heap.len() < self.capacity {
            self.heap.push(item);
        } else if let Some(mut worst) = self.heap.peek_mut() {
            if item.distance < worst.distance {
                *worst = item;
            }
        }
    }

    /// Distance of the worst kept candidate, once the heap is full.
    ///
    /// `None` means "not full yet": no pruning radius exists.
    pub fn current_farthest_distance(&self) -> Option<f64> {
        if self.heap.len() == self.capacity {
            self.heap.peek().map(|heap_elem| heap_elem.distance.0)
        } else {
            None
        }
    }

    /// Consumes the heap, returning `(distance, data)` pairs nearest first.
    pub fn into_sorted_entries(self) -> Vec<(f64, P)> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|elem| (elem.distance.0, elem.data))
            .collect()
    }

    /// Candidates kept so far, never more than the capacity.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
