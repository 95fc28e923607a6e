//! Sort-based accumulator
//!
//! Collects partial products in an unsorted list, then sorts by result
//! coordinate and merges runs of equal coordinates.

use num_traits::Num;
use std::ops::AddAssign;

use crate::accumulator::Accumulator;

/// Sort-then-reduce accumulator for the partial products of a multiplication
pub struct SortAccumulator<T> {
    /// Unsorted `(row, col, product)` triplets
    products: Vec<(usize, usize, T)>,
}

impl<T> SortAccumulator<T>
where
    T: Copy + Num + AddAssign,
{
    /// Create a new sort-based accumulator
    ///
    /// # Arguments
    ///
    /// * `initial_capacity` - Initial capacity for the temporary storage
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            products: Vec::with_capacity(initial_capacity),
        }
    }
}

impl<T> Accumulator<T> for SortAccumulator<T>
where
    T: Copy + Num + AddAssign,
{
    fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity)
    }

    fn accumulate(&mut self, row: usize, col: usize, val: T) {
        self.products.push((row, col, val));
    }

    fn extract_result(mut self) -> Vec<(usize, usize, T)> {
        if self.products.is_empty() {
            return Vec::new();
        }

        // Stable, so equal keys are summed in insertion order
        self.products.sort_by_key(|&(row, col, _)| (row, col));

        let mut merged: Vec<(usize, usize, T)> = Vec::with_capacity(self.products.len());
        for (row, col, val) in self.products {
            match merged.last_mut() {
                Some(last) if last.0 == row && last.1 == col => last.2 += val,
                _ => merged.push((row, col, val)),
            }
        }

        merged
    }
}
