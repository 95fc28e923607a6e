//! Ordered-map accumulator
//!
//! Keeps one running sum per result coordinate in a `BTreeMap`, so the
//! extracted sums come out row-major without a separate sort.

use num_traits::Num;
use std::collections::BTreeMap;
use std::ops::AddAssign;

use crate::accumulator::Accumulator;

/// Accumulator backed by an ordered map from `(row, col)` to the running sum
pub struct MapAccumulator<T> {
    sums: BTreeMap<(usize, usize), T>,
}

impl<T> MapAccumulator<T>
where
    T: Copy + Num + AddAssign,
{
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            sums: BTreeMap::new(),
        }
    }
}

impl<T> Default for MapAccumulator<T>
where
    T: Copy + Num + AddAssign,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Accumulator<T> for MapAccumulator<T>
where
    T: Copy + Num + AddAssign,
{
    fn with_capacity(_capacity: usize) -> Self {
        Self::new()
    }

    fn accumulate(&mut self, row: usize, col: usize, val: T) {
        *self.sums.entry((row, col)).or_insert_with(T::zero) += val;
    }

    fn extract_result(self) -> Vec<(usize, usize, T)> {
        self.sums
            .into_iter()
            .map(|((row, col), sum)| (row, col, sum))
            .collect()
    }
}
