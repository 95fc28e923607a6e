//! Accumulator implementations for sparse matrix multiplication
//!
//! An accumulator collects the partial products `a[i, k] * b[k, j]` keyed
//! by their result coordinate `(i, j)` and sums products that share a key.
//! Both implementations return their sums in row-major order.

pub mod map;
pub mod sort;

use num_traits::Num;
use std::ops::AddAssign;

pub use map::MapAccumulator;
pub use sort::SortAccumulator;

/// Trait for accumulators that sum intermediate products by result coordinate
pub trait Accumulator<T>
where
    T: Copy + Num + AddAssign,
{
    /// Create an accumulator expecting roughly `capacity` partial products
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    /// Add `val` to the running sum at `(row, col)`
    fn accumulate(&mut self, row: usize, col: usize, val: T);

    /// Extract the accumulated sums as `(row, col, sum)` triplets
    ///
    /// Triplets are sorted row-major and each coordinate appears once.
    /// Sums that cancel to zero are still reported.
    fn extract_result(self) -> Vec<(usize, usize, T)>;
}
