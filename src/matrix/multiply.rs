//! Accumulate-by-key multiplication of two sparse matrices
//!
//! For every entry `(i, k, v)` of the left operand, the entries of row `k`
//! of the right operand are found and each `(k, j, w)` adds `v * w` to the
//! running sum at `(i, j)`. Only pairs of stored entries are ever
//! multiplied, and neither operand is transposed.

use num_traits::Num;
use std::ops::AddAssign;
use tracing::debug;

use crate::accumulator::{Accumulator, MapAccumulator, SortAccumulator};
use crate::error::{Error, Result};
use crate::matrix::config::{AccumulatorKind, MultiplyConfig, RowLookup};
use crate::matrix::SparseMatrix;
use crate::store::Entry;

impl<T> SparseMatrix<T>
where
    T: Copy + Num + AddAssign,
{
    /// Computes `self × other` with the default [`MultiplyConfig`]
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `self.col_count() != other.row_count()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llsparse::SparseMatrix;
    ///
    /// let a = SparseMatrix::from_triplets(2, 3, vec![(0, 1, 1), (1, 0, 2), (1, 2, 3)]).unwrap();
    /// let b = SparseMatrix::from_triplets(3, 2, vec![(0, 0, 4), (1, 1, 6), (2, 0, 5)]).unwrap();
    ///
    /// let c = a.multiply(&b).unwrap();
    /// assert_eq!(c.to_string(), "0 6\n23 0\n");
    /// ```
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.multiply_with(other, &MultiplyConfig::default())
    }

    /// Computes `self × other` using the strategies in `config`
    ///
    /// Neither operand is modified; the product is a new matrix of extents
    /// `self.row_count() × other.col_count()`. Sums that cancel to zero are
    /// not stored.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `self.col_count() != other.row_count()`.
    pub fn multiply_with(&self, other: &Self, config: &MultiplyConfig) -> Result<Self> {
        if self.col_count() != other.row_count() {
            return Err(Error::DimensionMismatch {
                lhs_rows: self.row_count(),
                lhs_cols: self.col_count(),
                rhs_rows: other.row_count(),
                rhs_cols: other.col_count(),
            });
        }

        let (n_rows, n_cols) = (self.row_count(), other.col_count());
        if self.non_zero_count() == 0 || other.non_zero_count() == 0 {
            debug!(
                n_rows,
                n_cols,
                "multiply: operand has no entries, product is zero"
            );
            return Ok(Self::new(n_rows, n_cols));
        }

        debug!(
            lhs_rows = self.row_count(),
            inner = self.col_count(),
            rhs_cols = other.col_count(),
            lhs_nnz = self.non_zero_count(),
            rhs_nnz = other.non_zero_count(),
            ?config,
            "multiply"
        );

        let sums = match config.accumulator {
            AccumulatorKind::Map => accumulate_products(
                self.entries(),
                other.entries(),
                config.row_lookup,
                MapAccumulator::with_capacity(0),
            ),
            AccumulatorKind::Sort => accumulate_products(
                self.entries(),
                other.entries(),
                config.row_lookup,
                SortAccumulator::with_capacity(self.non_zero_count()),
            ),
        };

        // Sums arrive row-major with unique coordinates
        let result = Self::from_sorted_triplets(n_rows, n_cols, sums);

        debug!(result_nnz = result.non_zero_count(), "multiply finished");
        Ok(result)
    }
}

/// Feeds every partial product of `lhs × rhs` into `accumulator`
///
/// Both slices must be in row-major order.
fn accumulate_products<T, A>(
    lhs: &[Entry<T>],
    rhs: &[Entry<T>],
    lookup: RowLookup,
    mut accumulator: A,
) -> Vec<(usize, usize, T)>
where
    T: Copy + Num + AddAssign,
    A: Accumulator<T>,
{
    for a in lhs {
        let start = match lookup {
            RowLookup::Rescan => rhs.iter().position(|b| b.row == a.col),
            RowLookup::Indexed => first_in_row(rhs, a.col),
        };

        // Row `a.col` of the right operand is empty
        let Some(start) = start else {
            continue;
        };

        for b in rhs[start..].iter().take_while(|b| b.row == a.col) {
            accumulator.accumulate(a.row, b.col, a.value * b.value);
        }
    }

    accumulator.extract_result()
}

/// Index of the first entry of `row` in a row-major slice
fn first_in_row<T>(entries: &[Entry<T>], row: usize) -> Option<usize> {
    let idx = entries.partition_point(|e| e.row < row);
    match entries.get(idx) {
        Some(e) if e.row == row => Some(idx),
        _ => None,
    }
}
