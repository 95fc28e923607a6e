//! Conversion between sparse matrices and dense `ndarray` arrays

use ndarray::{Array2, ArrayView2};
use num_traits::Num;
use std::ops::AddAssign;

use crate::error::Result;
use crate::matrix::SparseMatrix;

impl<T> SparseMatrix<T>
where
    T: Copy + Num + AddAssign,
{
    /// Expands the matrix into a dense array, zero-filling empty cells
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::zeros((self.row_count(), self.col_count()));
        for (row, col, &value) in self.iter() {
            dense[[row, col]] = value;
        }
        dense
    }

    /// Builds a sparse matrix from the non-zero cells of a dense array
    pub fn from_dense(dense: ArrayView2<'_, T>) -> Result<Self> {
        let (n_rows, n_cols) = dense.dim();
        // indexed_iter walks in logical row-major order, so every insert appends
        Self::from_triplets(
            n_rows,
            n_cols,
            dense
                .indexed_iter()
                .filter(|(_, v)| !v.is_zero())
                .map(|((row, col), &v)| (row, col, v)),
        )
    }
}
