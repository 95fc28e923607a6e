//! Dense reference multiplication
//!
//! Expands both operands with `ndarray` and multiplies them densely. It is
//! not meant for large matrices; it provides a baseline for checking the
//! sparse product.

use num_traits::Num;
use std::ops::AddAssign;

use crate::error::{Error, Result};
use crate::matrix::SparseMatrix;

/// Multiplies two sparse matrices through their dense expansions
///
/// # Errors
///
/// [`Error::DimensionMismatch`] if `a.col_count() != b.row_count()`.
pub fn reference_multiply<T>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + AddAssign + 'static,
{
    if a.col_count() != b.row_count() {
        return Err(Error::DimensionMismatch {
            lhs_rows: a.row_count(),
            lhs_cols: a.col_count(),
            rhs_rows: b.row_count(),
            rhs_cols: b.col_count(),
        });
    }

    let product = a.to_dense().dot(&b.to_dense());
    SparseMatrix::from_dense(product.view())
}
