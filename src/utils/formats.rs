//! Conversion between [`SparseMatrix`] and `sprs` compressed formats

use num_traits::Num;
use sprs::CsMat;
use std::ops::AddAssign;

use crate::error::Result;
use crate::matrix::SparseMatrix;

/// Converts a sparse matrix to an `sprs` CSR matrix
///
/// The entry store is already row-major, so column indices and values are
/// copied in order and only the row pointers need computing.
pub fn to_sprs<T>(matrix: &SparseMatrix<T>) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    let mut row_ptr = vec![0; matrix.row_count() + 1];
    let mut col_idx = Vec::with_capacity(matrix.non_zero_count());
    let mut values = Vec::with_capacity(matrix.non_zero_count());

    for (row, col, &value) in matrix.iter() {
        row_ptr[row + 1] += 1;
        col_idx.push(col);
        values.push(value);
    }

    // Per-row counts into offsets
    for row in 0..matrix.row_count() {
        row_ptr[row + 1] += row_ptr[row];
    }

    CsMat::new(
        (matrix.row_count(), matrix.col_count()),
        row_ptr,
        col_idx,
        values,
    )
}

/// Converts an `sprs` matrix (CSR or CSC) to a sparse matrix
///
/// Explicitly stored zeros are dropped.
pub fn from_sprs<T>(matrix: CsMat<T>) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + AddAssign + Default,
{
    // Ensure matrix is in CSR format
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let (n_rows, n_cols) = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    let mut result = SparseMatrix::new(n_rows, n_cols);
    for row in 0..n_rows {
        for idx in indptr[row]..indptr[row + 1] {
            result.set_element(row, indices[idx], data[idx])?;
        }
    }

    Ok(result)
}
