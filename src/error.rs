//! Error types for sparse matrix operations

use thiserror::Error;

/// Result type alias using the crate's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by coordinate-addressed and structural matrix operations
///
/// Every error is returned before the matrix is mutated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A coordinate lies outside the matrix extents
    #[error("Element ({row}, {col}) is out of bounds for a {n_rows}x{n_cols} matrix")]
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Row count of the matrix
        n_rows: usize,
        /// Column count of the matrix
        n_cols: usize,
    },

    /// A resize would shrink at least one extent
    #[error("Can't reduce matrix size from {n_rows}x{n_cols} to {new_rows}x{new_cols}")]
    InvalidResize {
        /// Current row count
        n_rows: usize,
        /// Current column count
        n_cols: usize,
        /// Requested row count
        new_rows: usize,
        /// Requested column count
        new_cols: usize,
    },

    /// Inner extents of a product disagree
    #[error("Impossible to multiply a {lhs_rows}x{lhs_cols} matrix by a {rhs_rows}x{rhs_cols} matrix")]
    DimensionMismatch {
        /// Rows of the left operand
        lhs_rows: usize,
        /// Columns of the left operand
        lhs_cols: usize,
        /// Rows of the right operand
        rhs_rows: usize,
        /// Columns of the right operand
        rhs_cols: usize,
    },
}
