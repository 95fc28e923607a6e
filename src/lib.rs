//! # llsparse: sparse matrices over an ordered entry list
//!
//! A sparse matrix that stores only its non-zero entries, kept in row-major
//! order, with element access and mutation, growth-only resizing,
//! transposition, dense rendering and matrix-matrix multiplication.
//!
//! ## Overview
//!
//! - [`EntryStore`] holds the non-zero entries sorted by a key function.
//! - [`SparseMatrix`] owns a store plus its extents, checks bounds,
//!   suppresses zeros and supplies the row-major ordering key.
//! - [`SparseMatrix::multiply`] sums partial products by result coordinate,
//!   touching only pairs of stored entries.
//!
//! ## Usage
//!
//! ```
//! use llsparse::SparseMatrix;
//!
//! let mut a = SparseMatrix::new(2, 3);
//! a.set_element(0, 1, 1).unwrap();
//! a.set_element(1, 0, 2).unwrap();
//! a.set_element(1, 2, 3).unwrap();
//!
//! let mut b = SparseMatrix::new(3, 2);
//! b.set_element(0, 0, 4).unwrap();
//! b.set_element(1, 1, 6).unwrap();
//! b.set_element(2, 0, 5).unwrap();
//!
//! let c = a.multiply(&b).unwrap();
//! assert_eq!(c.element_at(1, 0).unwrap(), 23);
//! assert_eq!(c.to_string(), "0 6\n23 0\n");
//! ```

pub mod accumulator;
pub mod error;
pub mod matrix;
pub mod store;
pub mod utils;

// Re-export primary components
pub use accumulator::{Accumulator, MapAccumulator, SortAccumulator};
pub use error::{Error, Result};
pub use matrix::{reference_multiply, row_major_key, SparseMatrix};
pub use matrix::config::{AccumulatorKind, MultiplyConfig, RowLookup};
pub use store::{Entry, EntryStore};
pub use utils::{from_sprs, to_sprs};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
