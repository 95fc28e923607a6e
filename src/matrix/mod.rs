// Matrix data structures and operations

pub mod config;
pub mod conversion;
pub mod multiply;
pub mod reference;
pub mod sparse;

pub use config::{AccumulatorKind, MultiplyConfig, RowLookup};
pub use reference::reference_multiply;
pub use sparse::{row_major_key, SparseMatrix};
