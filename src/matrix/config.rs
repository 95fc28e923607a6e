//! Configuration for sparse matrix multiplication

/// How partial products are summed by result coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulatorKind {
    /// Ordered map keyed by `(row, col)`
    Map,
    /// Unsorted list, sorted and reduced once all products are in
    Sort,
}

/// How the entries of row `k` of the right operand are located
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLookup {
    /// Scan the right operand from its first entry for every left entry
    Rescan,
    /// Binary search the row-major store for the start of row `k`
    Indexed,
}

/// Configuration for [`SparseMatrix::multiply_with`](crate::SparseMatrix::multiply_with)
///
/// Every combination yields the same product; the choice only affects
/// running time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiplyConfig {
    /// Accumulator used for partial products
    pub accumulator: AccumulatorKind,

    /// Strategy for finding a row of the right operand
    pub row_lookup: RowLookup,
}

impl Default for MultiplyConfig {
    fn default() -> Self {
        Self {
            accumulator: AccumulatorKind::Map,
            row_lookup: RowLookup::Rescan,
        }
    }
}

impl MultiplyConfig {
    /// Create a config from explicit strategies
    pub fn new(accumulator: AccumulatorKind, row_lookup: RowLookup) -> Self {
        Self {
            accumulator,
            row_lookup,
        }
    }

    /// Every supported configuration
    pub fn all() -> [MultiplyConfig; 4] {
        [
            Self::new(AccumulatorKind::Map, RowLookup::Rescan),
            Self::new(AccumulatorKind::Map, RowLookup::Indexed),
            Self::new(AccumulatorKind::Sort, RowLookup::Rescan),
            Self::new(AccumulatorKind::Sort, RowLookup::Indexed),
        ]
    }
}
