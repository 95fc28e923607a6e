//! Sparse matrix over an ordered list of non-zero entries

use std::fmt;
use std::io;
use std::ops::AddAssign;

use num_traits::Num;
use tracing::trace;

use crate::error::{Error, Result};
use crate::store::{Entry, EntryStore};

/// Row-major ordering key of an entry
///
/// Comparing `(row, col)` tuples orders entries exactly as the linear
/// position `n_cols * row + col` would, for any column count, without the
/// arithmetic overflowing on large extents.
#[inline]
pub fn row_major_key<T>(entry: &Entry<T>) -> (usize, usize) {
    (entry.row, entry.col)
}

/// A sparse matrix storing only its non-zero entries
///
/// Entries are kept in row-major order in an [`EntryStore`], and every entry
/// satisfies `row < row_count()` and `col < col_count()`. Reading a cell that
/// has no entry yields zero; writing zero to a cell deletes its entry.
#[derive(Clone, PartialEq)]
pub struct SparseMatrix<T> {
    n_rows: usize,
    n_cols: usize,
    store: EntryStore<T>,
}

impl<T> Default for SparseMatrix<T> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<T> SparseMatrix<T> {
    /// Creates an all-zero matrix with the given extents
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            store: EntryStore::new(),
        }
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.n_rows
    }

    /// Number of columns
    pub fn col_count(&self) -> usize {
        self.n_cols
    }

    /// Number of stored (non-zero) entries
    pub fn non_zero_count(&self) -> usize {
        self.store.len()
    }

    /// Stored entries in row-major order
    pub fn entries(&self) -> &[Entry<T>] {
        self.store.as_slice()
    }

    /// Iterator over `(row, col, &value)` for every non-zero entry, row-major
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.store.iter().map(|e| (e.row, e.col, &e.value))
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row < self.n_rows && col < self.n_cols {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                n_rows: self.n_rows,
                n_cols: self.n_cols,
            })
        }
    }

    fn is_row_major(&self) -> bool {
        self.store.is_sorted_by_key(row_major_key)
    }

    /// Removes the entry at `(row, col)` if there is one
    ///
    /// Removing a cell that is already zero is not an error.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if the coordinate lies outside the matrix.
    pub fn remove_element(&mut self, row: usize, col: usize) -> Result<()> {
        self.check_bounds(row, col)?;
        self.store.remove_if(|e| e.is_at(row, col));
        Ok(())
    }

    /// Grows the matrix to `n_rows × n_cols`
    ///
    /// Stored entries keep their coordinates and their row-major order, so
    /// the store is not resorted.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidResize`] if either extent would shrink, even when no
    /// stored entry would be lost. The matrix is left untouched.
    pub fn resize(&mut self, n_rows: usize, n_cols: usize) -> Result<()> {
        if n_rows < self.n_rows || n_cols < self.n_cols {
            return Err(Error::InvalidResize {
                n_rows: self.n_rows,
                n_cols: self.n_cols,
                new_rows: n_rows,
                new_cols: n_cols,
            });
        }
        trace!(
            from_rows = self.n_rows,
            from_cols = self.n_cols,
            to_rows = n_rows,
            to_cols = n_cols,
            "resize"
        );
        self.n_rows = n_rows;
        self.n_cols = n_cols;
        debug_assert!(self.is_row_major());
        Ok(())
    }

    /// Transposes the matrix in place
    ///
    /// Swaps the coordinates of every entry and the extents, then resorts
    /// the store by the new row-major position.
    pub fn transpose(&mut self) {
        for entry in self.store.iter_mut() {
            std::mem::swap(&mut entry.row, &mut entry.col);
        }
        std::mem::swap(&mut self.n_rows, &mut self.n_cols);

        self.store.resort(row_major_key);
        trace!(
            n_rows = self.n_rows,
            n_cols = self.n_cols,
            nnz = self.store.len(),
            "transpose"
        );
    }
}

impl<T> SparseMatrix<T>
where
    T: Copy + Num + AddAssign,
{
    /// Creates the `n × n` identity matrix
    pub fn identity(n: usize) -> Self {
        Self::from_sorted_triplets(n, n, (0..n).map(|i| (i, i, T::one())))
    }

    /// Builds a matrix from in-bounds triplets that are already row-major
    /// with unique coordinates, dropping zero values
    pub(crate) fn from_sorted_triplets<I>(n_rows: usize, n_cols: usize, triplets: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(n_rows, n_cols);
        for (row, col, value) in triplets {
            debug_assert!(row < n_rows && col < n_cols);
            if !value.is_zero() {
                matrix.store.push(Entry::new(row, col, value));
            }
        }
        debug_assert!(matrix.is_row_major());
        matrix
    }

    /// Builds a matrix from `(row, col, value)` triplets
    ///
    /// Later triplets overwrite earlier ones at the same coordinate, and
    /// zero values are not stored.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] for the first triplet outside the extents.
    pub fn from_triplets<I>(n_rows: usize, n_cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(n_rows, n_cols);
        for (row, col, value) in triplets {
            matrix.set_element(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Value at `(row, col)`, zero if nothing is stored there
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if the coordinate lies outside the matrix.
    pub fn element_at(&self, row: usize, col: usize) -> Result<T> {
        self.check_bounds(row, col)?;
        Ok(self.store.find(row, col).copied().unwrap_or_else(T::zero))
    }

    /// Assigns `value` to `(row, col)`
    ///
    /// Assigning zero deletes the entry at that coordinate, if any. A
    /// non-zero value overwrites an existing entry in place or is inserted at
    /// its row-major position.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if the coordinate lies outside the matrix.
    pub fn set_element(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_bounds(row, col)?;

        if value.is_zero() {
            self.store.remove_if(|e| e.is_at(row, col));
            return Ok(());
        }

        if let Some(existing) = self.store.find_mut(row, col) {
            *existing = value;
            return Ok(());
        }

        self.store.insert_sorted(Entry::new(row, col, value), row_major_key);
        Ok(())
    }
}

impl<T> SparseMatrix<T>
where
    T: Copy + Num + fmt::Display,
{
    /// Writes the dense rendering of the matrix to `sink`
    ///
    /// One line per row, values separated by a single space, zero for cells
    /// without an entry.
    pub fn render<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{}", self)
    }
}

impl<T> fmt::Display for SparseMatrix<T>
where
    T: Copy + Num + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Single co-walk over the row-major store
        let mut entries = self.store.iter().peekable();
        for i in 0..self.n_rows {
            for j in 0..self.n_cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                match entries.next_if(|e| e.is_at(i, j)) {
                    Some(entry) => write!(f, "{}", entry.value)?,
                    None => write!(f, "{}", T::zero())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.store.len())?;

        let max_entries = 10.min(self.store.len());
        if max_entries > 0 {
            write!(f, "  entries: ")?;
            for e in self.store.iter().take(max_entries) {
                write!(f, "({}, {}, {:?}) ", e.row, e.col, e.value)?;
            }
            if self.store.len() > max_entries {
                write!(f, "... ({} more)", self.store.len() - max_entries)?;
            }
            writeln!(f)?;
        }

        write!(f, "}}")
    }
}
