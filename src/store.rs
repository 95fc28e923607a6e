//! Ordered storage for the non-zero entries of a sparse matrix
//!
//! The store is a contiguous vector kept sorted by a caller-supplied key.
//! It does not know about matrix extents: bounds are checked by the matrix,
//! which also supplies the ordering key (the row-major position of an entry
//! under the matrix's current column count).

use std::slice;

/// A single stored non-zero value and its coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<T> {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// Stored value, never the zero of `T` while inside a matrix
    pub value: T,
}

impl<T> Entry<T> {
    /// Creates a new entry
    pub fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// Returns `true` if this entry sits at `(row, col)`
    #[inline]
    pub fn is_at(&self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }
}

/// Sequence of entries ordered by a key function
///
/// Outside of a call to [`EntryStore::resort`] the entries are expected to be
/// in non-decreasing key order with unique coordinates. The store keeps the
/// order on [`EntryStore::insert_sorted`]; uniqueness is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStore<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for EntryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntryStore<T> {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty store able to hold `capacity` entries without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in store order
    pub fn as_slice(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Iterator over entries in store order
    pub fn iter(&self) -> slice::Iter<'_, Entry<T>> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> slice::IterMut<'_, Entry<T>> {
        self.entries.iter_mut()
    }

    /// Appends an entry whose key is not below the last stored one
    ///
    /// Callers that produce entries already in order use this to skip the
    /// search done by [`EntryStore::insert_sorted`].
    pub(crate) fn push(&mut self, entry: Entry<T>) {
        self.entries.push(entry);
    }

    /// Inserts `entry` before the first entry whose key exceeds its own,
    /// or at the end if there is none.
    ///
    /// Entries with an equal key stay in front of the new one. Returns the
    /// index the entry was placed at.
    pub fn insert_sorted<K, F>(&mut self, entry: Entry<T>, key: F) -> usize
    where
        K: Ord,
        F: Fn(&Entry<T>) -> K,
    {
        let new_key = key(&entry);
        let idx = self.entries.partition_point(|e| key(e) <= new_key);
        self.entries.insert(idx, entry);
        idx
    }

    /// Value stored at `(row, col)`, if any
    pub fn find(&self, row: usize, col: usize) -> Option<&T> {
        self.entries
            .iter()
            .find(|e| e.is_at(row, col))
            .map(|e| &e.value)
    }

    /// Mutable access to the value stored at `(row, col)`, if any
    pub fn find_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|e| e.is_at(row, col))
            .map(|e| &mut e.value)
    }

    /// Removes the first entry matching `predicate` and returns it
    ///
    /// Does nothing if no entry matches.
    pub fn remove_if<P>(&mut self, mut predicate: P) -> Option<Entry<T>>
    where
        P: FnMut(&Entry<T>) -> bool,
    {
        let idx = self.entries.iter().position(|e| predicate(e))?;
        Some(self.entries.remove(idx))
    }

    /// Re-sorts every entry by `key`
    ///
    /// The sort is a stable merge sort: entries with equal keys keep their
    /// relative order.
    pub fn resort<K, F>(&mut self, key: F)
    where
        K: Ord,
        F: FnMut(&Entry<T>) -> K,
    {
        self.entries.sort_by_key(key);
    }

    /// Returns `true` if the entries are in non-decreasing `key` order
    pub fn is_sorted_by_key<K, F>(&self, key: F) -> bool
    where
        K: Ord,
        F: Fn(&Entry<T>) -> K,
    {
        self.entries.windows(2).all(|w| key(&w[0]) <= key(&w[1]))
    }
}

impl<'a, T> IntoIterator for &'a EntryStore<T> {
    type Item = &'a Entry<T>;
    type IntoIter = slice::Iter<'a, Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
