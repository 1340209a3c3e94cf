//! Merge cursors over the two orderings of a [`SparseMatrix`]
//!
//! Every bulk algorithm in the crate walks one or two cursors in parallel,
//! so its cost is proportional to the number of non-zeros visited.
//!
//! [`SparseMatrix`]: super::SparseMatrix

use super::index::{Dim, decode_col_major, decode_row_major, row_major_key};
use crate::traits::ComplexField;
use std::collections::{BTreeMap, BTreeSet, btree_map, btree_set};
use std::ops::Bound;

/// Cursor over non-zero entries in row-major order
#[derive(Debug, Clone)]
pub struct RowCursor<'a, T: ComplexField> {
    range: btree_map::Range<'a, u64, T>,
    current: Option<(Dim, Dim, T)>,
}

impl<'a, T: ComplexField> RowCursor<'a, T> {
    pub(crate) fn after(entries: &'a BTreeMap<u64, T>, key: u64) -> Self {
        let mut cursor = Self {
            range: entries.range((Bound::Excluded(key), Bound::Unbounded)),
            current: None,
        };
        cursor.advance();
        cursor
    }

    /// Move to the next entry; the cursor stops being good once exhausted
    pub fn advance(&mut self) {
        self.current = self.range.next().map(|(&key, &value)| {
            let (row, col) = decode_row_major(key);
            (row, col, value)
        });
    }

    /// Whether the cursor points at an entry
    pub fn is_good(&self) -> bool {
        self.current.is_some()
    }

    /// Current `(row, col)`, or `None` once exhausted
    pub fn position(&self) -> Option<(Dim, Dim)> {
        self.current.map(|(row, col, _)| (row, col))
    }

    /// Row of the current entry (0 once exhausted)
    pub fn row(&self) -> Dim {
        self.current.map_or(0, |(row, _, _)| row)
    }

    /// Column of the current entry (0 once exhausted)
    pub fn col(&self) -> Dim {
        self.current.map_or(0, |(_, col, _)| col)
    }

    /// Value of the current entry (zero once exhausted)
    pub fn value(&self) -> T {
        self.current.map_or_else(T::zero, |(_, _, value)| value)
    }

    /// Good and still inside `row`
    pub fn within_row(&self, row: Dim) -> bool {
        matches!(self.current, Some((r, _, _)) if r == row)
    }
}

/// Cursor over non-zero entries in column-major order
///
/// Walks the transpose key set and looks values up in the row-major map.
#[derive(Debug, Clone)]
pub struct ColCursor<'a, T: ComplexField> {
    range: btree_set::Range<'a, u64>,
    entries: &'a BTreeMap<u64, T>,
    current: Option<(Dim, Dim, T)>,
}

impl<'a, T: ComplexField> ColCursor<'a, T> {
    pub(crate) fn after(
        transposed: &'a BTreeSet<u64>,
        entries: &'a BTreeMap<u64, T>,
        key: u64,
    ) -> Self {
        let mut cursor = Self {
            range: transposed.range((Bound::Excluded(key), Bound::Unbounded)),
            entries,
            current: None,
        };
        cursor.advance();
        cursor
    }

    /// Move to the next entry; the cursor stops being good once exhausted
    pub fn advance(&mut self) {
        let entries = self.entries;
        self.current = self.range.next().map(|&key| {
            let (row, col) = decode_col_major(key);
            let value = entries
                .get(&row_major_key(row, col))
                .copied()
                .unwrap_or_else(T::zero);
            (row, col, value)
        });
    }

    /// Whether the cursor points at an entry
    pub fn is_good(&self) -> bool {
        self.current.is_some()
    }

    /// Current `(row, col)`, or `None` once exhausted
    pub fn position(&self) -> Option<(Dim, Dim)> {
        self.current.map(|(row, col, _)| (row, col))
    }

    /// Row of the current entry (0 once exhausted)
    pub fn row(&self) -> Dim {
        self.current.map_or(0, |(row, _, _)| row)
    }

    /// Column of the current entry (0 once exhausted)
    pub fn col(&self) -> Dim {
        self.current.map_or(0, |(_, col, _)| col)
    }

    /// Value of the current entry (zero once exhausted)
    pub fn value(&self) -> T {
        self.current.map_or_else(T::zero, |(_, _, value)| value)
    }

    /// Good and still inside `col`
    pub fn within_col(&self, col: Dim) -> bool {
        matches!(self.current, Some((_, c, _)) if c == col)
    }
}
