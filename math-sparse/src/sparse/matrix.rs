//! Dual-indexed sparse matrix storage
//!
//! Non-zero entries live in a `BTreeMap` keyed by the row-major packed key.
//! A `BTreeSet` of column-major keys mirrors every entry so columns can be
//! walked in order without re-sorting. Both indices are only touched
//! together, through [`SparseMatrix::set`], [`SparseMatrix::increment`],
//! [`SparseMatrix::erase`] and the row exchange.

use super::cursor::{ColCursor, RowCursor};
use super::index::{Dim, col_major_key, decode_col_major, decode_row_major, row_major_key};
use crate::error::{MatrixError, Result};
use crate::traits::{ComplexField, LinearOperator};
use ndarray::{Array1, Array2};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Sparse matrix with row-major and column-major indices over its non-zeros
///
/// Coordinates are 1-based. A stored value is never zero: assigning zero
/// deletes the entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<T: ComplexField = f64> {
    rows: Dim,
    cols: Dim,
    /// Row-major packed key -> value
    entries: BTreeMap<u64, T>,
    /// Column-major packed keys of the same entries
    transposed: BTreeSet<u64>,
}

impl<T: ComplexField> SparseMatrix<T> {
    /// Create an empty (all-zero) matrix
    pub fn new(rows: Dim, cols: Dim) -> Self {
        Self {
            rows,
            cols,
            entries: BTreeMap::new(),
            transposed: BTreeSet::new(),
        }
    }

    /// Alias of [`SparseMatrix::new`]
    pub fn zeros(rows: Dim, cols: Dim) -> Self {
        Self::new(rows, cols)
    }

    /// Matrix with every cell set to one
    pub fn ones(rows: Dim, cols: Dim) -> Self {
        let mut m = Self::new(rows, cols);
        for r in 1..=rows {
            for c in 1..=cols {
                m.put(r, c, T::one());
            }
        }
        m
    }

    /// n x n identity
    pub fn identity(n: Dim) -> Self {
        Self::from_diagonal_value(n, T::one())
    }

    /// n x n matrix with `value` on the diagonal
    pub fn from_diagonal_value(n: Dim, value: T) -> Self {
        let mut m = Self::new(n, n);
        for i in 1..=n {
            m.put(i, i, value);
        }
        m
    }

    /// Square matrix with the entries of a row or column vector on its diagonal
    ///
    /// Fails with `InvalidDimensions` unless `vector` is n x 1 or 1 x n.
    pub fn from_vector_diagonal(vector: &SparseMatrix<T>) -> Result<Self> {
        let n = if vector.cols == 1 {
            vector.rows
        } else if vector.rows == 1 {
            vector.cols
        } else {
            return Err(MatrixError::mismatch(vector.shape(), (vector.rows, 1)));
        };

        let mut m = Self::new(n, n);
        let mut cursor = vector.row_cursor_after(0, 0);
        while cursor.is_good() {
            // one of row/col is always 1
            let i = cursor.row() + cursor.col() - 1;
            m.put(i, i, cursor.value());
            cursor.advance();
        }
        Ok(m)
    }

    /// Create a matrix from (row, col, value) triplets; duplicates are summed
    pub fn from_triplets(
        rows: Dim,
        cols: Dim,
        triplets: impl IntoIterator<Item = (Dim, Dim, T)>,
    ) -> Result<Self> {
        let mut m = Self::new(rows, cols);
        for (r, c, v) in triplets {
            m.increment(r, c, v)?;
        }
        Ok(m)
    }

    /// Create a sparse matrix from a dense one, dropping exact zeros
    pub fn from_dense(dense: &Array2<T>) -> Result<Self> {
        let overflow = || MatrixError::DimensionOverflow {
            rows: dense.nrows(),
            cols: dense.ncols(),
        };
        let rows = Dim::try_from(dense.nrows()).map_err(|_| overflow())?;
        let cols = Dim::try_from(dense.ncols()).map_err(|_| overflow())?;

        let mut m = Self::new(rows, cols);
        for ((i, j), &value) in dense.indexed_iter() {
            // i < nrows fits in Dim after the check above
            m.put(i as Dim + 1, j as Dim + 1, value);
        }
        Ok(m)
    }

    /// Convert to a dense (0-based) matrix
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::from_elem((self.rows as usize, self.cols as usize), T::zero());
        for (r, c, v) in self.iter() {
            dense[[r as usize - 1, c as usize - 1]] = v;
        }
        dense
    }

    pub fn num_rows(&self) -> Dim {
        self.rows
    }

    pub fn num_cols(&self) -> Dim {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (Dim, Dim) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Fraction of cells holding a non-zero
    pub fn sparsity(&self) -> f64 {
        let total = self.rows as f64 * self.cols as f64;
        if total == 0.0 {
            0.0
        } else {
            self.nnz() as f64 / total
        }
    }

    fn check_bounds(&self, row: Dim, col: Dim) -> Result<()> {
        if row == 0 || row > self.rows || col == 0 || col > self.cols {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Row-only bounds check, reported against column 1
    fn check_row(&self, row: Dim) -> Result<()> {
        if row == 0 || row > self.rows {
            return Err(MatrixError::OutOfRange {
                row,
                col: 1,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Store `value` at an in-range coordinate, deleting on zero
    pub(crate) fn put(&mut self, row: Dim, col: Dim, value: T) {
        if value.is_zero() {
            self.remove(row, col);
        } else {
            self.entries.insert(row_major_key(row, col), value);
            self.transposed.insert(col_major_key(row, col));
        }
    }

    fn remove(&mut self, row: Dim, col: Dim) {
        self.entries.remove(&row_major_key(row, col));
        self.transposed.remove(&col_major_key(row, col));
    }

    fn value_at(&self, row: Dim, col: Dim) -> T {
        self.entries
            .get(&row_major_key(row, col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Value at (row, col), zero when not stored
    pub fn get(&self, row: Dim, col: Dim) -> Result<T> {
        self.check_bounds(row, col)?;
        Ok(self.value_at(row, col))
    }

    /// Assign a cell; assigning zero removes the entry
    pub fn set(&mut self, row: Dim, col: Dim, value: T) -> Result<()> {
        self.check_bounds(row, col)?;
        self.put(row, col, value);
        Ok(())
    }

    /// Add `delta` to a cell, removing it if the sum is exactly zero
    pub fn increment(&mut self, row: Dim, col: Dim, delta: T) -> Result<()> {
        self.check_bounds(row, col)?;
        if delta.is_zero() {
            return Ok(());
        }
        let value = self.value_at(row, col) + delta;
        self.put(row, col, value);
        Ok(())
    }

    /// Remove a cell from both indices
    pub fn erase(&mut self, row: Dim, col: Dim) -> Result<()> {
        self.check_bounds(row, col)?;
        self.remove(row, col);
        Ok(())
    }

    /// Row-major cursor at the first entry strictly after (row, col)
    ///
    /// `(0, 0)` starts at the first entry of the matrix and `(r, 0)` at the
    /// first entry of row `r` (or of the next non-empty row).
    pub fn row_cursor_after(&self, row: Dim, col: Dim) -> RowCursor<'_, T> {
        RowCursor::after(&self.entries, row_major_key(row, col))
    }

    /// Column-major cursor at the first entry strictly after (row, col)
    ///
    /// `(0, c)` starts at the first entry of column `c`.
    pub fn col_cursor_after(&self, row: Dim, col: Dim) -> ColCursor<'_, T> {
        ColCursor::after(&self.transposed, &self.entries, col_major_key(row, col))
    }

    /// All entries as `(row, col, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Dim, Dim, T)> + '_ {
        self.entries.iter().map(|(&key, &value)| {
            let (row, col) = decode_row_major(key);
            (row, col, value)
        })
    }

    /// All entry coordinates in column-major order
    pub fn iter_col_major(&self) -> impl Iterator<Item = (Dim, Dim)> + '_ {
        self.transposed.iter().map(|&key| decode_col_major(key))
    }

    /// `(col, value)` pairs of `row` with column greater than `after_col`
    pub fn row_entries_after(&self, row: Dim, after_col: Dim) -> Vec<(Dim, T)> {
        let mut cursor = self.row_cursor_after(row, after_col);
        let mut out = Vec::new();
        while cursor.within_row(row) {
            out.push((cursor.col(), cursor.value()));
            cursor.advance();
        }
        out
    }

    /// `(row, value)` pairs of `col` with row greater than `after_row`
    pub fn col_entries_after(&self, col: Dim, after_row: Dim) -> Vec<(Dim, T)> {
        let mut cursor = self.col_cursor_after(after_row, col);
        let mut out = Vec::new();
        while cursor.within_col(col) {
            out.push((cursor.row(), cursor.value()));
            cursor.advance();
        }
        out
    }

    /// Rows holding at least one entry, ascending
    pub fn occupied_rows(&self) -> Vec<Dim> {
        let mut rows = Vec::new();
        let mut cursor = self.row_cursor_after(0, 0);
        while cursor.is_good() {
            let row = cursor.row();
            rows.push(row);
            cursor = self.row_cursor_after(row, Dim::MAX);
        }
        rows
    }

    /// Columns holding at least one entry, ascending
    pub fn occupied_cols(&self) -> Vec<Dim> {
        let mut cols = Vec::new();
        let mut cursor = self.col_cursor_after(0, 0);
        while cursor.is_good() {
            let col = cursor.col();
            cols.push(col);
            cursor = self.col_cursor_after(Dim::MAX, col);
        }
        cols
    }

    /// Diagonal elements as a dense vector (0-based)
    pub fn diagonal(&self) -> Array1<T> {
        let n = self.rows.min(self.cols);
        Array1::from_iter((1..=n).map(|i| self.value_at(i, i)))
    }

    /// Exchange the contents of two rows, keeping both indices consistent
    ///
    /// Walks both rows by column: shared columns swap values, an entry
    /// present in only one row moves to the other.
    pub fn swap_rows(&mut self, first: Dim, second: Dim) -> Result<()> {
        self.check_row(first)?;
        self.check_row(second)?;
        if first == second {
            return Ok(());
        }

        let mut upper = self.row_entries_after(first, 0).into_iter().peekable();
        let mut lower = self.row_entries_after(second, 0).into_iter().peekable();

        loop {
            let order = match (upper.peek(), lower.peek()) {
                (Some(&(a, _)), Some(&(b, _))) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => break,
            };
            match order {
                Ordering::Equal => {
                    if let (Some((col, a)), Some((_, b))) = (upper.next(), lower.next()) {
                        self.put(first, col, b);
                        self.put(second, col, a);
                    }
                }
                Ordering::Less => {
                    if let Some((col, a)) = upper.next() {
                        self.remove(first, col);
                        self.put(second, col, a);
                    }
                }
                Ordering::Greater => {
                    if let Some((col, b)) = lower.next() {
                        self.remove(second, col);
                        self.put(first, col, b);
                    }
                }
            }
        }
        Ok(())
    }

    /// Multiply every entry by `scalar` in place; zero clears the matrix
    pub fn scale(&mut self, scalar: T) {
        if scalar.is_zero() {
            self.entries.clear();
            self.transposed.clear();
            return;
        }
        let mut vanished = Vec::new();
        for (&key, value) in self.entries.iter_mut() {
            *value *= scalar;
            // underflow can still produce an exact zero
            if value.is_zero() {
                vanished.push(key);
            }
        }
        for key in vanished {
            let (row, col) = decode_row_major(key);
            self.remove(row, col);
        }
    }

    /// Scaled copy
    pub fn scaled(&self, scalar: T) -> Self {
        let mut m = self.clone();
        m.scale(scalar);
        m
    }
}

impl<T: ComplexField> LinearOperator<T> for SparseMatrix<T> {
    fn num_rows(&self) -> usize {
        self.rows as usize
    }

    fn num_cols(&self) -> usize {
        self.cols as usize
    }

    fn apply(&self, x: &Array1<T>) -> Array1<T> {
        assert_eq!(x.len(), self.cols as usize, "Input vector size mismatch");
        let mut y = Array1::from_elem(self.rows as usize, T::zero());
        for (r, c, v) in self.iter() {
            y[r as usize - 1] += v * x[c as usize - 1];
        }
        y
    }

    fn apply_transpose(&self, x: &Array1<T>) -> Array1<T> {
        assert_eq!(x.len(), self.rows as usize, "Input vector size mismatch");
        let mut y = Array1::from_elem(self.cols as usize, T::zero());
        for (r, c, v) in self.iter() {
            y[c as usize - 1] += v * x[r as usize - 1];
        }
        y
    }
}

impl<T: ComplexField + fmt::Display> fmt::Display for SparseMatrix<T> {
    /// Full grid, `[a, b;\n c, d]`, each cell formatted with 4 decimals and
    /// right-aligned in 8 columns; wider cells (complex values) are not cut
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 0 || self.cols == 0 {
            return write!(f, "[]");
        }
        for r in 1..=self.rows {
            for c in 1..=self.cols {
                let open = match (r, c) {
                    (1, 1) => "[",
                    (_, 1) => " ",
                    _ => "",
                };
                let close = if c < self.cols {
                    ","
                } else if r < self.rows {
                    ";\n"
                } else {
                    "]"
                };
                // num-complex ignores width, so pad the rendered cell instead
                let cell = format!("{:.4}", self.value_at(r, c));
                write!(f, "{open}{cell:>8}{close}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use num_complex::Complex64;

    /// Both indices hold exactly the same coordinates
    fn assert_consistent<T: ComplexField>(m: &SparseMatrix<T>) {
        let mut by_row: Vec<(Dim, Dim)> = m.iter().map(|(r, c, _)| (r, c)).collect();
        let mut by_col: Vec<(Dim, Dim)> = m.iter_col_major().collect();
        assert_eq!(by_row.len(), by_col.len());
        by_row.sort_unstable();
        by_col.sort_unstable();
        assert_eq!(by_row, by_col);
        assert!(m.iter().all(|(_, _, v)| !v.is_zero()));
    }

    #[test]
    fn test_set_get() {
        let mut m: SparseMatrix = SparseMatrix::new(3, 4);
        m.set(2, 3, 1.5).unwrap();
        assert_relative_eq!(m.get(2, 3).unwrap(), 1.5);
        assert_relative_eq!(m.get(1, 1).unwrap(), 0.0);
        assert_eq!(m.nnz(), 1);

        m.set(2, 3, -4.0).unwrap();
        assert_relative_eq!(m.get(2, 3).unwrap(), -4.0);
        assert_eq!(m.nnz(), 1);
        assert_consistent(&m);
    }

    #[test]
    fn test_set_zero_deletes() {
        let mut m: SparseMatrix = SparseMatrix::new(2, 2);
        m.set(1, 2, 3.0).unwrap();
        m.set(1, 2, 0.0).unwrap();
        assert_eq!(m.nnz(), 0);
        assert_relative_eq!(m.get(1, 2).unwrap(), 0.0);

        // deleting an absent cell is a no-op
        m.set(2, 2, 0.0).unwrap();
        assert_eq!(m.nnz(), 0);
        assert_consistent(&m);
    }

    #[test]
    fn test_out_of_range() {
        let mut m: SparseMatrix = SparseMatrix::new(2, 3);
        let expected = MatrixError::OutOfRange {
            row: 3,
            col: 1,
            rows: 2,
            cols: 3,
        };
        assert_eq!(m.get(3, 1), Err(expected.clone()));
        assert_eq!(m.set(3, 1, 1.0), Err(expected.clone()));
        assert_eq!(m.increment(3, 1, 1.0), Err(expected.clone()));
        assert_eq!(m.erase(3, 1), Err(expected));

        assert!(m.get(0, 1).is_err());
        assert!(m.get(1, 0).is_err());
        assert!(m.get(1, 4).is_err());
        assert!(m.get(2, 3).is_ok());
    }

    #[test]
    fn test_increment() {
        let mut m: SparseMatrix = SparseMatrix::new(2, 2);
        m.increment(1, 1, 2.0).unwrap();
        m.increment(1, 1, 0.5).unwrap();
        assert_relative_eq!(m.get(1, 1).unwrap(), 2.5);

        m.increment(1, 1, -2.5).unwrap();
        assert_eq!(m.nnz(), 0);

        m.increment(2, 2, 0.0).unwrap();
        assert_eq!(m.nnz(), 0);
        assert_consistent(&m);
    }

    #[test]
    fn test_erase() {
        let mut m: SparseMatrix = SparseMatrix::from_triplets(2, 2, vec![(1, 1, 1.0), (2, 1, 2.0)])
            .unwrap();
        m.erase(2, 1).unwrap();
        m.erase(2, 2).unwrap();
        assert_eq!(m.nnz(), 1);
        assert!(m.col_entries_after(1, 1).is_empty());
        assert_consistent(&m);
    }

    #[test]
    fn test_from_triplets_sums_duplicates() {
        let m = SparseMatrix::from_triplets(2, 2, vec![(1, 1, 1.0), (1, 1, 2.0), (2, 2, 3.0)])
            .unwrap();
        assert_relative_eq!(m.get(1, 1).unwrap(), 3.0);
        assert_eq!(m.nnz(), 2);

        let err = SparseMatrix::from_triplets(2, 2, vec![(3, 1, 1.0)]);
        assert!(matches!(err, Err(MatrixError::OutOfRange { row: 3, .. })));
    }

    #[test]
    fn test_dense_roundtrip() {
        let dense = array![[1.0, 0.0, 2.0], [0.0, 0.0, 0.0], [4.0, 5.0, 0.0]];
        let m = SparseMatrix::from_dense(&dense).unwrap();
        assert_eq!(m.shape(), (3, 3));
        assert_eq!(m.nnz(), 4);
        assert_relative_eq!(m.get(3, 2).unwrap(), 5.0);
        assert_eq!(m.to_dense(), dense);
        assert_consistent(&m);
    }

    #[test]
    fn test_constructors() {
        let ones: SparseMatrix = SparseMatrix::ones(2, 3);
        assert_eq!(ones.nnz(), 6);
        assert_relative_eq!(ones.sparsity(), 1.0);

        let id: SparseMatrix = SparseMatrix::identity(4);
        assert_eq!(id.nnz(), 4);
        assert_relative_eq!(id.get(3, 3).unwrap(), 1.0);
        assert_relative_eq!(id.get(3, 4).unwrap(), 0.0);

        let diag = SparseMatrix::from_diagonal_value(3, 2.5);
        assert_eq!(diag.diagonal(), array![2.5, 2.5, 2.5]);

        let empty: SparseMatrix = SparseMatrix::from_diagonal_value(3, 0.0);
        assert_eq!(empty.nnz(), 0);
        assert_relative_eq!(SparseMatrix::<f64>::zeros(0, 0).sparsity(), 0.0);
    }

    #[test]
    fn test_from_vector_diagonal() {
        let column = SparseMatrix::from_triplets(3, 1, vec![(1, 1, 1.0), (3, 1, 3.0)]).unwrap();
        let d = SparseMatrix::from_vector_diagonal(&column).unwrap();
        assert_eq!(d.shape(), (3, 3));
        assert_eq!(d.diagonal(), array![1.0, 0.0, 3.0]);

        let row = SparseMatrix::from_triplets(1, 2, vec![(1, 2, 7.0)]).unwrap();
        let d = SparseMatrix::from_vector_diagonal(&row).unwrap();
        assert_eq!(d.shape(), (2, 2));
        assert_relative_eq!(d.get(2, 2).unwrap(), 7.0);

        let grid: SparseMatrix = SparseMatrix::ones(2, 2);
        assert!(matches!(
            SparseMatrix::from_vector_diagonal(&grid),
            Err(MatrixError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_swap_rows() {
        // [1 0 2 0]
        // [0 3 4 5]
        // [9 0 0 0]
        let mut m = SparseMatrix::from_triplets(
            3,
            4,
            vec![(1, 1, 1.0), (1, 3, 2.0), (2, 2, 3.0), (2, 3, 4.0), (2, 4, 5.0), (3, 1, 9.0)],
        )
        .unwrap();
        let original = m.clone();

        m.swap_rows(1, 2).unwrap();
        assert_eq!(m.row_entries_after(1, 0), vec![(2, 3.0), (3, 4.0), (4, 5.0)]);
        assert_eq!(m.row_entries_after(2, 0), vec![(1, 1.0), (3, 2.0)]);
        assert_eq!(m.row_entries_after(3, 0), vec![(1, 9.0)]);
        assert_eq!(m.nnz(), original.nnz());
        assert_consistent(&m);

        m.swap_rows(2, 1).unwrap();
        assert_eq!(m, original);
    }

    #[test]
    fn test_swap_rows_with_empty_row() {
        let mut m = SparseMatrix::from_triplets(3, 3, vec![(1, 2, 1.0), (1, 3, 2.0)]).unwrap();
        m.swap_rows(3, 1).unwrap();
        assert!(m.row_entries_after(1, 0).is_empty());
        assert_eq!(m.row_entries_after(3, 0), vec![(2, 1.0), (3, 2.0)]);
        assert_consistent(&m);

        m.swap_rows(2, 2).unwrap();
    }

    #[test]
    fn test_swap_rows_out_of_range() {
        let mut m = SparseMatrix::from_triplets(3, 2, vec![(1, 1, 1.0), (3, 2, 2.0)]).unwrap();
        let before = m.clone();
        assert_eq!(
            m.swap_rows(1, 4),
            Err(MatrixError::OutOfRange {
                row: 4,
                col: 1,
                rows: 3,
                cols: 2,
            })
        );
        assert!(matches!(
            m.swap_rows(0, 2),
            Err(MatrixError::OutOfRange { row: 0, .. })
        ));
        // nothing moved before the check failed
        assert_eq!(m, before);
    }

    #[test]
    fn test_occupied_rows_and_cols() {
        let m = SparseMatrix::from_triplets(4, 4, vec![(1, 4, 1.0), (3, 1, 2.0), (3, 4, 3.0)])
            .unwrap();
        assert_eq!(m.occupied_rows(), vec![1, 3]);
        assert_eq!(m.occupied_cols(), vec![1, 4]);
    }

    #[test]
    fn test_scale() {
        let mut m = SparseMatrix::from_triplets(2, 2, vec![(1, 1, 2.0), (2, 1, -1.0)]).unwrap();
        m.scale(1.5);
        assert_relative_eq!(m.get(1, 1).unwrap(), 3.0);
        assert_relative_eq!(m.get(2, 1).unwrap(), -1.5);

        let cleared = m.scaled(0.0);
        assert_eq!(cleared.nnz(), 0);
        assert_consistent(&cleared);
        assert_eq!(m.nnz(), 2);
    }

    #[test]
    fn test_linear_operator() {
        let m = SparseMatrix::from_dense(&array![[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let x = array![1.0, 2.0];

        let y = m.apply(&x);
        assert_relative_eq!(y[0], 5.0, epsilon = 1e-10);
        assert_relative_eq!(y[1], 11.0, epsilon = 1e-10);

        let yt = m.apply_transpose(&x);
        assert_relative_eq!(yt[0], 7.0, epsilon = 1e-10);
        assert_relative_eq!(yt[1], 10.0, epsilon = 1e-10);
        assert!(LinearOperator::is_square(&m));
    }

    #[test]
    fn test_complex_hermitian_apply() {
        let m = SparseMatrix::from_triplets(
            2,
            2,
            vec![(1, 2, Complex64::new(0.0, 1.0)), (2, 1, Complex64::new(2.0, 0.0))],
        )
        .unwrap();
        let x = array![Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)];
        let y = m.apply_hermitian(&x);
        // A^H = [0 2; -i 0]
        assert_relative_eq!((y[0] - Complex64::new(2.0, 0.0)).norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!((y[1] - Complex64::new(0.0, -1.0)).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        let m = SparseMatrix::from_triplets(2, 2, vec![(1, 1, 1.0), (2, 2, 2.5)]).unwrap();
        assert_eq!(
            m.to_string(),
            "[  1.0000,  0.0000;\n   0.0000,  2.5000]"
        );
        assert_eq!(SparseMatrix::<f64>::new(0, 3).to_string(), "[]");
    }

    #[test]
    fn test_display_complex() {
        let m = SparseMatrix::from_triplets(2, 1, vec![(1, 1, Complex64::new(1.0, -2.5))]).unwrap();
        assert_eq!(
            m.to_string(),
            "[1.0000-2.5000i;\n 0.0000+0.0000i]"
        );

        let narrow = SparseMatrix::from_triplets(1, 2, vec![(1, 1, -12.5f32)]).unwrap();
        assert_eq!(narrow.to_string(), "[-12.5000,  0.0000]");
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_from_dense_overflow() {
        // zero columns, so nothing is allocated
        let dense = Array2::<f64>::zeros((1usize << 33, 0));
        assert_eq!(
            SparseMatrix::from_dense(&dense),
            Err(MatrixError::DimensionOverflow {
                rows: 1usize << 33,
                cols: 0,
            })
        );
    }
}
