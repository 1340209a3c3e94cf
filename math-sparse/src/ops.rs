//! Sparse matrix arithmetic
//!
//! Every operation is a merge over sorted non-zero streams: [`add`] and
//! [`sub`] walk two row-major cursors in key order, [`mul`] computes each
//! output cell as a sparse dot product of a row cursor against a column
//! cursor, [`transpose`] visits each entry once. [`div`] multiplies by the
//! Gauss-Jordan inverse of the divisor.
//!
//! The `+ - * /` operators on `&SparseMatrix` forward to these functions
//! and return a [`Result`], since operand shapes may not fit.

use crate::direct::inverse;
use crate::error::{MatrixError, Result};
use crate::sparse::{Dim, SparseMatrix};
use crate::traits::ComplexField;
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// A + B
pub fn add<T: ComplexField>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    merge(a, b, |x| x)
}

/// A - B
pub fn sub<T: ComplexField>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    merge(a, b, |x| -x)
}

/// Element-wise merge of A and `right(B)`
fn merge<T, F>(a: &SparseMatrix<T>, b: &SparseMatrix<T>, right: F) -> Result<SparseMatrix<T>>
where
    T: ComplexField,
    F: Fn(T) -> T,
{
    if a.shape() != b.shape() {
        return Err(MatrixError::mismatch(a.shape(), b.shape()));
    }

    let mut result = SparseMatrix::new(a.num_rows(), a.num_cols());
    let mut left = a.row_cursor_after(0, 0);
    let mut other = b.row_cursor_after(0, 0);

    loop {
        // (row, col) tuples order exactly like row-major keys
        let order = match (left.position(), other.position()) {
            (Some(l), Some(o)) => l.cmp(&o),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => break,
        };
        match order {
            Ordering::Equal => {
                result.set(left.row(), left.col(), left.value() + right(other.value()))?;
                left.advance();
                other.advance();
            }
            Ordering::Less => {
                result.set(left.row(), left.col(), left.value())?;
                left.advance();
            }
            Ordering::Greater => {
                result.set(other.row(), other.col(), right(other.value()))?;
                other.advance();
            }
        }
    }
    Ok(result)
}

/// A * B
///
/// Only rows of A and columns of B that hold entries are visited. With the
/// `rayon` feature the output rows are computed in parallel.
pub fn mul<T: ComplexField>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    if a.num_cols() != b.num_rows() {
        return Err(MatrixError::mismatch(
            a.shape(),
            (a.num_cols(), b.num_cols()),
        ));
    }

    let rows = a.occupied_rows();
    let cols = b.occupied_cols();

    #[cfg(feature = "rayon")]
    let products: Vec<(Dim, Vec<(Dim, T)>)> = rows
        .par_iter()
        .map(|&r| (r, product_row(a, b, r, &cols)))
        .collect();

    #[cfg(not(feature = "rayon"))]
    let products: Vec<(Dim, Vec<(Dim, T)>)> = rows
        .iter()
        .map(|&r| (r, product_row(a, b, r, &cols)))
        .collect();

    let mut result = SparseMatrix::new(a.num_rows(), b.num_cols());
    for (r, entries) in products {
        for (m, value) in entries {
            result.set(r, m, value)?;
        }
    }
    Ok(result)
}

/// Non-zero cells of row `row` of A * B
fn product_row<T: ComplexField>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    row: Dim,
    cols: &[Dim],
) -> Vec<(Dim, T)> {
    cols.iter()
        .map(|&m| (m, sparse_dot(a, row, b, m)))
        .filter(|(_, value)| !value.is_zero())
        .collect()
}

/// Row `row` of A dotted with column `col` of B
fn sparse_dot<T: ComplexField>(a: &SparseMatrix<T>, row: Dim, b: &SparseMatrix<T>, col: Dim) -> T {
    let mut left = a.row_cursor_after(row, 0);
    let mut right = b.col_cursor_after(0, col);
    let mut sum = T::zero();

    while left.within_row(row) && right.within_col(col) {
        match left.col().cmp(&right.row()) {
            Ordering::Equal => {
                sum += left.value() * right.value();
                left.advance();
                right.advance();
            }
            Ordering::Less => left.advance(),
            Ordering::Greater => right.advance(),
        }
    }
    sum
}

/// A^T
pub fn transpose<T: ComplexField>(a: &SparseMatrix<T>) -> SparseMatrix<T> {
    let mut result = SparseMatrix::new(a.num_cols(), a.num_rows());
    let mut cursor = a.row_cursor_after(0, 0);
    while cursor.is_good() {
        result.put(cursor.col(), cursor.row(), cursor.value());
        cursor.advance();
    }
    result
}

/// A / B = A * B^-1
///
/// Fails with `InvalidDimensions` unless A.cols == B.rows, then with
/// whatever [`inverse`] reports for B (`NotSquare`, `ZeroDeterminant`).
pub fn div<T: ComplexField>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    if a.num_cols() != b.num_rows() {
        return Err(MatrixError::mismatch(
            a.shape(),
            (a.num_cols(), b.num_cols()),
        ));
    }
    let divisor = inverse(b)?;
    mul(a, &divisor.matrix)
}

/// s / A = s * A^-1
pub fn scalar_div<T: ComplexField>(scalar: T, a: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    let mut result = inverse(a)?.matrix;
    result.scale(scalar);
    Ok(result)
}

/// A / s, scaling the stored entries by 1/s
///
/// A zero divisor follows the scalar type's own division (infinities for
/// reals) on the stored entries; absent cells stay zero.
pub fn div_scalar<T: ComplexField>(a: &SparseMatrix<T>, scalar: T) -> SparseMatrix<T> {
    a.scaled(scalar.inv())
}

/// A + s on every cell, stored or not
///
/// The result is dense unless `s` is zero or cancels a stored entry.
pub fn add_scalar<T: ComplexField>(a: &SparseMatrix<T>, scalar: T) -> SparseMatrix<T> {
    if scalar.is_zero() {
        return a.clone();
    }
    let mut result = SparseMatrix::new(a.num_rows(), a.num_cols());
    for r in 1..=a.num_rows() {
        let mut stored = a.row_entries_after(r, 0).into_iter().peekable();
        for c in 1..=a.num_cols() {
            let value = match stored.next_if(|&(col, _)| col == c) {
                Some((_, v)) => v + scalar,
                None => scalar,
            };
            result.put(r, c, value);
        }
    }
    result
}

/// A - s on every cell
pub fn sub_scalar<T: ComplexField>(a: &SparseMatrix<T>, scalar: T) -> SparseMatrix<T> {
    add_scalar(a, -scalar)
}

/// s - A on every cell
pub fn scalar_sub<T: ComplexField>(scalar: T, a: &SparseMatrix<T>) -> SparseMatrix<T> {
    add_scalar(&-a, scalar)
}

impl<T: ComplexField> Add for &SparseMatrix<T> {
    type Output = Result<SparseMatrix<T>>;

    fn add(self, rhs: Self) -> Result<SparseMatrix<T>> {
        add(self, rhs)
    }
}

impl<T: ComplexField> Sub for &SparseMatrix<T> {
    type Output = Result<SparseMatrix<T>>;

    fn sub(self, rhs: Self) -> Result<SparseMatrix<T>> {
        sub(self, rhs)
    }
}

impl<T: ComplexField> Mul for &SparseMatrix<T> {
    type Output = Result<SparseMatrix<T>>;

    fn mul(self, rhs: Self) -> Result<SparseMatrix<T>> {
        mul(self, rhs)
    }
}

impl<T: ComplexField> Div for &SparseMatrix<T> {
    type Output = Result<SparseMatrix<T>>;

    fn div(self, rhs: Self) -> Result<SparseMatrix<T>> {
        div(self, rhs)
    }
}

impl<T: ComplexField> Neg for &SparseMatrix<T> {
    type Output = SparseMatrix<T>;

    fn neg(self) -> SparseMatrix<T> {
        self.scaled(-T::one())
    }
}

impl<T: ComplexField> Neg for SparseMatrix<T> {
    type Output = SparseMatrix<T>;

    fn neg(mut self) -> SparseMatrix<T> {
        self.scale(-T::one());
        self
    }
}
