//! Matrix inverse by Gauss-Jordan elimination
//!
//! Uses the same pivot rule as [`solve`](super::solve), but normalises each
//! pivot row and clears the pivot column both above and below the diagonal,
//! so the identity it is applied to ends up holding the inverse.

use super::find_pivot;
use crate::error::{MatrixError, Result};
use crate::sparse::SparseMatrix;
use crate::traits::ComplexField;

/// Inverse of a square matrix together with its determinant
#[derive(Debug, Clone)]
pub struct Inverse<T: ComplexField> {
    pub matrix: SparseMatrix<T>,
    pub determinant: T,
}

/// Invert a square matrix
pub fn inverse<T: ComplexField>(a: &SparseMatrix<T>) -> Result<Inverse<T>> {
    if !a.is_square() {
        return Err(MatrixError::NotSquare {
            rows: a.num_rows(),
            cols: a.num_cols(),
        });
    }

    let n = a.num_rows();
    let mut work = a.clone();
    let mut result = SparseMatrix::identity(n);
    let mut determinant = T::one();

    for c in 1..=n {
        let pivot_row = find_pivot(&work, c).ok_or(MatrixError::ZeroDeterminant { column: c })?;
        if pivot_row != c {
            log::debug!("Column {}: exchanging rows {} and {}", c, c, pivot_row);
            work.swap_rows(pivot_row, c)?;
            result.swap_rows(pivot_row, c)?;
            determinant = -determinant;
        }

        let pivot = work.get(c, c)?;
        determinant *= pivot;

        // Normalise the pivot row; columns before c are already clear
        let scale = pivot.inv();
        work.set(c, c, T::one())?;
        for (s, value) in work.row_entries_after(c, c) {
            work.set(c, s, value * scale)?;
        }
        for (e, value) in result.row_entries_after(c, 0) {
            result.set(c, e, value * scale)?;
        }

        let pivot_tail = work.row_entries_after(c, c);
        let result_pivot_row = result.row_entries_after(c, 0);

        for (r, factor) in work.col_entries_after(c, 0) {
            if r == c {
                continue;
            }
            let factor = -factor;
            work.erase(r, c)?;
            for &(s, p) in &pivot_tail {
                work.increment(r, s, factor * p)?;
            }
            for &(e, p) in &result_pivot_row {
                result.increment(r, e, factor * p)?;
            }
        }
    }

    Ok(Inverse {
        matrix: result,
        determinant,
    })
}
