//! Gaussian elimination on sparse matrices
//!
//! Forward elimination transforms working copies of the coefficient matrix
//! and the right-hand side in place, then back-substitution solves the
//! upper-triangular system one right-hand column at a time. Only non-zero
//! entries are visited: pivot rows and eliminated rows are found through
//! cursors, never by scanning cells.
//!
//! The pivot in column `c` is the *first* non-zero at or below the
//! diagonal, not the largest in magnitude. This is weaker than partial
//! pivoting and ill-conditioned inputs may lose accuracy.

use super::find_pivot;
use crate::error::{MatrixError, Result};
use crate::sparse::{Dim, SparseMatrix};
use crate::traits::ComplexField;

/// Elimination configuration
#[derive(Debug, Clone, Default)]
pub struct EliminationConfig {
    /// Log progress every N eliminated columns (0 = no output)
    pub print_interval: usize,
}

/// Elimination result
#[derive(Debug, Clone)]
pub struct EliminationSolution<T: ComplexField> {
    /// Solution matrix X (n x k)
    pub x: SparseMatrix<T>,
    /// Determinant of the coefficient matrix
    pub determinant: T,
    /// Number of row exchanges performed while pivoting
    pub row_swaps: usize,
}

/// What forward elimination leaves behind besides the reduced matrices
struct Reduction<T> {
    determinant: T,
    row_swaps: usize,
}

/// Solve A X = V for X
///
/// `a` must be n x n and `v` n x k. Neither input is modified.
pub fn solve<T: ComplexField>(a: &SparseMatrix<T>, v: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    solve_with_config(a, v, &EliminationConfig::default()).map(|solution| solution.x)
}

/// Solve A X = V, also reporting the determinant of A
pub fn solve_with_config<T: ComplexField>(
    a: &SparseMatrix<T>,
    v: &SparseMatrix<T>,
    config: &EliminationConfig,
) -> Result<EliminationSolution<T>> {
    let n = a.num_rows();
    if a.num_cols() != n {
        return Err(MatrixError::mismatch(a.shape(), (n, n)));
    }
    if v.num_rows() != n {
        return Err(MatrixError::mismatch(v.shape(), (n, v.num_cols())));
    }

    let mut coefficients = a.clone();
    let mut x = v.clone();

    let reduction = forward_eliminate(&mut coefficients, Some(&mut x), config)?;
    back_substitute(&coefficients, &mut x)?;

    if config.print_interval > 0 {
        log::info!(
            "Elimination solved {}x{} system with {} right-hand sides ({} row swaps)",
            n,
            n,
            x.num_cols(),
            reduction.row_swaps
        );
    }

    Ok(EliminationSolution {
        x,
        determinant: reduction.determinant,
        row_swaps: reduction.row_swaps,
    })
}

/// Determinant of a square matrix by forward elimination
///
/// A singular matrix yields zero rather than an error.
pub fn determinant<T: ComplexField>(a: &SparseMatrix<T>) -> Result<T> {
    if !a.is_square() {
        return Err(MatrixError::NotSquare {
            rows: a.num_rows(),
            cols: a.num_cols(),
        });
    }

    let mut work = a.clone();
    match forward_eliminate(&mut work, None, &EliminationConfig::default()) {
        Ok(reduction) => Ok(reduction.determinant),
        Err(MatrixError::ZeroDeterminant { .. }) => Ok(T::zero()),
        Err(err) => Err(err),
    }
}

/// Reduce `a` to upper-triangular form, applying the same row operations to `rhs`
fn forward_eliminate<T: ComplexField>(
    a: &mut SparseMatrix<T>,
    mut rhs: Option<&mut SparseMatrix<T>>,
    config: &EliminationConfig,
) -> Result<Reduction<T>> {
    let n = a.num_rows();
    let mut determinant = T::one();
    let mut row_swaps = 0;

    for c in 1..=n {
        let pivot_row = find_pivot(a, c).ok_or(MatrixError::ZeroDeterminant { column: c })?;
        if pivot_row != c {
            log::debug!("Column {}: exchanging rows {} and {}", c, c, pivot_row);
            a.swap_rows(pivot_row, c)?;
            if let Some(rhs) = rhs.as_deref_mut() {
                rhs.swap_rows(pivot_row, c)?;
            }
            row_swaps += 1;
            determinant = -determinant;
        }

        let pivot = a.get(c, c)?;
        determinant *= pivot;

        // Row c is not modified while eliminating the rows below it
        let pivot_tail = a.row_entries_after(c, c);
        let rhs_pivot_row = rhs
            .as_deref()
            .map(|m| m.row_entries_after(c, 0))
            .unwrap_or_default();

        for (r, value) in a.col_entries_after(c, c) {
            let factor = -value / pivot;
            a.erase(r, c)?;
            for &(s, p) in &pivot_tail {
                a.increment(r, s, factor * p)?;
            }
            if let Some(rhs) = rhs.as_deref_mut() {
                for &(e, p) in &rhs_pivot_row {
                    rhs.increment(r, e, factor * p)?;
                }
            }
        }

        if config.print_interval > 0 && (c as usize) % config.print_interval == 0 {
            log::info!(
                "Elimination column {}/{}: {} non-zeros in working matrix",
                c,
                n,
                a.nnz()
            );
        }
    }

    Ok(Reduction {
        determinant,
        row_swaps,
    })
}

/// Solve the upper-triangular system left by [`forward_eliminate`], in place
fn back_substitute<T: ComplexField>(upper: &SparseMatrix<T>, x: &mut SparseMatrix<T>) -> Result<()> {
    let n = upper.num_rows();
    let k = x.num_cols();

    for r in (1..=n).rev() {
        let diagonal = upper.get(r, r)?;
        let tail: Vec<(Dim, T)> = upper.row_entries_after(r, r);
        for e in 1..=k {
            let mut known = T::zero();
            for &(s, coefficient) in &tail {
                known += coefficient * x.get(s, e)?;
            }
            let value = (x.get(r, e)? - known) / diagonal;
            x.set(r, e, value)?;
        }
    }
    Ok(())
}
