//! Direct solvers for sparse linear systems
//!
//! - [`solve`]: Gaussian elimination with back-substitution
//! - [`determinant`]: forward elimination only
//! - [`inverse`]: Gauss-Jordan elimination against the identity

mod elimination;
mod inverse;

pub use elimination::{
    EliminationConfig, EliminationSolution, determinant, solve, solve_with_config,
};
pub use inverse::{Inverse, inverse};

use crate::sparse::{Dim, SparseMatrix};
use crate::traits::ComplexField;

/// First row at or below the diagonal holding a non-zero in column `col`
fn find_pivot<T: ComplexField>(a: &SparseMatrix<T>, col: Dim) -> Option<Dim> {
    let cursor = a.col_cursor_after(col - 1, col);
    cursor.within_col(col).then(|| cursor.row())
}
