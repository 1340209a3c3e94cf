//! Sparse matrices with dual (row-major and column-major) indexing
//!
//! This crate stores only the non-zero entries of a matrix and expresses
//! every algorithm as a merge over sorted non-zero streams, so the cost of
//! an operation follows the number of non-zeros rather than rows x cols.
//!
//! # Features
//!
//! - **Storage**: [`SparseMatrix`] keeps a row-major map of values and a
//!   column-major key set, updated together on every mutation
//! - **Cursors**: [`RowCursor`] / [`ColCursor`] walk either ordering from any position
//! - **Direct Solvers**: Gaussian elimination ([`solve`]), determinant, Gauss-Jordan inverse
//! - **Arithmetic**: [`add`], [`sub`], [`mul`], [`div`], [`transpose`], scalar operations and
//!   `+ - * /` operators on matrix references
//! - **Generic Scalar Types**: Works with f64, f32, Complex64, Complex32
//!
//! Coordinates are 1-based.
//!
//! # Example
//!
//! ```
//! use math_audio_sparse::{SparseMatrix, mul, solve};
//!
//! let a: SparseMatrix = SparseMatrix::from_triplets(
//!     3,
//!     3,
//!     vec![
//!         (1, 1, 1.0), (1, 2, 2.0), (1, 3, 3.0),
//!         (2, 1, 2.0), (2, 2, 5.0), (2, 3, 6.0),
//!         (3, 1, 7.0), (3, 2, 8.0), (3, 3, 10.0),
//!     ],
//! )?;
//! let v: SparseMatrix = SparseMatrix::from_triplets(3, 1, vec![(1, 1, 10.0), (2, 1, 22.0), (3, 1, 46.0)])?;
//!
//! let x = solve(&a, &v)?;
//! let ax = mul(&a, &x)?;
//! assert!((ax.get(3, 1)? - 46.0).abs() < 1e-10);
//! # Ok::<(), math_audio_sparse::MatrixError>(())
//! ```

pub mod direct;
pub mod error;
pub mod ops;
pub mod sparse;
pub mod traits;

// Re-export main types
pub use error::{MatrixError, Result};
pub use sparse::{ColCursor, Dim, RowCursor, SparseMatrix};
pub use traits::{ComplexField, LinearOperator};

// Re-export solvers and arithmetic
pub use direct::{
    EliminationConfig, EliminationSolution, Inverse, determinant, inverse, solve,
    solve_with_config,
};
pub use ops::{
    add, add_scalar, div, div_scalar, mul, scalar_div, scalar_sub, sub, sub_scalar, transpose,
};
