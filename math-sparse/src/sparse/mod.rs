//! Sparse matrix storage
//!
//! Only non-zero entries are stored, indexed twice (row-major and
//! column-major) so that both orderings can be walked with cursors.

mod cursor;
mod index;
mod matrix;

pub use cursor::{ColCursor, RowCursor};
pub use index::{Dim, col_major_key, decode_col_major, decode_row_major, row_major_key};
pub use matrix::SparseMatrix;
