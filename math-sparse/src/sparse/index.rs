//! Packed coordinate keys
//!
//! A coordinate is packed into a single `u64` with the major component in
//! the high 32 bits and the minor one in the low 32 bits. The natural `u64`
//! ordering of row-major keys is then row-major order (row, then column),
//! and likewise for column-major keys, so an ordered container keyed by
//! them can answer "first entry after (r, c)" with one range query.

/// Row or column index (1-based; 0 is only used as a "before the start" sentinel)
pub type Dim = u32;

#[inline]
const fn pack(major: Dim, minor: Dim) -> u64 {
    ((major as u64) << 32) | minor as u64
}

#[inline]
const fn unpack(key: u64) -> (Dim, Dim) {
    ((key >> 32) as Dim, key as Dim)
}

/// Key ordering by row, then column
#[inline]
pub const fn row_major_key(row: Dim, col: Dim) -> u64 {
    pack(row, col)
}

/// Key ordering by column, then row
#[inline]
pub const fn col_major_key(row: Dim, col: Dim) -> u64 {
    pack(col, row)
}

/// Recover `(row, col)` from a row-major key
#[inline]
pub const fn decode_row_major(key: u64) -> (Dim, Dim) {
    unpack(key)
}

/// Recover `(row, col)` from a column-major key
#[inline]
pub const fn decode_col_major(key: u64) -> (Dim, Dim) {
    let (col, row) = unpack(key);
    (row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(row_major_key(1, 2), (1u64 << 32) | 2);
        assert_eq!(col_major_key(1, 2), (2u64 << 32) | 1);
        assert_eq!(row_major_key(0, 0), 0);
    }

    #[test]
    fn test_decode_recovers_coordinates() {
        for &(row, col) in &[(0, 0), (1, 1), (7, 3), (Dim::MAX, 1), (1, Dim::MAX)] {
            assert_eq!(decode_row_major(row_major_key(row, col)), (row, col));
            assert_eq!(decode_col_major(col_major_key(row, col)), (row, col));
        }
        assert_eq!(
            decode_row_major(row_major_key(Dim::MAX, Dim::MAX)),
            (Dim::MAX, Dim::MAX)
        );
    }

    #[test]
    fn test_row_major_ordering() {
        assert!(row_major_key(1, Dim::MAX) < row_major_key(2, 1));
        assert!(row_major_key(2, 1) < row_major_key(2, 2));
        // the sentinel column 0 sorts before every real column of its row
        assert!(row_major_key(3, 0) < row_major_key(3, 1));
    }

    #[test]
    fn test_col_major_ordering() {
        assert!(col_major_key(Dim::MAX, 1) < col_major_key(1, 2));
        assert!(col_major_key(1, 2) < col_major_key(2, 2));
    }
}
