//! Error type shared by construction, access and multiplication.

/// Everything that can go wrong when building, indexing or multiplying matrices.
///
/// All variants are programmer errors: they are returned as soon as the bad
/// request is seen and nothing is retried.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A shape with zero rows or zero columns was requested, its element
    /// count does not fit in `usize`, or a literal row is empty.
    ///
    /// `empty_row` names the offending row when the shape itself is fine but
    /// one of the literal rows has no elements.
    #[error("invalid dimension: {rows}x{cols}{}", empty_row_note(.empty_row))]
    InvalidDimension {
        rows: usize,
        cols: usize,
        empty_row: Option<usize>,
    },

    /// Literal rows disagree in length with the first row, or a flat buffer
    /// does not hold `rows * cols` elements.
    #[error("inconsistent shape: row {row} has {found} elements, expected {expected}")]
    InconsistentShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The left operand's column count differs from the right operand's row count.
    #[error(
        "dimension mismatch: cannot multiply {lhs_rows}x{lhs_cols} by {rhs_rows}x{rhs_cols}"
    )]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// An accessor was called with a position outside the matrix.
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;

fn empty_row_note(empty_row: &Option<usize>) -> String {
    match empty_row {
        Some(row) => format!(" (row {} is empty)", row),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_both_shapes() {
        let err = MatrixError::DimensionMismatch {
            lhs_rows: 2,
            lhs_cols: 3,
            rhs_rows: 2,
            rhs_cols: 2,
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: cannot multiply 2x3 by 2x2"
        );
    }

    #[test]
    fn invalid_dimension_message_names_empty_row() {
        let degenerate = MatrixError::InvalidDimension {
            rows: 0,
            cols: 3,
            empty_row: None,
        };
        assert_eq!(degenerate.to_string(), "invalid dimension: 0x3");

        let empty = MatrixError::InvalidDimension {
            rows: 3,
            cols: 2,
            empty_row: Some(1),
        };
        assert_eq!(empty.to_string(), "invalid dimension: 3x2 (row 1 is empty)");
    }

    #[test]
    fn out_of_range_message_names_position() {
        let err = MatrixError::IndexOutOfRange {
            row: 4,
            col: 0,
            rows: 2,
            cols: 2,
        };
        assert!(err.to_string().contains("(4, 0)"));
        assert!(err.to_string().contains("2x2"));
    }
}
