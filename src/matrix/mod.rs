//! The dense matrix container and the scalar kernel behind its product.
//!
//! [`Matrix`] keeps its elements in one row-major `Vec<T>`; element `(r, c)`
//! lives at `r * cols + c`. Every accessor is bounds-checked.

pub mod naive_ijk;

use std::fmt;

use log::debug;

use crate::error::{MatrixError, Result};
use crate::scalar::Scalar;

/// A fixed-size, row-major dense matrix.
///
/// The shape is set at construction and never changes afterwards. Cloning
/// duplicates the buffer, so two matrices never share storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Validates a requested shape and returns its element count.
fn check_shape(rows: usize, cols: usize) -> Result<usize> {
    let invalid = MatrixError::InvalidDimension {
        rows,
        cols,
        empty_row: None,
    };
    if rows == 0 || cols == 0 {
        debug!("rejecting degenerate {}x{} matrix", rows, cols);
        return Err(invalid);
    }
    rows.checked_mul(cols).ok_or_else(|| {
        debug!("{}x{} matrix has more elements than usize can count", rows, cols);
        invalid
    })
}

impl<T: Scalar> Matrix<T> {
    /// Creates a `rows` × `cols` matrix with every element set to zero.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimension`] if either dimension is zero or
    /// `rows * cols` overflows.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = check_shape(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![T::zero(); len],
        })
    }

    /// Creates the `n` × `n` identity matrix.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimension`] if `n` is zero or `n * n` overflows.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }

    /// Builds a matrix from a sequence of equally long rows.
    ///
    /// This is what the [`matrix!`](crate::matrix!) literal expands to.
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m.get(1, 0).unwrap(), 4);
    /// ```
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimension`] if there are no rows or a row is
    /// empty, [`MatrixError::InconsistentShape`] if a row's length differs
    /// from the first row's.
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
    {
        let rows: Vec<R> = rows.into_iter().collect();
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let len = check_shape(rows.len(), cols)?;
        if let Some(empty) = rows.iter().position(|row| row.as_ref().is_empty()) {
            debug!("row {} of a {}x{} literal is empty", empty, rows.len(), cols);
            return Err(MatrixError::InvalidDimension {
                rows: rows.len(),
                cols,
                empty_row: Some(empty),
            });
        }

        let mut data = Vec::with_capacity(len);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                debug!(
                    "row {} has {} elements, first row has {}",
                    index,
                    row.len(),
                    cols
                );
                return Err(MatrixError::InconsistentShape {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Adopts a row-major buffer of exactly `rows * cols` elements.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimension`] if either dimension is zero or
    /// `rows * cols` overflows, [`MatrixError::InconsistentShape`] if `data`
    /// has the wrong length.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let len = check_shape(rows, cols)?;
        if data.len() != len {
            return Err(MatrixError::InconsistentShape {
                row: 0,
                expected: len,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Reads the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexOutOfRange`] if the position is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let offset = self.offset(row, col)?;
        Ok(self.data[offset])
    }

    /// Overwrites the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexOutOfRange`] if the position is outside the matrix.
    /// The matrix is left untouched in that case.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let offset = self.offset(row, col)?;
        self.data[offset] = value;
        Ok(())
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The whole buffer in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// One row as a contiguous slice.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexOutOfRange`] if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> Result<&[T]> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let start = row * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    /// Consumes the matrix, returning its row-major buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

impl<T: Scalar> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.data.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// Builds a [`Matrix`] from a nested row literal.
///
/// Expands to [`Matrix::from_rows`], so it returns a [`Result`](crate::Result).
///
/// ```
/// use densemat::{matrix, MatrixError};
///
/// let m = matrix![[1.0, 2.0], [3.0, 4.0]].unwrap();
/// assert_eq!(m.get(1, 1).unwrap(), 4.0);
///
/// let ragged = matrix![[1, 2], [3]];
/// assert!(matches!(ragged, Err(MatrixError::InconsistentShape { .. })));
/// ```
#[macro_export]
macro_rules! matrix {
    ($([$($x:expr),* $(,)?]),+ $(,)?) => {
        $crate::Matrix::from_rows(::std::vec![$(::std::vec![$($x),*]),+])
    };
}
