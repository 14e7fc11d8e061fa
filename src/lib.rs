//! A small generic dense matrix with one operation: multiplication.
//!
//! Matrices are stored row-major in a single buffer, every accessor is
//! bounds-checked, and the product is the plain i-j-k triple loop with an
//! `f64` accumulator. It is meant as a readable reference, not a fast GEMM.
//!
//! ## Usage
//!
//! ```
//! use densemat::{matrix, multiply};
//!
//! let a = matrix![[1, 2], [3, 4]].unwrap();
//! let b = matrix![[5, 6], [7, 8]].unwrap();
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(c, matrix![[19, 22], [43, 50]].unwrap());
//! ```
//!
//! Shapes are checked, not assumed:
//!
//! ```
//! use densemat::{multiply, Matrix, MatrixError};
//!
//! let a = Matrix::<f64>::zeros(2, 3).unwrap();
//! let b = Matrix::<f64>::zeros(2, 2).unwrap();
//!
//! assert!(matches!(multiply(&a, &b), Err(MatrixError::DimensionMismatch { .. })));
//! assert!(matches!(a.get(2, 0), Err(MatrixError::IndexOutOfRange { .. })));
//! ```
//!
//! ## What's inside
//!
//! - [`Matrix`]: fixed-shape container, zero-filled or built from row literals
//! - [`multiply`] / [`Multiplier`]: the product, accumulated in `f64`
//! - [`Scalar`]: the element types allowed (all primitive numbers)

pub mod error;
pub mod matrix;
pub mod multiply;
pub mod scalar;

pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use multiply::{Multiplier, multiply};
pub use scalar::Scalar;
