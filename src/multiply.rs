use log::{debug, trace};

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::matrix::naive_ijk::matmul_naive_ijk;
use crate::scalar::Scalar;

/// Matrix product: C = A * B
///
/// A is m×k, B is k×n, the returned C is m×n with
/// `C(i, j) = Σ_p A(i, p) * B(p, j)`. Every element is accumulated in `f64`
/// and narrowed to `T` once, so integer results truncate the exact sum rather
/// than each partial product.
///
/// Neither operand is modified.
///
/// # Errors
///
/// [`MatrixError::DimensionMismatch`] if `a.cols() != b.rows()`.
pub fn multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    let (m, k) = a.shape();
    let (kb, n) = b.shape();
    if k != kb {
        debug!("cannot multiply {}x{} by {}x{}", m, k, kb, n);
        return Err(MatrixError::DimensionMismatch {
            lhs_rows: m,
            lhs_cols: k,
            rhs_rows: kb,
            rhs_cols: n,
        });
    }
    trace!("multiplying {}x{} by {}x{}", m, k, kb, n);

    let mut c = vec![T::zero(); m * n];
    matmul_naive_ijk(a.as_slice(), b.as_slice(), &mut c, m, n, k);
    Matrix::from_vec(m, n, c)
}

/// Stateless handle for [`multiply`].
///
/// Useful where a multiplication strategy is passed around as a value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Multiplier;

impl Multiplier {
    /// Creates a multiplier. It holds no state.
    pub fn new() -> Self {
        Self
    }

    /// Same as [`multiply`].
    pub fn multiply<T: Scalar>(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
        multiply(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix;

    #[test]
    fn two_by_two_product() {
        let a = matrix![[1, 2], [3, 4]].unwrap();
        let b = matrix![[5, 6], [7, 8]].unwrap();

        let c = multiply(&a, &b).unwrap();

        assert_eq!(c, matrix![[19, 22], [43, 50]].unwrap());
    }

    #[test]
    fn result_shape_is_outer_dimensions() {
        let a = Matrix::<f32>::zeros(4, 7).unwrap();
        let b = Matrix::<f32>::zeros(7, 2).unwrap();

        assert_eq!(multiply(&a, &b).unwrap().shape(), (4, 2));
    }

    #[test]
    fn mismatched_inner_dimension_is_reported() {
        let a = Matrix::<f64>::zeros(2, 3).unwrap();
        let b = Matrix::<f64>::zeros(2, 2).unwrap();

        assert_eq!(
            multiply(&a, &b),
            Err(MatrixError::DimensionMismatch {
                lhs_rows: 2,
                lhs_cols: 3,
                rhs_rows: 2,
                rhs_cols: 2
            })
        );
    }

    #[test]
    fn inputs_are_not_mutated() {
        let a = matrix![[1.0, 2.0], [3.0, 4.0]].unwrap();
        let b = matrix![[0.5, 0.0], [0.0, 0.5]].unwrap();
        let (a0, b0) = (a.clone(), b.clone());

        let _ = multiply(&a, &b).unwrap();

        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn integer_sum_is_narrowed_once() {
        let a = matrix![[100u8, 100]].unwrap();
        let b = matrix![[2u8], [1]].unwrap();
        // 300 saturates to u8::MAX on the final narrowing.
        assert_eq!(multiply(&a, &b).unwrap().as_slice(), &[255]);
    }

    #[test]
    fn f32_elements_are_summed_in_f64() {
        // In f32, 1e8 + 1 rounds back to 1e8 and the row would sum to 0.
        let a = matrix![[1e8f32, 1.0, -1e8]].unwrap();
        let b = matrix![[1f32], [1.0], [1.0]].unwrap();

        assert_eq!(multiply(&a, &b).unwrap().as_slice(), &[1.0]);
    }

    #[test]
    fn multiplier_matches_free_function() {
        let a = matrix![[1, 2, 3]].unwrap();
        let b = matrix![[4], [5], [6]].unwrap();

        assert_eq!(
            Multiplier::new().multiply(&a, &b),
            multiply(&a, &b)
        );
        assert_eq!(multiply(&a, &b).unwrap().as_slice(), &[32]);
    }
}
