use crate::scalar::Scalar;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop implementation: for every result element
/// the inner loop walks a row of A and a column of B (stride `n`). Each
/// element is summed in an `f64` accumulator and narrowed to `T` once.
///
/// C is overwritten, not accumulated into.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, overwritten with A * B
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
///
/// # Panics
///
/// Panics if a slice is shorter than its stated shape. Use
/// [`multiply`](crate::multiply()) for a shape-checked product.
pub fn matmul_naive_ijk<T: Scalar>(a: &[T], b: &[T], c: &mut [T], m: usize, n: usize, k: usize) {
    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0f64;
            for p in 0..k {
                sum += a[i * k + p].mul_wide(b[p * n + j]);
            }
            c[i * n + j] = T::narrow(sum);
        }
    }
}
