//! Element types a [`Matrix`](crate::Matrix) can hold.
//!
//! Storage stays in `T`, but products are summed in `f64` and only narrowed
//! back to `T` when a result element is written.

use num_traits::{AsPrimitive, One, Zero};

/// A primitive numeric type usable as a matrix element.
///
/// Implemented for all built-in integer and floating-point types.
///
/// Integer operands are converted to `f64` before they are multiplied, so
/// 64- and 128-bit values above 2^53 are rounded before the product is
/// formed, not after. Results for such inputs can differ in the last bits
/// from a product formed in the integer type.
pub trait Scalar: Copy + Zero + One + 'static {
    /// The term `self * rhs` as it is added to the `f64` accumulator.
    ///
    /// Floats multiply in their own precision and then widen. Integers widen
    /// first, so the product itself cannot overflow.
    fn mul_wide(self, rhs: Self) -> f64;

    /// Converts an accumulated value back to the storage type.
    ///
    /// Uses `as` semantics: integers truncate toward zero and saturate at
    /// their bounds, NaN becomes zero.
    fn narrow(acc: f64) -> Self;
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn mul_wide(self, rhs: Self) -> f64 {
                (self * rhs).as_()
            }

            #[inline]
            fn narrow(acc: f64) -> Self {
                acc.as_()
            }
        }
    )*};
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn mul_wide(self, rhs: Self) -> f64 {
                let lhs: f64 = self.as_();
                let rhs: f64 = rhs.as_();
                lhs * rhs
            }

            #[inline]
            fn narrow(acc: f64) -> Self {
                acc.as_()
            }
        }
    )*};
}

impl_scalar_float!(f32, f64);
impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f32_product_is_rounded_before_widening() {
        let x = 1.000_000_1_f32;
        let expected = (x * x) as f64;
        assert_eq!(x.mul_wide(x), expected);
        assert_ne!(x.mul_wide(x), (x as f64) * (x as f64));
    }

    #[test]
    fn narrow_integers_do_not_overflow() {
        assert_eq!(200u8.mul_wide(200), 40_000.0);
        assert_eq!(i8::MIN.mul_wide(i8::MIN), 16_384.0);
    }

    #[test]
    fn wide_integers_round_before_multiplying() {
        let big: i64 = (1 << 53) + 1;
        // big rounds to 2^53 first; the exact product would round to ...980.
        assert_eq!(big.mul_wide(3), 27_021_597_764_222_976.0);
        assert_ne!(big.mul_wide(3), (big * 3) as f64);
    }

    #[test]
    fn narrow_truncates_and_saturates() {
        assert_eq!(i32::narrow(2.9), 2);
        assert_eq!(i32::narrow(-2.9), -2);
        assert_eq!(u8::narrow(300.0), 255);
        assert_eq!(u8::narrow(-1.0), 0);
        assert_eq!(i64::narrow(f64::NAN), 0);
        assert_eq!(f32::narrow(0.5), 0.5);
    }
}
