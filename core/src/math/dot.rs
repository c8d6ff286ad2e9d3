use num_traits::Zero;
use std::ops::Mul;

/// Numeric element accepted by the correlation routines.
///
/// Anything copyable with an additive zero and a multiplication qualifies, so
/// integer sequences stay integral and floats accumulate in their own width.
///
/// Plain integer types use ordinary arithmetic: a product or running sum that
/// overflows panics in debug builds and wraps in release builds. Use
/// `std::num::Wrapping<_>` elements for defined wrap-around, or a wider type.
pub trait Sample: Copy + Zero + Mul<Output = Self> {}

impl<T> Sample for T where T: Copy + Zero + Mul<Output = T> {}

/// Multiply-accumulate of `window` against `kernel`, in index order.
///
/// Both slices are expected to have the same length; extra elements on the
/// longer side are ignored.
pub fn dot<T: Sample>(window: &[T], kernel: &[T]) -> T {
    window
        .iter()
        .zip(kernel)
        .fold(T::zero(), |acc, (&x, &w)| acc + x * w)
}
