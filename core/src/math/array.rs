use crate::math::dot::Sample;
use crate::prelude::CorrelationResult;
use crate::processing::correlate::{correlate, Padding};
use ndarray::{Array1, ArrayView1};
use std::borrow::Cow;

fn contiguous<'a, 'v, T: Sample>(view: &'a ArrayView1<'v, T>) -> Cow<'a, [T]> {
    match view.as_slice() {
        Some(slice) => Cow::Borrowed(slice),
        None => Cow::Owned(view.to_vec()),
    }
}

/// Cross-correlates `ndarray` vectors; strided views are copied first.
pub fn correlate_array<T: Sample>(
    sequence: ArrayView1<T>,
    kernel: ArrayView1<T>,
    padding: Padding,
) -> CorrelationResult<Array1<T>> {
    let values = correlate(&contiguous(&sequence), &contiguous(&kernel), padding)?;
    Ok(Array1::from(values))
}
