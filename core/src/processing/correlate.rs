use crate::math::dot::{dot, Sample};
use crate::prelude::{CorrelationError, CorrelationResult};
use log::{debug, trace};
use num_traits::One;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Zero elements added to each side of the input in [`Padding::Same`] mode.
///
/// Fixed regardless of kernel length, so `Same` only preserves the input
/// length for three-tap kernels.
pub const SAME_PAD_WIDTH: usize = 1;

/// How the input is extended before the kernel slides over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Padding {
    /// One zero prepended and one appended.
    #[default]
    Same,
    /// No extension; only windows fully inside the input.
    Valid,
}

impl Padding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Padding::Same => "same",
            Padding::Valid => "valid",
        }
    }

    /// Total number of zeros added around an input of any length.
    pub fn added_len(&self) -> usize {
        match self {
            Padding::Same => 2 * SAME_PAD_WIDTH,
            Padding::Valid => 0,
        }
    }

    fn extend<'a, T: Sample>(&self, sequence: &'a [T]) -> Cow<'a, [T]> {
        match self {
            Padding::Valid => Cow::Borrowed(sequence),
            Padding::Same => {
                let mut extended = Vec::with_capacity(sequence.len() + self.added_len());
                extended.extend(std::iter::repeat(T::zero()).take(SAME_PAD_WIDTH));
                extended.extend_from_slice(sequence);
                extended.extend(std::iter::repeat(T::zero()).take(SAME_PAD_WIDTH));
                Cow::Owned(extended)
            }
        }
    }
}

/// Accepts exactly `"same"` or `"valid"`; other spellings are rejected.
impl FromStr for Padding {
    type Err = CorrelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "same" => Ok(Padding::Same),
            "valid" => Ok(Padding::Valid),
            _ => Err(CorrelationError::InvalidPaddingMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for Padding {
    type Error = CorrelationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of values [`correlate`] yields for an input of length `n` and a
/// kernel of length `k`.
pub fn output_len(n: usize, k: usize, padding: Padding) -> usize {
    if k == 0 {
        return 0;
    }
    (n + padding.added_len()).saturating_sub(k - 1)
}

/// Cross-correlates `sequence` with `kernel`.
///
/// Each output value is the dot product of the kernel with one window of the
/// (optionally zero-extended) input; the kernel is applied as given, never
/// reversed. An input shorter than the kernel yields an empty result.
pub fn correlate<T: Sample>(
    sequence: &[T],
    kernel: &[T],
    padding: Padding,
) -> CorrelationResult<Vec<T>> {
    if kernel.is_empty() {
        return Err(CorrelationError::EmptyKernel);
    }

    let extended = padding.extend(sequence);
    trace!(
        "correlate n={} k={} padding={} extended={}",
        sequence.len(),
        kernel.len(),
        padding,
        extended.len()
    );

    if extended.len() < kernel.len() {
        debug!(
            "input of {} samples shorter than {}-tap kernel, returning empty output",
            extended.len(),
            kernel.len()
        );
        return Ok(Vec::new());
    }

    Ok(extended
        .windows(kernel.len())
        .map(|window| dot(window, kernel))
        .collect())
}

/// [`correlate`] with the padding mode given by name (`"same"` or `"valid"`).
pub fn correlate_with_mode<T: Sample>(
    sequence: &[T],
    kernel: &[T],
    mode: &str,
) -> CorrelationResult<Vec<T>> {
    let padding: Padding = mode.parse()?;
    correlate(sequence, kernel, padding)
}

/// Kernel and padding mode bundled after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossCorrelator<T> {
    kernel: Vec<T>,
    padding: Padding,
}

impl<T: Sample> CrossCorrelator<T> {
    pub fn new(kernel: Vec<T>, padding: Padding) -> CorrelationResult<Self> {
        if kernel.is_empty() {
            return Err(CorrelationError::EmptyKernel);
        }
        Ok(Self { kernel, padding })
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn kernel(&self) -> &[T] {
        &self.kernel
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn output_len(&self, n: usize) -> usize {
        output_len(n, self.kernel.len(), self.padding)
    }

    pub fn correlate(&self, sequence: &[T]) -> CorrelationResult<Vec<T>> {
        correlate(sequence, &self.kernel, self.padding)
    }
}

/// Three unit weights with `Same` padding: a plain neighbourhood sum.
impl<T: Sample + One> Default for CrossCorrelator<T> {
    fn default() -> Self {
        Self {
            kernel: vec![T::one(); 3],
            padding: Padding::Same,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn same_padding_sums_three_cell_neighbourhoods() {
        let output = correlate(&[1.0, 2.0, 3.0, 4.0], &[1.0, 1.0, 1.0], Padding::Same).unwrap();
        assert_eq!(output, vec![3.0, 6.0, 9.0, 7.0]);
    }

    #[test]
    fn valid_padding_keeps_interior_windows_only() {
        let output = correlate(&[1.0, 2.0, 3.0, 4.0], &[1.0, 1.0, 1.0], Padding::Valid).unwrap();
        assert_eq!(output, vec![6.0, 9.0]);
    }

    #[test]
    fn kernel_is_not_reversed() {
        let output = correlate(&[1, 2, 3], &[1, 0, 0], Padding::Valid).unwrap();
        assert_eq!(output, vec![1]);
        let output = correlate(&[1, 2, 3], &[0, 0, 1], Padding::Valid).unwrap();
        assert_eq!(output, vec![3]);
    }

    #[test]
    fn unit_kernel_is_identity_without_padding() {
        let input = [0.5, -1.25, 3.0, 8.0];
        let output = correlate(&input, &[1.0], Padding::Valid).unwrap();
        assert_eq!(output, input.to_vec());
    }

    #[test]
    fn padding_is_one_zero_per_side_for_any_kernel() {
        let output = correlate(&[1, 2, 3], &[1], Padding::Same).unwrap();
        assert_eq!(output, vec![0, 1, 2, 3, 0]);

        let output = correlate(&[1, 2, 3, 4], &[1, 1, 1, 1, 1], Padding::Same).unwrap();
        assert_eq!(output, vec![10, 10]);
    }

    #[test]
    fn empty_input_without_padding_yields_empty_output() {
        let empty: [f64; 0] = [];
        assert!(correlate(&empty, &[1.0], Padding::Valid).unwrap().is_empty());
        assert!(correlate(&empty, &[1.0, 2.0, 3.0], Padding::Valid)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn empty_input_with_same_padding_sees_only_zeros() {
        let empty: [i32; 0] = [];
        assert_eq!(correlate(&empty, &[1, 1], Padding::Same).unwrap(), vec![0]);
        assert!(correlate(&empty, &[1, 1, 1], Padding::Same)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn input_shorter_than_kernel_returns_empty() {
        let output = correlate(&[1.0, 2.0], &[1.0, 1.0, 1.0], Padding::Valid).unwrap();
        assert!(output.is_empty());
        let output = correlate(&[1.0], &[1.0; 4], Padding::Same).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn empty_kernel_is_rejected() {
        let empty: [f64; 0] = [];
        for padding in [Padding::Same, Padding::Valid] {
            assert_eq!(
                correlate(&[1.0, 2.0], &empty, padding),
                Err(CorrelationError::EmptyKernel)
            );
            assert_eq!(
                correlate(&empty, &empty, padding),
                Err(CorrelationError::EmptyKernel)
            );
        }
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = correlate_with_mode(&[1.0, 2.0], &[1.0], "full").unwrap_err();
        assert_eq!(err, CorrelationError::InvalidPaddingMode("full".into()));
    }

    #[test]
    fn mode_names_must_match_exactly() {
        assert_eq!("same".parse::<Padding>().unwrap(), Padding::Same);
        assert_eq!("valid".parse::<Padding>().unwrap(), Padding::Valid);
        for mode in ["SAME", " same", "Valid", "valid ", ""] {
            assert_eq!(
                mode.parse::<Padding>(),
                Err(CorrelationError::InvalidPaddingMode(mode.to_string()))
            );
        }
        assert_eq!(
            correlate_with_mode(&[1, 2, 3, 4], &[1, 1, 1], "valid").unwrap(),
            vec![6, 9]
        );
    }

    #[test]
    fn padding_round_trips_through_serde_as_lowercase() {
        assert_eq!(serde_json::to_string(&Padding::Valid).unwrap(), "\"valid\"");
        let parsed: Padding = serde_json::from_str("\"same\"").unwrap();
        assert_eq!(parsed, Padding::Same);
        assert!(serde_json::from_str::<Padding>("\"full\"").is_err());
    }

    #[test]
    fn wrapping_integers_wrap_instead_of_overflowing() {
        use std::num::Wrapping;

        let input = [Wrapping(i32::MAX), Wrapping(1)];
        let output = correlate(&input, &[Wrapping(2)], Padding::Valid).unwrap();
        assert_eq!(output, vec![Wrapping(-2), Wrapping(2)]);
    }

    #[test]
    fn inputs_are_left_untouched() {
        let input = vec![1.0, 2.0, 3.0];
        let kernel = vec![0.5, 0.25];
        let _ = correlate(&input, &kernel, Padding::Same).unwrap();
        assert_eq!(input, vec![1.0, 2.0, 3.0]);
        assert_eq!(kernel, vec![0.5, 0.25]);
    }

    #[test]
    fn output_lengths_follow_padding_rule() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let n: usize = rng.gen_range(0..32);
            let k: usize = rng.gen_range(1..8);
            let input: Vec<f64> = (0..n).map(|_| rng.gen_range(-4.0..4.0)).collect();
            let kernel: Vec<f64> = (0..k).map(|_| rng.gen_range(-1.0..1.0)).collect();

            let valid = correlate(&input, &kernel, Padding::Valid).unwrap();
            assert_eq!(valid.len(), n.saturating_sub(k - 1));
            assert_eq!(valid.len(), output_len(n, k, Padding::Valid));

            let same = correlate(&input, &kernel, Padding::Same).unwrap();
            assert_eq!(same.len(), (n + 2).saturating_sub(k - 1));
            if k == 3 {
                assert_eq!(same.len(), n);
            }
        }
    }

    #[test]
    fn default_correlator_is_three_unit_weights_with_same_padding() {
        let correlator = CrossCorrelator::<i64>::default();
        assert_eq!(correlator.kernel(), &[1, 1, 1]);
        assert_eq!(correlator.padding(), Padding::Same);
        assert_eq!(correlator.correlate(&[0, 1, 1, 0, 1]).unwrap(), vec![1, 2, 2, 2, 1]);
        assert_eq!(correlator.output_len(5), 5);
    }

    #[test]
    fn correlator_rejects_empty_kernel_up_front() {
        assert_eq!(
            CrossCorrelator::<f32>::new(Vec::new(), Padding::Valid),
            Err(CorrelationError::EmptyKernel)
        );
    }

    #[test]
    fn correlator_padding_can_be_swapped() {
        let correlator = CrossCorrelator::new(vec![1.0, -1.0], Padding::Same)
            .unwrap()
            .with_padding(Padding::Valid);
        assert_eq!(correlator.correlate(&[3.0, 1.0, 4.0]).unwrap(), vec![2.0, -3.0]);
        assert_eq!(correlator.output_len(3), 2);
    }
}
