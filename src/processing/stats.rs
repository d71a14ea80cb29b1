//! Summary statistics for [`crate::types::NumericSequence`].
//!
//! Every statistic fails on an empty sequence instead of returning a default value, and rejects
//! NaN/infinite elements with [`SequenceError::NonFiniteValue`].

use crate::error::{SequenceError, SequenceResult};
use crate::types::{MinMax, NumericSequence, Scalar};

impl NumericSequence {
    /// Smallest value in the sequence.
    pub fn min_value(&self) -> SequenceResult<Scalar> {
        self.min_max().map(|r| r.min_value)
    }

    /// Largest value in the sequence.
    pub fn max_value(&self) -> SequenceResult<Scalar> {
        self.min_max().map(|r| r.max_value)
    }

    /// Smallest and largest value, computed in a single pass.
    ///
    /// [`Self::min_value`] and [`Self::max_value`] are derived from this, so the three always
    /// agree on the same data.
    pub fn min_max(&self) -> SequenceResult<MinMax> {
        let values = require_finite(self.as_slice(), "min/max")?;
        Ok(range_of(values))
    }

    /// Arithmetic mean (`sum / len`).
    ///
    /// Values are summed after dividing by a power of two near the largest magnitude, so the sum
    /// cannot overflow for finite input. The result is kept inside `[min_value, max_value]`;
    /// summation rounding can otherwise push the mean of near-constant data just past the extrema.
    pub fn mean(&self) -> SequenceResult<Scalar> {
        let values = require_finite(self.as_slice(), "mean")?;
        let range = range_of(values);
        let scale = magnitude_scale(range);
        let scaled_sum: Scalar = values.iter().map(|x| x / scale).sum();
        let mean = scaled_sum / values.len() as Scalar * scale;
        Ok(range.clamp(mean))
    }

    /// Sample standard deviation, `sqrt(sum((x - mean)^2) / (len - 1))`.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::EmptySequence`] if the sequence is empty.
    /// - [`SequenceError::InsufficientData`] if it holds a single value.
    /// - [`SequenceError::NonFiniteValue`] if any value is NaN or infinite.
    /// - [`SequenceError::Overflow`] if the deviation itself exceeds the scalar range.
    pub fn std_dev(&self) -> SequenceResult<Scalar> {
        let values = require_finite(self.as_slice(), "standard deviation")?;
        if values.len() < 2 {
            return Err(SequenceError::InsufficientData {
                required: 2,
                found: values.len(),
            });
        }

        // Welford's update on magnitude-scaled values: no squared term can overflow.
        let scale = magnitude_scale(range_of(values));
        let mut mean: Scalar = 0.0;
        let mut m2: Scalar = 0.0;
        for (i, x) in values.iter().enumerate() {
            let y = x / scale;
            let delta = y - mean;
            mean += delta / (i + 1) as Scalar;
            m2 += delta * (y - mean);
        }

        let std_dev = (m2 / (values.len() - 1) as Scalar).sqrt() * scale;
        if std_dev.is_finite() {
            Ok(std_dev)
        } else {
            Err(SequenceError::Overflow {
                operation: "standard deviation",
            })
        }
    }
}

/// Returns `values` unchanged if it is non-empty and entirely finite.
pub(crate) fn require_finite<'a>(
    values: &'a [Scalar],
    operation: &'static str,
) -> SequenceResult<&'a [Scalar]> {
    if values.is_empty() {
        return Err(SequenceError::EmptySequence { operation });
    }
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(SequenceError::NonFiniteValue {
            index,
            value: values[index],
        }),
        None => Ok(values),
    }
}

fn range_of(values: &[Scalar]) -> MinMax {
    let mut range = MinMax::empty();
    for &v in values {
        range.update(v);
    }
    range
}

/// Largest power of two not above the biggest magnitude in `range` (1 for all-zero data).
///
/// Dividing by a power of two is exact, so scaling only bounds the intermediate sums.
fn magnitude_scale(range: MinMax) -> Scalar {
    let max_abs = range.min_value.abs().max(range.max_value.abs());
    if max_abs == 0.0 {
        1.0
    } else {
        max_abs.log2().floor().exp2()
    }
}
