//! Linear (min-max) scaling for [`crate::types::NumericSequence`].

use crate::error::{SequenceError, SequenceResult};
use crate::types::{MinMax, NumericSequence, Scalar};

use super::stats::require_finite;

/// An affine map from a source range onto a target range.
///
/// `out = target.min + (x - source.min) / (source.max - source.min) * (target.max - target.min)`
///
/// When `constrain` is set, the result is clamped to the (ordered) target range afterwards.
/// Construction validates both ranges; [`LinearMap::map_all`] also rejects mapped values that
/// overflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMap {
    source: MinMax,
    target: MinMax,
    constrain: bool,
}

impl LinearMap {
    /// Build a map from `source` onto `target`.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::InvalidRange`] if a bound (or a range width) is not finite.
    /// - [`SequenceError::DegenerateRange`] if `source` has zero width.
    pub fn new(source: MinMax, target: MinMax, constrain: bool) -> SequenceResult<Self> {
        for range in [source, target] {
            if !range.is_finite() || !range.width().is_finite() {
                return Err(SequenceError::InvalidRange {
                    min: range.min_value,
                    max: range.max_value,
                });
            }
        }
        if source.is_degenerate() {
            return Err(SequenceError::DegenerateRange {
                min: source.min_value,
                max: source.max_value,
            });
        }

        Ok(Self {
            source,
            target,
            constrain,
        })
    }

    /// Range that input values are mapped from.
    pub fn source(&self) -> MinMax {
        self.source
    }

    /// Range that input values are mapped onto.
    pub fn target(&self) -> MinMax {
        self.target
    }

    /// Map a single value.
    ///
    /// The result can still overflow for extreme ranges; [`LinearMap::map_all`] checks for that.
    pub fn apply(&self, x: Scalar) -> Scalar {
        // Identical ranges map every value onto itself; skip the arithmetic so values stay exact.
        let mapped = if self.source == self.target {
            x
        } else {
            // Dividing first keeps the intermediate within the magnitude of the inputs.
            let t = (x - self.source.min_value) / self.source.width();
            self.target.min_value + t * self.target.width()
        };

        if self.constrain {
            self.target.clamp(mapped)
        } else {
            mapped
        }
    }

    /// Map every value of `values` into a new vector.
    ///
    /// # Errors
    ///
    /// [`SequenceError::NonFiniteValue`] with the offending mapped value if any result overflows.
    pub fn map_all(&self, values: &[Scalar]) -> SequenceResult<Vec<Scalar>> {
        values
            .iter()
            .enumerate()
            .map(|(index, &x)| {
                let value = self.apply(x);
                if value.is_finite() {
                    Ok(value)
                } else {
                    Err(SequenceError::NonFiniteValue { index, value })
                }
            })
            .collect()
    }
}

impl NumericSequence {
    /// Rescale the sequence in place from its own `[min_value, max_value]` onto
    /// `[min_target, max_target]`.
    ///
    /// On error the sequence is left unchanged.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::EmptySequence`] if the sequence is empty.
    /// - [`SequenceError::DegenerateRange`] if all values are equal.
    /// - [`SequenceError::NonFiniteValue`] if any value is NaN or infinite.
    /// - [`SequenceError::InvalidRange`] if a target bound is not finite.
    /// - [`SequenceError::NonFiniteValue`] if a mapped value overflows.
    pub fn scale(
        &mut self,
        min_target: Scalar,
        max_target: Scalar,
        constrain: bool,
    ) -> SequenceResult<()> {
        let source = self.min_max()?;
        self.scale_from(
            source.min_value,
            source.max_value,
            min_target,
            max_target,
            constrain,
        )
    }

    /// Rescale the sequence in place from the caller-supplied `[min_source, max_source]` onto
    /// `[min_target, max_target]`.
    ///
    /// Useful to scale several sequences against one shared reference range. Values outside the
    /// source range map outside the target range unless `constrain` is set.
    ///
    /// On error the sequence is left unchanged: every value is mapped and checked before the
    /// sequence is overwritten.
    pub fn scale_from(
        &mut self,
        min_source: Scalar,
        max_source: Scalar,
        min_target: Scalar,
        max_target: Scalar,
        constrain: bool,
    ) -> SequenceResult<()> {
        require_finite(self.as_slice(), "scale")?;
        let map = LinearMap::new(
            MinMax::new(min_source, max_source),
            MinMax::new(min_target, max_target),
            constrain,
        )?;
        let mapped = map.map_all(self.as_slice())?;
        self.as_mut_slice().copy_from_slice(&mapped);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::LinearMap;
    use crate::error::SequenceError;
    use crate::types::{MinMax, NumericSequence, Scalar};

    fn assert_close(actual: &[Scalar], expected: &[Scalar]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-5, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn scale_from_own_range_to_unit_interval() {
        let mut seq = NumericSequence::from([1.0, 2.0, 3.0, 4.0]);
        seq.scale(0.0, 1.0, false).unwrap();
        assert_close(seq.as_slice(), &[0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0]);
    }

    #[test]
    fn scale_onto_reversed_target_flips_order() {
        let mut seq = NumericSequence::from([0.0, 5.0, 10.0]);
        seq.scale(1.0, -1.0, false).unwrap();
        assert_close(seq.as_slice(), &[1.0, 0.0, -1.0]);
    }

    #[test]
    fn scale_from_identity_range_leaves_values_unchanged() {
        let original = NumericSequence::from([0.1, 0.7, -3.3, 12.25]);
        let mut seq = original.clone();
        seq.scale_from(-5.0, 20.0, -5.0, 20.0, false).unwrap();
        assert_eq!(seq, original);
    }

    #[test]
    fn scale_from_without_constrain_extrapolates() {
        let mut seq = NumericSequence::from([-5.0, 15.0]);
        seq.scale_from(0.0, 10.0, 0.0, 1.0, false).unwrap();
        assert_close(seq.as_slice(), &[-0.5, 1.5]);
    }

    #[test]
    fn scale_from_with_constrain_clamps_to_target() {
        let mut seq = NumericSequence::from([-5.0, 5.0, 15.0]);
        seq.scale_from(0.0, 10.0, 0.0, 1.0, true).unwrap();
        assert_close(seq.as_slice(), &[0.0, 0.5, 1.0]);
    }

    #[test]
    fn degenerate_source_range_fails_without_modifying() {
        let mut seq = NumericSequence::from([1.0, 2.0]);
        let err = seq.scale_from(3.0, 3.0, 0.0, 1.0, false).unwrap_err();
        assert!(matches!(err, SequenceError::DegenerateRange { .. }));
        assert_eq!(seq.as_slice(), &[1.0, 2.0]);

        let mut constant = NumericSequence::filled(3, 7.0);
        let err = constant.scale(0.0, 1.0, true).unwrap_err();
        assert!(matches!(err, SequenceError::DegenerateRange { .. }));
        assert_eq!(constant.as_slice(), &[7.0, 7.0, 7.0]);
    }

    #[test]
    fn scaling_an_empty_sequence_fails() {
        let mut seq = NumericSequence::new();
        assert!(matches!(
            seq.scale(0.0, 1.0, false),
            Err(SequenceError::EmptySequence { .. })
        ));
        assert!(matches!(
            seq.scale_from(0.0, 1.0, 0.0, 1.0, false),
            Err(SequenceError::EmptySequence { .. })
        ));
    }

    #[test]
    fn non_finite_inputs_fail_without_modifying() {
        let mut seq = NumericSequence::from([1.0, Scalar::NAN]);
        assert!(matches!(
            seq.scale_from(0.0, 1.0, 0.0, 1.0, false),
            Err(SequenceError::NonFiniteValue { index: 1, .. })
        ));
        assert_eq!(seq[0], 1.0);

        let mut seq = NumericSequence::from([1.0, 2.0]);
        assert!(matches!(
            seq.scale(0.0, Scalar::INFINITY, false),
            Err(SequenceError::InvalidRange { .. })
        ));
        assert_eq!(seq.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn large_finite_values_scale_without_overflow() {
        let big = Scalar::MAX / 4.0;
        let mut seq = NumericSequence::from([big, 0.0]);
        seq.scale_from(0.0, big, 0.0, big / 10.0, false).unwrap();
        assert_eq!(seq.as_slice(), &[big / 10.0, 0.0]);
    }

    #[test]
    fn overflowing_result_fails_without_modifying() {
        let mut seq = NumericSequence::from([0.0, 1.0]);
        let err = seq
            .scale_from(0.0, Scalar::MIN_POSITIVE, 0.0, Scalar::MAX, false)
            .unwrap_err();
        assert!(matches!(err, SequenceError::NonFiniteValue { index: 1, .. }));
        assert_eq!(seq.as_slice(), &[0.0, 1.0]);
    }

    #[test]
    fn linear_map_exposes_its_ranges() {
        let map = LinearMap::new(MinMax::new(0.0, 2.0), MinMax::new(1.0, 0.0), true).unwrap();
        assert_eq!(map.source(), MinMax::new(0.0, 2.0));
        assert_eq!(map.target(), MinMax::new(1.0, 0.0));
        assert_eq!(map.apply(1.0), 0.5);
        assert_eq!(map.apply(5.0), 0.0);
    }

    #[test]
    fn linear_map_rejects_overflowing_width() {
        let err = LinearMap::new(
            MinMax::new(Scalar::MIN, Scalar::MAX),
            MinMax::new(0.0, 1.0),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, SequenceError::InvalidRange { .. }));
    }
}
