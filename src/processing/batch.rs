//! Scaling many sequences against one shared reference range.
//!
//! Every sequence is mapped and checked in parallel on the global rayon pool before any of them
//! is overwritten, so a failing batch leaves all sequences untouched.

use std::fmt;
use std::sync::Arc;

use rayon::prelude::*;

use crate::error::{SequenceError, SequenceResult};
use crate::observability::{
    notify, SequenceContext, SequenceObserver, SequenceOp, SequenceSeverity, SequenceStats,
};
use crate::types::{MinMax, NumericSequence};

use super::scale::LinearMap;
use super::stats::require_finite;

/// Options for [`scale_all_with`].
#[derive(Clone)]
pub struct ScaleOptions {
    /// Clamp mapped values into the target range.
    pub constrain: bool,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn SequenceObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: SequenceSeverity,
}

impl fmt::Debug for ScaleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaleOptions")
            .field("constrain", &self.constrain)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            constrain: false,
            observer: None,
            alert_at_or_above: SequenceSeverity::Critical,
        }
    }
}

impl MinMax {
    /// The smallest range covering every value of every sequence.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::EmptyCollection`] if `sequences` is empty.
    /// - Any error of [`NumericSequence::min_max`] for an individual sequence.
    pub fn combined(sequences: &[NumericSequence]) -> SequenceResult<MinMax> {
        if sequences.is_empty() {
            return Err(SequenceError::EmptyCollection);
        }

        let ranges = sequences
            .par_iter()
            .map(NumericSequence::min_max)
            .collect::<SequenceResult<Vec<_>>>()?;

        let mut combined = MinMax::empty();
        for r in ranges {
            combined.update(r.min_value);
            combined.update(r.max_value);
        }
        Ok(combined)
    }
}

/// Scale every sequence from `source` onto `target`, all-or-nothing.
///
/// Pass [`MinMax::combined`] as `source` to scale a batch consistently by its shared extrema.
///
/// # Errors
///
/// Fails with the same errors as [`NumericSequence::scale_from`] for the first offending
/// sequence; in that case no sequence has been modified.
pub fn scale_all(
    sequences: &mut [NumericSequence],
    source: MinMax,
    target: MinMax,
    constrain: bool,
) -> SequenceResult<()> {
    let options = ScaleOptions {
        constrain,
        ..Default::default()
    };
    scale_all_with(sequences, source, target, &options)
}

/// [`scale_all`] with explicit options; the outcome is reported to `options.observer`.
pub fn scale_all_with(
    sequences: &mut [NumericSequence],
    source: MinMax,
    target: MinMax,
    options: &ScaleOptions,
) -> SequenceResult<()> {
    let result = scale_batch(sequences, source, target, options.constrain);
    let ctx = SequenceContext {
        operation: SequenceOp::Scale,
        path: None,
    };
    notify(
        options.observer.as_ref(),
        options.alert_at_or_above,
        &ctx,
        result.as_ref().map(|&values| SequenceStats {
            values,
            shape: None,
        }),
    );
    result.map(|_| ())
}

/// Returns the number of values scaled.
fn scale_batch(
    sequences: &mut [NumericSequence],
    source: MinMax,
    target: MinMax,
    constrain: bool,
) -> SequenceResult<usize> {
    let map = LinearMap::new(source, target, constrain)?;
    let mapped = sequences
        .par_iter()
        .map(|seq| {
            let values = require_finite(seq.as_slice(), "scale")?;
            map.map_all(values)
        })
        .collect::<SequenceResult<Vec<_>>>()?;

    sequences
        .par_iter_mut()
        .zip(mapped)
        .for_each(|(seq, values)| seq.as_mut_slice().copy_from_slice(&values));
    Ok(sequences.iter().map(NumericSequence::len).sum())
}

#[cfg(test)]
mod tests {
    use super::scale_all;
    use crate::error::SequenceError;
    use crate::types::{MinMax, NumericSequence, Scalar};

    #[test]
    fn combined_range_spans_all_sequences() {
        let batch = vec![
            NumericSequence::from([1.0, 5.0]),
            NumericSequence::from([-2.0, 3.0]),
            NumericSequence::from([4.0]),
        ];
        assert_eq!(MinMax::combined(&batch).unwrap(), MinMax::new(-2.0, 5.0));
    }

    #[test]
    fn combined_rejects_empty_batch() {
        assert!(matches!(
            MinMax::combined(&[]),
            Err(SequenceError::EmptyCollection)
        ));
    }

    #[test]
    fn scale_all_uses_one_shared_range() {
        let mut batch = vec![
            NumericSequence::from([0.0, 5.0]),
            NumericSequence::from([10.0]),
        ];
        let source = MinMax::combined(&batch).unwrap();
        scale_all(&mut batch, source, MinMax::new(0.0, 1.0), false).unwrap();

        assert_eq!(batch[0].as_slice(), &[0.0, 0.5]);
        assert_eq!(batch[1].as_slice(), &[1.0]);
    }

    #[test]
    fn scale_all_leaves_batch_untouched_on_error() {
        let mut batch = vec![
            NumericSequence::from([0.0, 5.0]),
            NumericSequence::from([Scalar::NAN]),
        ];
        let err = scale_all(
            &mut batch,
            MinMax::new(0.0, 10.0),
            MinMax::new(0.0, 1.0),
            false,
        )
        .unwrap_err();

        assert!(matches!(err, SequenceError::NonFiniteValue { .. }));
        assert_eq!(batch[0].as_slice(), &[0.0, 5.0]);
    }

    #[test]
    fn overflow_in_one_sequence_leaves_batch_untouched() {
        let mut batch = vec![
            NumericSequence::from([0.0, 0.5]),
            NumericSequence::from([1.0]),
        ];
        let err = scale_all(
            &mut batch,
            MinMax::new(0.0, Scalar::MIN_POSITIVE),
            MinMax::new(0.0, Scalar::MAX),
            false,
        )
        .unwrap_err();

        assert!(matches!(err, SequenceError::NonFiniteValue { .. }));
        assert_eq!(batch[0].as_slice(), &[0.0, 0.5]);
        assert_eq!(batch[1].as_slice(), &[1.0]);
    }
}
