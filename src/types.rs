//! Core data model types.
//!
//! The crate is built around [`NumericSequence`], an owned and ordered list of [`Scalar`]s.
//! [`MinMax`] describes an inclusive numeric range and [`Shape`] the rectangular layout that a
//! sequence was loaded from.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::{SequenceError, SequenceResult};

/// Floating-point scalar used throughout the crate.
///
/// 64-bit by default; enable the `f32` cargo feature for 32-bit values.
#[cfg(not(feature = "f32"))]
pub type Scalar = f64;

/// Floating-point scalar used throughout the crate.
///
/// 32-bit because the `f32` cargo feature is enabled.
#[cfg(feature = "f32")]
pub type Scalar = f32;

/// An inclusive numeric range `[min_value, max_value]`.
///
/// Returned by [`NumericSequence::min_max`] and used as the source/target range when scaling.
/// A target range may be reversed (`min_value > max_value`); [`MinMax::lower`] and
/// [`MinMax::upper`] always return the ordered bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinMax {
    /// Lower end of the range.
    pub min_value: Scalar,
    /// Upper end of the range.
    pub max_value: Scalar,
}

impl MinMax {
    /// Create a range from its two ends.
    pub fn new(min_value: Scalar, max_value: Scalar) -> Self {
        Self {
            min_value,
            max_value,
        }
    }

    /// An empty range (`+inf`, `-inf`) that any call to [`MinMax::update`] will replace.
    pub const fn empty() -> Self {
        Self {
            min_value: Scalar::INFINITY,
            max_value: Scalar::NEG_INFINITY,
        }
    }

    /// Widen the range to include `value`.
    ///
    /// Returns `true` if either bound changed.
    pub fn update(&mut self, value: Scalar) -> bool {
        let mut changed = false;
        if value < self.min_value {
            self.min_value = value;
            changed = true;
        }
        if value > self.max_value {
            self.max_value = value;
            changed = true;
        }
        changed
    }

    /// Signed width of the range (`max_value - min_value`).
    pub fn width(&self) -> Scalar {
        self.max_value - self.min_value
    }

    /// Returns `true` if both ends are equal.
    pub fn is_degenerate(&self) -> bool {
        self.min_value == self.max_value
    }

    /// Returns `true` if neither bound is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.min_value.is_finite() && self.max_value.is_finite()
    }

    /// Smaller of the two bounds.
    pub fn lower(&self) -> Scalar {
        self.min_value.min(self.max_value)
    }

    /// Larger of the two bounds.
    pub fn upper(&self) -> Scalar {
        self.min_value.max(self.max_value)
    }

    /// Returns `true` if `value` lies in `[lower(), upper()]`.
    pub fn contains(&self, value: Scalar) -> bool {
        value >= self.lower() && value <= self.upper()
    }

    /// Clamp `value` into `[lower(), upper()]`.
    pub fn clamp(&self, value: Scalar) -> Scalar {
        value.max(self.lower()).min(self.upper())
    }
}

impl From<(Scalar, Scalar)> for MinMax {
    fn from((min_value, max_value): (Scalar, Scalar)) -> Self {
        Self::new(min_value, max_value)
    }
}

impl fmt::Display for MinMax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min_value, self.max_value)
    }
}

/// Rectangular layout of flattened, row-major values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Shape {
    /// Number of rows.
    pub rows: usize,
    /// Number of values per row.
    pub cols: usize,
}

impl Shape {
    /// Total number of values (`rows * cols`).
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns `true` if the shape holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An owned, ordered, resizable sequence of [`Scalar`] values.
///
/// Cloning is always a deep copy; there is no shared storage between instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericSequence {
    values: Vec<Scalar>,
}

impl NumericSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Create a sequence of `len` zeros.
    pub fn with_len(len: usize) -> Self {
        Self::filled(len, 0.0)
    }

    /// Create a sequence of `len` copies of `value`.
    pub fn filled(len: usize, value: Scalar) -> Self {
        Self {
            values: vec![value; len],
        }
    }

    /// Build a sequence by concatenating `rows` in order.
    ///
    /// Every row is copied independently. All rows must have the same length; the returned
    /// [`Shape`] records the row count and that length.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::EmptyCollection`] if `rows` is empty.
    /// - [`SequenceError::RaggedRows`] (1-based `row`) if the rows differ in length.
    pub fn from_sequences(rows: &[NumericSequence]) -> SequenceResult<(Self, Shape)> {
        let first = rows.first().ok_or(SequenceError::EmptyCollection)?;
        let cols = first.len();

        let mut values = Vec::with_capacity(cols * rows.len());
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(SequenceError::RaggedRows {
                    row: idx + 1,
                    expected: cols,
                    found: row.len(),
                });
            }
            values.extend_from_slice(row.as_slice());
        }

        Ok((
            Self { values },
            Shape {
                rows: rows.len(),
                cols,
            },
        ))
    }

    /// Replace the contents with a copy of `values`.
    pub fn assign_from_slice(&mut self, values: &[Scalar]) {
        self.values.clear();
        self.values.extend_from_slice(values);
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the sequence holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[Scalar] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [Scalar] {
        &mut self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.values.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Scalar> {
        self.values.iter_mut()
    }

    /// Returns the value at `index`, if present.
    pub fn get(&self, index: usize) -> Option<Scalar> {
        self.values.get(index).copied()
    }

    /// Append a value.
    pub fn push(&mut self, value: Scalar) {
        self.values.push(value);
    }

    /// Resize to `len` values, filling new slots with `value`.
    pub fn resize(&mut self, len: usize, value: Scalar) {
        self.values.resize(len, value);
    }

    /// Remove all values.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Consume the sequence, returning its storage.
    pub fn into_vec(self) -> Vec<Scalar> {
        self.values
    }
}

impl From<Vec<Scalar>> for NumericSequence {
    fn from(values: Vec<Scalar>) -> Self {
        Self { values }
    }
}

impl From<&[Scalar]> for NumericSequence {
    fn from(values: &[Scalar]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }
}

impl<const N: usize> From<[Scalar; N]> for NumericSequence {
    fn from(values: [Scalar; N]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }
}

impl FromIterator<Scalar> for NumericSequence {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<Scalar> for NumericSequence {
    fn extend<I: IntoIterator<Item = Scalar>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl IntoIterator for NumericSequence {
    type Item = Scalar;
    type IntoIter = std::vec::IntoIter<Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a NumericSequence {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl AsRef<[Scalar]> for NumericSequence {
    fn as_ref(&self) -> &[Scalar] {
        &self.values
    }
}

impl Index<usize> for NumericSequence {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl IndexMut<usize> for NumericSequence {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.values[index]
    }
}

impl fmt::Display for NumericSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::{MinMax, NumericSequence, Shape};
    use crate::error::SequenceError;

    #[test]
    fn constructors_set_length_and_fill() {
        assert!(NumericSequence::new().is_empty());

        let zeros = NumericSequence::with_len(3);
        assert_eq!(zeros.as_slice(), &[0.0, 0.0, 0.0]);

        let filled = NumericSequence::filled(2, 1.5);
        assert_eq!(filled.as_slice(), &[1.5, 1.5]);
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let original = NumericSequence::from([1.0, 2.0, 3.0]);
        let mut copy = original.clone();
        copy[0] = 10.0;

        assert_eq!(original[0], 1.0);
        assert_eq!(copy[0], 10.0);
    }

    #[test]
    fn assign_from_slice_replaces_contents() {
        let mut seq = NumericSequence::filled(5, 9.0);
        seq.assign_from_slice(&[1.0, 2.0]);
        assert_eq!(seq.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn from_sequences_concatenates_rows_in_order() {
        let rows = vec![
            NumericSequence::from([1.0, 2.0]),
            NumericSequence::from([3.0, 4.0]),
            NumericSequence::from([5.0, 6.0]),
        ];
        let (seq, shape) = NumericSequence::from_sequences(&rows).unwrap();

        assert_eq!(seq.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(shape, Shape { rows: 3, cols: 2 });
    }

    #[test]
    fn from_sequences_rejects_empty_collection() {
        let err = NumericSequence::from_sequences(&[]).unwrap_err();
        assert!(matches!(err, SequenceError::EmptyCollection));
    }

    #[test]
    fn from_sequences_rejects_ragged_rows() {
        let rows = vec![
            NumericSequence::from([1.0, 2.0]),
            NumericSequence::from([3.0]),
        ];
        let err = NumericSequence::from_sequences(&rows).unwrap_err();
        assert!(matches!(
            err,
            SequenceError::RaggedRows {
                row: 2,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn from_sequences_of_empty_rows_is_empty_but_ok() {
        let rows = vec![NumericSequence::new(), NumericSequence::new()];
        let (seq, shape) = NumericSequence::from_sequences(&rows).unwrap();
        assert!(seq.is_empty());
        assert_eq!(shape, Shape { rows: 2, cols: 0 });
    }

    #[test]
    fn min_max_update_and_clamp() {
        let mut range = MinMax::empty();
        assert!(range.update(3.0));
        assert!(range.update(-1.0));
        assert!(!range.update(0.0));
        assert_eq!(range, MinMax::new(-1.0, 3.0));

        let reversed = MinMax::new(1.0, 0.0);
        assert_eq!(reversed.lower(), 0.0);
        assert_eq!(reversed.upper(), 1.0);
        assert_eq!(reversed.clamp(2.0), 1.0);
        assert_eq!(reversed.clamp(-2.0), 0.0);
        assert!(reversed.contains(0.5));
    }

    #[test]
    fn display_lists_values() {
        let seq = NumericSequence::from([1.0, 2.5]);
        assert_eq!(seq.to_string(), "[1, 2.5]");
    }
}
