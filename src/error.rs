use thiserror::Error;

use crate::types::Scalar;

/// Convenience result type for sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Error type returned by sequence operations.
///
/// This is a single error enum shared across construction, statistics, scaling, and persistence.
#[derive(Debug, Error)]
pub enum SequenceError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised by the CSV reader/writer.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The operation needs at least one value.
    #[error("{operation} requires a non-empty sequence")]
    EmptySequence { operation: &'static str },

    /// The operation needs more values than the sequence holds.
    #[error("need at least {required} values, found {found}")]
    InsufficientData { required: usize, found: usize },

    /// `from_sequences` was given no sequences at all.
    #[error("cannot build a sequence from an empty collection")]
    EmptyCollection,

    /// A file was read successfully but contained no data rows.
    #[error("input contains no data rows")]
    EmptyInput,

    /// A scaling source range has zero width.
    #[error("degenerate range: min ({min}) equals max ({max})")]
    DegenerateRange { min: Scalar, max: Scalar },

    /// A range bound is NaN or infinite.
    #[error("invalid range: [{min}, {max}] must have finite bounds")]
    InvalidRange { min: Scalar, max: Scalar },

    /// A statistic is mathematically defined but too large for [`Scalar`].
    #[error("{operation} overflows the scalar range")]
    Overflow { operation: &'static str },

    /// A NaN or infinite element was found where finite values are required.
    #[error("non-finite value {value} at index {index}")]
    NonFiniteValue { index: usize, value: Scalar },

    /// Rows do not all have the same number of fields.
    #[error("row {row} has {found} fields, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A field could not be parsed as a number.
    #[error("failed to parse value at row {row} column {column}: {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: usize,
        raw: String,
        message: String,
    },

    /// The requested write layout cannot be applied to the sequence.
    #[error("invalid layout: {message}")]
    InvalidLayout { message: String },
}
