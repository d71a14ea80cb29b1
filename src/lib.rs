//! `numeric-sequence` is a small library around [`types::NumericSequence`]: an owned, ordered
//! list of floating-point [`types::Scalar`]s with summary statistics, linear min-max scaling,
//! and delimited-text persistence.
//!
//! ## What a sequence can do
//!
//! - **Construct / copy**: empty, sized, filled, from slices/vectors/iterators, or by
//!   concatenating equally long rows with [`types::NumericSequence::from_sequences`].
//! - **Statistics**: `min_value`, `max_value`, `min_max`, `mean`, and the sample (`n - 1`)
//!   `std_dev`. All fail on an empty sequence and on NaN/infinite values.
//! - **Scaling**: `scale` (from the data's own range) and `scale_from` (from a caller range),
//!   optionally clamped. A failed scale leaves the data untouched.
//! - **Persistence**: `save` / `load` of headerless, separator-delimited text, plus `print`.
//!
//! The scalar type is `f64`; enable the `f32` cargo feature for 32-bit values.
//!
//! ## Quick example
//!
//! ```rust
//! use numeric_sequence::types::{MinMax, NumericSequence};
//!
//! let mut seq = NumericSequence::from([1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(seq.min_max().unwrap(), MinMax::new(1.0, 4.0));
//! assert_eq!(seq.mean().unwrap(), 2.5);
//!
//! seq.scale(0.0, 1.0, false).unwrap();
//! assert_eq!(seq[0], 0.0);
//! assert_eq!(seq[3], 1.0);
//!
//! // A source range of zero width cannot be mapped.
//! assert!(seq.scale_from(2.0, 2.0, 0.0, 1.0, false).is_err());
//! ```
//!
//! ## Save and load
//!
//! ```no_run
//! use numeric_sequence::persistence::CsvOptions;
//! use numeric_sequence::types::NumericSequence;
//!
//! # fn main() -> Result<(), numeric_sequence::SequenceError> {
//! let seq = NumericSequence::from([0.5, 1.5, 2.5]);
//! seq.save("values.csv")?;
//!
//! let mut back = NumericSequence::new();
//! let shape = back.load("values.csv")?;
//! assert_eq!(back, seq);
//! assert_eq!((shape.rows, shape.cols), (3, 1));
//!
//! // Tab separated input.
//! back.load_with("matrix.tsv", &CsvOptions::with_separator(b'\t'))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: `Scalar`, `MinMax`, `Shape`, `NumericSequence`
//! - [`processing`]: statistics, scaling, batch scaling
//! - [`persistence`]: save/load/print and their options
//! - [`observability`]: observer hooks for save, load, and batch scaling
//! - [`error`]: error types used across the crate

pub mod error;
pub mod observability;
pub mod persistence;
pub mod processing;
pub mod types;

pub use error::{SequenceError, SequenceResult};
pub use types::{MinMax, NumericSequence, Scalar, Shape};
