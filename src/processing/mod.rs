//! In-memory numeric operations on [`crate::types::NumericSequence`].
//!
//! - [`stats`]: min / max / mean / standard deviation (methods on `NumericSequence`)
//! - [`scale`]: in-place linear min-max scaling and the reusable [`LinearMap`]
//! - [`batch`]: scaling a batch of sequences against one shared range
//!
//! ## Example: statistics, then scale into `[0, 1]`
//!
//! ```rust
//! use numeric_sequence::types::NumericSequence;
//!
//! let mut seq = NumericSequence::from([1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(seq.min_value().unwrap(), 1.0);
//! assert_eq!(seq.mean().unwrap(), 2.5);
//!
//! seq.scale(0.0, 1.0, true).unwrap();
//! assert_eq!(seq[0], 0.0);
//! assert_eq!(seq[3], 1.0);
//! ```

pub mod batch;
pub mod scale;
pub mod stats;

pub use batch::{scale_all, scale_all_with, ScaleOptions};
pub use scale::LinearMap;
