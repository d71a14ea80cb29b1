//! Persistence and rendering of [`crate::types::NumericSequence`].
//!
//! Most callers should use the methods added to `NumericSequence` here:
//!
//! - [`NumericSequence::save`] / [`NumericSequence::save_with`] (from [`file`])
//! - [`NumericSequence::load`] / [`NumericSequence::load_with`] (from [`file`])
//! - [`NumericSequence::print`] / [`NumericSequence::write_pretty`] (from [`print`])
//!
//! Reader/writer-level functions live under [`csv`]. Outcomes are reported through
//! [`crate::observability`].
//!
//! [`NumericSequence::save`]: crate::types::NumericSequence::save
//! [`NumericSequence::save_with`]: crate::types::NumericSequence::save_with
//! [`NumericSequence::load`]: crate::types::NumericSequence::load
//! [`NumericSequence::load_with`]: crate::types::NumericSequence::load_with
//! [`NumericSequence::print`]: crate::types::NumericSequence::print
//! [`NumericSequence::write_pretty`]: crate::types::NumericSequence::write_pretty

pub mod csv;
pub mod file;
pub mod print;

pub use self::csv::{read_csv_from_path, read_csv_from_reader, write_csv_to_writer, RowLayout};
pub use file::{load_from_path, save_to_path, CsvOptions};
pub use crate::observability::{
    SequenceContext, SequenceObserver, SequenceOp, SequenceSeverity, SequenceStats,
    StdErrObserver,
};
