//! Delimited-text reading and writing.
//!
//! Files have no header, no quoting, one row per line, and the same number of numeric fields on
//! every row. Values are flattened in row-major order.

use std::io::{Read, Write};
use std::path::Path;

use crate::error::{SequenceError, SequenceResult};
use crate::types::{NumericSequence, Scalar, Shape};

/// How values are arranged into rows when writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowLayout {
    /// One value per line.
    #[default]
    Column,
    /// Every value on a single line.
    Row,
    /// Rows of exactly `n` values. The sequence length must be a multiple of `n`.
    Wrapped(usize),
}

impl RowLayout {
    /// The shape `len` values take under this layout.
    ///
    /// # Errors
    ///
    /// [`SequenceError::InvalidLayout`] for `Wrapped(0)` or a length that does not fill whole
    /// rows.
    pub fn shape_for(self, len: usize) -> SequenceResult<Shape> {
        match self {
            RowLayout::Column => Ok(Shape { rows: len, cols: 1 }),
            RowLayout::Row => Ok(Shape { rows: 1, cols: len }),
            RowLayout::Wrapped(0) => Err(SequenceError::InvalidLayout {
                message: "row width must be > 0".to_string(),
            }),
            RowLayout::Wrapped(cols) if len % cols != 0 => Err(SequenceError::InvalidLayout {
                message: format!("{len} values do not fill rows of {cols}"),
            }),
            RowLayout::Wrapped(cols) => Ok(Shape {
                rows: len / cols,
                cols,
            }),
        }
    }
}

/// Reject separators that can appear inside a written number or end a line.
///
/// # Errors
///
/// [`SequenceError::InvalidLayout`] for ASCII letters and digits, `.`, `+`, `-`, `\n` and `\r`.
pub fn check_separator(separator: u8) -> SequenceResult<()> {
    if separator.is_ascii_alphanumeric() || b".+-\n\r".contains(&separator) {
        return Err(SequenceError::InvalidLayout {
            message: format!("separator {:?} can appear inside values", separator as char),
        });
    }
    Ok(())
}

/// Build a headerless CSV reader with the given field separator.
pub fn csv_reader<R: Read>(separator: u8, rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(separator)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(rdr)
}

/// Build a headerless CSV writer with the given field separator.
pub fn csv_writer<W: Write>(separator: u8, wtr: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(separator)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(wtr)
}

/// Read a delimited text file into a new sequence.
pub fn read_csv_from_path(
    path: impl AsRef<Path>,
    separator: u8,
) -> SequenceResult<(NumericSequence, Shape)> {
    check_separator(separator)?;
    let file = std::fs::File::open(path)?;
    read_csv_from_reader(&mut csv_reader(separator, file))
}

/// Read rows from an existing CSV reader into a new sequence.
///
/// Rules:
///
/// - blank lines are skipped;
/// - every remaining row must have as many fields as the first one;
/// - every field must parse as a [`Scalar`];
/// - at least one row must be present.
///
/// Row numbers in errors are 1-based line numbers; columns are 1-based.
pub fn read_csv_from_reader<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> SequenceResult<(NumericSequence, Shape)> {
    let mut values: Vec<Scalar> = Vec::new();
    let mut cols: Option<usize> = None;
    let mut rows = 0usize;

    for (row_idx0, result) in rdr.records().enumerate() {
        let record = result?;
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(row_idx0 + 1);

        let expected = *cols.get_or_insert(record.len());
        if record.len() != expected {
            return Err(SequenceError::RaggedRows {
                row: line,
                expected,
                found: record.len(),
            });
        }

        for (col_idx0, raw) in record.iter().enumerate() {
            let value = raw.parse::<Scalar>().map_err(|e| SequenceError::ParseError {
                row: line,
                column: col_idx0 + 1,
                raw: raw.to_owned(),
                message: e.to_string(),
            })?;
            values.push(value);
        }
        rows += 1;
    }

    let cols = cols.ok_or(SequenceError::EmptyInput)?;
    Ok((NumericSequence::from(values), Shape { rows, cols }))
}

/// Write `seq` to an existing CSV writer using `layout`, then flush it.
///
/// Values are written with Rust's shortest round-trip float formatting, so reading the output
/// back reproduces every value exactly.
///
/// # Errors
///
/// - [`SequenceError::EmptySequence`] if there is nothing to write.
/// - [`SequenceError::InvalidLayout`] if `layout` does not fit the sequence length.
pub fn write_csv_to_writer<W: Write>(
    wtr: &mut csv::Writer<W>,
    seq: &NumericSequence,
    layout: RowLayout,
) -> SequenceResult<Shape> {
    if seq.is_empty() {
        return Err(SequenceError::EmptySequence { operation: "save" });
    }
    let shape = layout.shape_for(seq.len())?;

    for row in seq.as_slice().chunks(shape.cols) {
        wtr.write_record(row.iter().map(|v| v.to_string()))?;
    }
    wtr.flush()?;
    Ok(shape)
}
