//! Path-based save/load entrypoints.
//!
//! Most callers should use [`NumericSequence::save`] / [`NumericSequence::load`], or the `_with`
//! variants to pass [`CsvOptions`].
//!
//! - Saving is atomic: data goes to a uniquely named hidden temporary file next to the target,
//!   which is synced and then renamed over the target. A failed save never leaves a partial
//!   target file, and concurrent saves to one path never share a temporary file.
//! - Loading is all-or-nothing: the sequence is only replaced after the whole file parsed.
//! - If a [`SequenceObserver`] is configured, success/failure/alerts are reported to it.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::error::{SequenceError, SequenceResult};
use crate::types::{NumericSequence, Shape};

use crate::observability::{
    notify, SequenceContext, SequenceObserver, SequenceOp, SequenceSeverity, SequenceStats,
};

use super::csv::{
    check_separator, csv_writer, read_csv_from_path, write_csv_to_writer, RowLayout,
};

/// Options controlling save/load behavior.
///
/// Use [`Default`] for common cases: comma separator, one value per line, no observer.
#[derive(Clone)]
pub struct CsvOptions {
    /// Field separator byte.
    pub separator: u8,
    /// Row arrangement used when saving. Ignored when loading.
    pub layout: RowLayout,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn SequenceObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: SequenceSeverity,
}

impl fmt::Debug for CsvOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvOptions")
            .field("separator", &(self.separator as char))
            .field("layout", &self.layout)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            separator: b',',
            layout: RowLayout::default(),
            observer: None,
            alert_at_or_above: SequenceSeverity::Critical,
        }
    }
}

impl CsvOptions {
    /// Default options with a different field separator.
    pub fn with_separator(separator: u8) -> Self {
        Self {
            separator,
            ..Default::default()
        }
    }
}

/// Atomically write `seq` to `path`.
///
/// # Examples
///
/// ```no_run
/// use numeric_sequence::persistence::{save_to_path, CsvOptions, RowLayout};
/// use numeric_sequence::types::NumericSequence;
///
/// # fn main() -> Result<(), numeric_sequence::SequenceError> {
/// let seq = NumericSequence::from([1.0, 2.0, 3.0, 4.0]);
/// let opts = CsvOptions {
///     layout: RowLayout::Wrapped(2),
///     ..Default::default()
/// };
/// let shape = save_to_path(&seq, "data.csv", &opts)?;
/// assert_eq!(shape.rows, 2);
/// # Ok(())
/// # }
/// ```
pub fn save_to_path(
    seq: &NumericSequence,
    path: impl AsRef<Path>,
    options: &CsvOptions,
) -> SequenceResult<Shape> {
    let path = path.as_ref();
    let result = write_atomically(seq, path, options);
    report(options, path, SequenceOp::Save, result.as_ref().copied());
    result
}

/// Read `path` into a new sequence, returning it with the parsed [`Shape`].
pub fn load_from_path(
    path: impl AsRef<Path>,
    options: &CsvOptions,
) -> SequenceResult<(NumericSequence, Shape)> {
    let path = path.as_ref();
    let result = read_csv_from_path(path, options.separator);
    report(
        options,
        path,
        SequenceOp::Load,
        result.as_ref().map(|(_, shape)| *shape),
    );
    result
}

impl NumericSequence {
    /// Save to `path` with default [`CsvOptions`] (comma separated, one value per line).
    pub fn save(&self, path: impl AsRef<Path>) -> SequenceResult<()> {
        self.save_with(path, &CsvOptions::default())
    }

    /// Save to `path` with explicit options.
    pub fn save_with(&self, path: impl AsRef<Path>, options: &CsvOptions) -> SequenceResult<()> {
        save_to_path(self, path, options).map(|_| ())
    }

    /// Replace the contents with the comma-separated values in `path`.
    ///
    /// Returns the row/column layout found in the file. On error the sequence is unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>) -> SequenceResult<Shape> {
        self.load_with(path, &CsvOptions::default())
    }

    /// Replace the contents with the values in `path`, using `options.separator`.
    pub fn load_with(
        &mut self,
        path: impl AsRef<Path>,
        options: &CsvOptions,
    ) -> SequenceResult<Shape> {
        let (loaded, shape) = load_from_path(path, options)?;
        *self = loaded;
        Ok(shape)
    }
}

fn write_atomically(
    seq: &NumericSequence,
    path: &Path,
    options: &CsvOptions,
) -> SequenceResult<Shape> {
    // Reject bad input before touching the filesystem.
    if seq.is_empty() {
        return Err(SequenceError::EmptySequence { operation: "save" });
    }
    check_separator(options.separator)?;
    options.layout.shape_for(seq.len())?;

    // Every call gets its own uniquely named temp file, removed on drop unless persisted.
    let prefix = temp_prefix_for(path)?;
    let tmp = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(parent_dir(path))?;

    let mut wtr = csv_writer(options.separator, tmp);
    let shape = write_csv_to_writer(&mut wtr, seq, options.layout)?;
    let tmp = wtr.into_inner().map_err(|e| e.into_error())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(shape)
}

/// Directory the temp file is created in, so the final rename stays on one filesystem.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Hidden name prefix derived from the target file name.
fn temp_prefix_for(path: &Path) -> io::Result<OsString> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("not a file path: {}", path.display()),
        )
    })?;

    let mut prefix = OsString::from(".");
    prefix.push(name);
    prefix.push(".");
    Ok(prefix)
}

fn report(
    options: &CsvOptions,
    path: &Path,
    operation: SequenceOp,
    result: Result<Shape, &SequenceError>,
) {
    let ctx = SequenceContext {
        operation,
        path: Some(path.to_path_buf()),
    };
    let result = result.map(|shape| SequenceStats {
        values: shape.len(),
        shape: Some(shape),
    });
    notify(
        options.observer.as_ref(),
        options.alert_at_or_above,
        &ctx,
        result,
    );
}
