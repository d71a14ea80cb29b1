//! Observer hooks for sequence operations.
//!
//! There is no global logger. Operations that take an options struct ([`CsvOptions`],
//! [`ScaleOptions`]) report their outcome to the configured [`SequenceObserver`], if any, and
//! escalate failures at or above the configured severity to [`SequenceObserver::on_alert`].
//!
//! [`CsvOptions`]: crate::persistence::CsvOptions
//! [`ScaleOptions`]: crate::processing::ScaleOptions

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::SequenceError;
use crate::types::Shape;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SequenceSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// The operation failed on its input: malformed content, bad ranges, non-finite values.
    Error,
    /// The environment failed: I/O errors, including I/O surfaced by the CSV layer.
    Critical,
}

impl SequenceSeverity {
    /// Severity of a failed operation.
    pub fn for_error(error: &SequenceError) -> Self {
        match error {
            SequenceError::Io(_) => Self::Critical,
            SequenceError::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => Self::Critical,
                _ => Self::Error,
            },
            _ => Self::Error,
        }
    }
}

/// Which operation an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceOp {
    Save,
    Load,
    /// Batch scaling through [`crate::processing::scale_all_with`].
    Scale,
}

/// Context about an attempted operation.
#[derive(Debug, Clone)]
pub struct SequenceContext {
    /// The operation performed.
    pub operation: SequenceOp,
    /// File read or written; `None` for in-memory operations.
    pub path: Option<PathBuf>,
}

/// Stats reported on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceStats {
    /// Number of values saved, loaded, or scaled.
    pub values: usize,
    /// Row/column layout of the file, for save/load.
    pub shape: Option<Shape>,
}

/// Observer interface for operation outcomes.
pub trait SequenceObserver: Send + Sync {
    /// Called when an operation succeeds.
    fn on_success(&self, _ctx: &SequenceContext, _stats: SequenceStats) {}

    /// Called when an operation fails.
    fn on_failure(
        &self,
        _ctx: &SequenceContext,
        _severity: SequenceSeverity,
        _error: &SequenceError,
    ) {
    }

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &SequenceContext, severity: SequenceSeverity, error: &SequenceError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Logs events to stderr, one line each.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl StdErrObserver {
    fn target(ctx: &SequenceContext) -> String {
        match &ctx.path {
            Some(path) => path.display().to_string(),
            None => "-".to_string(),
        }
    }
}

impl SequenceObserver for StdErrObserver {
    fn on_success(&self, ctx: &SequenceContext, stats: SequenceStats) {
        match stats.shape {
            Some(shape) => eprintln!(
                "[sequence][ok] op={:?} path={} values={} rows={} cols={}",
                ctx.operation,
                Self::target(ctx),
                stats.values,
                shape.rows,
                shape.cols
            ),
            None => eprintln!(
                "[sequence][ok] op={:?} values={}",
                ctx.operation, stats.values
            ),
        }
    }

    fn on_failure(&self, ctx: &SequenceContext, severity: SequenceSeverity, error: &SequenceError) {
        eprintln!(
            "[sequence][{:?}] op={:?} path={} err={}",
            severity,
            ctx.operation,
            Self::target(ctx),
            error
        );
    }

    fn on_alert(&self, ctx: &SequenceContext, severity: SequenceSeverity, error: &SequenceError) {
        eprintln!(
            "[ALERT][sequence][{:?}] op={:?} path={} err={}",
            severity,
            ctx.operation,
            Self::target(ctx),
            error
        );
    }
}

/// Report `result` to `observer`, alerting when the failure severity reaches `alert_at_or_above`.
pub(crate) fn notify(
    observer: Option<&Arc<dyn SequenceObserver>>,
    alert_at_or_above: SequenceSeverity,
    ctx: &SequenceContext,
    result: Result<SequenceStats, &SequenceError>,
) {
    let Some(obs) = observer else {
        return;
    };

    match result {
        Ok(stats) => obs.on_success(ctx, stats),
        Err(e) => {
            let sev = SequenceSeverity::for_error(e);
            obs.on_failure(ctx, sev, e);
            if sev >= alert_at_or_above {
                obs.on_alert(ctx, sev, e);
            }
        }
    }
}
