//! Batch report assembly.

use crate::TaskOutcome;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The caller-facing summary of one batch.
///
/// `results` holds one outcome per submitted task, sorted ascending by index;
/// `output_paths` holds the paths of the successful outcomes in the same
/// order. `error` is populated only when the batch failed before dispatch,
/// never for per-task failures.
///
/// # Examples
///
/// ```
/// use fresco_core::{BatchReport, TaskOutcome};
/// use std::path::PathBuf;
///
/// let outcomes = vec![
///     TaskOutcome::succeeded(0, PathBuf::from("s/image_000.png")),
///     TaskOutcome::failed(1, "rate limited"),
/// ];
/// let report = BatchReport::from_outcomes(PathBuf::from("s"), 2, outcomes);
///
/// assert!(!report.success);
/// assert_eq!(report.output_paths, vec![PathBuf::from("s/image_000.png")]);
/// assert_eq!(report.message, "Generated 1 images out of 2 requested");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Whether every task in the batch succeeded
    pub success: bool,
    /// Batch-level error, present only when nothing was dispatched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Output paths of the successful tasks, in index order
    pub output_paths: Vec<PathBuf>,
    /// The session directory all outputs were written into
    pub session_dir: PathBuf,
    /// One outcome per submitted task, sorted ascending by index
    pub results: Vec<TaskOutcome>,
    /// Human-readable summary of the batch
    pub message: String,
}

impl BatchReport {
    /// Assemble a report from per-task outcomes.
    ///
    /// `results` must already be sorted ascending by index; `requested` is
    /// the number of tasks originally submitted. The session directory is
    /// the one the allocator resolved, never recovered from an output path.
    pub fn from_outcomes(
        session_dir: PathBuf,
        requested: usize,
        results: Vec<TaskOutcome>,
    ) -> Self {
        let success = results.iter().all(|r| r.success);
        let output_paths: Vec<PathBuf> = results
            .iter()
            .filter(|r| r.success)
            .filter_map(|r| r.output_path.clone())
            .collect();
        let message = format!(
            "Generated {} images out of {} requested",
            output_paths.len(),
            requested
        );

        Self {
            success,
            error: None,
            output_paths,
            session_dir,
            results,
            message,
        }
    }

    /// Build the whole-batch failure form of the report.
    ///
    /// Used when a precondition rejected the batch before any task was
    /// dispatched; the session directory is empty because none was resolved.
    pub fn from_failure(error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            success: false,
            message: error.clone(),
            error: Some(error),
            output_paths: Vec::new(),
            session_dir: PathBuf::new(),
            results: Vec::new(),
        }
    }

    /// Number of successful tasks in the batch.
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    /// Number of failed tasks in the batch.
    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }
}
