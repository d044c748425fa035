//! Per-task outcome records.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The result of one render task.
///
/// Exactly one of `output_path` / `error` is populated: a successful outcome
/// carries the written file path, a failed one carries a human-readable error
/// string. Serialized with the stable field names consumed by callers
/// (`index`, `success`, `output_path`, `error`; absent halves serialize as
/// null).
///
/// # Examples
///
/// ```
/// use fresco_core::TaskOutcome;
/// use std::path::PathBuf;
///
/// let ok = TaskOutcome::succeeded(0, PathBuf::from("session/image_000.png"));
/// assert!(ok.success);
/// assert!(ok.error.is_none());
///
/// let failed = TaskOutcome::failed(1, "rate limited");
/// assert!(!failed.success);
/// assert_eq!(failed.error.as_deref(), Some("rate limited"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOutcome {
    /// Index of the originating task
    pub index: usize,
    /// Whether the task produced its image
    pub success: bool,
    /// Path of the written image when successful
    pub output_path: Option<PathBuf>,
    /// Error description when failed
    pub error: Option<String>,
}

impl TaskOutcome {
    /// Record a successful task with its written output path.
    pub fn succeeded(index: usize, output_path: PathBuf) -> Self {
        Self {
            index,
            success: true,
            output_path: Some(output_path),
            error: None,
        }
    }

    /// Record a failed task with a human-readable error.
    pub fn failed(index: usize, error: impl Into<String>) -> Self {
        Self {
            index,
            success: false,
            output_path: None,
            error: Some(error.into()),
        }
    }
}
