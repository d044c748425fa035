//! Render batch error types.

/// Specific error conditions for bulk render operations.
///
/// These are batch-level precondition failures. Per-task failures never
/// surface as errors; they are captured in the task's outcome record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RenderErrorKind {
    /// Batch submitted with no prompts
    #[display("Batch contains no prompts")]
    EmptyBatch,
    /// Prompt and source-image list lengths differ for an edit batch
    #[display(
        "Number of prompts must match number of source image sets: {} prompts, {} source sets",
        prompts,
        sources
    )]
    SourceCountMismatch {
        /// Number of prompts submitted
        prompts: usize,
        /// Number of source image sets submitted
        sources: usize,
    },
    /// Worker pool could not admit a task
    #[display("Failed to dispatch task: {}", _0)]
    Dispatch(String),
}

/// Error type for bulk render operations.
///
/// # Examples
///
/// ```
/// use fresco_error::{RenderError, RenderErrorKind};
///
/// let err = RenderError::new(RenderErrorKind::EmptyBatch);
/// assert!(format!("{}", err).contains("no prompts"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Render Error: {} at line {} in {}", kind, line, file)]
pub struct RenderError {
    /// The specific error condition
    pub kind: RenderErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl RenderError {
    /// Create a new render error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RenderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for bulk render operations.
pub type RenderResult<T> = Result<T, RenderError>;
