//! Storyboard planning error types.

/// Specific error conditions for storyboard planning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryErrorKind {
    /// Failed to read the story file
    #[display("Failed to read story file: {}", _0)]
    FileRead(String),
    /// Could not parse panel prompts out of the model response
    #[display("Failed to parse meme prompts from model response: {}", _0)]
    PromptExtraction(String),
    /// Analysis produced no usable panels
    #[display("Story analysis produced no panels")]
    NoPanels,
}

/// Error type for storyboard planning.
///
/// # Examples
///
/// ```
/// use fresco_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::NoPanels);
/// assert!(format!("{}", err).contains("no panels"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// The specific error condition
    pub kind: StoryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new story error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for storyboard planning operations.
pub type StoryResult<T> = Result<T, StoryError>;
