//! Model provider errors.

/// OpenAI-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OpenAiErrorKind {
    /// API key missing from the environment
    #[display("OPENAI_API_KEY not set: {}", _0)]
    MissingApiKey(String),
    /// HTTP transport failure before a response arrived
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// API returned a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body returned with the error
        message: String,
    },
    /// Request was rejected before submission
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
    /// Response body could not be converted to the expected shape
    #[display("Response conversion failed: {}", _0)]
    ResponseConversion(String),
    /// Image payload could not be decoded
    #[display("Failed to decode image payload: {}", _0)]
    Decode(String),
    /// Response carried no usable content
    #[display("Response contained no data")]
    EmptyResponse,
}

/// Model provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub enum ModelsErrorKind {
    /// OpenAI-specific error
    #[display("OpenAI: {}", _0)]
    OpenAi(OpenAiErrorKind),

    /// Builder error (derive_builder failures)
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Model provider error with location tracking.
///
/// # Examples
///
/// ```
/// use fresco_error::{ModelsError, ModelsErrorKind, OpenAiErrorKind};
///
/// let err = ModelsError::new(ModelsErrorKind::OpenAi(OpenAiErrorKind::EmptyResponse));
/// assert!(format!("{}", err).contains("no data"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
