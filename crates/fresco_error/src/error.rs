//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, ModelsError, RenderError, StorageError, StoryError};

/// The foundation error enum collecting every domain error in the workspace.
///
/// # Examples
///
/// ```
/// use fresco_error::{FrescoError, ConfigError};
///
/// let config_err = ConfigError::new("missing model name");
/// let err: FrescoError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FrescoErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Model provider error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Bulk render error
    #[from(RenderError)]
    Render(RenderError),
    /// Storyboard planning error
    #[from(StoryError)]
    Story(StoryError),
}

/// Fresco error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fresco_error::{FrescoResult, StoryError, StoryErrorKind};
///
/// fn might_fail() -> FrescoResult<()> {
///     Err(StoryError::new(StoryErrorKind::NoPanels))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fresco Error: {}", _0)]
pub struct FrescoError(Box<FrescoErrorKind>);

impl FrescoError {
    /// Create a new error from a kind.
    pub fn new(kind: FrescoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FrescoErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FrescoErrorKind
impl<T> From<T> for FrescoError
where
    T: Into<FrescoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fresco operations.
///
/// # Examples
///
/// ```
/// use fresco_error::{FrescoResult, JsonError};
///
/// fn serialize_report() -> FrescoResult<String> {
///     Err(JsonError::new("key must be a string"))?
/// }
/// ```
pub type FrescoResult<T> = std::result::Result<T, FrescoError>;
