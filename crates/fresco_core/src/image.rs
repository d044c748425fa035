//! Request and response types for image generation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A request to render one image from a text prompt.
///
/// # Examples
///
/// ```
/// use fresco_core::ImageRequest;
///
/// let request = ImageRequest::new("a cat meme", "gpt-image-1");
/// assert_eq!(request.model, "gpt-image-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    /// The image description sent to the backend
    pub prompt: String,
    /// Model identifier to use
    pub model: String,
}

impl ImageRequest {
    /// Create a generation request.
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
        }
    }
}

/// A request to produce one image by editing existing source images.
///
/// # Examples
///
/// ```
/// use fresco_core::ImageEditRequest;
/// use std::path::PathBuf;
///
/// let request = ImageEditRequest::new(
///     "put the cat in a spacesuit",
///     "gpt-image-1",
///     vec![PathBuf::from("cat.png")],
/// );
/// assert_eq!(request.sources.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEditRequest {
    /// The edit instruction sent to the backend
    pub prompt: String,
    /// Model identifier to use
    pub model: String,
    /// Paths of the source images to edit
    pub sources: Vec<PathBuf>,
}

impl ImageEditRequest {
    /// Create an edit request over the given source images.
    pub fn new(
        prompt: impl Into<String>,
        model: impl Into<String>,
        sources: Vec<PathBuf>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            sources,
        }
    }
}

/// Raw image bytes returned by a backend.
///
/// # Examples
///
/// ```
/// use fresco_core::GeneratedImage;
///
/// let image = GeneratedImage::new(vec![0x89, 0x50, 0x4e, 0x47]);
/// assert_eq!(image.bytes().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new, derive_getters::Getters)]
pub struct GeneratedImage {
    /// The encoded image payload
    bytes: Vec<u8>,
}

impl GeneratedImage {
    /// Consume the image, returning the raw payload.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
