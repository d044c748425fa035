//! Trait definitions for text and image backends and their capabilities.

use async_trait::async_trait;
use fresco_core::{
    CompletionRequest, CompletionResponse, GeneratedImage, ImageEditRequest, ImageRequest,
};
use fresco_error::FrescoResult;

/// Core trait for text completion backends.
///
/// Used by the storyboard planner to decompose a story into panel prompts.
#[async_trait]
pub trait TextDriver: Send + Sync {
    /// Generate a completion for the given conversation.
    async fn complete(&self, req: &CompletionRequest) -> FrescoResult<CompletionResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier used when the request does not name one.
    fn model_name(&self) -> &str;
}

/// Core trait for image generation backends.
///
/// A single request renders a single image; failure carries the backend's
/// message and is decided by the caller, never retried here.
#[async_trait]
pub trait ImageDriver: Send + Sync {
    /// Render one image from a text prompt.
    async fn generate(&self, req: &ImageRequest) -> FrescoResult<GeneratedImage>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier used when a batch does not name one.
    fn default_model(&self) -> &str;
}

/// Capability trait for backends that can edit existing images.
///
/// Implementations must verify every source path is readable before issuing
/// the network request, and must release any opened handles on every exit
/// path.
#[async_trait]
pub trait ImageEditing: ImageDriver {
    /// Produce one image by editing the request's source images.
    async fn edit(&self, req: &ImageEditRequest) -> FrescoResult<GeneratedImage>;
}
