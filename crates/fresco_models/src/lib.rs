//! OpenAI provider integrations for Fresco.
//!
//! This crate provides the concrete drivers behind the Fresco driver traits:
//! [`OpenAiTextDriver`] for chat completions (storyboard planning) and
//! [`OpenAiImageDriver`] for image generation and editing.
//!
//! Both read their credential from the `OPENAI_API_KEY` environment variable,
//! with `with_api_key` constructors for explicit injection in tests.
//!
//! # Example
//!
//! ```no_run
//! use fresco_models::OpenAiImageDriver;
//! use fresco_interface::ImageDriver;
//! use fresco_core::ImageRequest;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = OpenAiImageDriver::new("gpt-image-1")?;
//! let request = ImageRequest::new("a cat meme", "gpt-image-1");
//! let image = driver.generate(&request).await?;
//! println!("{} bytes", image.bytes().len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::{
    ChatChoice, ChatChoiceMessage, ChatMessage, ChatRequest, ChatResponse, ChatRole,
    DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, ImageGenerationRequest, ImagePayload,
    ImagesResponse, OpenAiImageDriver, OpenAiTextDriver,
};
