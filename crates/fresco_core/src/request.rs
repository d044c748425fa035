//! Request and response types for text completion.

use crate::Message;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A text completion request.
///
/// # Examples
///
/// ```
/// use fresco_core::{CompletionRequest, Message, Role};
///
/// let request = CompletionRequest {
///     messages: vec![Message::new(Role::User, "Hello!")],
///     max_tokens: Some(100),
///     temperature: Some(0.7),
///     model: Some("gpt-4o".to_string()),
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Builder)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    #[builder(default)]
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    #[builder(default)]
    pub temperature: Option<f32>,
    /// Model identifier to use, or the driver default when absent
    #[builder(default)]
    pub model: Option<String>,
}

impl CompletionRequest {
    /// Create a request from a message list, leaving tuning fields unset.
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            max_tokens: None,
            temperature: None,
            model: None,
        }
    }

    /// Creates a new builder for `CompletionRequest`.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}

/// The response to a text completion request.
///
/// # Examples
///
/// ```
/// use fresco_core::CompletionResponse;
///
/// let response = CompletionResponse {
///     outputs: vec!["Once upon a time".to_string()],
/// };
///
/// assert_eq!(response.text(), "Once upon a time");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// The generated outputs from the model
    pub outputs: Vec<String>,
}

impl CompletionResponse {
    /// Create a response wrapping the given outputs.
    pub fn new(outputs: Vec<String>) -> Self {
        Self { outputs }
    }

    /// All outputs joined into a single text block.
    pub fn text(&self) -> String {
        self.outputs.join("\n")
    }
}
