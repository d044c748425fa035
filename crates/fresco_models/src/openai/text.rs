//! OpenAI chat completion driver.

use crate::{ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;
use fresco_core::{CompletionRequest, CompletionResponse};
use fresco_error::{FrescoResult, ModelsError, ModelsResult, OpenAiErrorKind};
use fresco_interface::TextDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model for storyboard planning.
pub const DEFAULT_TEXT_MODEL: &str = "gpt-4o";

/// OpenAI chat completions client.
#[derive(Debug, Clone)]
pub struct OpenAiTextDriver {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiTextDriver {
    /// Creates a new OpenAI text driver.
    ///
    /// Reads the API key from the `OPENAI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set.
    #[instrument(skip_all, fields(model = %model.as_ref()))]
    pub fn new(model: impl AsRef<str>) -> ModelsResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|e| {
            ModelsError::new(OpenAiErrorKind::MissingApiKey(e.to_string()).into())
        })?;

        Ok(Self::with_api_key(api_key, model.as_ref()))
    }

    /// Creates a new OpenAI text driver with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        debug!("Creating new OpenAI text driver");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Sends a chat completion request to the OpenAI API.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn send_chat(&self, request: &ChatRequest) -> ModelsResult<ChatResponse> {
        debug!("Sending request to OpenAI chat API");

        let response = self
            .client
            .post(OPENAI_CHAT_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to OpenAI chat API");
                ModelsError::new(OpenAiErrorKind::Http(format!("Request failed: {}", e)).into())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "OpenAI chat API returned error");
            return Err(ModelsError::new(
                OpenAiErrorKind::Api {
                    status: status.as_u16(),
                    message: body,
                }
                .into(),
            ));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse OpenAI chat response");
            ModelsError::new(
                OpenAiErrorKind::ResponseConversion(format!("Failed to parse response: {}", e))
                    .into(),
            )
        })?;

        debug!(
            choices = chat_response.choices().len(),
            "Received response from OpenAI chat API"
        );
        Ok(chat_response)
    }

    /// Converts a Fresco completion request to an OpenAI chat request.
    fn convert_request(&self, request: &CompletionRequest) -> ModelsResult<ChatRequest> {
        let messages: Vec<ChatMessage> = request
            .messages
            .iter()
            .map(|msg| {
                ChatMessage::builder()
                    .role(msg.role)
                    .content(msg.content.clone())
                    .build()
                    .map_err(|e| ModelsError::new(fresco_error::ModelsErrorKind::Builder(
                        e.to_string(),
                    )))
            })
            .collect::<ModelsResult<_>>()?;

        let model = request.model.clone().unwrap_or_else(|| self.model.clone());

        let mut builder = ChatRequest::builder();
        builder.model(model).messages(messages);
        if let Some(max_tokens) = request.max_tokens {
            builder.max_tokens(Some(max_tokens));
        }
        if let Some(temperature) = request.temperature {
            builder.temperature(Some(temperature));
        }
        builder
            .build()
            .map_err(|e| ModelsError::new(fresco_error::ModelsErrorKind::Builder(e.to_string())))
    }
}

#[async_trait]
impl TextDriver for OpenAiTextDriver {
    #[instrument(skip(self, req), fields(provider = "openai", model = %self.model))]
    async fn complete(&self, req: &CompletionRequest) -> FrescoResult<CompletionResponse> {
        let chat_request = self.convert_request(req)?;
        let response = self.send_chat(&chat_request).await?;

        let outputs = response.contents();
        if outputs.is_empty() {
            return Err(ModelsError::new(OpenAiErrorKind::EmptyResponse.into()).into());
        }

        Ok(CompletionResponse::new(outputs))
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
