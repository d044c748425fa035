//! OpenAI image generation and editing driver.

use crate::{ImageGenerationRequest, ImagesResponse};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use fresco_core::{GeneratedImage, ImageEditRequest, ImageRequest};
use fresco_error::{FrescoResult, ModelsError, ModelsResult, OpenAiErrorKind};
use fresco_interface::{ImageDriver, ImageEditing};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use tracing::{debug, error, instrument};

const OPENAI_GENERATIONS_URL: &str = "https://api.openai.com/v1/images/generations";
const OPENAI_EDITS_URL: &str = "https://api.openai.com/v1/images/edits";

/// Default model for image rendering.
pub const DEFAULT_IMAGE_MODEL: &str = "gpt-image-1";

/// OpenAI images API client.
///
/// Covers both the generations endpoint (prompt to image) and the edits
/// endpoint (prompt plus source images to image).
#[derive(Debug, Clone)]
pub struct OpenAiImageDriver {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiImageDriver {
    /// Creates a new OpenAI image driver.
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

    /// Creates a new OpenAI image driver with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        debug!("Creating new OpenAI image driver");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Sends a generation request to the OpenAI images API.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    async fn send_generation(
        &self,
        request: &ImageGenerationRequest,
    ) -> ModelsResult<ImagesResponse> {
        debug!("Sending request to OpenAI images API");

        let response = self
            .client
            .post(OPENAI_GENERATIONS_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to OpenAI images API");
                ModelsError::new(OpenAiErrorKind::Http(format!("Request failed: {}", e)).into())
            })?;

        Self::parse_images_response(response).await
    }

    /// Sends an edit request with the given source image bytes.
    #[instrument(skip(self, prompt, model, sources), fields(model = %model, sources = sources.len()))]
    async fn send_edit(
        &self,
        prompt: &str,
        model: &str,
        sources: Vec<(String, Vec<u8>)>,
    ) -> ModelsResult<ImagesResponse> {
        debug!("Sending request to OpenAI edits API");

        let mut form = Form::new()
            .text("model", model.to_string())
            .text("prompt", prompt.to_string());
        for (file_name, bytes) in sources {
            let part = Part::bytes(bytes)
                .file_name(file_name)
                .mime_str("image/png")
                .map_err(|e| {
                    ModelsError::new(
                        OpenAiErrorKind::InvalidRequest(format!("Invalid image part: {}", e))
                            .into(),
                    )
                })?;
            form = form.part("image[]", part);
        }

        let response = self
            .client
            .post(OPENAI_EDITS_URL)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to OpenAI edits API");
                ModelsError::new(OpenAiErrorKind::Http(format!("Request failed: {}", e)).into())
            })?;

        Self::parse_images_response(response).await
    }

    /// Checks the status and deserializes an images endpoint response.
    async fn parse_images_response(response: reqwest::Response) -> ModelsResult<ImagesResponse> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "OpenAI images API returned error");
            return Err(ModelsError::new(
                OpenAiErrorKind::Api {
                    status: status.as_u16(),
                    message: body,
                }
                .into(),
            ));
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse OpenAI images response");
            ModelsError::new(
                OpenAiErrorKind::ResponseConversion(format!("Failed to parse response: {}", e))
                    .into(),
            )
        })
    }

    /// Decodes the first payload of an images response into raw bytes.
    fn decode_image(response: ImagesResponse) -> ModelsResult<GeneratedImage> {
        let payload = response
            .data()
            .first()
            .ok_or_else(|| ModelsError::new(OpenAiErrorKind::EmptyResponse.into()))?;

        let encoded = payload.b64_json().as_ref().ok_or_else(|| {
            ModelsError::new(
                OpenAiErrorKind::ResponseConversion(
                    "Response carried no base64 payload".to_string(),
                )
                .into(),
            )
        })?;

        let bytes = STANDARD.decode(encoded).map_err(|e| {
            ModelsError::new(OpenAiErrorKind::Decode(e.to_string()).into())
        })?;

        debug!(size = bytes.len(), "Decoded image payload");
        Ok(GeneratedImage::new(bytes))
    }

    /// Reads the source images for an edit request into memory.
    ///
    /// Existence is verified first so an unreadable source fails before any
    /// network traffic; handles are dropped as each read completes.
    async fn load_sources(req: &ImageEditRequest) -> FrescoResult<Vec<(String, Vec<u8>)>> {
        fresco_storage::ensure_readable(&req.sources).await?;

        let mut sources = Vec::with_capacity(req.sources.len());
        for path in &req.sources {
            let bytes = tokio::fs::read(path).await.map_err(|e| {
                ModelsError::new(
                    OpenAiErrorKind::InvalidRequest(format!(
                        "Failed to read source image {}: {}",
                        path.display(),
                        e
                    ))
                    .into(),
                )
            })?;
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("source.png")
                .to_string();
            sources.push((file_name, bytes));
        }
        Ok(sources)
    }
}

#[async_trait]
impl ImageDriver for OpenAiImageDriver {
    #[instrument(skip(self, req), fields(provider = "openai", model = %req.model))]
    async fn generate(&self, req: &ImageRequest) -> FrescoResult<GeneratedImage> {
        let request = ImageGenerationRequest::builder()
            .model(req.model.clone())
            .prompt(req.prompt.clone())
            .build()
            .map_err(|e| {
                ModelsError::new(fresco_error::ModelsErrorKind::Builder(e.to_string()))
            })?;

        let response = self.send_generation(&request).await?;
        Ok(Self::decode_image(response)?)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn default_model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ImageEditing for OpenAiImageDriver {
    #[instrument(skip(self, req), fields(provider = "openai", model = %req.model, sources = req.sources.len()))]
    async fn edit(&self, req: &ImageEditRequest) -> FrescoResult<GeneratedImage> {
        let sources = Self::load_sources(req).await?;
        let response = self.send_edit(&req.prompt, &req.model, sources).await?;
        Ok(Self::decode_image(response)?)
    }
}
