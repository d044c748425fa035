//! OpenAI API drivers.

mod dto;
mod images;
mod text;

pub use dto::{
    ChatChoice, ChatChoiceMessage, ChatMessage, ChatRequest, ChatResponse, ChatRole,
    ImageGenerationRequest, ImagePayload, ImagesResponse,
};
pub use images::{DEFAULT_IMAGE_MODEL, OpenAiImageDriver};
pub use text::{DEFAULT_TEXT_MODEL, OpenAiTextDriver};
