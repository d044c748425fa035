//! Core data types for the Fresco meme generation library.
//!
//! This crate provides the foundation data types used across all Fresco
//! interfaces: chat messages for storyboard planning, image requests for the
//! render backends, and the task/outcome/report records produced by the bulk
//! orchestrator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod image;
mod message;
mod outcome;
mod panel;
mod report;
mod request;
mod role;
mod task;

pub use image::{GeneratedImage, ImageEditRequest, ImageRequest};
pub use message::Message;
pub use outcome::TaskOutcome;
pub use panel::{PanelPrompt, Storyboard};
pub use report::BatchReport;
pub use request::{
    CompletionRequest, CompletionRequestBuilder, CompletionRequestBuilderError,
    CompletionResponse,
};
pub use role::Role;
pub use task::RenderTask;
