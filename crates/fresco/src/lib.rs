//! Fresco - Story-to-meme image generation.
//!
//! Fresco turns a narrative into a sequence of meme images: one text-model
//! call decomposes the story into captioned visual panels, then a
//! bounded-concurrency render pool fans the panels out to an image backend
//! and reassembles the results in story order.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fresco::{MemePipeline, OpenAiImageDriver, OpenAiTextDriver, RenderPool, StoryboardPlanner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let planner = StoryboardPlanner::new(OpenAiTextDriver::new("gpt-4o")?);
//!     let pool = RenderPool::new(OpenAiImageDriver::new("gpt-image-1")?);
//!     let pipeline = MemePipeline::new(planner, pool);
//!
//!     let report = pipeline.run("Once upon a time...", None, None).await?;
//!     println!("Images saved in: {}", report.session_dir.display());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Fresco is organized as a workspace with focused crates:
//!
//! - `fresco_error` - Error types
//! - `fresco_core` - Core data types (tasks, outcomes, reports, panels)
//! - `fresco_interface` - TextDriver and ImageDriver trait definitions
//! - `fresco_storage` - Session directories and image persistence
//! - `fresco_models` - OpenAI driver implementations
//! - `fresco_render` - The bounded-concurrency render pool
//! - `fresco_storyboard` - Story analysis and the meme pipeline
//!
//! This crate (`fresco`) re-exports everything for convenience and carries
//! the `fresco` binary.

// Re-export core crates (always available)
pub use fresco_core::*;
pub use fresco_error::*;
pub use fresco_interface::*;
pub use fresco_storage::*;

pub use fresco_models::{
    DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, OpenAiImageDriver, OpenAiTextDriver,
};
pub use fresco_render::{MAX_WORKERS, RenderPool};
pub use fresco_storyboard::{
    DEFAULT_PANELS, DEFAULT_STYLE, MemePipeline, RunAnalysis, RunReport, StoryboardPlanner,
};

mod config;
pub use config::FrescoConfig;
