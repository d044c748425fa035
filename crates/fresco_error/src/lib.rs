//! Error types for the Fresco library.
//!
//! This crate provides the foundation error types used throughout the Fresco
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fresco_error::{FrescoResult, ConfigError};
//!
//! fn load_setting() -> FrescoResult<String> {
//!     Err(ConfigError::new("Missing field"))?
//! }
//!
//! match load_setting() {
//!     Ok(value) => println!("Got: {}", value),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod models;
mod render;
mod storage;
mod story;

pub use config::ConfigError;
pub use error::{FrescoError, FrescoErrorKind, FrescoResult};
pub use json::JsonError;
pub use models::{ModelsError, ModelsErrorKind, ModelsResult, OpenAiErrorKind};
pub use render::{RenderError, RenderErrorKind, RenderResult};
pub use storage::{StorageError, StorageErrorKind, StorageResult};
pub use story::{StoryError, StoryErrorKind, StoryResult};
