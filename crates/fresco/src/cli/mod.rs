//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the fresco binary.

mod commands;
mod render;
mod run;

pub use commands::{Cli, Commands, OutputFormat, PromptInput, StoryInput};
pub use render::{BatchOptions, run_edit_batch, run_render_batch};
pub use run::{RunOptions, run_story};
