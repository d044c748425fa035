//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Fresco - Turn a story into a sequence of meme images
#[derive(Parser, Debug)]
#[command(name = "fresco")]
#[command(about = "Turn a story into a sequence of meme images", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Where the story text comes from; exactly one source must be given.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct StoryInput {
    /// Story text to convert into memes
    #[arg(short, long)]
    pub story: Option<String>,

    /// Path to a text file containing the story
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Where render prompts come from; exactly one source must be given.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct PromptInput {
    /// Prompt to render; repeat the flag for multiple images
    #[arg(short, long)]
    pub prompt: Vec<String>,

    /// File with one prompt per line
    #[arg(long)]
    pub prompts_file: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a story and render its meme sequence
    Run {
        #[command(flatten)]
        input: StoryInput,

        /// Custom output directory for the generated memes
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Text model for story analysis
        #[arg(long)]
        model: Option<String>,

        /// Image model for rendering
        #[arg(long)]
        image_model: Option<String>,

        /// Number of panels to plan
        #[arg(long)]
        panels: Option<usize>,

        /// Concurrent render workers (capped at 10)
        #[arg(long)]
        workers: Option<usize>,
    },

    /// Render a batch of prompts directly
    Render {
        #[command(flatten)]
        input: PromptInput,

        /// Custom output directory for the generated images
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Image model for rendering
        #[arg(long)]
        image_model: Option<String>,

        /// Concurrent render workers (capped at 10)
        #[arg(long)]
        workers: Option<usize>,

        /// Write the batch manifest to <session_dir>/manifest.json
        #[arg(long)]
        manifest: bool,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Produce an edited image from one or more source images
    Edit {
        /// Edit instruction applied to the source images
        #[arg(short, long)]
        prompt: String,

        /// Source image to edit; repeat the flag for multiple sources
        #[arg(short, long, required = true)]
        source: Vec<PathBuf>,

        /// Custom output directory for the edited image
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Image model for editing
        #[arg(long)]
        image_model: Option<String>,

        /// Write the batch manifest to <session_dir>/manifest.json
        #[arg(long)]
        manifest: bool,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
