//! Fresco CLI binary.
//!
//! This binary provides command-line access to Fresco's functionality:
//! - Run the full story-to-memes pipeline
//! - Render a batch of image prompts directly
//! - Edit existing images with an instruction

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{BatchOptions, Cli, Commands, RunOptions, run_edit_batch, run_render_batch, run_story};

    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Run {
            input,
            output,
            model,
            image_model,
            panels,
            workers,
        } => {
            run_story(
                input,
                RunOptions {
                    output,
                    model,
                    image_model,
                    panels,
                    workers,
                },
            )
            .await?;
        }

        Commands::Render {
            input,
            output,
            image_model,
            workers,
            manifest,
            format,
        } => {
            run_render_batch(
                input,
                BatchOptions {
                    output,
                    image_model,
                    workers,
                    manifest,
                },
                format,
            )
            .await?;
        }

        Commands::Edit {
            prompt,
            source,
            output,
            image_model,
            manifest,
            format,
        } => {
            run_edit_batch(
                prompt,
                source,
                BatchOptions {
                    output,
                    image_model,
                    workers: None,
                    manifest,
                },
                format,
            )
            .await?;
        }
    }

    Ok(())
}
