//! Story-to-memes command handler.

use super::commands::StoryInput;
use fresco::{
    FrescoConfig, FrescoResult, MemePipeline, OpenAiImageDriver, OpenAiTextDriver, RenderPool,
    SessionStore, StoryError, StoryErrorKind, StoryboardPlanner,
};
use std::path::PathBuf;

/// Options for a full pipeline run, resolved against the loaded config.
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Explicit session directory for the generated memes
    pub output: Option<PathBuf>,
    /// Text model override
    pub model: Option<String>,
    /// Image model override
    pub image_model: Option<String>,
    /// Panel count override
    pub panels: Option<usize>,
    /// Worker count override
    pub workers: Option<usize>,
}

/// Run the full story-to-memes pipeline and print the outcome.
pub async fn run_story(input: StoryInput, options: RunOptions) -> FrescoResult<()> {
    let config = FrescoConfig::load()?;
    let story = load_story(&input).await?;

    let text_model = options.model.unwrap_or_else(|| config.text_model.clone());
    let image_model = options
        .image_model
        .unwrap_or_else(|| config.image_model.clone());

    let planner = StoryboardPlanner::new(OpenAiTextDriver::new(&text_model)?)
        .with_panels(options.panels.unwrap_or(config.panels))
        .with_style(config.style.clone());
    let pool = RenderPool::new(OpenAiImageDriver::new(&image_model)?)
        .with_store(SessionStore::new(&config.output_root))
        .with_workers(options.workers.unwrap_or(config.workers));
    let pipeline = MemePipeline::new(planner, pool);

    println!("Generating meme sequence from your story...");
    println!("Analyzing narrative structure...");

    let report = pipeline
        .run(&story, None, options.output.as_deref())
        .await?;

    if report.success {
        println!(
            "Successfully generated {} meme images",
            report.image_paths.len()
        );
    } else {
        println!("{}", report.message);
    }
    println!("Images saved in: {}", report.session_dir.display());

    println!("\nGenerated memes:");
    for (i, path) in report.image_paths.iter().enumerate() {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        println!("  {}. {}", i + 1, name);
    }

    Ok(())
}

/// Read the story from the flag or the given file.
async fn load_story(input: &StoryInput) -> FrescoResult<String> {
    match (&input.story, &input.file) {
        (Some(story), _) => Ok(story.clone()),
        (None, Some(path)) => tokio::fs::read_to_string(path).await.map_err(|e| {
            StoryError::new(StoryErrorKind::FileRead(format!("{}: {}", path.display(), e))).into()
        }),
        // clap's input group rejects this before we get here
        (None, None) => Err(StoryError::new(StoryErrorKind::FileRead(
            "no story input provided".to_string(),
        ))
        .into()),
    }
}
