//! Bulk render and edit command handlers.

use super::commands::{OutputFormat, PromptInput};
use fresco::{
    BatchReport, FrescoConfig, FrescoError, FrescoResult, JsonError, OpenAiImageDriver,
    RenderPool, SessionStore, StorageError, StorageErrorKind, ensure_readable,
};
use std::path::{Path, PathBuf};

/// Options shared by the render and edit commands.
#[derive(Debug, Default)]
pub struct BatchOptions {
    /// Explicit session directory for the generated images
    pub output: Option<PathBuf>,
    /// Image model override
    pub image_model: Option<String>,
    /// Worker count override
    pub workers: Option<usize>,
    /// Whether to write the manifest next to the images
    pub manifest: bool,
}

/// Render a batch of prompts and print the manifest.
pub async fn run_render_batch(
    input: PromptInput,
    options: BatchOptions,
    format: OutputFormat,
) -> FrescoResult<()> {
    let config = FrescoConfig::load()?;
    let prompts = load_prompts(&input).await?;

    let model = options
        .image_model
        .unwrap_or_else(|| config.image_model.clone());
    let pool = RenderPool::new(OpenAiImageDriver::new(&model)?)
        .with_store(SessionStore::new(&config.output_root))
        .with_workers(options.workers.unwrap_or(config.workers));

    let report = match pool
        .generate_batch(&prompts, None, options.output.as_deref())
        .await
    {
        Ok(report) => report,
        Err(e) => return fail_report(e, format),
    };

    if options.manifest {
        persist_manifest(&report).await?;
    }
    print_report(&report, format)
}

/// Produce one edited image from the given sources and print the manifest.
pub async fn run_edit_batch(
    prompt: String,
    sources: Vec<PathBuf>,
    options: BatchOptions,
    format: OutputFormat,
) -> FrescoResult<()> {
    let config = FrescoConfig::load()?;

    // Catch missing sources before any session directory is created.
    if let Err(e) = ensure_readable(&sources).await {
        return fail_report(e.into(), format);
    }

    let model = options
        .image_model
        .unwrap_or_else(|| config.image_model.clone());
    let pool = RenderPool::new(OpenAiImageDriver::new(&model)?)
        .with_store(SessionStore::new(&config.output_root));

    let report = match pool
        .edit_batch(&[prompt], &[sources], None, options.output.as_deref())
        .await
    {
        Ok(report) => report,
        Err(e) => return fail_report(e, format),
    };

    if options.manifest {
        persist_manifest(&report).await?;
    }
    print_report(&report, format)
}

/// Gather prompts from the repeated flag or a prompts file.
async fn load_prompts(input: &PromptInput) -> FrescoResult<Vec<String>> {
    if !input.prompt.is_empty() {
        return Ok(input.prompt.clone());
    }
    match &input.prompts_file {
        Some(path) => read_prompt_lines(path).await,
        None => Ok(Vec::new()),
    }
}

async fn read_prompt_lines(path: &Path) -> FrescoResult<Vec<String>> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Write the report to `<session_dir>/manifest.json`.
async fn persist_manifest(report: &BatchReport) -> FrescoResult<()> {
    let json =
        serde_json::to_string_pretty(report).map_err(|e| JsonError::new(e.to_string()))?;
    let path = report.session_dir.join("manifest.json");
    tokio::fs::write(&path, json).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    println!("Manifest written to {}", path.display());
    Ok(())
}

/// Emit the whole-batch failure form of the report before propagating.
///
/// JSON consumers always receive a report on stdout, even when the batch was
/// rejected before dispatch; the error still propagates for the exit code.
fn fail_report(error: FrescoError, format: OutputFormat) -> FrescoResult<()> {
    if matches!(format, OutputFormat::Json) {
        let report = BatchReport::from_failure(error.to_string());
        if let Ok(json) = serde_json::to_string_pretty(&report) {
            println!("{}", json);
        }
    }
    Err(error)
}

/// Print the batch outcome in the requested format.
fn print_report(report: &BatchReport, format: OutputFormat) -> FrescoResult<()> {
    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(report).map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("\nRender Summary:");
            println!("===============");
            println!("{}", report.message);
            println!("Session directory: {}", report.session_dir.display());
            println!();
            for outcome in &report.results {
                match (&outcome.output_path, &outcome.error) {
                    (Some(path), _) => {
                        let name = path
                            .file_name()
                            .and_then(|n| n.to_str())
                            .unwrap_or_default();
                        println!("  {}. {}", outcome.index + 1, name);
                    }
                    (None, Some(error)) => {
                        println!("  {}. failed: {}", outcome.index + 1, error);
                    }
                    (None, None) => {}
                }
            }
        }
    }
    Ok(())
}
