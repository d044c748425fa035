//! The typed story-to-images pipeline.

use crate::StoryboardPlanner;
use fresco_core::BatchReport;
use fresco_error::{FrescoResult, StoryError, StoryErrorKind};
use fresco_interface::{ImageDriver, TextDriver};
use fresco_render::RenderPool;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Summary of the planning stage carried in a [`RunReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunAnalysis {
    /// The backend-ready image prompts, in panel order
    pub prompts: Vec<String>,
    /// Word count of the source story
    pub story_words: usize,
    /// Number of panels planned
    pub panels: usize,
}

/// Final outcome of one pipeline run.
///
/// `success` mirrors the render batch: false whenever any panel failed to
/// render, with the survivors still listed in `image_paths`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Whether every panel rendered successfully
    pub success: bool,
    /// Paths of the rendered images, in panel order
    pub image_paths: Vec<PathBuf>,
    /// The session directory the images were written into
    pub session_dir: PathBuf,
    /// Human-readable summary of the render stage
    pub message: String,
    /// Planning-stage summary
    pub analysis: RunAnalysis,
}

/// Chains a planner and a render pool into the full story-to-images flow.
///
/// Each stage hands a typed value to the next; any stage failure ends the
/// run through the single error path instead of being threaded along as
/// mutable state.
pub struct MemePipeline<T, I> {
    planner: StoryboardPlanner<T>,
    pool: RenderPool<I>,
}

impl<T: TextDriver, I: ImageDriver + 'static> MemePipeline<T, I> {
    /// Assemble a pipeline from its two stages.
    pub fn new(planner: StoryboardPlanner<T>, pool: RenderPool<I>) -> Self {
        Self { planner, pool }
    }

    /// Plan the story, render every panel, and report.
    ///
    /// `model` overrides the image model for the render stage; `session_dir`
    /// routes output into an existing directory instead of a fresh one.
    ///
    /// # Errors
    ///
    /// Returns an error when planning fails, when the storyboard comes back
    /// empty, or when the render batch is rejected before dispatch.
    /// Individual panels that fail to render are reported in the run report,
    /// not here.
    #[instrument(skip_all, fields(story_words = story.split_whitespace().count()))]
    pub async fn run(
        &self,
        story: &str,
        model: Option<&str>,
        session_dir: Option<&Path>,
    ) -> FrescoResult<RunReport> {
        let storyboard = self.planner.plan(story).await?;
        if storyboard.is_empty() {
            return Err(StoryError::new(StoryErrorKind::NoPanels).into());
        }

        let prompts = storyboard.image_prompts(self.planner.style());
        let report = self
            .pool
            .generate_batch(&prompts, model, session_dir)
            .await?;
        let BatchReport {
            success,
            output_paths,
            session_dir,
            message,
            ..
        } = report;
        info!(
            images = output_paths.len(),
            dir = %session_dir.display(),
            "Pipeline run complete"
        );

        Ok(RunReport {
            success,
            image_paths: output_paths,
            session_dir,
            message,
            analysis: RunAnalysis {
                prompts,
                story_words: story.split_whitespace().count(),
                panels: storyboard.len(),
            },
        })
    }
}
