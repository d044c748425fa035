//! Per-task render workers.
//!
//! A worker runs one task end to end: call the backend, write the image,
//! report an outcome. Workers never return errors; every failure becomes a
//! failed [`TaskOutcome`] so the batch keeps going.

use fresco_core::{ImageEditRequest, ImageRequest, RenderTask, TaskOutcome};
use fresco_error::FrescoResult;
use fresco_interface::{ImageDriver, ImageEditing};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// Run one generation task to completion.
pub(crate) async fn run_generate<D: ImageDriver>(driver: Arc<D>, task: RenderTask) -> TaskOutcome {
    let index = *task.index();
    match try_generate(driver, &task).await {
        Ok(path) => TaskOutcome::succeeded(index, path),
        Err(e) => {
            warn!(index, error = %e, "Generation task failed");
            TaskOutcome::failed(index, e.to_string())
        }
    }
}

async fn try_generate<D: ImageDriver>(driver: Arc<D>, task: &RenderTask) -> FrescoResult<PathBuf> {
    let request = ImageRequest::new(task.prompt().clone(), task.model().clone());
    let image = driver.generate(&request).await?;
    fresco_storage::write_image(task.output_path(), image.bytes()).await?;
    Ok(task.output_path().clone())
}

/// Run one edit task to completion.
///
/// A task without sources falls back to pure generation; its output path was
/// fixed when the task was built, so the fallback writes to the same place.
pub(crate) async fn run_edit<D: ImageEditing>(driver: Arc<D>, task: RenderTask) -> TaskOutcome {
    if !task.is_edit() {
        return run_generate(driver, task).await;
    }

    let index = *task.index();
    match try_edit(driver, &task).await {
        Ok(path) => TaskOutcome::succeeded(index, path),
        Err(e) => {
            warn!(index, error = %e, "Edit task failed");
            TaskOutcome::failed(index, e.to_string())
        }
    }
}

async fn try_edit<D: ImageEditing>(driver: Arc<D>, task: &RenderTask) -> FrescoResult<PathBuf> {
    let request = ImageEditRequest::new(
        task.prompt().clone(),
        task.model().clone(),
        task.sources().clone(),
    );
    let image = driver.edit(&request).await?;
    fresco_storage::write_image(task.output_path(), image.bytes()).await?;
    Ok(task.output_path().clone())
}
