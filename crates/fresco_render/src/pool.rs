//! The concurrency-bounded render pool.

use crate::worker;
use fresco_core::{BatchReport, RenderTask, TaskOutcome};
use fresco_error::{FrescoResult, RenderError, RenderErrorKind};
use fresco_interface::{ImageDriver, ImageEditing};
use fresco_storage::{ImagePrefix, SessionStore};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, instrument};

/// Hard ceiling on concurrent in-flight backend requests.
///
/// A pool never runs more workers than this, whatever limit the caller asks
/// for.
pub const MAX_WORKERS: usize = 10;

/// Fans batches of render tasks out to an image driver.
///
/// The pool owns the driver and a [`SessionStore`]; each batch resolves its
/// output directory through the store, dispatches every task under a shared
/// semaphore, and reassembles the outcomes into submission order. Per-task
/// failures are recorded in the report rather than propagated.
#[derive(Debug)]
pub struct RenderPool<D> {
    driver: Arc<D>,
    store: SessionStore,
    workers: usize,
}

impl<D> RenderPool<D> {
    /// Create a pool over the given driver with default settings.
    ///
    /// Sessions are allocated under the default output root and up to
    /// [`MAX_WORKERS`] tasks run concurrently.
    pub fn new(driver: D) -> Self {
        Self {
            driver: Arc::new(driver),
            store: SessionStore::default(),
            workers: MAX_WORKERS,
        }
    }

    /// Replace the session store.
    pub fn with_store(mut self, store: SessionStore) -> Self {
        self.store = store;
        self
    }

    /// Set the concurrency limit, clamped to `1..=MAX_WORKERS`.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.clamp(1, MAX_WORKERS);
        self
    }

    /// The effective concurrency limit.
    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl<D: ImageDriver + 'static> RenderPool<D> {
    /// Render one image per prompt into a session directory.
    ///
    /// Tasks are numbered by their position in `prompts`; outputs land at
    /// `image_{index:03}.png` inside the resolved session. `model` falls back
    /// to the driver's default, `session_dir` to a fresh timestamped
    /// directory. The report's `results` are sorted by index and its
    /// `output_paths` carry the successful paths in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if `prompts` is empty or the session directory cannot
    /// be created. Individual task failures never surface here.
    #[instrument(skip(self, prompts, model, session_dir), fields(count = prompts.len(), workers = self.workers))]
    pub async fn generate_batch(
        &self,
        prompts: &[String],
        model: Option<&str>,
        session_dir: Option<&Path>,
    ) -> FrescoResult<BatchReport> {
        if prompts.is_empty() {
            return Err(RenderError::new(RenderErrorKind::EmptyBatch).into());
        }

        let session = self.store.resolve(session_dir).await?;
        let model = model
            .unwrap_or_else(|| self.driver.default_model())
            .to_string();

        let tasks: Vec<RenderTask> = prompts
            .iter()
            .enumerate()
            .map(|(index, prompt)| {
                RenderTask::new(
                    index,
                    prompt.clone(),
                    Vec::new(),
                    session.path_for(ImagePrefix::Image, index),
                    model.clone(),
                )
            })
            .collect();

        info!(
            count = tasks.len(),
            dir = %session.dir().display(),
            "Dispatching generation batch"
        );
        let results = self.dispatch_all(tasks, worker::run_generate).await?;
        let report =
            BatchReport::from_outcomes(session.dir().to_path_buf(), prompts.len(), results);
        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            "Generation batch finished"
        );
        Ok(report)
    }

    /// Run every task under a shared semaphore and collect outcomes in
    /// submission order.
    ///
    /// A permit is acquired before each task is spawned, so at most
    /// `self.workers` tasks exist at once. A panicking worker is converted
    /// into a failed outcome for its index.
    async fn dispatch_all<F, Fut>(
        &self,
        tasks: Vec<RenderTask>,
        run: F,
    ) -> FrescoResult<Vec<TaskOutcome>>
    where
        F: Fn(Arc<D>, RenderTask) -> Fut,
        Fut: Future<Output = TaskOutcome> + Send + 'static,
    {
        let semaphore = Arc::new(Semaphore::new(self.workers));
        let mut handles = Vec::with_capacity(tasks.len());

        for task in tasks {
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .map_err(|e| RenderError::new(RenderErrorKind::Dispatch(e.to_string())))?;
            let job = run(Arc::clone(&self.driver), task);
            handles.push(tokio::spawn(async move {
                let _permit = permit;
                job.await
            }));
        }

        let mut results = Vec::with_capacity(handles.len());
        for (index, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(outcome) => results.push(outcome),
                Err(e) => {
                    error!(index, error = %e, "Render worker panicked");
                    results.push(TaskOutcome::failed(index, format!("worker panicked: {e}")));
                }
            }
        }

        // Completion order is arbitrary; the report contract is index order.
        results.sort_by_key(|r| r.index);
        Ok(results)
    }
}

impl<D: ImageEditing + 'static> RenderPool<D> {
    /// Edit one image per prompt, pairing `prompts[i]` with `sources[i]`.
    ///
    /// Outputs land at `edited_image_{index:03}.png` inside the resolved
    /// session. A task whose source list is empty degrades to pure
    /// generation.
    ///
    /// # Errors
    ///
    /// Returns an error if `prompts` is empty, if the prompt and source list
    /// lengths differ, or if the session directory cannot be created. The
    /// length check runs before anything touches the filesystem or the
    /// backend.
    #[instrument(skip(self, prompts, sources, model, session_dir), fields(count = prompts.len(), workers = self.workers))]
    pub async fn edit_batch(
        &self,
        prompts: &[String],
        sources: &[Vec<PathBuf>],
        model: Option<&str>,
        session_dir: Option<&Path>,
    ) -> FrescoResult<BatchReport> {
        if prompts.is_empty() {
            return Err(RenderError::new(RenderErrorKind::EmptyBatch).into());
        }
        if prompts.len() != sources.len() {
            return Err(RenderError::new(RenderErrorKind::SourceCountMismatch {
                prompts: prompts.len(),
                sources: sources.len(),
            })
            .into());
        }

        let session = self.store.resolve(session_dir).await?;
        let model = model
            .unwrap_or_else(|| self.driver.default_model())
            .to_string();

        let tasks: Vec<RenderTask> = prompts
            .iter()
            .zip(sources.iter())
            .enumerate()
            .map(|(index, (prompt, source_set))| {
                RenderTask::new(
                    index,
                    prompt.clone(),
                    source_set.clone(),
                    session.path_for(ImagePrefix::Edited, index),
                    model.clone(),
                )
            })
            .collect();

        info!(
            count = tasks.len(),
            dir = %session.dir().display(),
            "Dispatching edit batch"
        );
        let results = self.dispatch_all(tasks, worker::run_edit).await?;
        let report =
            BatchReport::from_outcomes(session.dir().to_path_buf(), prompts.len(), results);
        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            "Edit batch finished"
        );
        Ok(report)
    }
}
