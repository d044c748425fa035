//! Render task records.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One unit of render work: a single prompt bound to its output path.
///
/// Tasks are constructed by the orchestrator and never mutated afterwards.
/// `index` is the task's position in the submitted prompt list and defines
/// the order of the batch's results.
///
/// # Examples
///
/// ```
/// use fresco_core::RenderTask;
/// use std::path::PathBuf;
///
/// let task = RenderTask::new(
///     0,
///     "a cat meme".to_string(),
///     vec![],
///     PathBuf::from("session/image_000.png"),
///     "gpt-image-1".to_string(),
/// );
///
/// assert_eq!(*task.index(), 0);
/// assert!(task.sources().is_empty());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new, derive_getters::Getters,
)]
pub struct RenderTask {
    /// Position in the submitted batch, 0-based and unique
    index: usize,
    /// The image description sent to the backend
    prompt: String,
    /// Source images to edit; empty for pure generation
    sources: Vec<PathBuf>,
    /// Where the rendered image is written
    output_path: PathBuf,
    /// Model identifier to use
    model: String,
}

impl RenderTask {
    /// Whether this task edits existing images rather than generating fresh ones.
    pub fn is_edit(&self) -> bool {
        !self.sources.is_empty()
    }
}
