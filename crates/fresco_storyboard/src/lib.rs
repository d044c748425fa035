//! Story analysis and the meme generation pipeline.
//!
//! [`StoryboardPlanner`] turns a narrative into an ordered set of captioned
//! visual panels with one text-completion call. [`MemePipeline`] chains the
//! planner and a render pool into the full story-to-images flow, passing
//! typed stage outputs forward and ending any stage failure through the
//! single error path.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extract;
mod pipeline;
mod planner;

pub use pipeline::{MemePipeline, RunAnalysis, RunReport};
pub use planner::{DEFAULT_PANELS, DEFAULT_STYLE, StoryboardPlanner};
