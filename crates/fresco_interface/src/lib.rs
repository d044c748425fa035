//! Trait definitions for the Fresco meme generation library.
//!
//! Two driver families cover the pipeline's external collaborators:
//! [`TextDriver`] for the story-analysis completion call and [`ImageDriver`]
//! for rendering prompts to image bytes. Backends that can also transform
//! existing images implement the [`ImageEditing`] capability on top of
//! [`ImageDriver`].
//!
//! Drivers are constructed explicitly and passed into the engines that use
//! them, so any component can run against a substitute implementation in
//! tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ImageDriver, ImageEditing, TextDriver};
