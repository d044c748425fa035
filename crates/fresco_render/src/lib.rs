//! Bounded-concurrency bulk image rendering for Fresco.
//!
//! The [`RenderPool`] fans an ordered list of prompts out to an injected
//! image driver, at most ten requests in flight at once, and reassembles the
//! per-task outcomes into submission order no matter how completion
//! interleaves. One failing task never aborts its batch; the pool is the
//! failure boundary, and only malformed input to the pool itself surfaces as
//! an error.
//!
//! # Example
//!
//! ```no_run
//! use fresco_models::OpenAiImageDriver;
//! use fresco_render::RenderPool;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = OpenAiImageDriver::new("gpt-image-1")?;
//! let pool = RenderPool::new(driver);
//!
//! let prompts = vec!["a cat meme".to_string(), "a dog meme".to_string()];
//! let report = pool.generate_batch(&prompts, None, None).await?;
//! println!("{}", report.message);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod pool;
mod worker;

pub use fresco_storage::SessionStore;
pub use pool::{MAX_WORKERS, RenderPool};
