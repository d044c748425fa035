//! Session directories and image persistence for Fresco.
//!
//! Each bulk render batch writes into its own session directory. The
//! [`SessionStore`] allocates fresh timestamped directories (or adopts a
//! caller-supplied one), and a [`Session`] hands out the deterministic
//! zero-padded file path for each task index, so filenames within a session
//! never collide.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod session;
mod write;

pub use session::{DEFAULT_OUTPUT_ROOT, ImagePrefix, Session, SessionStore};
pub use write::{ensure_readable, write_image};
