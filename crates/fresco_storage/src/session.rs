//! Session directory allocation and deterministic output paths.

use fresco_error::{StorageError, StorageErrorKind, StorageResult};
use std::path::{Path, PathBuf};

/// Default root directory for freshly allocated sessions.
pub const DEFAULT_OUTPUT_ROOT: &str = "generated_images";

/// Filename prefixes for the two kinds of render output.
///
/// # Examples
///
/// ```
/// use fresco_storage::ImagePrefix;
///
/// assert_eq!(ImagePrefix::Image.to_string(), "image");
/// assert_eq!(ImagePrefix::Edited.to_string(), "edited_image");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ImagePrefix {
    /// Output of a pure generation task
    #[strum(serialize = "image")]
    Image,
    /// Output of an edit task
    #[strum(serialize = "edited_image")]
    Edited,
}

/// Allocates session directories under a configured root.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_ROOT)
    }
}

impl SessionStore {
    /// Create a store rooted at the given directory.
    ///
    /// The root is not created until a session is allocated under it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory new sessions are allocated under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Allocate a fresh timestamped session directory.
    ///
    /// The name carries seconds resolution (`session_%Y%m%d_%H%M%S`);
    /// batches started within the same second share a directory, which is
    /// accepted at human invocation cadence.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    #[tracing::instrument(skip(self))]
    pub async fn create_session(&self) -> StorageResult<Session> {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let dir = self.root.join(format!("session_{stamp}"));
        Self::materialize(dir).await
    }

    /// Adopt a caller-supplied session directory, creating it if absent.
    ///
    /// The directory is reused as-is, which lets a caller route several
    /// batches into one place.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    #[tracing::instrument(skip(self, dir), fields(dir = %dir.as_ref().display()))]
    pub async fn open_session(&self, dir: impl AsRef<Path>) -> StorageResult<Session> {
        Self::materialize(dir.as_ref().to_path_buf()).await
    }

    /// Resolve a session from an optional explicit directory.
    ///
    /// `Some(dir)` adopts the given directory, `None` allocates a fresh one.
    pub async fn resolve(&self, explicit: Option<&Path>) -> StorageResult<Session> {
        match explicit {
            Some(dir) => self.open_session(dir).await,
            None => self.create_session().await,
        }
    }

    async fn materialize(dir: PathBuf) -> StorageResult<Session> {
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;

        tracing::debug!(dir = %dir.display(), "Session directory ready");
        Ok(Session { dir })
    }
}

/// One batch's output directory.
///
/// # Examples
///
/// ```
/// use fresco_storage::{ImagePrefix, Session};
/// use std::path::PathBuf;
///
/// let session = Session::at("generated_images/session_20250101_120000");
/// let path = session.path_for(ImagePrefix::Image, 3);
/// assert!(path.ends_with("image_003.png"));
///
/// let edited = session.path_for(ImagePrefix::Edited, 42);
/// assert!(edited.ends_with("edited_image_042.png"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    dir: PathBuf,
}

impl Session {
    /// Wrap an existing directory without touching the filesystem.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The session directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Deterministic output path for a task index.
    ///
    /// Indices are zero-padded to three digits; wider indices keep their
    /// natural width, so paths stay collision-free past 999.
    pub fn path_for(&self, prefix: ImagePrefix, index: usize) -> PathBuf {
        self.dir.join(format!("{prefix}_{index:03}.png"))
    }
}
