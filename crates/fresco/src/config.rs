//! Application configuration.
//!
//! Loads settings from TOML files with a precedence system:
//! - Bundled defaults (include_str! from fresco.toml)
//! - User override (./fresco.toml or ~/.config/fresco/fresco.toml)

use config::{Config, File, FileFormat};
use fresco_error::{ConfigError, FrescoError, FrescoResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../fresco.toml");

/// Top-level Fresco configuration.
///
/// # Example
///
/// ```no_run
/// use fresco::FrescoConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Load configuration (bundled defaults + user overrides)
/// let config = FrescoConfig::load()?;
/// println!("rendering with {}", config.image_model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FrescoConfig {
    /// Text model used for story analysis
    pub text_model: String,
    /// Image model used for rendering and editing
    pub image_model: String,
    /// Number of panels planned per story
    pub panels: usize,
    /// Style line appended to every image prompt
    pub style: String,
    /// Concurrent render workers, hard-capped by the pool
    pub workers: usize,
    /// Root directory session folders are created under
    pub output_root: String,
}

impl FrescoConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> FrescoResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                FrescoError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                FrescoError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (fresco.toml shipped with the binary)
    /// 2. User config in home directory (~/.config/fresco/fresco.toml)
    /// 3. User config in current directory (./fresco.toml)
    ///
    /// User config files are optional and will be silently skipped if not found.
    #[instrument]
    pub fn load() -> FrescoResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/fresco/fresco.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("fresco").required(false));

        builder
            .build()
            .map_err(|e| {
                FrescoError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                FrescoError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_deserialize() {
        let config: FrescoConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .expect("build")
            .try_deserialize()
            .expect("parse");

        assert_eq!(config.text_model, "gpt-4o");
        assert_eq!(config.image_model, "gpt-image-1");
        assert_eq!(config.panels, 9);
        assert_eq!(config.workers, 10);
        assert_eq!(config.output_root, "generated_images");
        assert!(config.style.contains("Cartoon meme style"));
    }

    #[test]
    fn from_file_reads_a_complete_config() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("custom.toml");
        std::fs::write(
            &path,
            r#"
text_model = "local-chat"
image_model = "local-paint"
panels = 4
style = "woodcut"
workers = 2
output_root = "out"
"#,
        )
        .expect("write");

        let config = FrescoConfig::from_file(&path).expect("load");
        assert_eq!(config.text_model, "local-chat");
        assert_eq!(config.image_model, "local-paint");
        assert_eq!(config.panels, 4);
        assert_eq!(config.workers, 2);
    }

    #[test]
    fn from_file_rejects_missing_file() {
        let err = FrescoConfig::from_file("does/not/exist.toml")
            .err()
            .expect("must fail");
        assert!(format!("{err}").contains("Configuration Error"));
    }
}
