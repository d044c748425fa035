//! Storyboard panels.

use serde::{Deserialize, Serialize};

/// One planned meme panel: a visual scene plus the caption to draw on it.
///
/// Panels arrive as JSON objects in analysis responses; either field may be
/// missing and defaults to empty.
///
/// # Examples
///
/// ```
/// use fresco_core::PanelPrompt;
///
/// let panel = PanelPrompt::new("a cat staring at a laptop", "me debugging at 3am");
/// let prompt = panel.image_prompt("Cartoon meme style");
///
/// assert!(prompt.contains("a cat staring at a laptop"));
/// assert!(prompt.contains("\"me debugging at 3am\""));
/// assert!(prompt.contains("Style: Cartoon meme style"));
///
/// let parsed: PanelPrompt = serde_json::from_str(r#"{"visual": "a dog in a tie"}"#)?;
/// assert_eq!(parsed.caption, "");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelPrompt {
    /// The visual scene to depict
    #[serde(default)]
    pub visual: String,
    /// The caption text to appear on the image; may be empty
    #[serde(default)]
    pub caption: String,
}

impl PanelPrompt {
    /// Create a panel from a visual description and caption.
    pub fn new(visual: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            visual: visual.into(),
            caption: caption.into(),
        }
    }

    /// Format this panel as a backend-ready image prompt.
    ///
    /// The caption block is omitted when the caption is empty, which happens
    /// for panels recovered from free-text analysis responses.
    pub fn image_prompt(&self, style: &str) -> String {
        if self.caption.is_empty() {
            format!(
                "Create a meme image with the following scene: {}\n\nStyle: {}",
                self.visual, style
            )
        } else {
            format!(
                "Create a meme image with the following scene: {}\n\n\
                 The image should include the following text caption:\n\"{}\"\n\n\
                 Style: {}",
                self.visual, self.caption, style
            )
        }
    }
}

/// An ordered set of panels planned from one story.
///
/// # Examples
///
/// ```
/// use fresco_core::{PanelPrompt, Storyboard};
///
/// let storyboard = Storyboard::new(vec![
///     PanelPrompt::new("scene one", "caption one"),
///     PanelPrompt::new("scene two", "caption two"),
/// ]);
///
/// assert_eq!(storyboard.len(), 2);
/// assert_eq!(storyboard.image_prompts("retro").len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Storyboard {
    /// The panels in narrative order
    pub panels: Vec<PanelPrompt>,
}

impl Storyboard {
    /// Create a storyboard from panels in narrative order.
    pub fn new(panels: Vec<PanelPrompt>) -> Self {
        Self { panels }
    }

    /// Number of panels.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the storyboard has no panels.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Backend-ready image prompts for every panel, in order.
    pub fn image_prompts(&self, style: &str) -> Vec<String> {
        self.panels.iter().map(|p| p.image_prompt(style)).collect()
    }
}
