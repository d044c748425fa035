//! Story analysis into a storyboard of captioned panels.

use crate::extract;
use fresco_core::{CompletionRequest, Message, Role, Storyboard};
use fresco_error::FrescoResult;
use fresco_interface::TextDriver;
use tracing::{debug, info, instrument};

/// Number of panels planned when the caller does not override it.
pub const DEFAULT_PANELS: usize = 9;

/// Style line appended to every rendered panel prompt by default.
pub const DEFAULT_STYLE: &str = "Cartoon meme style, vibrant colors, modern, humorous";

/// Plans a story into captioned visual panels with one completion call.
///
/// The response is expected to carry a JSON array of `{ visual, caption }`
/// entries; a model that answers in prose degrades to visual-only panels cut
/// from its paragraphs.
pub struct StoryboardPlanner<D> {
    driver: D,
    panels: usize,
    style: String,
}

impl<D: TextDriver> StoryboardPlanner<D> {
    /// Create a planner with the default panel count and style.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            panels: DEFAULT_PANELS,
            style: DEFAULT_STYLE.to_string(),
        }
    }

    /// Set the number of panels to plan, at least one.
    pub fn with_panels(mut self, panels: usize) -> Self {
        self.panels = panels.max(1);
        self
    }

    /// Set the style line appended to every image prompt.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// The configured panel count.
    pub fn panels(&self) -> usize {
        self.panels
    }

    /// The configured style line.
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Break a story down into its storyboard.
    ///
    /// The storyboard carries whatever panel count the model actually
    /// produced; only the prose fallback is padded to the configured count.
    ///
    /// # Errors
    ///
    /// Returns an error when the completion call fails or when the response
    /// carries a JSON array that cannot be parsed into panels.
    #[instrument(skip(self, story), fields(panels = self.panels, model = self.driver.model_name()))]
    pub async fn plan(&self, story: &str) -> FrescoResult<Storyboard> {
        let request = CompletionRequest::new(vec![
            Message::new(Role::System, PERSONA),
            Message::new(Role::User, analysis_prompt(story, self.panels)),
        ]);
        debug!("Requesting story analysis");
        let response = self.driver.complete(&request).await?;
        let raw = response.text();

        let panels = match extract::parse_panels(&raw)? {
            Some(panels) => panels,
            None => {
                debug!("No JSON array in analysis response, falling back to paragraphs");
                extract::paragraph_panels(&raw, self.panels)
            }
        };
        info!(panels = panels.len(), "Story analysis complete");
        Ok(Storyboard::new(panels))
    }
}

const PERSONA: &str = "You are a creative meme generator assistant. Your task is to analyze stories \
and convert them into engaging visual memes. Each meme should include a short \
caption (15-20 words maximum) that helps tell the story in a funny and \
insightful way. The sequence of memes should capture the overall narrative \
arc of the story.\n\n\
Guidelines for creating good meme prompts:\n\
1. Each prompt should be specific and detailed about the visual scene\n\
2. Include style specification (e.g., 'pixar style', 'photorealistic')\n\
3. Mention any text that should appear on the meme\n\
4. Make sure the sequence flows well and tells a coherent story";

fn analysis_prompt(story: &str, panels: usize) -> String {
    format!(
        "Please analyze the following story and break it down into {panels} key narrative points \
         that would make good meme images. For each point:\n\
         1. Identify the key moment, character interaction, or plot development\n\
         2. Suggest a visual scene that captures this moment\n\
         3. Create a short, funny caption (15-20 words maximum) that is moving and insightful\n\
         4. Include style specification (e.g., 'pixar style', 'photorealistic')\n\
         5. Mention any text that should appear on the meme\n\
         6. Make sure the sequence flows well and tells a coherent story\n\n\
         Story:\n\
         {story}\n\n\
         Respond with a JSON structure that contains an array of exactly {panels} meme prompts. \
         Each prompt should have a detailed visual description and the text to appear on the meme. \
         Format each prompt to work well with the OpenAI image generation API."
    )
}
