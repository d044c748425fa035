//! Tests for the storyboard planner with a scripted text driver.

use async_trait::async_trait;
use fresco_core::{CompletionRequest, CompletionResponse, Role};
use fresco_error::FrescoResult;
use fresco_interface::TextDriver;
use fresco_storyboard::StoryboardPlanner;
use std::sync::{Arc, Mutex};

/// Text driver that replays a canned response and records what it was asked.
struct ScriptedText {
    reply: String,
    seen: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl ScriptedText {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl TextDriver for ScriptedText {
    async fn complete(&self, req: &CompletionRequest) -> FrescoResult<CompletionResponse> {
        self.seen.lock().expect("seen lock").push(req.clone());
        Ok(CompletionResponse::new(vec![self.reply.clone()]))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-text-1"
    }
}

const PANEL_REPLY: &str = r#"Here you go:
[
  {"visual": "a developer squinting at a screen", "caption": "day three of the semicolon hunt"},
  {"visual": "coffee arcing toward a laptop", "caption": "the fix nobody asked for"}
]"#;

#[tokio::test]
async fn test_plan_sends_persona_and_story() {
    let driver = ScriptedText::new(PANEL_REPLY);
    let seen = Arc::clone(&driver.seen);
    let planner = StoryboardPlanner::new(driver);

    planner.plan("A developer fights a bug.").await.expect("plan");

    let requests = seen.lock().expect("seen lock");
    assert_eq!(requests.len(), 1);
    let messages = &requests[0].messages;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::System);
    assert!(
        messages[0]
            .content
            .contains("creative meme generator assistant")
    );
    assert_eq!(messages[1].role, Role::User);
    assert!(messages[1].content.contains("A developer fights a bug."));
    assert!(messages[1].content.contains("9 key narrative points"));
    assert!(messages[1].content.contains("exactly 9 meme prompts"));
}

#[tokio::test]
async fn test_panel_count_override_changes_the_request() {
    let driver = ScriptedText::new(PANEL_REPLY);
    let seen = Arc::clone(&driver.seen);
    let planner = StoryboardPlanner::new(driver).with_panels(5);

    planner.plan("story").await.expect("plan");

    let requests = seen.lock().expect("seen lock");
    assert!(requests[0].messages[1].content.contains("5 key narrative points"));
    assert!(requests[0].messages[1].content.contains("exactly 5 meme prompts"));
}

#[test]
fn test_panel_count_is_clamped_to_one() {
    let planner = StoryboardPlanner::new(ScriptedText::new("")).with_panels(0);
    assert_eq!(planner.panels(), 1);
}

#[tokio::test]
async fn test_plan_parses_json_panels() {
    let planner = StoryboardPlanner::new(ScriptedText::new(PANEL_REPLY));

    let storyboard = planner.plan("story").await.expect("plan");

    assert_eq!(storyboard.len(), 2);
    assert_eq!(
        storyboard.panels[0].visual,
        "a developer squinting at a screen"
    );
    assert_eq!(
        storyboard.panels[1].caption,
        "the fix nobody asked for"
    );
}

#[tokio::test]
async fn test_plan_falls_back_to_paragraphs() {
    let reply = "Act one: the developer meets the bug and loses the first round.\n\n\
                 Act two: coffee enters the story at the worst possible moment.";
    let planner = StoryboardPlanner::new(ScriptedText::new(reply));

    let storyboard = planner.plan("story").await.expect("plan");

    assert_eq!(storyboard.len(), 9);
    assert!(storyboard.panels[0].visual.contains("Act one"));
    assert!(storyboard.panels[1].visual.contains("Act two"));
    assert_eq!(storyboard.panels[2].visual, "Generic meme scene 3");
    assert_eq!(storyboard.panels[8].visual, "Generic meme scene 9");
}

#[tokio::test]
async fn test_plan_surfaces_malformed_array() {
    let planner = StoryboardPlanner::new(ScriptedText::new(r#"[{"visual": }]"#));

    let err = planner.plan("story").await.err().expect("must fail");
    assert!(
        format!("{err}").contains("Failed to parse meme prompts"),
        "got: {err}"
    );
}
