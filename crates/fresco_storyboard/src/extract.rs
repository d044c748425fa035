//! Panel extraction from analysis responses.

use fresco_core::PanelPrompt;
use fresco_error::{StoryError, StoryErrorKind, StoryResult};

/// Locate the JSON array embedded in a completion, if any.
///
/// Models wrap the array in prose or code fences, so the slice runs from the
/// first array opener to the last closing bracket.
fn locate_array(raw: &str) -> Option<&str> {
    let start = raw
        .find("[{\"")
        .or_else(|| raw.find("[{\n"))
        .or_else(|| raw.find('['))?;
    let end = raw.rfind(']')?;
    (end > start).then(|| &raw[start..=end])
}

/// Parse panels out of the response's JSON array.
///
/// Returns `Ok(None)` when the response carries no array at all; a located
/// but malformed array is an extraction error, not a fallback case.
pub(crate) fn parse_panels(raw: &str) -> StoryResult<Option<Vec<PanelPrompt>>> {
    let Some(slice) = locate_array(raw) else {
        return Ok(None);
    };
    serde_json::from_str(slice)
        .map(Some)
        .map_err(|e| StoryError::new(StoryErrorKind::PromptExtraction(e.to_string())))
}

/// Recover visual-only panels from a free-text response.
///
/// Blank-line separated chunks longer than 20 characters are kept, up to
/// `limit`, then generic placeholder scenes pad the storyboard out to the
/// requested count.
pub(crate) fn paragraph_panels(raw: &str, limit: usize) -> Vec<PanelPrompt> {
    let mut panels: Vec<PanelPrompt> = raw
        .split("\n\n")
        .filter(|part| part.trim().chars().count() > 20)
        .take(limit)
        .map(|part| PanelPrompt::new(part, ""))
        .collect();
    while panels.len() < limit {
        panels.push(PanelPrompt::new(
            format!("Generic meme scene {}", panels.len() + 1),
            "",
        ));
    }
    panels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_wrapped_in_prose() {
        let raw = r#"Here are your memes:
[{"visual": "a cat at a keyboard", "caption": "just one more compile"}]
Enjoy!"#;
        let panels = parse_panels(raw).expect("parse").expect("array");
        assert_eq!(panels.len(), 1);
        assert_eq!(panels[0].visual, "a cat at a keyboard");
        assert_eq!(panels[0].caption, "just one more compile");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let raw = r#"[{"visual": "a dog"}, {"caption": "orphan caption"}]"#;
        let panels = parse_panels(raw).expect("parse").expect("array");
        assert_eq!(panels[0].caption, "");
        assert_eq!(panels[1].visual, "");
    }

    #[test]
    fn prose_without_array_yields_none() {
        let raw = "The story has three acts.\n\nEach act builds on the last.";
        assert!(parse_panels(raw).expect("parse").is_none());
    }

    #[test]
    fn malformed_array_is_an_extraction_error() {
        let raw = r#"Sure: [{"visual": }]"#;
        let err = parse_panels(raw).err().expect("must fail");
        assert!(
            format!("{err}").contains("Failed to parse meme prompts"),
            "got: {err}"
        );
    }

    #[test]
    fn paragraph_fallback_keeps_substantive_chunks_and_pads() {
        let raw = "short\n\n\
                   The hero discovers the ancient map in the attic.\n\n\
                   ok\n\n\
                   A storm scatters the crew across the island.";
        let panels = paragraph_panels(raw, 4);

        assert_eq!(panels.len(), 4);
        assert!(panels[0].visual.contains("ancient map"));
        assert!(panels[1].visual.contains("storm"));
        assert_eq!(panels[2].visual, "Generic meme scene 3");
        assert_eq!(panels[3].visual, "Generic meme scene 4");
        assert!(panels.iter().all(|p| p.caption.is_empty()));
    }

    #[test]
    fn paragraph_fallback_counts_characters_not_bytes() {
        // 18 characters but 33 bytes; still below the substance threshold.
        let raw = "Огонь горит в доме\n\n\
                   Пожарные мчатся по улицам спящего города.";
        let panels = paragraph_panels(raw, 2);

        assert_eq!(panels.len(), 2);
        assert!(panels[0].visual.contains("Пожарные"));
        assert_eq!(panels[1].visual, "Generic meme scene 2");
    }

    #[test]
    fn paragraph_fallback_caps_at_the_limit() {
        let raw = (0..12)
            .map(|i| format!("Paragraph number {i} with plenty of substance in it."))
            .collect::<Vec<_>>()
            .join("\n\n");
        let panels = paragraph_panels(&raw, 9);

        assert_eq!(panels.len(), 9);
        assert!(panels.iter().all(|p| p.visual.starts_with("Paragraph")));
    }
}
