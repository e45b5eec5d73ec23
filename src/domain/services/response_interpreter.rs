use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::SynonymResult;

/// Shape the model is asked to produce. The echoed `word` field is tolerated
/// but only `synonyms` matters; unknown fields are ignored.
#[derive(Deserialize)]
struct ModelPayload {
    #[serde(default)]
    synonyms: Option<Vec<String>>,
}

/// Interpret the model's free-form answer as a [`SynonymResult`].
///
/// The text is scanned for the span running from the first `{` to the last
/// `}`, so prose before or after the payload is tolerated. The span is then
/// decoded strictly: it must be valid JSON carrying a `synonyms` array of
/// strings. Every failure mode degrades to [`SynonymResult::Raw`] holding the
/// original text unchanged (never an error, never a partial reconstruction),
/// so the caller always has something to show.
///
/// Pure function: same input, same result, no hidden state.
pub fn interpret_response(text: &str) -> SynonymResult {
    let Some(span) = brace_span(text) else {
        debug!("no JSON object found in model response");
        return SynonymResult::Raw(text.to_string());
    };

    match serde_json::from_str::<ModelPayload>(span) {
        Ok(ModelPayload {
            synonyms: Some(synonyms),
        }) => SynonymResult::List(synonyms),
        Ok(ModelPayload { synonyms: None }) => {
            debug!("model JSON carries no synonyms array; falling back to raw text");
            SynonymResult::Raw(text.to_string())
        }
        Err(e) => {
            warn!("could not parse model response as synonym JSON: {e}");
            SynonymResult::Raw(text.to_string())
        }
    }
}

/// The substring from the first `{` to the last `}`, or `None` when the text
/// has no such pair. Greedy on purpose: a wide span that swallows unrelated
/// brace fragments simply fails the strict decode above.
fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start > end {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpret_extracts_list_from_clean_json() {
        let text = r#"{"word":"happy","synonyms":["joyful","glad","cheerful"]}"#;
        let result = interpret_response(text);
        assert_eq!(
            result,
            SynonymResult::List(vec![
                "joyful".to_string(),
                "glad".to_string(),
                "cheerful".to_string()
            ])
        );
    }

    #[test]
    fn interpret_tolerates_surrounding_prose() {
        let text = r#"Sure! {"word":"happy","synonyms":["joyful","glad","cheerful"]}"#;
        let result = interpret_response(text);
        assert_eq!(
            result,
            SynonymResult::List(vec![
                "joyful".to_string(),
                "glad".to_string(),
                "cheerful".to_string()
            ])
        );
    }

    #[test]
    fn interpret_preserves_order_and_duplicates() {
        let text = r#"{"word":"big","synonyms":["large"," large","huge","large"]}"#;
        match interpret_response(text) {
            SynonymResult::List(items) => {
                assert_eq!(items, vec!["large", " large", "huge", "large"]);
            }
            other => panic!("expected a list, got {other:?}"),
        }
    }

    #[test]
    fn interpret_accepts_empty_synonym_array() {
        let text = r#"{"word":"xylophone","synonyms":[]}"#;
        assert_eq!(interpret_response(text), SynonymResult::List(vec![]));
    }

    #[test]
    fn interpret_accepts_payload_without_word_field() {
        let text = r#"{"synonyms":["quick","speedy"]}"#;
        assert_eq!(
            interpret_response(text),
            SynonymResult::List(vec!["quick".to_string(), "speedy".to_string()])
        );
    }

    #[test]
    fn interpret_returns_raw_when_no_braces_exist() {
        let text = "I think synonyms include fast-moving, sprint, dash.";
        assert_eq!(interpret_response(text), SynonymResult::Raw(text.to_string()));
    }

    #[test]
    fn interpret_returns_raw_when_span_is_not_json() {
        let text = "here is { not json at all }";
        assert_eq!(interpret_response(text), SynonymResult::Raw(text.to_string()));
    }

    #[test]
    fn interpret_returns_raw_when_synonyms_missing() {
        let text = r#"{"word":"fast"}"#;
        assert_eq!(interpret_response(text), SynonymResult::Raw(text.to_string()));
    }

    #[test]
    fn interpret_returns_raw_when_synonyms_is_not_a_sequence() {
        let text = r#"{"word":"fast","synonyms":"rapid"}"#;
        assert_eq!(interpret_response(text), SynonymResult::Raw(text.to_string()));
    }

    #[test]
    fn interpret_returns_raw_when_sequence_holds_non_strings() {
        let text = r#"{"word":"fast","synonyms":["rapid",7]}"#;
        assert_eq!(interpret_response(text), SynonymResult::Raw(text.to_string()));
    }

    #[test]
    fn interpret_returns_raw_when_braces_are_reversed() {
        let text = "} backwards {";
        assert_eq!(interpret_response(text), SynonymResult::Raw(text.to_string()));
    }

    // The span runs from the first `{` to the last `}` across the whole text,
    // so two fragments fuse into one invalid span and the full text comes back.
    #[test]
    fn interpret_over_captures_across_multiple_fragments() {
        let text = r#"Example: {"synonyms":["a"]} Answer: {"synonyms":["b"]}"#;
        assert_eq!(interpret_response(text), SynonymResult::Raw(text.to_string()));
    }

    #[test]
    fn interpret_returns_raw_when_prose_trails_with_a_brace() {
        let text = r#"{"word":"odd","synonyms":["strange"]} bye }"#;
        assert_eq!(interpret_response(text), SynonymResult::Raw(text.to_string()));
    }

    #[test]
    fn interpret_is_idempotent_on_fallback_input() {
        let text = "{ broken";
        let first = interpret_response(text);
        let second = interpret_response(text);
        assert_eq!(first, second);
        assert_eq!(first, SynonymResult::Raw(text.to_string()));
    }
}
