use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A single synonym lookup, wrapping the text the user selected.
///
/// The rendered prompt and the serialized request body are derived per call;
/// nothing here outlives the request that consumed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymRequest {
    word: String,
}

impl SynonymRequest {
    /// Build a request from the live selection. A selection that is empty or
    /// whitespace-only is rejected before any network activity can happen;
    /// otherwise the selection is kept exactly as the user made it.
    pub fn new(selection: impl Into<String>) -> Result<Self, DomainError> {
        let word: String = selection.into();
        if word.trim().is_empty() {
            return Err(DomainError::EmptySelection);
        }
        Ok(Self { word })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Render the generation prompt. The model is told to answer with a bare
    /// JSON object so the interpreter can dig it out of chatty output.
    pub fn prompt(&self) -> String {
        format!(
            "Provide synonyms for the word \"{word}\". Respond ONLY with a JSON object in the following exact format, and nothing else:\n\
             {{\n  \"word\": \"{word}\",\n  \"synonyms\": [\"synonym1\", \"synonym2\", \"synonym3\"]\n}}\n\
             Ensure the response is valid JSON. Do not include any explanations or additional text.",
            word = self.word
        )
    }
}

/// Outcome of interpreting the model's free-form answer.
///
/// Exactly one shape is ever produced: the decoded synonym list, or the
/// unmodified response text when structured extraction fails. The raw
/// fallback keeps the answer displayable either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SynonymResult {
    /// Synonyms decoded from the model's JSON payload, in model order.
    List(Vec<String>),
    /// The model's raw output, shown when no payload could be extracted.
    Raw(String),
}

impl SynonymResult {
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn synonyms(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            Self::Raw(_) => None,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Self::List(items) => format!("{} synonyms", items.len()),
            Self::Raw(text) => format!("raw text ({} bytes)", text.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rejects_empty_selection() {
        assert!(SynonymRequest::new("").is_err());
        assert!(SynonymRequest::new("   \n\t").is_err());
    }

    #[test]
    fn test_request_keeps_selection_verbatim() {
        let request = SynonymRequest::new("quick fix").expect("non-empty selection");
        assert_eq!(request.word(), "quick fix");
    }

    #[test]
    fn test_prompt_contains_word_verbatim() {
        let request = SynonymRequest::new("happy").expect("non-empty selection");
        let prompt = request.prompt();

        assert!(prompt.contains("\"happy\""));
        assert!(prompt.contains("Respond ONLY with a JSON object"));
        assert!(prompt.contains("\"synonyms\""));
    }

    #[test]
    fn test_result_accessors() {
        let list = SynonymResult::List(vec!["joyful".to_string(), "glad".to_string()]);
        assert!(list.is_list());
        assert_eq!(list.synonyms(), Some(&["joyful".to_string(), "glad".to_string()][..]));

        let raw = SynonymResult::Raw("no idea".to_string());
        assert!(!raw.is_list());
        assert_eq!(raw.synonyms(), None);
    }
}
