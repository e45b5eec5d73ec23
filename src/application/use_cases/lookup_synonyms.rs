use std::sync::Arc;

use tracing::debug;

use crate::application::GenerationClient;
use crate::domain::{interpret_response, DomainError, SynonymRequest, SynonymResult};

/// Look up synonyms for a selected word: render the prompt, run a single
/// generation round-trip, and interpret whatever text comes back.
///
/// Transport and envelope failures propagate to the caller. An answer the
/// interpreter cannot decode is not a failure: it surfaces as
/// [`SynonymResult::Raw`] so the user still sees the model's output.
pub struct LookupSynonymsUseCase {
    client: Arc<dyn GenerationClient>,
}

impl LookupSynonymsUseCase {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, selection: &str) -> Result<SynonymResult, DomainError> {
        let request = SynonymRequest::new(selection)?;
        debug!("looking up synonyms for {:?}", request.word());

        let text = self.client.generate(&request.prompt()).await?;
        Ok(interpret_response(&text))
    }
}
