use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::application::{CommandHandler, HostApi, LookupSynonymsUseCase};
use crate::domain::DomainError;

/// Command id and palette name, as registered with the host.
pub const COMMAND_ID: &str = "get-synonyms";
pub const COMMAND_NAME: &str = "Get Synonyms for Selected Text";

/// The registered command: gates the selection, runs the lookup, and routes
/// the outcome to the right display surface.
///
/// All failures stop here. The user gets a short transient notice, the full
/// error goes to the log, and nothing propagates into the host. Only a
/// successful lookup reaches [`HostApi::show_result`].
pub struct SynonymCommand {
    lookup: Arc<LookupSynonymsUseCase>,
}

impl SynonymCommand {
    pub fn new(lookup: Arc<LookupSynonymsUseCase>) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl CommandHandler for SynonymCommand {
    async fn execute(&self, selection: String, host: &dyn HostApi) {
        match self.lookup.execute(&selection).await {
            Ok(result) => host.show_result(&selection, &result),
            Err(DomainError::EmptySelection) => host.notify("No text selected"),
            Err(e) => {
                error!("synonym lookup failed: {e}");
                host.notify("Error fetching synonyms");
            }
        }
    }
}
