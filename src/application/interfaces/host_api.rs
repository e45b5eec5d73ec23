use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::SynonymResult;

/// A command the host invokes with the user's current selection.
///
/// The handler receives the host back as a parameter so it can reach the
/// display surfaces without holding a reference to the host itself.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(&self, selection: String, host: &dyn HostApi);
}

/// A command registration handed to the host: stable id, palette name, and
/// the handler to run.
pub struct CommandRegistration {
    id: &'static str,
    name: &'static str,
    handler: Arc<dyn CommandHandler>,
}

impl CommandRegistration {
    pub fn new(id: &'static str, name: &'static str, handler: Arc<dyn CommandHandler>) -> Self {
        Self { id, name, handler }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn handler(&self) -> Arc<dyn CommandHandler> {
        Arc::clone(&self.handler)
    }
}

/// The capabilities the host application injects into the plugin: command
/// registration, access to the live selection, and the two display surfaces.
///
/// Rendering contract for [`HostApi::show_result`]: a `List` renders as an
/// enumerated list, a `Raw` as preformatted text. [`HostApi::notify`] is a
/// short transient notice and is the only surface used for failures.
pub trait HostApi: Send + Sync {
    fn register_command(&self, registration: CommandRegistration);

    fn selection(&self) -> String;

    fn notify(&self, message: &str);

    fn show_result(&self, word: &str, result: &SynonymResult);
}
