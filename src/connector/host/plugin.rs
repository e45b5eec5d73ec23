use std::sync::Arc;

use tracing::info;

use crate::application::{CommandRegistration, HostApi, LookupSynonymsUseCase};
use crate::connector::host::{SynonymCommand, COMMAND_ID, COMMAND_NAME};

/// The component the host application drives: [`SynonymPlugin::activate`]
/// wires the lookup command into the injected host capabilities,
/// [`SynonymPlugin::deactivate`] is the matching teardown hook.
///
/// Nothing is inherited from the host; every capability arrives as an
/// explicit dependency.
pub struct SynonymPlugin {
    lookup: Arc<LookupSynonymsUseCase>,
}

impl SynonymPlugin {
    pub fn new(lookup: Arc<LookupSynonymsUseCase>) -> Self {
        Self { lookup }
    }

    /// Register the synonym command against the host.
    pub fn activate(&self, host: &dyn HostApi) {
        let handler = Arc::new(SynonymCommand::new(Arc::clone(&self.lookup)));
        host.register_command(CommandRegistration::new(COMMAND_ID, COMMAND_NAME, handler));
        info!("registered command {COMMAND_ID} ({COMMAND_NAME})");
    }

    /// Nothing outlives the registration; the host drops the handler when it
    /// unloads the plugin.
    pub fn deactivate(&self) {}
}
