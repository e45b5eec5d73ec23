pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    CommandHandler, CommandRegistration, GenerationClient, HostApi, LookupSynonymsUseCase,
};

pub use connector::{
    MockGenerationClient, OllamaClient, OllamaConfig, SynonymCommand, SynonymPlugin, TerminalHost,
    COMMAND_ID, COMMAND_NAME, DEFAULT_ENDPOINT,
};

pub use domain::{interpret_response, DomainError, SynonymRequest, SynonymResult};
