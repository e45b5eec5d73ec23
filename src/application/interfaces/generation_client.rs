use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending a generation prompt to a language model and
/// receiving its raw text response.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers (e.g. [`crate::application::LookupSynonymsUseCase`])
/// remain decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Send `prompt` to the model and return the generated text exactly as
    /// the endpoint produced it, with no interpretation applied.
    ///
    /// One outbound call per invocation; implementations must not retry.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;
}
