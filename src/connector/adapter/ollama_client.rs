use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::application::GenerationClient;
use crate::domain::DomainError;

/// Default target: Ollama running locally on its standard port.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
const DEFAULT_MODEL: &str = "llama3.1";
/// How long the server should keep the model loaded between requests.
const DEFAULT_KEEP_ALIVE: &str = "2h";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Ollama generate API request payload.
#[derive(serde::Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    keep_alive: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Minimal subset of the generate API response envelope we care about: the
/// field holding the model's generated text. Other fields are ignored.
#[derive(Deserialize)]
struct GenerateEnvelope {
    response: String,
}

/// Configuration for [`OllamaClient`], passed explicitly at construction.
/// The adapter reads nothing from the environment.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    endpoint: String,
    model: String,
    keep_alive: String,
    timeout: Duration,
}

impl OllamaConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn keep_alive(&self) -> &str {
        &self.keep_alive
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            keep_alive: DEFAULT_KEEP_ALIVE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// HTTP adapter for the Ollama `/api/generate` endpoint.
///
/// Implements [`GenerationClient`] so the lookup use case stays decoupled
/// from transport and serialization details. One POST per call with streaming
/// disabled; the full response is awaited. A request that outlives the
/// configured timeout fails as a transport error. No retries, no caching.
pub struct OllamaClient {
    client: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_default();
        Self { client, config }
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }
}

#[async_trait]
impl GenerationClient for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        let request = GenerateRequest {
            model: self.config.model(),
            keep_alive: self.config.keep_alive(),
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(self.config.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("OllamaClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OllamaClient: endpoint returned {status}: {body}");
            return Err(DomainError::transport(format!(
                "OllamaClient: endpoint returned {status}"
            )));
        }

        let envelope: GenerateEnvelope = response.json().await.map_err(|e| {
            DomainError::envelope(format!("OllamaClient: failed to decode response envelope: {e}"))
        })?;

        Ok(envelope.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_payload_disables_streaming() {
        let request = GenerateRequest {
            model: "llama3.1",
            keep_alive: "2h",
            prompt: "Provide synonyms for the word \"happy\".",
            stream: false,
        };

        let body = serde_json::to_value(&request).expect("serializable payload");
        assert_eq!(body["stream"], serde_json::Value::Bool(false));
        assert_eq!(body["model"], "llama3.1");
        assert_eq!(body["keep_alive"], "2h");
        assert!(body["prompt"].as_str().unwrap().contains("happy"));
    }

    #[test]
    fn config_defaults_target_local_ollama() {
        let config = OllamaConfig::default();
        assert_eq!(config.endpoint(), "http://localhost:11434/api/generate");
        assert_eq!(config.model(), "llama3.1");
        assert_eq!(config.keep_alive(), "2h");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn config_builder_overrides_apply() {
        let config = OllamaConfig::default()
            .with_endpoint("http://10.0.0.2:11434/api/generate")
            .with_model("mistral")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.endpoint(), "http://10.0.0.2:11434/api/generate");
        assert_eq!(config.model(), "mistral");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn envelope_decoding_ignores_extra_fields() {
        let body = r#"{"model":"llama3.1","response":"{\"synonyms\":[]}","done":true}"#;
        let envelope: GenerateEnvelope = serde_json::from_str(body).expect("valid envelope");
        assert_eq!(envelope.response, r#"{"synonyms":[]}"#);
    }

    #[test]
    fn envelope_decoding_fails_without_response_field() {
        let body = r#"{"model":"llama3.1","done":true}"#;
        assert!(serde_json::from_str::<GenerateEnvelope>(body).is_err());
    }
}
