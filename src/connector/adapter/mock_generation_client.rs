use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::GenerationClient;
use crate::domain::DomainError;

/// A scripted [`GenerationClient`] for tests.
///
/// Responses are queued up front and handed back in order, and every call is
/// counted so tests can assert how many round-trips actually happened. An
/// exhausted queue is reported as a transport error rather than hanging.
#[derive(Default)]
pub struct MockGenerationClient {
    responses: Mutex<VecDeque<Result<String, DomainError>>>,
    calls: AtomicUsize,
}

impl MockGenerationClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, text: impl Into<String>) {
        self.responses
            .lock()
            .expect("response queue lock")
            .push_back(Ok(text.into()));
    }

    pub fn push_error(&self, error: DomainError) {
        self.responses
            .lock()
            .expect("response queue lock")
            .push_back(Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        debug!("mock generation call, prompt of {} bytes", prompt.len());

        self.responses
            .lock()
            .expect("response queue lock")
            .pop_front()
            .unwrap_or_else(|| {
                Err(DomainError::transport(
                    "MockGenerationClient: no scripted response left",
                ))
            })
    }
}
