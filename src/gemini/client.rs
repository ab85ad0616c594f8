//! Blocking HTTP client for the generateContent endpoint.
//!
//! One synchronous POST per call, the API key as a URL query parameter,
//! no retries and no streaming — the whole reply is awaited before
//! anything is rendered.

use std::cell::RefCell;
use std::time::Duration;

use super::types::{GenerateContentRequest, GenerateContentResponse, GenerateReply};
use super::GeminiError;
use crate::config;

pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str, api_key: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
            client,
            timeout_secs,
        }
    }

    /// Default endpoint and model with the supplied API key.
    pub fn with_api_key(api_key: &str) -> Self {
        Self::new(
            config::GEMINI_BASE_URL,
            config::DEFAULT_MODEL,
            api_key,
            config::REQUEST_TIMEOUT_SECS,
        )
    }

    /// The model name being used.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

impl GenerateReply for GeminiClient {
    fn generate(&self, fragments: &[String]) -> Result<String, GeminiError> {
        let body = GenerateContentRequest::from_fragments(fragments.iter().cloned());

        tracing::debug!(
            model = %self.model,
            fragments = fragments.len(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    GeminiError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    GeminiError::Http(format!(
                        "Request timed out after {}s",
                        self.timeout_secs
                    ))
                } else {
                    GeminiError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GeminiError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().map_err(|e| {
            tracing::debug!(error = %e, "generateContent response did not decode");
            GeminiError::MalformedResponse
        })?;

        parsed.into_reply_text()
    }
}

/// Mock generator for tests — canned reply or canned failure, with a
/// log of every request's fragments.
pub struct MockGenerator {
    outcome: MockOutcome,
    calls: RefCell<Vec<Vec<String>>>,
}

enum MockOutcome {
    Reply(String),
    Remote { status: u16, body: String },
    Malformed,
    EmptyReply,
}

impl MockGenerator {
    pub fn replying(text: &str) -> Self {
        Self::with_outcome(MockOutcome::Reply(text.to_string()))
    }

    pub fn failing_with_status(status: u16, body: &str) -> Self {
        Self::with_outcome(MockOutcome::Remote {
            status,
            body: body.to_string(),
        })
    }

    pub fn malformed() -> Self {
        Self::with_outcome(MockOutcome::Malformed)
    }

    pub fn empty_reply() -> Self {
        Self::with_outcome(MockOutcome::EmptyReply)
    }

    fn with_outcome(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Fragments of every request made so far, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl GenerateReply for MockGenerator {
    fn generate(&self, fragments: &[String]) -> Result<String, GeminiError> {
        self.calls.borrow_mut().push(fragments.to_vec());
        match &self.outcome {
            MockOutcome::Reply(text) => Ok(text.clone()),
            MockOutcome::Remote { status, body } => Err(GeminiError::Remote {
                status: *status,
                body: body.clone(),
            }),
            MockOutcome::Malformed => Err(GeminiError::MalformedResponse),
            MockOutcome::EmptyReply => Err(GeminiError::EmptyReply),
        }
    }
}
