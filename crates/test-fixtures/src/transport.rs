//! In-memory HTTP transport.

use std::sync::Mutex;

use serde_json::Value;

use carbonsense_core::errors::ProviderError;
use carbonsense_core::traits::{HttpRequest, IJsonTransport};

/// Canned responses keyed by URL prefix. The longest matching prefix wins;
/// unmatched URLs fail as a network error. Every request is recorded.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Vec<(String, Result<Value, ProviderError>)>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to URLs starting with `prefix` with `body`.
    pub fn respond(mut self, prefix: &str, body: Value) -> Self {
        self.routes.push((prefix.to_string(), Ok(body)));
        self
    }

    /// Respond to URLs starting with `prefix` with a named fixture payload.
    pub fn respond_fixture(self, prefix: &str, fixture: &str) -> Self {
        self.respond(prefix, crate::load_fixture_value(fixture))
    }

    /// Fail URLs starting with `prefix` with `error`.
    pub fn fail(mut self, prefix: &str, error: ProviderError) -> Self {
        self.routes.push((prefix.to_string(), Err(error)));
        self
    }

    /// All requests seen so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Number of requests whose URL starts with `prefix`.
    pub fn calls_to(&self, prefix: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.url.starts_with(prefix))
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.requests().len()
    }
}

impl IJsonTransport for MockTransport {
    fn get_json(&self, request: &HttpRequest) -> Result<Value, ProviderError> {
        if let Ok(mut seen) = self.requests.lock() {
            seen.push(request.clone());
        }
        self.routes
            .iter()
            .filter(|(prefix, _)| request.url.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| {
                Err(ProviderError::Network {
                    provider: request.provider.clone(),
                    reason: format!("no mock route for {}", request.url),
                })
            })
    }
}
