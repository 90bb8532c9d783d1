//! Blocking HTTP client with per-request timeout and gzip decompression.

use serde_json::Value;

use carbonsense_core::errors::ProviderError;
use carbonsense_core::traits::{HttpAuth, HttpRequest, IJsonTransport};

/// Convert a reqwest error into a provider error.
fn net_err(provider: &str, e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout {
            provider: provider.to_string(),
        }
    } else {
        ProviderError::Network {
            provider: provider.to_string(),
            reason: e.to_string(),
        }
    }
}

/// `reqwest::blocking` transport. One connection pool is shared by all
/// providers; each request carries its own timeout.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .gzip(true)
            .user_agent(concat!("carbonsense/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| net_err("http", e))?;
        Ok(Self { client })
    }
}

impl IJsonTransport for HttpClient {
    fn get_json(&self, request: &HttpRequest) -> Result<Value, ProviderError> {
        let provider = request.provider.as_str();

        let mut req = self
            .client
            .get(&request.url)
            .timeout(request.timeout)
            .query(&request.query);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        req = match &request.auth {
            Some(HttpAuth::Basic { username, password }) => req.basic_auth(username, Some(password)),
            Some(HttpAuth::Bearer(token)) => req.bearer_auth(token),
            None => req,
        };

        let resp = req.send().map_err(|e| net_err(provider, e))?;
        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(provider = %provider, status = status.as_u16(), "upstream returned error status");
            return Err(ProviderError::HttpStatus {
                provider: provider.to_string(),
                status: status.as_u16(),
            });
        }

        resp.json::<Value>().map_err(|e| {
            if e.is_timeout() {
                net_err(provider, e)
            } else {
                ProviderError::malformed(provider, "body")
            }
        })
    }
}
