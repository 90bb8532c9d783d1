use std::time::Duration;

use serde_json::Value;

use crate::errors::ProviderError;

/// Request authentication.
#[derive(Clone, PartialEq, Eq)]
pub enum HttpAuth {
    Basic { username: String, password: String },
    Bearer(String),
}

impl std::fmt::Debug for HttpAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpAuth::Basic { username, .. } => write!(f, "Basic({username}, <redacted>)"),
            HttpAuth::Bearer(_) => f.write_str("Bearer(<redacted>)"),
        }
    }
}

/// A GET request to an upstream JSON API.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// Provider name used in errors and logs.
    pub provider: String,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub auth: Option<HttpAuth>,
    pub timeout: Duration,
}

impl HttpRequest {
    pub fn get(provider: &str, url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            provider: provider.to_string(),
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            auth: None,
            timeout,
        }
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    pub fn header(mut self, key: &str, value: impl Into<String>) -> Self {
        self.headers.push((key.to_string(), value.into()));
        self
    }

    pub fn basic_auth(mut self, username: &str, password: &str) -> Self {
        self.auth = Some(HttpAuth::Basic {
            username: username.to_string(),
            password: password.to_string(),
        });
        self
    }

    pub fn bearer(mut self, token: &str) -> Self {
        self.auth = Some(HttpAuth::Bearer(token.to_string()));
        self
    }

    /// Value of a query parameter, if present.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Blocking JSON-over-HTTP transport. Implementations must bound every call
/// by `request.timeout` and map all failures to `ProviderError`.
pub trait IJsonTransport: Send + Sync {
    fn get_json(&self, request: &HttpRequest) -> Result<Value, ProviderError>;
}
