//! WattTime bearer token, obtained once with basic-auth credentials.
//!
//! The token is initialised at most once per process. A failed login is
//! cached as "no token" and never retried; callers fall through to the next
//! provider instead.

use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;

use carbonsense_core::config::BasicCredentials;
use carbonsense_core::errors::ProviderError;
use carbonsense_core::models::SignalResult;
use carbonsense_core::traits::{HttpRequest, IJsonTransport};

use crate::events;
use crate::transport::decode;

pub const PROVIDER: &str = "watttime";

#[derive(Deserialize)]
struct LoginResponse {
    token: Option<String>,
}

/// Lazily-initialised WattTime login.
#[derive(Debug)]
pub struct WattTimeSession {
    base_url: String,
    timeout: Duration,
    credentials: Option<BasicCredentials>,
    token: OnceLock<Option<String>>,
}

impl WattTimeSession {
    pub fn new(base_url: &str, timeout: Duration, credentials: Option<BasicCredentials>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            credentials,
            token: OnceLock::new(),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// The cached token, logging in on first use.
    pub fn token(&self, transport: &dyn IJsonTransport) -> Option<&str> {
        self.token
            .get_or_init(|| {
                let credentials = self.credentials.as_ref()?;
                match self.login(transport, credentials) {
                    Ok(token) => {
                        events::provider_login(PROVIDER, true);
                        Some(token)
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "watttime login failed");
                        events::provider_login(PROVIDER, false);
                        None
                    }
                }
            })
            .as_deref()
    }

    fn login(
        &self,
        transport: &dyn IJsonTransport,
        credentials: &BasicCredentials,
    ) -> SignalResult<String> {
        let request = HttpRequest::get(PROVIDER, format!("{}/login", self.base_url), self.timeout)
            .basic_auth(&credentials.username, &credentials.password);
        let body: LoginResponse = decode(PROVIDER, transport.get_json(&request)?)?;
        body.token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ProviderError::malformed(PROVIDER, "token"))
    }
}
