//! HTTP transport for the upstream JSON APIs.

pub mod http_client;

pub use http_client::HttpClient;

use serde::de::DeserializeOwned;
use serde_json::Value;

use carbonsense_core::errors::ProviderError;
use carbonsense_core::models::SignalResult;

/// Decode a JSON body into a provider payload type. Shape mismatches are
/// reported as a malformed `body`.
pub(crate) fn decode<T: DeserializeOwned>(provider: &str, body: Value) -> SignalResult<T> {
    serde_json::from_value(body).map_err(|e| {
        tracing::debug!(provider = %provider, error = %e, "payload did not match expected shape");
        ProviderError::malformed(provider, "body")
    })
}
