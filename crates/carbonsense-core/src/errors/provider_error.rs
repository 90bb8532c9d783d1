use super::error_code::{self, CarbonErrorCode};

/// Failures talking to an external signal provider.
///
/// These are always recovered inside a resolver's priority chain; they are
/// values so that the fallback path is visible in signatures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("{provider}: no credentials configured")]
    MissingCredential { provider: String },

    #[error("{provider}: network error: {reason}")]
    Network { provider: String, reason: String },

    #[error("{provider}: request timed out")]
    Timeout { provider: String },

    #[error("{provider}: unexpected HTTP status {status}")]
    HttpStatus { provider: String, status: u16 },

    #[error("{provider}: malformed payload, missing or invalid `{field}`")]
    MalformedPayload { provider: String, field: String },
}

impl ProviderError {
    pub fn missing_credential(provider: &str) -> Self {
        Self::MissingCredential {
            provider: provider.to_string(),
        }
    }

    pub fn malformed(provider: &str, field: &str) -> Self {
        Self::MalformedPayload {
            provider: provider.to_string(),
            field: field.to_string(),
        }
    }

    /// Name of the provider that failed.
    pub fn provider(&self) -> &str {
        match self {
            Self::MissingCredential { provider }
            | Self::Network { provider, .. }
            | Self::Timeout { provider }
            | Self::HttpStatus { provider, .. }
            | Self::MalformedPayload { provider, .. } => provider,
        }
    }
}

impl CarbonErrorCode for ProviderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCredential { .. } => error_code::PROVIDER_MISSING_CREDENTIAL,
            Self::Network { .. } => error_code::PROVIDER_NETWORK,
            Self::Timeout { .. } => error_code::PROVIDER_TIMEOUT,
            Self::HttpStatus { .. } => error_code::PROVIDER_HTTP_STATUS,
            Self::MalformedPayload { .. } => error_code::PROVIDER_MALFORMED_PAYLOAD,
        }
    }
}
