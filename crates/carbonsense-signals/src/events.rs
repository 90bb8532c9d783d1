//! Structured log events for the signal resolvers.
//!
//! Each function emits a `tracing` event with structured fields.

use carbonsense_core::errors::ProviderError;
use carbonsense_core::models::Method;

/// Log a provider failure and the fallback taken.
pub fn signal_degraded(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "signal_degraded",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "signal degraded"
    );
}

/// Log a skipped provider (no credentials configured).
pub fn provider_skipped(component: &str, provider: &str) {
    tracing::debug!(
        event = "provider_skipped",
        component = %component,
        provider = %provider,
        "provider not configured, skipping"
    );
}

/// Log the reading a resolver settled on.
pub fn signal_resolved(component: &str, source: &str, method: Method) {
    tracing::debug!(
        event = "signal_resolved",
        component = %component,
        source = %source,
        method = ?method,
        "signal resolved"
    );
}

/// Log the outcome of a one-time provider login.
pub fn provider_login(provider: &str, success: bool) {
    if success {
        tracing::info!(event = "provider_login", provider = %provider, "provider login succeeded");
    } else {
        tracing::warn!(
            event = "provider_login",
            provider = %provider,
            "provider login failed, continuing without token"
        );
    }
}

/// Log a failed provider step. Unconfigured providers are routine and only
/// logged at debug.
pub fn fallback_taken(component: &str, error: &ProviderError, fallback: &str) {
    match error {
        ProviderError::MissingCredential { provider } => provider_skipped(component, provider),
        other => signal_degraded(component, &other.to_string(), fallback),
    }
}
