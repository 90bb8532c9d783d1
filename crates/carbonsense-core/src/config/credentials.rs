//! Provider credentials, read from the environment only.
//!
//! Never serialized, and redacted in `Debug` output.

use std::fmt;

pub const ENV_WATTTIME: &str = "WATTTIME_API_KEY";
pub const ENV_ELECTRICITYMAPS: &str = "ELECTRICITYMAPS_API_KEY";
pub const ENV_OPENWEATHER: &str = "OPENWEATHER_API_KEY";
pub const ENV_TOMTOM: &str = "TOMTOM_API_KEY";
pub const ENV_GOOGLE_MAPS: &str = "GOOGLE_MAPS_API_KEY";

/// Username/password pair for basic-auth logins.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// Split a single `user:pass` value at the first `:`.
    /// Values without a `:` carry no credentials.
    pub fn parse(raw: &str) -> Option<Self> {
        let (username, password) = raw.split_once(':')?;
        if username.is_empty() {
            return None;
        }
        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// All credentials consumed by the signal providers. Absence of any of them
/// degrades that provider to its next fallback.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProviderCredentials {
    pub watttime: Option<BasicCredentials>,
    pub electricitymaps_key: Option<String>,
    pub openweather_key: Option<String>,
    pub tomtom_key: Option<String>,
    pub google_maps_key: Option<String>,
}

impl ProviderCredentials {
    /// Read credentials from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary lookup (for testing).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            watttime: non_empty(ENV_WATTTIME).and_then(|raw| BasicCredentials::parse(&raw)),
            electricitymaps_key: non_empty(ENV_ELECTRICITYMAPS),
            openweather_key: non_empty(ENV_OPENWEATHER),
            tomtom_key: non_empty(ENV_TOMTOM),
            google_maps_key: non_empty(ENV_GOOGLE_MAPS),
        }
    }

    pub fn has_california_grid(&self) -> bool {
        self.watttime.is_some() || self.electricitymaps_key.is_some()
    }

    pub fn has_routing(&self) -> bool {
        self.tomtom_key.is_some() || self.google_maps_key.is_some()
    }
}

fn redact(value: &Option<String>) -> &'static str {
    if value.is_some() {
        "<set>"
    } else {
        "<unset>"
    }
}

impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("watttime", &self.watttime)
            .field("electricitymaps_key", &redact(&self.electricitymaps_key))
            .field("openweather_key", &redact(&self.openweather_key))
            .field("tomtom_key", &redact(&self.tomtom_key))
            .field("google_maps_key", &redact(&self.google_maps_key))
            .finish()
    }
}
