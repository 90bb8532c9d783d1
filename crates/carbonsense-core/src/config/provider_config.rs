use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Upstream endpoints and timeouts for the signal providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub uk_grid_url: String,
    pub watttime_url: String,
    pub electricitymaps_url: String,
    pub tomtom_url: String,
    pub google_maps_url: String,
    pub openweather_url: String,
    /// Timeout for grid-intensity calls, including the WattTime login.
    pub grid_timeout_secs: u64,
    /// Timeout for routing (traffic) calls.
    pub routing_timeout_secs: u64,
    /// Timeout for weather calls.
    pub weather_timeout_secs: u64,
}

impl ProviderConfig {
    pub fn grid_timeout(&self) -> Duration {
        Duration::from_secs(self.grid_timeout_secs)
    }

    pub fn routing_timeout(&self) -> Duration {
        Duration::from_secs(self.routing_timeout_secs)
    }

    pub fn weather_timeout(&self) -> Duration {
        Duration::from_secs(self.weather_timeout_secs)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            uk_grid_url: defaults::DEFAULT_UK_GRID_URL.to_string(),
            watttime_url: defaults::DEFAULT_WATTTIME_URL.to_string(),
            electricitymaps_url: defaults::DEFAULT_ELECTRICITYMAPS_URL.to_string(),
            tomtom_url: defaults::DEFAULT_TOMTOM_URL.to_string(),
            google_maps_url: defaults::DEFAULT_GOOGLE_MAPS_URL.to_string(),
            openweather_url: defaults::DEFAULT_OPENWEATHER_URL.to_string(),
            grid_timeout_secs: defaults::DEFAULT_GRID_TIMEOUT_SECS,
            routing_timeout_secs: defaults::DEFAULT_ROUTING_TIMEOUT_SECS,
            weather_timeout_secs: defaults::DEFAULT_WEATHER_TIMEOUT_SECS,
        }
    }
}
