//! Readings produced by the external signal providers.
//!
//! A provider call yields `SignalResult<T>`: `Ok` carries a reading whose
//! numeric fields are all meaningful, `Err` carries no numbers at all.

use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;

/// Outcome of a single provider call.
pub type SignalResult<T> = Result<T, ProviderError>;

/// How directly a value derives from live data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// How a reading was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Api,
    Temporal,
    Static,
    TimeBasedEstimate,
    RealTimeApi,
}

/// Provenance shared by every reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalMeta {
    pub source: String,
    pub location: String,
    pub timestamp: String,
    pub confidence: Confidence,
    pub method: Method,
}

/// Breakdown of the deterministic temporal grid model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalComponents {
    pub base: f64,
    pub time_adjustment: f64,
    pub hour: u32,
    pub is_weekend: bool,
}

/// Live reading compared with the regional static average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridComparison {
    pub static_average: f64,
    pub difference_gco2_kwh: f64,
    pub difference_percent: f64,
    pub is_cleaner: bool,
    pub message: String,
}

/// Grid carbon intensity reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridReading {
    pub intensity_gco2_kwh: f64,
    #[serde(flatten)]
    pub meta: SignalMeta,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub components: Option<TemporalComponents>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comparison: Option<GridComparison>,
}

/// Traffic impact reading with the derived emission multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficReading {
    pub delay_factor: f64,
    pub emission_multiplier: f64,
    pub travel_time_minutes: f64,
    pub travel_time_no_traffic: f64,
    pub delay_minutes: f64,
    pub actual_distance_km: f64,
    pub condition: String,
    pub message: String,
    #[serde(flatten)]
    pub meta: SignalMeta,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
}

/// Coarse weather condition, as reported by the weather provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Other,
}

impl WeatherCondition {
    /// Map a provider's condition group name ("Clear", "Rain", ...).
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "clear" => Self::Clear,
            "clouds" => Self::Clouds,
            "rain" => Self::Rain,
            "drizzle" => Self::Drizzle,
            "thunderstorm" => Self::Thunderstorm,
            "snow" => Self::Snow,
            _ => Self::Other,
        }
    }

    /// Liquid precipitation.
    pub fn is_rain(self) -> bool {
        matches!(self, Self::Rain | Self::Drizzle | Self::Thunderstorm)
    }
}

/// Raw weather observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub wind_speed_ms: f64,
    pub clouds_percent: f64,
    pub condition: WeatherCondition,
    pub description: String,
}

/// Signed weather impact on grid emissions; negative is favourable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherImpact {
    pub score: i32,
    pub factors: Vec<String>,
    pub message: String,
}

/// Weather reading with its impact score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    #[serde(flatten)]
    pub observation: WeatherObservation,
    pub impact: WeatherImpact,
    #[serde(flatten)]
    pub meta: SignalMeta,
}
