use serde::{Deserialize, Serialize};

use super::{Confidence, Domain};

/// One hourly slot of the optimizer's forecast horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSlot {
    /// Wall-clock label, e.g. "02:00 PM".
    pub time: String,
    pub datetime: String,
    pub hour: u32,
    /// Weekday label, e.g. "Mon".
    pub day: String,
    pub hours_ahead: u32,
    pub is_weekend: bool,
    pub estimated_emissions: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub grid_intensity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub traffic_factor: Option<f64>,
    pub confidence: Confidence,
    pub forecast_method: String,
    /// Saving relative to the worst slot of the same horizon.
    pub savings_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotentialSavings {
    pub absolute_kg: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSources {
    pub current_baseline: String,
    pub patterns: String,
    pub confidence_decay: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Methodology {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub data_sources: DataSources,
    pub limitations: String,
}

/// Result of a 24-hour timing optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub domain: Domain,
    pub location: String,
    pub generated_at: String,
    pub current_time: Option<ForecastSlot>,
    pub best_times: Vec<ForecastSlot>,
    pub worst_times: Vec<ForecastSlot>,
    pub optimal_time: ForecastSlot,
    pub potential_savings: PotentialSavings,
    pub recommendation: String,
    pub insights: Vec<String>,
    pub methodology: Methodology,
    /// Full horizon, sorted by estimated emissions ascending.
    pub forecast: Vec<ForecastSlot>,
}
