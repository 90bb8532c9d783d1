//! `/health` descriptor.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use carbonsense_core::config::ProviderCredentials;
use carbonsense_core::constants::VERSION;
use carbonsense_core::models::Domain;

use crate::registry::ModelRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderState {
    Configured,
    Unconfigured,
}

impl ProviderState {
    fn from_flag(configured: bool) -> Self {
        if configured {
            Self::Configured
        } else {
            Self::Unconfigured
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderStatus {
    /// The UK Carbon Intensity API needs no key.
    pub grid_uk: ProviderState,
    pub grid_california: ProviderState,
    pub traffic_realtime: ProviderState,
    pub weather: ProviderState,
}

impl ProviderStatus {
    pub fn from_credentials(credentials: &ProviderCredentials) -> Self {
        Self {
            grid_uk: ProviderState::Configured,
            grid_california: ProviderState::from_flag(credentials.has_california_grid()),
            traffic_realtime: ProviderState::from_flag(credentials.has_routing()),
            weather: ProviderState::from_flag(credentials.openweather_key.is_some()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub version: String,
    pub models_loaded: BTreeMap<Domain, usize>,
    pub explainers_loaded: BTreeMap<Domain, usize>,
    pub providers: ProviderStatus,
    pub features: Vec<String>,
}

const FEATURES: [&str; 8] = [
    "Real-time UK grid intensity (Carbon Intensity API)",
    "Real-time California grid (WattTime/ElectricityMaps)",
    "Temporal modeling for India",
    "Real-time traffic (TomTom/Google Maps) with time-of-day fallback",
    "Context-aware emission adjustments",
    "Uncertainty quantification (Bayesian)",
    "SHAP explainability (RF, XGBoost)",
    "24-hour temporal optimization",
];

/// Static capability descriptor.
pub fn report(registry: &ModelRegistry, providers: &ProviderStatus) -> HealthReport {
    let per_domain = |count: &dyn Fn(Domain) -> usize| {
        Domain::ALL.iter().map(|&d| (d, count(d))).collect::<BTreeMap<_, _>>()
    };

    HealthReport {
        status: "healthy".to_string(),
        version: VERSION.to_string(),
        models_loaded: per_domain(&|d| registry.model_count(d)),
        explainers_loaded: per_domain(&|d| registry.explainer_count(d)),
        providers: providers.clone(),
        features: FEATURES.iter().map(|f| f.to_string()).collect(),
    }
}
