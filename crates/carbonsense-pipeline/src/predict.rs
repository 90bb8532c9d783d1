//! `/predict` response and the per-model prediction pass.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use carbonsense_core::constants::CI_Z_95;
use carbonsense_core::models::{
    ContextScore, Domain, Explainability, FeatureVector, GridReading, ModelOutcome, ModelVariant,
    PredictionResult, TrafficReading, WeatherReading,
};

use crate::explain;
use crate::registry::ModelRegistry;

/// Derived variant names.
pub const TRAFFIC_AWARE: &str = "traffic_aware";
pub const CONTEXT_AWARE: &str = "context_aware";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub status: String,
    pub request_id: Uuid,
    pub domain: Domain,
    /// Per-variant outcome, including derived variants.
    pub predictions: BTreeMap<String, ModelOutcome>,
    /// Variant names in evaluation order.
    pub models_used: Vec<String>,
    pub explainability: BTreeMap<String, Explainability>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub grid_context: Option<GridReading>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub weather_context: Option<WeatherReading>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub traffic_context: Option<TrafficReading>,
    pub context_score: ContextScore,
}

impl PredictResponse {
    /// Successful prediction for `variant`, if any.
    pub fn prediction(&self, variant: &str) -> Option<&PredictionResult> {
        self.predictions.get(variant).and_then(ModelOutcome::success)
    }
}

/// Predictions in evaluation order.
#[derive(Debug, Clone, Default)]
pub struct ModelResults {
    entries: Vec<(String, ModelOutcome)>,
    pub explainability: BTreeMap<String, Explainability>,
}

impl ModelResults {
    pub fn success(&self, variant: ModelVariant) -> Option<&PredictionResult> {
        self.entries
            .iter()
            .find(|(name, _)| name == variant.name())
            .and_then(|(_, outcome)| outcome.success())
    }

    pub fn push(&mut self, name: &str, outcome: ModelOutcome) {
        self.entries.push((name.to_string(), outcome));
    }

    pub fn models_used(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn into_predictions(self) -> BTreeMap<String, ModelOutcome> {
        self.entries.into_iter().collect()
    }
}

/// Run every registered model for `domain`, explaining tree models that
/// have an explainer.
pub fn run_models(registry: &ModelRegistry, domain: Domain, features: &FeatureVector) -> ModelResults {
    let mut results = ModelResults::default();

    for (variant, model) in registry.models(domain) {
        let output = match model.predict(features) {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(variant = variant.name(), error = %e, "model prediction failed");
                results.push(
                    variant.name(),
                    ModelOutcome::Failed {
                        error: e.to_string(),
                    },
                );
                continue;
            }
        };

        let prediction = match (variant, output.std) {
            (ModelVariant::Bayesian, Some(std)) => {
                PredictionResult::with_interval(output.mean, std, CI_Z_95)
            }
            _ => PredictionResult::point(output.mean),
        };

        if variant.is_tree() {
            if let Some(explainer) = registry.explainer(domain, variant) {
                let explanation =
                    explain::explain(explainer.as_ref(), variant, features, output.mean, domain);
                results
                    .explainability
                    .insert(variant.name().to_string(), explanation);
            }
        }

        results.push(variant.name(), ModelOutcome::Success(prediction));
    }

    results
}
