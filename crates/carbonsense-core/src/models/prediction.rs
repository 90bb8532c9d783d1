use serde::{Deserialize, Serialize};

/// Activity domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Transport,
    Energy,
}

impl Domain {
    pub const ALL: [Domain; 2] = [Domain::Transport, Domain::Energy];

    pub fn name(self) -> &'static str {
        match self {
            Domain::Transport => "transport",
            Domain::Energy => "energy",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Trained regression model variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelVariant {
    Linear,
    Rf,
    Xgb,
    Bayesian,
}

impl ModelVariant {
    pub const ALL: [ModelVariant; 4] = [
        ModelVariant::Linear,
        ModelVariant::Rf,
        ModelVariant::Xgb,
        ModelVariant::Bayesian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ModelVariant::Linear => "linear",
            ModelVariant::Rf => "rf",
            ModelVariant::Xgb => "xgb",
            ModelVariant::Bayesian => "bayesian",
        }
    }

    /// Tree ensembles, the variants SHAP explanations are produced for.
    pub fn is_tree(self) -> bool {
        matches!(self, ModelVariant::Rf | ModelVariant::Xgb)
    }
}

/// Model input: four named features in training order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub names: [&'static str; 4],
    pub values: [f64; 4],
}

impl FeatureVector {
    pub fn transport(distance_km: f64, hour: u32, day_of_week: u32, is_weekend: bool) -> Self {
        Self {
            names: ["distance_km", "hour", "day_of_week", "is_weekend"],
            values: [
                distance_km,
                hour as f64,
                day_of_week as f64,
                if is_weekend { 1.0 } else { 0.0 },
            ],
        }
    }

    pub fn energy(kwh: f64, hour: u32, day_of_week: u32, is_weekend: bool) -> Self {
        Self {
            names: ["kWh", "hour", "day_of_week", "is_weekend"],
            values: [
                kwh,
                hour as f64,
                day_of_week as f64,
                if is_weekend { 1.0 } else { 0.0 },
            ],
        }
    }
}

/// Raw output of a regression model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelOutput {
    pub mean: f64,
    /// Predictive standard deviation, for probabilistic models.
    pub std: Option<f64>,
}

/// Raw output of a SHAP explainer: one contribution per feature.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapValues {
    pub base_value: f64,
    pub values: Vec<f64>,
}

/// Multipliers that produced a context-aware estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentBreakdown {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub grid_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vehicle_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub traffic_factor: Option<f64>,
    pub weather_factor: f64,
    pub total_factor: f64,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub weather_reasons: Vec<String>,
}

/// A point estimate (kg CO2) with optional uncertainty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub mean: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub std: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ci_lower: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ci_upper: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub adjustments: Option<AdjustmentBreakdown>,
}

impl PredictionResult {
    pub fn point(mean: f64) -> Self {
        Self {
            mean,
            std: None,
            ci_lower: None,
            ci_upper: None,
            description: None,
            adjustments: None,
        }
    }

    /// Mean with a symmetric `z`-scaled interval.
    pub fn with_interval(mean: f64, std: f64, z: f64) -> Self {
        Self {
            mean,
            std: Some(std),
            ci_lower: Some(mean - z * std),
            ci_upper: Some(mean + z * std),
            description: None,
            adjustments: None,
        }
    }
}

/// Per-variant prediction outcome. A failing model only fails its own entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelOutcome {
    Success(PredictionResult),
    Failed { error: String },
}

impl ModelOutcome {
    pub fn success(&self) -> Option<&PredictionResult> {
        match self {
            ModelOutcome::Success(p) => Some(p),
            ModelOutcome::Failed { .. } => None,
        }
    }
}

/// One feature's contribution to a tree-model prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    pub feature: String,
    pub value: f64,
    pub shap_value: f64,
    pub contribution: f64,
}

/// SHAP explanation for one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapExplanation {
    pub base_value: f64,
    pub prediction: f64,
    /// Sorted by absolute SHAP value, largest first.
    pub feature_importance: Vec<FeatureContribution>,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Explainability {
    Success(ShapExplanation),
    Failed { error: String },
}
