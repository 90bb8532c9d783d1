//! Stub regression models and SHAP explainers.

use carbonsense_core::errors::ModelError;
use carbonsense_core::models::{FeatureVector, ModelOutput, ShapValues};
use carbonsense_core::traits::{IExplainer, IRegressionModel};

/// Returns a fixed prediction regardless of input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StubModel {
    pub mean: f64,
    pub std: Option<f64>,
}

impl StubModel {
    pub fn point(mean: f64) -> Self {
        Self { mean, std: None }
    }

    pub fn probabilistic(mean: f64, std: f64) -> Self {
        Self {
            mean,
            std: Some(std),
        }
    }
}

impl IRegressionModel for StubModel {
    fn predict(&self, _features: &FeatureVector) -> Result<ModelOutput, ModelError> {
        Ok(ModelOutput {
            mean: self.mean,
            std: self.std,
        })
    }
}

/// Always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingModel;

impl IRegressionModel for FailingModel {
    fn predict(&self, _features: &FeatureVector) -> Result<ModelOutput, ModelError> {
        Err(ModelError::PredictionFailed {
            model: "stub".to_string(),
            reason: "feature shape mismatch".to_string(),
        })
    }
}

/// Returns fixed SHAP contributions.
#[derive(Debug, Clone, PartialEq)]
pub struct StubExplainer {
    pub base_value: f64,
    pub values: Vec<f64>,
}

impl StubExplainer {
    pub fn new(base_value: f64, values: &[f64]) -> Self {
        Self {
            base_value,
            values: values.to_vec(),
        }
    }
}

impl IExplainer for StubExplainer {
    fn shap_values(&self, _features: &FeatureVector) -> Result<ShapValues, ModelError> {
        Ok(ShapValues {
            base_value: self.base_value,
            values: self.values.clone(),
        })
    }
}

/// Always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingExplainer;

impl IExplainer for FailingExplainer {
    fn shap_values(&self, _features: &FeatureVector) -> Result<ShapValues, ModelError> {
        Err(ModelError::ExplanationFailed {
            model: "stub".to_string(),
            reason: "explainer not fitted".to_string(),
        })
    }
}
