use crate::errors::ModelError;
use crate::models::{FeatureVector, ModelOutput, ShapValues};

/// A trained regression model, treated as an opaque black box.
pub trait IRegressionModel: Send + Sync {
    /// Predict emissions (kg CO2) for one feature row.
    fn predict(&self, features: &FeatureVector) -> Result<ModelOutput, ModelError>;
}

/// A SHAP explainer built for a tree model.
pub trait IExplainer: Send + Sync {
    /// Per-feature contributions for one feature row, in feature order.
    fn shap_values(&self, features: &FeatureVector) -> Result<ShapValues, ModelError>;
}
