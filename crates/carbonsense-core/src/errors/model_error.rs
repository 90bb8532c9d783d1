use super::error_code::{self, CarbonErrorCode};

/// Errors raised by the opaque regression models and SHAP explainers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("model {model} failed to predict: {reason}")]
    PredictionFailed { model: String, reason: String },

    #[error("explainer for {model} failed: {reason}")]
    ExplanationFailed { model: String, reason: String },
}

impl CarbonErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PredictionFailed { .. } => error_code::MODEL_PREDICTION_FAILED,
            Self::ExplanationFailed { .. } => error_code::MODEL_EXPLANATION_FAILED,
        }
    }
}
