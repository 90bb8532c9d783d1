use super::error_code::{self, CarbonErrorCode};

/// Client-visible request validation failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} required")]
    MissingField { field: String },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a non-negative number, got {value}")]
    Negative { field: String, value: f64 },

    #[error("coordinates must be supplied as complete start/end pairs")]
    IncompleteCoordinates,
}

impl ValidationError {
    pub fn missing(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }
}

impl CarbonErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => error_code::VALIDATION_MISSING_FIELD,
            Self::OutOfRange { .. } => error_code::VALIDATION_OUT_OF_RANGE,
            Self::Negative { .. } => error_code::VALIDATION_NEGATIVE,
            Self::IncompleteCoordinates => error_code::VALIDATION_INCOMPLETE_COORDINATES,
        }
    }
}
