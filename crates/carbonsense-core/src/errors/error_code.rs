//! Stable, machine-readable error codes.

pub const PROVIDER_MISSING_CREDENTIAL: &str = "PROVIDER_MISSING_CREDENTIAL";
pub const PROVIDER_NETWORK: &str = "PROVIDER_NETWORK";
pub const PROVIDER_TIMEOUT: &str = "PROVIDER_TIMEOUT";
pub const PROVIDER_HTTP_STATUS: &str = "PROVIDER_HTTP_STATUS";
pub const PROVIDER_MALFORMED_PAYLOAD: &str = "PROVIDER_MALFORMED_PAYLOAD";

pub const VALIDATION_MISSING_FIELD: &str = "VALIDATION_MISSING_FIELD";
pub const VALIDATION_OUT_OF_RANGE: &str = "VALIDATION_OUT_OF_RANGE";
pub const VALIDATION_NEGATIVE: &str = "VALIDATION_NEGATIVE";
pub const VALIDATION_INCOMPLETE_COORDINATES: &str = "VALIDATION_INCOMPLETE_COORDINATES";

pub const MODEL_PREDICTION_FAILED: &str = "MODEL_PREDICTION_FAILED";
pub const MODEL_EXPLANATION_FAILED: &str = "MODEL_EXPLANATION_FAILED";

pub const OPTIMIZATION_NON_FINITE: &str = "OPTIMIZATION_NON_FINITE";
pub const OPTIMIZATION_EMPTY_HORIZON: &str = "OPTIMIZATION_EMPTY_HORIZON";

pub const CONFIG_FILE_NOT_FOUND: &str = "CONFIG_FILE_NOT_FOUND";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CONFIG_VALIDATION: &str = "CONFIG_VALIDATION";

/// Implemented by every error enum in the workspace.
pub trait CarbonErrorCode {
    fn error_code(&self) -> &'static str;
}
