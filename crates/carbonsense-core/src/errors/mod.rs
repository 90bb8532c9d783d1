//! Error handling for CarbonSense.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod model_error;
pub mod optimization_error;
pub mod provider_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::CarbonErrorCode;
pub use model_error::ModelError;
pub use optimization_error::OptimizationError;
pub use provider_error::ProviderError;
pub use validation_error::ValidationError;

/// Top-level error aggregating every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum CarbonError {
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("optimization error: {0}")]
    Optimization(#[from] OptimizationError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CarbonError {
    /// HTTP status class this error maps to at the request boundary.
    ///
    /// Client input problems are 400 and provider failures are 502. Provider
    /// errors normally never reach this point because resolvers recover them
    /// locally. Everything else indicates a logic bug and is 500.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Provider(_) => 502,
            Self::Model(_) | Self::Optimization(_) | Self::Config(_) => 500,
        }
    }
}

impl CarbonErrorCode for CarbonError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Provider(e) => e.error_code(),
            Self::Validation(e) => e.error_code(),
            Self::Model(e) => e.error_code(),
            Self::Optimization(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type CarbonResult<T> = Result<T, CarbonError>;
