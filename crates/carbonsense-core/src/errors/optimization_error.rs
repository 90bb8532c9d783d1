use super::error_code::{self, CarbonErrorCode};

/// Internal failures of the temporal optimizer. These indicate a logic bug
/// or pathological input rather than missing external data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptimizationError {
    #[error("non-finite emission estimate for hour {hour}")]
    NonFiniteEstimate { hour: u32 },

    #[error("forecast horizon is empty")]
    EmptyHorizon,
}

impl CarbonErrorCode for OptimizationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NonFiniteEstimate { .. } => error_code::OPTIMIZATION_NON_FINITE,
            Self::EmptyHorizon => error_code::OPTIMIZATION_EMPTY_HORIZON,
        }
    }
}
