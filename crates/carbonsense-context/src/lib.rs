//! # carbonsense-context
//!
//! Combines base model predictions with live signals.
//!
//! - [`AdjustmentEngine`]: scales a base prediction by grid, vehicle,
//!   traffic and weather factors, with a breakdown of each multiplier.
//! - [`ContextScoreCalculator`]: a clamped 0–100 favourability score built
//!   from per-domain sub-scores.

pub mod adjustment;
pub mod score;

pub use adjustment::{AdjustmentEngine, TransportAdjustment};
pub use score::{ContextScoreCalculator, ScoreInputs};

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
