//! # carbonsense-optimizer
//!
//! Forecasts the next 24 hourly slots for an activity and recommends the
//! lowest-emission time to run it.
//!
//! One live baseline reading is fetched per request. Every slot is then
//! derived from that baseline and an empirical diurnal pattern, so given a
//! fixed clock and baseline the whole forecast is deterministic.

pub mod baseline;
pub mod engine;
pub mod horizon;
pub mod insights;
pub mod methodology;
pub mod patterns;
pub mod ranking;
pub mod recommendation;

pub use baseline::Baseline;
pub use engine::{forecast_from_baseline, ForecastRequest, TemporalOptimizer};

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
