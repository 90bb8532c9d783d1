//! Context-Aware Adjustment Engine.
//!
//! Energy and transport are adjusted by structurally different formulas:
//!
//! ```text
//! energy    = bayesian × (live_intensity / training_intensity) × (1 + weather_score / 100)
//! transport = rf × (vehicle_factor / reference_factor) × traffic_multiplier × weather_multiplier
//! ```
//!
//! where the transport weather multiplier accumulates additive penalties
//! from 1.0. An adjustment is only produced when its base prediction
//! succeeded.

pub mod energy_factors;
pub mod engine;
pub mod transport_factors;

pub use engine::{AdjustmentEngine, TransportAdjustment};
