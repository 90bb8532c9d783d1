//! # carbonsense-pipeline
//!
//! Request-scoped orchestration behind the `/predict`, `/optimize` and
//! `/health` contracts. [`CarbonService`] is built once at startup with
//! every collaborator injected and then serves requests without shared
//! mutable state.

pub mod explain;
pub mod health;
pub mod optimize;
pub mod predict;
pub mod registry;
pub mod request;
pub mod service;
pub mod tracing_setup;
pub mod validation;

pub use health::HealthReport;
pub use predict::PredictResponse;
pub use registry::ModelRegistry;
pub use request::{OptimizeRequest, PredictRequest};
pub use service::{CarbonService, SignalSources};
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
