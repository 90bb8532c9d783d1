//! # carbonsense-core
//!
//! Foundation crate for the CarbonSense emission estimator.
//! Defines the request-scoped value types, the collaborator traits
//! (signal sources, regression models, clock, HTTP transport), errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod region;
pub mod traits;
pub mod vehicle;

// Re-export the most commonly used types at the crate root.
pub use config::CarbonConfig;
pub use errors::{CarbonError, CarbonResult};
pub use models::{Confidence, Domain, Method};
pub use region::Region;
pub use vehicle::VehicleType;
