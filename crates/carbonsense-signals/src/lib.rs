//! # carbonsense-signals
//!
//! External signal providers and the resolvers that reconcile them.
//!
//! Each resolver walks a priority chain of providers and recovers every
//! provider failure locally: the grid and traffic resolvers always produce a
//! reading, degrading to heuristic or static values with lower confidence.

pub mod auth;
pub mod events;
pub mod grid;
pub mod traffic;
pub mod transport;
pub mod weather;

pub use grid::GridIntensityResolver;
pub use traffic::TrafficImpactResolver;
pub use transport::HttpClient;
pub use weather::OpenWeatherProvider;

/// Round to `places` decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// ISO-8601 local timestamp, second precision.
pub(crate) fn iso_timestamp(dt: chrono::NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}
