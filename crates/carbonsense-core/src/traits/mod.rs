//! Collaborator seams. Every external dependency of the core pipeline sits
//! behind one of these traits so it can be constructed once at startup and
//! injected, or replaced by a fake in tests.

pub mod clock;
pub mod regression_model;
pub mod signal_source;
pub mod transport;

pub use clock::{IClock, SystemClock};
pub use regression_model::{IExplainer, IRegressionModel};
pub use signal_source::{
    Coordinates, GridQuery, IGridIntensitySource, ITrafficSource, IWeatherSource, TrafficQuery,
};
pub use transport::{HttpAuth, HttpRequest, IJsonTransport};
