//! The single live reading a forecast is anchored on.

use chrono::{NaiveDateTime, Timelike};

use carbonsense_core::constants::TRAINING_GRID_INTENSITY;
use carbonsense_core::models::{Domain, Method};
use carbonsense_core::traits::{GridQuery, IGridIntensitySource, ITrafficSource, TrafficQuery};
use carbonsense_signals::events;

use crate::horizon::is_weekend;

/// Grid intensity assumed when no current reading is available (gCO2/kWh).
pub const DEFAULT_GRID_BASELINE: f64 = TRAINING_GRID_INTENSITY;

/// Traffic multiplier assumed when no current reading is available.
pub const DEFAULT_TRAFFIC_BASELINE: f64 = 1.0;

/// Current value of the domain's signal: grid intensity for energy, emission
/// multiplier for transport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub value: f64,
    /// How the reading was obtained. `None` for the historical default.
    pub method: Option<Method>,
}

impl Baseline {
    pub fn observed(value: f64, method: Method) -> Self {
        Self {
            value,
            method: Some(method),
        }
    }

    /// Historical default for `domain`.
    pub fn fallback(domain: Domain) -> Self {
        let value = match domain {
            Domain::Energy => DEFAULT_GRID_BASELINE,
            Domain::Transport => DEFAULT_TRAFFIC_BASELINE,
        };
        Self {
            value,
            method: None,
        }
    }

    /// A reading was obtained, whatever its provenance.
    pub fn is_observed(&self) -> bool {
        self.method.is_some()
    }

    /// The reading came from a real-time API.
    pub fn is_live(&self) -> bool {
        matches!(self.method, Some(Method::Api | Method::RealTimeApi))
    }
}

/// Current grid intensity at `location`, or the default.
pub fn current_grid(
    source: &dyn IGridIntensitySource,
    location: &str,
    now: NaiveDateTime,
) -> Baseline {
    let query = GridQuery::new(location, Some(now.hour()), is_weekend(now.date()));
    match source.grid_intensity(&query) {
        Ok(reading) => {
            events::signal_resolved(
                "optimizer.grid_baseline",
                &reading.meta.source,
                reading.meta.method,
            );
            Baseline::observed(reading.intensity_gco2_kwh, reading.meta.method)
        }
        Err(e) => {
            events::fallback_taken("optimizer.grid_baseline", &e, "historical average");
            Baseline::fallback(Domain::Energy)
        }
    }
}

/// Current traffic emission multiplier for `query`, or the default.
pub fn current_traffic(source: &dyn ITrafficSource, query: &TrafficQuery) -> Baseline {
    match source.traffic_impact(query) {
        Ok(reading) => {
            events::signal_resolved(
                "optimizer.traffic_baseline",
                &reading.meta.source,
                reading.meta.method,
            );
            Baseline::observed(reading.emission_multiplier, reading.meta.method)
        }
        Err(e) => {
            events::fallback_taken("optimizer.traffic_baseline", &e, "free flow");
            Baseline::fallback(Domain::Transport)
        }
    }
}
