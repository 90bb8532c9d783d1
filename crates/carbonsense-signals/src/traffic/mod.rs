//! Traffic Impact Resolver.
//!
//! With a full route: TomTom, then Google Maps. Without coordinates, or when
//! both routing providers fail: the time-of-day heuristic. Never fails.

pub mod coords;
pub mod google;
pub mod heuristic;
pub mod multiplier;
pub mod tomtom;

pub use coords::{location_coords, probe_route};
pub use multiplier::emission_multiplier;

use std::sync::Arc;

use chrono::{Datelike, Timelike, Weekday};

use carbonsense_core::config::{ProviderConfig, ProviderCredentials};
use carbonsense_core::models::{Confidence, Method, SignalMeta, SignalResult, TrafficReading};
use carbonsense_core::traits::{Coordinates, IClock, IJsonTransport, ITrafficSource, TrafficQuery};

use crate::{events, iso_timestamp, round_to};

const COMPONENT: &str = "traffic";
const HEURISTIC_SOURCE: &str = "Temporal Pattern Estimation";
const HEURISTIC_NOTE: &str =
    "Estimated from typical traffic patterns. Configure a routing API key for real-time data.";

/// Travel times reported by a routing provider.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTimes {
    pub source: &'static str,
    pub minutes_with_traffic: f64,
    pub minutes_without_traffic: f64,
    pub distance_km: f64,
}

impl RouteTimes {
    /// Travel time with traffic over free-flow travel time; 1.0 when the
    /// free-flow time is zero.
    pub fn delay_factor(&self) -> f64 {
        if self.minutes_without_traffic > 0.0 {
            self.minutes_with_traffic / self.minutes_without_traffic
        } else {
            1.0
        }
    }
}

/// Real-time traffic resolver with heuristic fallback. Construct once per
/// process.
pub struct TrafficImpactResolver {
    transport: Arc<dyn IJsonTransport>,
    clock: Arc<dyn IClock>,
    config: ProviderConfig,
    tomtom_key: Option<String>,
    google_key: Option<String>,
}

impl TrafficImpactResolver {
    pub fn new(
        transport: Arc<dyn IJsonTransport>,
        clock: Arc<dyn IClock>,
        config: &ProviderConfig,
        credentials: &ProviderCredentials,
    ) -> Self {
        Self {
            transport,
            clock,
            config: config.clone(),
            tomtom_key: credentials.tomtom_key.clone(),
            google_key: credentials.google_maps_key.clone(),
        }
    }

    /// Resolve the traffic impact for a trip.
    pub fn resolve(&self, query: &TrafficQuery) -> TrafficReading {
        let reading = query
            .route()
            .and_then(|(start, end)| self.live_route(start, end))
            .map(|times| self.from_route(&times, &query.location))
            .unwrap_or_else(|| self.estimate_from_time(query));

        events::signal_resolved(COMPONENT, &reading.meta.source, reading.meta.method);
        reading
    }

    fn live_route(&self, start: Coordinates, end: Coordinates) -> Option<RouteTimes> {
        let transport = self.transport.as_ref();

        match tomtom::fetch(transport, &self.config, self.tomtom_key.as_deref(), start, end) {
            Ok(times) => return Some(times),
            Err(e) => events::fallback_taken(COMPONENT, &e, google::PROVIDER),
        }
        match google::fetch(transport, &self.config, self.google_key.as_deref(), start, end) {
            Ok(times) => Some(times),
            Err(e) => {
                events::fallback_taken(COMPONENT, &e, "time_based_estimate");
                None
            }
        }
    }

    fn from_route(&self, times: &RouteTimes, location: &str) -> TrafficReading {
        let delay_factor = times.delay_factor();
        let emission_multiplier = multiplier::emission_multiplier(delay_factor);

        TrafficReading {
            delay_factor: round_to(delay_factor, 2),
            emission_multiplier,
            travel_time_minutes: round_to(times.minutes_with_traffic, 1),
            travel_time_no_traffic: round_to(times.minutes_without_traffic, 1),
            delay_minutes: round_to(times.minutes_with_traffic - times.minutes_without_traffic, 1),
            actual_distance_km: round_to(times.distance_km, 2),
            condition: multiplier::condition(delay_factor).to_string(),
            message: multiplier::message(emission_multiplier),
            meta: SignalMeta {
                source: times.source.to_string(),
                location: location.to_string(),
                timestamp: iso_timestamp(self.clock.now()),
                confidence: Confidence::High,
                method: Method::RealTimeApi,
            },
            note: None,
        }
    }

    fn estimate_from_time(&self, query: &TrafficQuery) -> TrafficReading {
        let now = self.clock.now();
        let is_weekend = matches!(now.weekday(), Weekday::Sat | Weekday::Sun);
        let band = heuristic::typical_band(now.hour(), is_weekend);
        let emission_multiplier = multiplier::emission_multiplier(band.delay_factor);
        let (free_flow, loaded) = heuristic::travel_minutes(query.distance_km, band.delay_factor);

        TrafficReading {
            delay_factor: band.delay_factor,
            emission_multiplier,
            travel_time_minutes: round_to(loaded, 1),
            travel_time_no_traffic: round_to(free_flow, 1),
            delay_minutes: round_to(loaded - free_flow, 1),
            actual_distance_km: query.distance_km,
            condition: band.condition.to_string(),
            message: multiplier::message(emission_multiplier),
            meta: SignalMeta {
                source: HEURISTIC_SOURCE.to_string(),
                location: query.location.clone(),
                timestamp: iso_timestamp(now),
                confidence: Confidence::Medium,
                method: Method::TimeBasedEstimate,
            },
            note: Some(HEURISTIC_NOTE.to_string()),
        }
    }
}

impl ITrafficSource for TrafficImpactResolver {
    fn traffic_impact(&self, query: &TrafficQuery) -> SignalResult<TrafficReading> {
        Ok(self.resolve(query))
    }
}
