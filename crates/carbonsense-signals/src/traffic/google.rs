//! Google Maps Directions API with `duration_in_traffic`.

use serde::Deserialize;

use carbonsense_core::config::ProviderConfig;
use carbonsense_core::errors::ProviderError;
use carbonsense_core::models::SignalResult;
use carbonsense_core::traits::{Coordinates, HttpRequest, IJsonTransport};

use super::RouteTimes;
use crate::transport::decode;

pub const PROVIDER: &str = "google-maps";
pub const SOURCE: &str = "Google Maps API";

#[derive(Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Deserialize)]
struct Route {
    #[serde(default)]
    legs: Vec<Leg>,
}

#[derive(Deserialize)]
struct Leg {
    distance: TextValue,
    duration: TextValue,
    duration_in_traffic: Option<TextValue>,
}

#[derive(Deserialize)]
struct TextValue {
    value: f64,
}

pub fn fetch(
    transport: &dyn IJsonTransport,
    config: &ProviderConfig,
    api_key: Option<&str>,
    start: Coordinates,
    end: Coordinates,
) -> SignalResult<RouteTimes> {
    let api_key = api_key.ok_or_else(|| ProviderError::missing_credential(PROVIDER))?;

    let url = format!(
        "{}/maps/api/directions/json",
        config.google_maps_url.trim_end_matches('/')
    );
    let request = HttpRequest::get(PROVIDER, url, config.routing_timeout())
        .query("origin", format!("{},{}", start.lat, start.lon))
        .query("destination", format!("{},{}", end.lat, end.lon))
        .query("departure_time", "now")
        .query("traffic_model", "best_guess")
        .query("key", api_key);
    let body: DirectionsResponse = decode(PROVIDER, transport.get_json(&request)?)?;

    if body.status != "OK" {
        return Err(ProviderError::malformed(PROVIDER, "status"));
    }
    let leg = body
        .routes
        .into_iter()
        .next()
        .and_then(|r| r.legs.into_iter().next())
        .ok_or_else(|| ProviderError::malformed(PROVIDER, "routes[0].legs[0]"))?;
    let in_traffic = leg
        .duration_in_traffic
        .ok_or_else(|| ProviderError::malformed(PROVIDER, "duration_in_traffic"))?;

    Ok(RouteTimes {
        source: SOURCE,
        minutes_with_traffic: in_traffic.value / 60.0,
        minutes_without_traffic: leg.duration.value / 60.0,
        distance_km: leg.distance.value / 1000.0,
    })
}
