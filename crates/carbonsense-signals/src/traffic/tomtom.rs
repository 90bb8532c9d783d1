//! TomTom Routing API with live traffic.

use serde::Deserialize;

use carbonsense_core::config::ProviderConfig;
use carbonsense_core::errors::ProviderError;
use carbonsense_core::models::SignalResult;
use carbonsense_core::traits::{Coordinates, HttpRequest, IJsonTransport};

use super::RouteTimes;
use crate::transport::decode;

pub const PROVIDER: &str = "tomtom";
pub const SOURCE: &str = "TomTom Traffic API";

#[derive(Deserialize)]
struct RouteResponse {
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Deserialize)]
struct Route {
    summary: RouteSummary,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteSummary {
    travel_time_in_seconds: f64,
    no_traffic_travel_time_in_seconds: Option<f64>,
    length_in_meters: f64,
}

pub fn fetch(
    transport: &dyn IJsonTransport,
    config: &ProviderConfig,
    api_key: Option<&str>,
    start: Coordinates,
    end: Coordinates,
) -> SignalResult<RouteTimes> {
    let api_key = api_key.ok_or_else(|| ProviderError::missing_credential(PROVIDER))?;

    let route = format!("{},{}:{},{}", start.lat, start.lon, end.lat, end.lon);
    let url = format!(
        "{}/routing/1/calculateRoute/{route}/json",
        config.tomtom_url.trim_end_matches('/')
    );
    let request = HttpRequest::get(PROVIDER, url, config.routing_timeout())
        .query("key", api_key)
        .query("traffic", "true")
        .query("travelMode", "car")
        .query("routeType", "fastest");
    let body: RouteResponse = decode(PROVIDER, transport.get_json(&request)?)?;

    let summary = body
        .routes
        .into_iter()
        .next()
        .map(|r| r.summary)
        .ok_or_else(|| ProviderError::malformed(PROVIDER, "routes[0]"))?;

    let with_traffic = summary.travel_time_in_seconds / 60.0;
    let without_traffic = summary
        .no_traffic_travel_time_in_seconds
        .map_or(with_traffic, |s| s / 60.0);

    Ok(RouteTimes {
        source: SOURCE,
        minutes_with_traffic: with_traffic,
        minutes_without_traffic: without_traffic,
        distance_km: summary.length_in_meters / 1000.0,
    })
}
