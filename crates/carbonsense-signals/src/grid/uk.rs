//! UK national carbon intensity (free, unauthenticated).

use serde::Deserialize;

use carbonsense_core::config::ProviderConfig;
use carbonsense_core::errors::ProviderError;
use carbonsense_core::models::{Confidence, GridReading, Method, SignalMeta, SignalResult};
use carbonsense_core::traits::{HttpRequest, IJsonTransport};

use crate::transport::decode;

pub const PROVIDER: &str = "uk-carbon-intensity";
pub const SOURCE: &str = "UK Carbon Intensity API (Free)";

#[derive(Deserialize)]
struct IntensityResponse {
    #[serde(default)]
    data: Vec<IntensityPeriod>,
}

#[derive(Deserialize)]
struct IntensityPeriod {
    from: Option<String>,
    intensity: IntensityValues,
}

#[derive(Deserialize)]
struct IntensityValues {
    actual: Option<f64>,
}

/// Current half-hour's measured intensity. A null `actual` fails.
pub fn fetch(transport: &dyn IJsonTransport, config: &ProviderConfig) -> SignalResult<GridReading> {
    let url = format!("{}/intensity", config.uk_grid_url.trim_end_matches('/'));
    let request = HttpRequest::get(PROVIDER, url, config.grid_timeout());
    let body: IntensityResponse = decode(PROVIDER, transport.get_json(&request)?)?;

    let period = body
        .data
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::malformed(PROVIDER, "data[0]"))?;
    let intensity = period
        .intensity
        .actual
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| ProviderError::malformed(PROVIDER, "data[0].intensity.actual"))?;

    Ok(GridReading {
        intensity_gco2_kwh: intensity,
        meta: SignalMeta {
            source: SOURCE.to_string(),
            location: "United Kingdom".to_string(),
            timestamp: period.from.unwrap_or_default(),
            confidence: Confidence::High,
            method: Method::Api,
        },
        components: None,
        comparison: None,
    })
}
