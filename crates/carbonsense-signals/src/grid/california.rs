//! California grid: WattTime forecast first, ElectricityMaps second.

use serde::Deserialize;

use carbonsense_core::config::ProviderConfig;
use carbonsense_core::constants::LBS_PER_MWH_TO_G_PER_KWH;
use carbonsense_core::errors::ProviderError;
use carbonsense_core::models::{Confidence, GridReading, Method, SignalMeta, SignalResult};
use carbonsense_core::traits::{HttpRequest, IJsonTransport};

use crate::auth::watttime_session::{self, WattTimeSession};
use crate::round_to;
use crate::transport::decode;

pub const ELECTRICITYMAPS: &str = "electricitymaps";

const WATTTIME_REGION: &str = "CAISO_NORTH";
const WATTTIME_SIGNAL: &str = "co2_moer";
const ELECTRICITYMAPS_ZONE: &str = "US-CAL-CISO";

#[derive(Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    data: Vec<ForecastPoint>,
}

#[derive(Deserialize)]
struct ForecastPoint {
    point_time: Option<String>,
    value: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LatestIntensity {
    carbon_intensity: Option<f64>,
    datetime: Option<String>,
}

/// WattTime marginal-emissions forecast, converted from lbs/MWh.
pub fn fetch_watttime(
    transport: &dyn IJsonTransport,
    config: &ProviderConfig,
    session: &WattTimeSession,
) -> SignalResult<GridReading> {
    let provider = watttime_session::PROVIDER;
    let token = session
        .token(transport)
        .ok_or_else(|| ProviderError::missing_credential(provider))?;

    let url = format!("{}/v3/forecast", config.watttime_url.trim_end_matches('/'));
    let request = HttpRequest::get(provider, url, config.grid_timeout())
        .bearer(token)
        .query("region", WATTTIME_REGION)
        .query("signal_type", WATTTIME_SIGNAL);
    let body: ForecastResponse = decode(provider, transport.get_json(&request)?)?;

    let point = body
        .data
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::malformed(provider, "data[0]"))?;
    let lbs_per_mwh = point
        .value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| ProviderError::malformed(provider, "data[0].value"))?;

    Ok(GridReading {
        intensity_gco2_kwh: round_to(lbs_per_mwh * LBS_PER_MWH_TO_G_PER_KWH, 1),
        meta: SignalMeta {
            source: "WattTime API".to_string(),
            location: format!("California ({WATTTIME_REGION})"),
            timestamp: point.point_time.unwrap_or_default(),
            confidence: Confidence::High,
            method: Method::Api,
        },
        components: None,
        comparison: None,
    })
}

/// ElectricityMaps latest intensity for the CAISO zone.
pub fn fetch_electricitymaps(
    transport: &dyn IJsonTransport,
    config: &ProviderConfig,
    api_key: Option<&str>,
) -> SignalResult<GridReading> {
    let api_key = api_key.ok_or_else(|| ProviderError::missing_credential(ELECTRICITYMAPS))?;

    let url = format!(
        "{}/v3/carbon-intensity/latest",
        config.electricitymaps_url.trim_end_matches('/')
    );
    let request = HttpRequest::get(ELECTRICITYMAPS, url, config.grid_timeout())
        .header("auth-token", api_key)
        .query("zone", ELECTRICITYMAPS_ZONE);
    let body: LatestIntensity = decode(ELECTRICITYMAPS, transport.get_json(&request)?)?;

    let intensity = body
        .carbon_intensity
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| ProviderError::malformed(ELECTRICITYMAPS, "carbonIntensity"))?;

    Ok(GridReading {
        intensity_gco2_kwh: intensity,
        meta: SignalMeta {
            source: "ElectricityMaps API".to_string(),
            location: "California".to_string(),
            timestamp: body.datetime.unwrap_or_default(),
            confidence: Confidence::High,
            method: Method::Api,
        },
        components: None,
        comparison: None,
    })
}
