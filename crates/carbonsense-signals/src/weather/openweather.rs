//! OpenWeather current conditions.

use std::sync::Arc;

use chrono::DateTime;
use serde::Deserialize;

use carbonsense_core::config::{ProviderConfig, ProviderCredentials};
use carbonsense_core::errors::ProviderError;
use carbonsense_core::models::{
    Confidence, Method, SignalMeta, SignalResult, WeatherCondition, WeatherObservation,
    WeatherReading,
};
use carbonsense_core::traits::{HttpRequest, IJsonTransport, IWeatherSource};

use super::impact;
use crate::events;
use crate::traffic::location_coords;
use crate::transport::decode;

pub const PROVIDER: &str = "openweather";
pub const SOURCE: &str = "OpenWeatherMap API";

#[derive(Deserialize)]
struct CurrentWeather {
    main: MainBlock,
    wind: WindBlock,
    #[serde(default)]
    clouds: Option<CloudsBlock>,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    dt: Option<i64>,
}

#[derive(Deserialize)]
struct MainBlock {
    temp: f64,
    humidity: f64,
}

#[derive(Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Deserialize)]
struct CloudsBlock {
    all: f64,
}

#[derive(Deserialize)]
struct ConditionBlock {
    main: String,
    #[serde(default)]
    description: String,
}

/// Current weather by location name, resolved to coordinates via the
/// known-locations table.
pub struct OpenWeatherProvider {
    transport: Arc<dyn IJsonTransport>,
    config: ProviderConfig,
    api_key: Option<String>,
}

impl OpenWeatherProvider {
    pub fn new(
        transport: Arc<dyn IJsonTransport>,
        config: &ProviderConfig,
        credentials: &ProviderCredentials,
    ) -> Self {
        Self {
            transport,
            config: config.clone(),
            api_key: credentials.openweather_key.clone(),
        }
    }

    fn fetch(&self, location: &str) -> SignalResult<WeatherReading> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::missing_credential(PROVIDER))?;
        let coords = location_coords(location);

        let url = format!(
            "{}/data/2.5/weather",
            self.config.openweather_url.trim_end_matches('/')
        );
        let request = HttpRequest::get(PROVIDER, url, self.config.weather_timeout())
            .query("lat", coords.lat.to_string())
            .query("lon", coords.lon.to_string())
            .query("appid", api_key)
            .query("units", "metric");
        let body: CurrentWeather = decode(PROVIDER, self.transport.get_json(&request)?)?;

        let condition = body
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::malformed(PROVIDER, "weather[0]"))?;
        let observation = WeatherObservation {
            temperature_c: body.main.temp,
            humidity_percent: body.main.humidity,
            wind_speed_ms: body.wind.speed,
            clouds_percent: body.clouds.map_or(0.0, |c| c.all),
            condition: WeatherCondition::from_label(&condition.main),
            description: condition.description,
        };
        let timestamp = body
            .dt
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
            .unwrap_or_default();

        Ok(WeatherReading {
            impact: impact::score(&observation),
            observation,
            meta: SignalMeta {
                source: SOURCE.to_string(),
                location: location.to_string(),
                timestamp,
                confidence: Confidence::High,
                method: Method::Api,
            },
        })
    }
}

impl IWeatherSource for OpenWeatherProvider {
    fn current_weather(&self, location: &str) -> SignalResult<WeatherReading> {
        let result = self.fetch(location);
        match &result {
            Ok(reading) => events::signal_resolved("weather", &reading.meta.source, reading.meta.method),
            Err(e) => events::fallback_taken("weather", e, "no weather context"),
        }
        result
    }
}
