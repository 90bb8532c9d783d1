//! Weather provider and Weather Impact Scorer tests.

use std::sync::Arc;

use carbonsense_core::config::{ProviderConfig, ProviderCredentials};
use carbonsense_core::errors::ProviderError;
use carbonsense_core::models::{WeatherCondition, WeatherObservation};
use carbonsense_core::traits::IWeatherSource;
use carbonsense_signals::weather::impact::{message, score};
use carbonsense_signals::OpenWeatherProvider;
use test_fixtures::MockTransport;

const OPENWEATHER: &str = "https://api.openweathermap.org/data/2.5/weather";

fn observation(temp: f64, wind: f64, clouds: f64, condition: WeatherCondition) -> WeatherObservation {
    WeatherObservation {
        temperature_c: temp,
        humidity_percent: 50.0,
        wind_speed_ms: wind,
        clouds_percent: clouds,
        condition,
        description: String::new(),
    }
}

fn provider(transport: Arc<MockTransport>, key: Option<&str>) -> OpenWeatherProvider {
    OpenWeatherProvider::new(
        transport,
        &ProviderConfig::default(),
        &ProviderCredentials {
            openweather_key: key.map(str::to_string),
            ..Default::default()
        },
    )
}

// ── T-W1: impact scoring ──

#[test]
fn mild_clear_windy_day_is_favourable() {
    let impact = score(&observation(20.0, 6.0, 10.0, WeatherCondition::Clear));
    assert_eq!(impact.score, -23);
    assert_eq!(impact.factors.len(), 3);
    assert!(impact.factors[0].contains("HVAC"));
    assert!(impact.factors[1].contains("solar"));
    assert!(impact.factors[2].contains("wind power"));
    assert!(impact.message.starts_with("Excellent"));
}

#[test]
fn cold_calm_rain_is_extreme() {
    let impact = score(&observation(5.0, 1.0, 90.0, WeatherCondition::Rain));
    assert_eq!(impact.score, 25);
    assert!(impact.factors[0].contains("heating demand"));
    assert!(impact.message.starts_with("Extreme"));
}

#[test]
fn hot_weather_adds_cooling_demand() {
    let impact = score(&observation(32.0, 3.0, 80.0, WeatherCondition::Clouds));
    assert_eq!(impact.score, 20);
    assert!(impact.factors[0].contains("cooling demand"));
}

#[test]
fn cloudy_clear_label_gets_no_solar_bonus() {
    let impact = score(&observation(15.0, 3.0, 60.0, WeatherCondition::Clear));
    assert_eq!(impact.score, 0);
    assert!(impact.factors.is_empty());
}

#[test]
fn message_tiers() {
    assert!(message(-10).starts_with("Excellent"));
    assert!(message(-9).starts_with("Good"));
    assert!(message(0).starts_with("Good"));
    assert!(message(10).starts_with("Moderate"));
    assert!(message(15).starts_with("High"));
    assert!(message(16).starts_with("Extreme"));
}

// ── T-W2: OpenWeather provider ──

#[test]
fn openweather_reading_is_scored() {
    let transport =
        Arc::new(MockTransport::new().respond_fixture(OPENWEATHER, "openweather_current.json"));
    let weather = provider(transport.clone(), Some("ow-key"));

    let reading = weather.current_weather("London").unwrap();
    assert_eq!(reading.observation.temperature_c, 20.4);
    assert_eq!(reading.observation.condition, WeatherCondition::Clear);
    assert_eq!(reading.observation.description, "clear sky");
    assert_eq!(reading.impact.score, -23);
    assert_eq!(reading.meta.source, "OpenWeatherMap API");
    assert_eq!(reading.meta.timestamp, "2024-03-12T12:00:00Z");

    let request = &transport.requests()[0];
    assert_eq!(request.query_value("units"), Some("metric"));
    assert_eq!(request.query_value("appid"), Some("ow-key"));
    assert_eq!(request.query_value("lat"), Some("51.5074"));
}

#[test]
fn repeated_lookups_yield_identical_readings() {
    let transport =
        Arc::new(MockTransport::new().respond_fixture(OPENWEATHER, "openweather_current.json"));
    let weather = provider(transport.clone(), Some("ow-key"));

    let first = weather.current_weather("London").unwrap();
    let second = weather.current_weather("London").unwrap();
    assert_eq!(first, second);
    assert_eq!(transport.calls_to(OPENWEATHER), 2);
}

#[test]
fn missing_key_is_an_error_without_network() {
    let transport = Arc::new(MockTransport::new());
    let weather = provider(transport.clone(), None);
    let err = weather.current_weather("London").unwrap_err();
    assert!(matches!(err, ProviderError::MissingCredential { .. }));
    assert_eq!(transport.total_calls(), 0);
}

#[test]
fn malformed_payload_is_an_error() {
    let transport = Arc::new(
        MockTransport::new().respond(OPENWEATHER, serde_json::json!({"weather": []})),
    );
    let weather = provider(transport, Some("ow-key"));
    let err = weather.current_weather("London").unwrap_err();
    assert!(matches!(err, ProviderError::MalformedPayload { .. }));
}
