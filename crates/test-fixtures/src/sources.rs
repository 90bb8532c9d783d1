//! Fixed signal sources and reading builders.

use carbonsense_core::errors::ProviderError;
use carbonsense_core::models::{
    Confidence, GridReading, Method, SignalMeta, SignalResult, TrafficReading, WeatherCondition,
    WeatherImpact, WeatherObservation, WeatherReading,
};
use carbonsense_core::traits::{
    GridQuery, IGridIntensitySource, ITrafficSource, IWeatherSource, TrafficQuery,
};

fn meta(source: &str, location: &str, confidence: Confidence, method: Method) -> SignalMeta {
    SignalMeta {
        source: source.to_string(),
        location: location.to_string(),
        timestamp: "2024-03-12T12:00:00".to_string(),
        confidence,
        method,
    }
}

/// A live grid reading.
pub fn grid_reading(intensity: f64) -> GridReading {
    GridReading {
        intensity_gco2_kwh: intensity,
        meta: meta("fixture grid", "United Kingdom", Confidence::High, Method::Api),
        components: None,
        comparison: None,
    }
}

/// A live traffic reading with the given factors.
pub fn traffic_reading(delay_factor: f64, emission_multiplier: f64) -> TrafficReading {
    TrafficReading {
        delay_factor,
        emission_multiplier,
        travel_time_minutes: 20.0 * delay_factor,
        travel_time_no_traffic: 20.0,
        delay_minutes: 20.0 * (delay_factor - 1.0),
        actual_distance_km: 10.0,
        condition: "Fixture Traffic".to_string(),
        message: "fixture".to_string(),
        meta: meta(
            "fixture routing",
            "London",
            Confidence::High,
            Method::RealTimeApi,
        ),
        note: None,
    }
}

/// A weather reading with a precomputed impact score.
pub fn weather_reading(temperature_c: f64, condition: WeatherCondition, score: i32) -> WeatherReading {
    WeatherReading {
        observation: WeatherObservation {
            temperature_c,
            humidity_percent: 60.0,
            wind_speed_ms: 3.0,
            clouds_percent: 40.0,
            condition,
            description: "fixture".to_string(),
        },
        impact: WeatherImpact {
            score,
            factors: Vec::new(),
            message: "fixture".to_string(),
        },
        meta: meta("fixture weather", "London", Confidence::High, Method::Api),
    }
}

fn unavailable(provider: &str) -> ProviderError {
    ProviderError::Network {
        provider: provider.to_string(),
        reason: "unavailable".to_string(),
    }
}

/// Returns the same grid result for every query.
#[derive(Debug, Clone)]
pub struct FixedGridSource(pub SignalResult<GridReading>);

impl FixedGridSource {
    pub fn intensity(value: f64) -> Self {
        Self(Ok(grid_reading(value)))
    }

    pub fn unavailable() -> Self {
        Self(Err(unavailable("fixture grid")))
    }
}

impl IGridIntensitySource for FixedGridSource {
    fn grid_intensity(&self, _query: &GridQuery) -> SignalResult<GridReading> {
        self.0.clone()
    }
}

/// Returns the same traffic result for every query.
#[derive(Debug, Clone)]
pub struct FixedTrafficSource(pub SignalResult<TrafficReading>);

impl FixedTrafficSource {
    pub fn multiplier(delay_factor: f64, emission_multiplier: f64) -> Self {
        Self(Ok(traffic_reading(delay_factor, emission_multiplier)))
    }

    pub fn unavailable() -> Self {
        Self(Err(unavailable("fixture routing")))
    }
}

impl ITrafficSource for FixedTrafficSource {
    fn traffic_impact(&self, _query: &TrafficQuery) -> SignalResult<TrafficReading> {
        self.0.clone()
    }
}

/// Returns the same weather result for every location.
#[derive(Debug, Clone)]
pub struct FixedWeatherSource(pub SignalResult<WeatherReading>);

impl FixedWeatherSource {
    pub fn reading(temperature_c: f64, condition: WeatherCondition, score: i32) -> Self {
        Self(Ok(weather_reading(temperature_c, condition, score)))
    }

    pub fn unavailable() -> Self {
        Self(Err(unavailable("fixture weather")))
    }
}

impl IWeatherSource for FixedWeatherSource {
    fn current_weather(&self, _location: &str) -> SignalResult<WeatherReading> {
        self.0.clone()
    }
}
