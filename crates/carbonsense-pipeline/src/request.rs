//! Request bodies of the `/predict` and `/optimize` contracts.
//!
//! Integer fields are kept signed so out-of-range values reach validation
//! and are reported as such instead of failing deserialization.

use serde::{Deserialize, Serialize};

use carbonsense_core::models::Domain;

fn default_hour() -> i64 {
    12
}

fn default_day_of_week() -> i64 {
    3
}

fn default_location() -> String {
    "UK".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub domain: Domain,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub kwh: Option<f64>,
    #[serde(default = "default_hour")]
    pub hour: i64,
    #[serde(default = "default_day_of_week")]
    pub day_of_week: i64,
    #[serde(default)]
    pub is_weekend: i64,
    #[serde(default = "default_location")]
    pub location: String,
    /// Unknown names fall back to `petrol_car`.
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub start_lat: Option<f64>,
    #[serde(default)]
    pub start_lon: Option<f64>,
    #[serde(default)]
    pub end_lat: Option<f64>,
    #[serde(default)]
    pub end_lon: Option<f64>,
}

impl PredictRequest {
    pub fn transport(distance_km: f64, location: &str) -> Self {
        Self {
            distance_km: Some(distance_km),
            location: location.to_string(),
            ..Self::empty(Domain::Transport)
        }
    }

    pub fn energy(kwh: f64, location: &str) -> Self {
        Self {
            kwh: Some(kwh),
            location: location.to_string(),
            ..Self::empty(Domain::Energy)
        }
    }

    fn empty(domain: Domain) -> Self {
        Self {
            domain,
            distance_km: None,
            kwh: None,
            hour: default_hour(),
            day_of_week: default_day_of_week(),
            is_weekend: 0,
            location: default_location(),
            vehicle_type: None,
            start_lat: None,
            start_lon: None,
            end_lat: None,
            end_lon: None,
        }
    }

    pub fn at(mut self, hour: i64, day_of_week: i64, is_weekend: bool) -> Self {
        self.hour = hour;
        self.day_of_week = day_of_week;
        self.is_weekend = i64::from(is_weekend);
        self
    }

    pub fn vehicle(mut self, name: &str) -> Self {
        self.vehicle_type = Some(name.to_string());
        self
    }

    pub fn route(mut self, start: (f64, f64), end: (f64, f64)) -> Self {
        self.start_lat = Some(start.0);
        self.start_lon = Some(start.1);
        self.end_lat = Some(end.0);
        self.end_lon = Some(end.1);
        self
    }
}

/// `/optimize` takes the same body as `/predict`.
pub type OptimizeRequest = PredictRequest;
