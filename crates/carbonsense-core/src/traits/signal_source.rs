use serde::{Deserialize, Serialize};

use crate::models::{GridReading, SignalResult, TrafficReading, WeatherReading};
use crate::region::Region;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Grid-intensity lookup parameters. The region is resolved once, here.
#[derive(Debug, Clone, PartialEq)]
pub struct GridQuery {
    pub location: String,
    pub region: Region,
    /// Hour of day for temporal models; `None` means "now".
    pub hour: Option<u32>,
    pub is_weekend: bool,
}

impl GridQuery {
    pub fn new(location: &str, hour: Option<u32>, is_weekend: bool) -> Self {
        Self {
            location: location.to_string(),
            region: Region::from_location(location),
            hour,
            is_weekend,
        }
    }
}

/// Traffic lookup parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficQuery {
    pub distance_km: f64,
    pub location: String,
    pub start: Option<Coordinates>,
    pub end: Option<Coordinates>,
}

impl TrafficQuery {
    pub fn new(distance_km: f64, location: &str) -> Self {
        Self {
            distance_km,
            location: location.to_string(),
            start: None,
            end: None,
        }
    }

    pub fn with_route(mut self, start: Coordinates, end: Coordinates) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Both endpoints, when a full route was supplied.
    pub fn route(&self) -> Option<(Coordinates, Coordinates)> {
        Some((self.start?, self.end?))
    }
}

/// Current grid carbon intensity for a location.
pub trait IGridIntensitySource: Send + Sync {
    fn grid_intensity(&self, query: &GridQuery) -> SignalResult<GridReading>;
}

/// Current traffic impact for a trip.
pub trait ITrafficSource: Send + Sync {
    fn traffic_impact(&self, query: &TrafficQuery) -> SignalResult<TrafficReading>;
}

/// Current weather for a location.
pub trait IWeatherSource: Send + Sync {
    fn current_weather(&self, location: &str) -> SignalResult<WeatherReading>;
}
