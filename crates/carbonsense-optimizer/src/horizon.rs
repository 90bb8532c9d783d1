//! Builds the 24 hourly forecast slots from a baseline.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

use carbonsense_core::constants::FORECAST_HORIZON_HOURS;
use carbonsense_core::errors::OptimizationError;
use carbonsense_core::models::{Confidence, Domain, ForecastSlot};
use carbonsense_core::VehicleType;

use crate::baseline::Baseline;
use crate::patterns::{grid, traffic};
use crate::round_to;

/// Label carried by every slot.
pub const FORECAST_METHOD: &str = "real_baseline_plus_patterns";

/// What is being scheduled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    /// Energy use of `kwh`.
    Energy { kwh: f64 },
    /// A trip of `distance_km` by `vehicle`.
    Transport { distance_km: f64, vehicle: VehicleType },
}

impl Activity {
    pub fn domain(&self) -> Domain {
        match self {
            Activity::Energy { .. } => Domain::Energy,
            Activity::Transport { .. } => Domain::Transport,
        }
    }
}

/// Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    date.weekday().number_from_monday() >= 6
}

/// Confidence decays with distance from the baseline reading: energy is
/// high for 6h and medium to 12h, transport high for 4h and medium to 8h.
/// Without an observed baseline nothing is high.
pub fn confidence(domain: Domain, hours_ahead: u32, observed: bool) -> Confidence {
    let (high_until, medium_until) = match domain {
        Domain::Energy => (6, 12),
        Domain::Transport => (4, 8),
    };
    if observed && hours_ahead < high_until {
        Confidence::High
    } else if hours_ahead < medium_until {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Forecast slots in chronological order, starting at `now`.
pub fn build(
    now: NaiveDateTime,
    activity: Activity,
    baseline: Baseline,
) -> Result<Vec<ForecastSlot>, OptimizationError> {
    let domain = activity.domain();

    (0..FORECAST_HORIZON_HOURS)
        .map(|hours_ahead| {
            let at = now + Duration::hours(i64::from(hours_ahead));
            let hour = at.hour();
            let weekend = is_weekend(at.date());

            let (emissions, grid_intensity, traffic_factor) = match activity {
                Activity::Energy { kwh } => {
                    let intensity = grid::forecast_intensity(baseline.value, hour, weekend);
                    (kwh * intensity / 1000.0, Some(round_to(intensity, 1)), None)
                }
                Activity::Transport {
                    distance_km,
                    vehicle,
                } => {
                    let multiplier =
                        traffic::forecast_multiplier(baseline.value, hours_ahead, hour, weekend);
                    (
                        distance_km * vehicle.emission_factor() * multiplier,
                        None,
                        Some(round_to(multiplier, 2)),
                    )
                }
            };

            if !emissions.is_finite() {
                return Err(OptimizationError::NonFiniteEstimate { hour });
            }

            Ok(ForecastSlot {
                time: at.format("%I:%M %p").to_string(),
                datetime: at.format("%Y-%m-%dT%H:%M:%S").to_string(),
                hour,
                day: at.format("%a").to_string(),
                hours_ahead,
                is_weekend: weekend,
                estimated_emissions: round_to(emissions, 3),
                grid_intensity,
                traffic_factor,
                confidence: confidence(domain, hours_ahead, baseline.is_observed()),
                forecast_method: FORECAST_METHOD.to_string(),
                savings_percent: 0.0,
            })
        })
        .collect()
}
