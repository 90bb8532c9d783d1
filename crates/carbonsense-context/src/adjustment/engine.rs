use carbonsense_core::config::ContextConfig;
use carbonsense_core::models::{
    AdjustmentBreakdown, GridReading, PredictionResult, TrafficReading, WeatherReading,
};
use carbonsense_core::VehicleType;

use super::{energy_factors, transport_factors};
use crate::round_to;

/// Derived transport predictions.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportAdjustment {
    /// Base × vehicle × traffic.
    pub traffic_aware: PredictionResult,
    /// Base × vehicle × traffic × weather.
    pub context_aware: PredictionResult,
}

/// Applies live-context multipliers to base model predictions.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentEngine {
    /// Grid intensity (gCO2/kWh) baked into the energy training data.
    training_grid_intensity: f64,
    /// Per-km factor (kg CO2/km) baked into the transport training data.
    reference_transport_factor: f64,
}

impl AdjustmentEngine {
    pub fn new(config: &ContextConfig) -> Self {
        Self {
            training_grid_intensity: config.training_grid_intensity,
            reference_transport_factor: config.training_transport_factor,
        }
    }

    /// Vehicle emission factor relative to the training reference.
    pub fn vehicle_factor(&self, vehicle: VehicleType) -> f64 {
        vehicle.emission_factor() / self.reference_transport_factor
    }

    /// Energy adjustment of the Bayesian prediction. `None` when there is no
    /// Bayesian prediction or no grid reading to adjust against.
    pub fn adjust_energy(
        &self,
        bayesian: Option<&PredictionResult>,
        grid: Option<&GridReading>,
        weather: Option<&WeatherReading>,
    ) -> Option<PredictionResult> {
        let base = bayesian?;
        let grid = grid?;

        let grid_factor =
            energy_factors::grid_factor(grid.intensity_gco2_kwh, self.training_grid_intensity);
        let weather_factor = weather.map_or(1.0, |w| energy_factors::weather_factor(w.impact.score));
        let total = grid_factor * weather_factor;

        tracing::debug!(grid_factor, weather_factor, total, "energy context adjustment");

        Some(PredictionResult {
            mean: base.mean * total,
            std: None,
            ci_lower: base.ci_lower.map(|v| v * total),
            ci_upper: base.ci_upper.map(|v| v * total),
            description: Some(
                "Adjusted using real-time grid intensity and weather conditions".to_string(),
            ),
            adjustments: Some(AdjustmentBreakdown {
                grid_factor: Some(round_to(grid_factor, 3)),
                vehicle_factor: None,
                traffic_factor: None,
                weather_factor: round_to(weather_factor, 3),
                total_factor: round_to(total, 3),
                weather_reasons: weather.map(|w| w.impact.factors.clone()).unwrap_or_default(),
            }),
        })
    }

    /// Transport adjustment of the random-forest prediction. `None` when
    /// there is no base prediction. A missing traffic or weather reading
    /// contributes a neutral 1.0.
    pub fn adjust_transport(
        &self,
        rf: Option<&PredictionResult>,
        vehicle: VehicleType,
        traffic: Option<&TrafficReading>,
        weather: Option<&WeatherReading>,
    ) -> Option<TransportAdjustment> {
        let base = rf?;

        let vehicle_factor = self.vehicle_factor(vehicle);
        let traffic_factor = traffic.map_or(1.0, |t| t.emission_multiplier);
        let (weather_factor, weather_reasons) = weather
            .map(|w| transport_factors::weather_multiplier(&w.observation))
            .unwrap_or((1.0, Vec::new()));

        let vehicle_adjusted = base.mean * vehicle_factor;
        let traffic_aware = vehicle_adjusted * traffic_factor;
        let context_aware = traffic_aware * weather_factor;
        let total = vehicle_factor * traffic_factor * weather_factor;

        tracing::debug!(
            vehicle = vehicle.name(),
            vehicle_factor,
            traffic_factor,
            weather_factor,
            "transport context adjustment"
        );

        Some(TransportAdjustment {
            traffic_aware: PredictionResult {
                description: Some(format!(
                    "Adjusted for {} and current traffic",
                    vehicle.name()
                )),
                adjustments: Some(AdjustmentBreakdown {
                    grid_factor: None,
                    vehicle_factor: Some(round_to(vehicle_factor, 3)),
                    traffic_factor: Some(traffic_factor),
                    weather_factor: 1.0,
                    total_factor: round_to(vehicle_factor * traffic_factor, 3),
                    weather_reasons: Vec::new(),
                }),
                ..PredictionResult::point(traffic_aware)
            },
            context_aware: PredictionResult {
                description: Some(format!(
                    "Adjusted for {}, current traffic and weather conditions",
                    vehicle.name()
                )),
                adjustments: Some(AdjustmentBreakdown {
                    grid_factor: None,
                    vehicle_factor: Some(round_to(vehicle_factor, 3)),
                    traffic_factor: Some(traffic_factor),
                    weather_factor: round_to(weather_factor, 3),
                    total_factor: round_to(total, 3),
                    weather_reasons,
                }),
                ..PredictionResult::point(context_aware)
            },
        })
    }
}

impl Default for AdjustmentEngine {
    fn default() -> Self {
        Self::new(&ContextConfig::default())
    }
}
