use std::sync::Arc;

use chrono::NaiveDateTime;

use carbonsense_core::constants::{
    BEST_SLOT_COUNT, DEFAULT_FORECAST_KWH, DEFAULT_PROBE_DISTANCE_KM, WORST_SLOT_COUNT,
};
use carbonsense_core::errors::OptimizationError;
use carbonsense_core::models::{Domain, OptimizationResult};
use carbonsense_core::traits::{
    Coordinates, IClock, IGridIntensitySource, ITrafficSource, TrafficQuery,
};
use carbonsense_core::VehicleType;
use carbonsense_signals::traffic::probe_route;

use crate::baseline::{self, Baseline};
use crate::horizon::{self, Activity};
use crate::{insights, methodology, ranking, recommendation};

/// Parameters of one optimization request.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub domain: Domain,
    pub location: String,
    pub distance_km: Option<f64>,
    pub kwh: Option<f64>,
    pub vehicle: VehicleType,
    /// Route used to probe current traffic. Defaults to a due-north route
    /// from the location's coordinates.
    pub route: Option<(Coordinates, Coordinates)>,
}

impl ForecastRequest {
    pub fn energy(location: &str, kwh: Option<f64>) -> Self {
        Self {
            domain: Domain::Energy,
            location: location.to_string(),
            distance_km: None,
            kwh,
            vehicle: VehicleType::default(),
            route: None,
        }
    }

    pub fn transport(location: &str, distance_km: Option<f64>, vehicle: VehicleType) -> Self {
        Self {
            domain: Domain::Transport,
            location: location.to_string(),
            distance_km,
            kwh: None,
            vehicle,
            route: None,
        }
    }

    pub fn with_route(mut self, start: Coordinates, end: Coordinates) -> Self {
        self.route = Some((start, end));
        self
    }

    fn distance_km(&self) -> f64 {
        self.distance_km.unwrap_or(DEFAULT_PROBE_DISTANCE_KM)
    }

    pub fn activity(&self) -> Activity {
        match self.domain {
            Domain::Energy => Activity::Energy {
                kwh: self.kwh.unwrap_or(DEFAULT_FORECAST_KWH),
            },
            Domain::Transport => Activity::Transport {
                distance_km: self.distance_km(),
                vehicle: self.vehicle,
            },
        }
    }
}

/// Recommends the lowest-emission time in the next 24 hours.
///
/// Holds the injected signal sources and clock; each call to
/// [`TemporalOptimizer::forecast`] fetches one baseline and is otherwise
/// pure.
pub struct TemporalOptimizer {
    grid: Arc<dyn IGridIntensitySource>,
    traffic: Arc<dyn ITrafficSource>,
    clock: Arc<dyn IClock>,
}

impl TemporalOptimizer {
    pub fn new(
        grid: Arc<dyn IGridIntensitySource>,
        traffic: Arc<dyn ITrafficSource>,
        clock: Arc<dyn IClock>,
    ) -> Self {
        Self {
            grid,
            traffic,
            clock,
        }
    }

    /// Fetch the current reading for the request's domain. Never fails; a
    /// provider failure yields the historical default.
    pub fn baseline(&self, request: &ForecastRequest, now: NaiveDateTime) -> Baseline {
        match request.domain {
            Domain::Energy => baseline::current_grid(self.grid.as_ref(), &request.location, now),
            Domain::Transport => {
                let distance = request.distance_km();
                let (start, end) = request
                    .route
                    .unwrap_or_else(|| probe_route(&request.location, distance));
                let query = TrafficQuery::new(distance, &request.location).with_route(start, end);
                baseline::current_traffic(self.traffic.as_ref(), &query)
            }
        }
    }

    pub fn forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<OptimizationResult, OptimizationError> {
        let now = self.clock.now();
        let baseline = self.baseline(request, now);
        forecast_from_baseline(request, now, baseline)
    }
}

/// Forecast, rank and describe the horizon starting at `now`.
pub fn forecast_from_baseline(
    request: &ForecastRequest,
    now: NaiveDateTime,
    baseline: Baseline,
) -> Result<OptimizationResult, OptimizationError> {
    let domain = request.domain;
    let slots = horizon::build(now, request.activity(), baseline)?;
    let ranked = ranking::rank(slots)?;

    let optimal = ranked.first().cloned().ok_or(OptimizationError::EmptyHorizon)?;
    let current = ranking::current(&ranked).cloned();
    let potential_savings = ranking::potential_savings(current.as_ref(), &optimal);
    let recommendation = recommendation::recommend(
        domain,
        &optimal,
        current.as_ref(),
        potential_savings.percent,
    );
    let insights = insights::generate(&ranked, domain);

    tracing::debug!(
        domain = %domain,
        location = %request.location,
        baseline = baseline.value,
        live = baseline.is_live(),
        optimal_hour = optimal.hour,
        savings_percent = potential_savings.percent,
        "forecast complete"
    );

    Ok(OptimizationResult {
        domain,
        location: request.location.clone(),
        generated_at: now.format("%Y-%m-%dT%H:%M:%S").to_string(),
        best_times: ranking::best(&ranked, BEST_SLOT_COUNT),
        worst_times: ranking::worst(&ranked, WORST_SLOT_COUNT),
        current_time: current,
        optimal_time: optimal,
        potential_savings,
        recommendation,
        insights,
        methodology: methodology::describe(domain, &baseline),
        forecast: ranked,
    })
}
