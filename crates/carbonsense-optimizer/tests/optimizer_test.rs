//! Temporal Optimizer tests.

use std::sync::{Arc, Mutex};

use carbonsense_core::errors::OptimizationError;
use carbonsense_core::models::{
    Confidence, Domain, ForecastSlot, Method, SignalResult, TrafficReading,
};
use carbonsense_core::traits::{Coordinates, ITrafficSource, TrafficQuery};
use carbonsense_core::VehicleType;
use carbonsense_optimizer::recommendation::recommend;
use carbonsense_optimizer::{forecast_from_baseline, Baseline, ForecastRequest, TemporalOptimizer};
use test_fixtures::sources::traffic_reading;
use test_fixtures::{FixedClock, FixedGridSource, FixedTrafficSource};

fn optimizer(
    grid: FixedGridSource,
    traffic: FixedTrafficSource,
    clock: FixedClock,
) -> TemporalOptimizer {
    TemporalOptimizer::new(Arc::new(grid), Arc::new(traffic), Arc::new(clock))
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── T-O1: energy horizon ──

#[test]
fn energy_at_solar_peak_affirms_current_time() {
    let opt = optimizer(
        FixedGridSource::intensity(200.0),
        FixedTrafficSource::unavailable(),
        FixedClock::weekday(14),
    );
    let result = opt.forecast(&ForecastRequest::energy("UK", Some(10.0))).unwrap();

    assert_eq!(result.forecast.len(), 24);
    assert_eq!(result.optimal_time.hour, 14);
    assert!(approx(result.optimal_time.estimated_emissions, 1.5));
    assert_eq!(result.optimal_time.grid_intensity, Some(150.0));
    assert_eq!(result.optimal_time.savings_percent, 44.4);

    let best_hours: Vec<u32> = result.best_times.iter().map(|s| s.hour).collect();
    assert_eq!(best_hours, vec![14, 15, 16, 10, 11]);
    let worst_hours: Vec<u32> = result.worst_times.iter().map(|s| s.hour).collect();
    assert_eq!(worst_hours, vec![19, 20, 21]);
    assert_eq!(result.worst_times[2].savings_percent, 0.0);

    let current = result.current_time.as_ref().unwrap();
    assert_eq!(current.hour, 14);
    assert_eq!(result.potential_savings.absolute_kg, 0.0);
    assert_eq!(result.potential_savings.percent, 0.0);
    assert!(result.recommendation.starts_with("Great timing!"));
    assert!(result.recommendation.contains("energy"));
}

#[test]
fn energy_insights_report_longest_window() {
    let opt = optimizer(
        FixedGridSource::intensity(200.0),
        FixedTrafficSource::unavailable(),
        FixedClock::weekday(14),
    );
    let result = opt.forecast(&ForecastRequest::energy("UK", Some(10.0))).unwrap();

    assert_eq!(result.insights.len(), 2);
    assert_eq!(result.insights[0], "Best window: 10:00 PM - 05:00 AM");
    assert_eq!(
        result.insights[1],
        "Timing can cut emissions by up to 44% over the next 24 hours"
    );
}

#[test]
fn energy_confidence_decays_with_horizon() {
    let opt = optimizer(
        FixedGridSource::intensity(200.0),
        FixedTrafficSource::unavailable(),
        FixedClock::weekday(14),
    );
    let result = opt.forecast(&ForecastRequest::energy("UK", Some(10.0))).unwrap();
    let at = |ahead: u32| {
        result
            .forecast
            .iter()
            .find(|s| s.hours_ahead == ahead)
            .unwrap()
            .confidence
    };
    assert_eq!(at(0), Confidence::High);
    assert_eq!(at(5), Confidence::High);
    assert_eq!(at(6), Confidence::Medium);
    assert_eq!(at(11), Confidence::Medium);
    assert_eq!(at(12), Confidence::Low);
    assert_eq!(result.methodology.data_sources.current_baseline, "Real-time API data");
}

#[test]
fn energy_evening_peak_recommends_solar_hours() {
    let opt = optimizer(
        FixedGridSource::unavailable(),
        FixedTrafficSource::unavailable(),
        FixedClock::weekday(18),
    );
    let result = opt.forecast(&ForecastRequest::energy("Atlantis", None)).unwrap();

    assert_eq!(result.optimal_time.hour, 10);
    assert_eq!(result.optimal_time.day, "Wed");
    assert_eq!(result.optimal_time.time, "10:00 AM");
    assert!(approx(result.optimal_time.estimated_emissions, 0.3));
    assert!(approx(result.potential_savings.absolute_kg, 0.24));
    assert_eq!(result.potential_savings.percent, 44.4);
    assert_eq!(
        result.recommendation,
        "Significant savings available! Charging at 10:00 AM (Wed) could reduce emissions by \
         44%. Grid will be cleaner (solar generation peak)."
    );

    // No baseline reading: nothing is high confidence.
    assert!(result.forecast.iter().all(|s| s.confidence != Confidence::High));
    assert_eq!(result.methodology.data_sources.current_baseline, "Historical average");
    assert_eq!(result.methodology.kind, "hybrid_forecast");
}

#[test]
fn weekend_slots_are_cheaper_for_energy() {
    let result = forecast_from_baseline(
        &ForecastRequest::energy("Atlantis", None),
        FixedClock::at(2024, 3, 15, 12).0,
        Baseline::observed(400.0, Method::Static),
    )
    .unwrap();

    let saturday = result.forecast.iter().find(|s| s.hours_ahead == 12).unwrap();
    assert!(saturday.is_weekend);
    assert_eq!(saturday.day, "Sat");
    assert_eq!(saturday.grid_intensity, Some(288.0));

    assert!(result
        .insights
        .iter()
        .any(|i| i == "Weekend charging is 17% cleaner on average"));
    assert_eq!(result.insights[0], "Best window: 12:00 AM - 05:00 AM");
    assert_eq!(
        result.methodology.data_sources.current_baseline,
        "Estimated current conditions"
    );
}

// ── T-O2: transport horizon ──

#[test]
fn transport_rush_hour_recommends_night() {
    let opt = optimizer(
        FixedGridSource::unavailable(),
        FixedTrafficSource::multiplier(1.6, 1.7),
        FixedClock::weekday(8),
    );
    let request = ForecastRequest::transport("London", Some(10.0), VehicleType::PetrolCar);
    let result = opt.forecast(&request).unwrap();

    let current = result.current_time.as_ref().unwrap();
    assert_eq!(current.traffic_factor, Some(1.72));
    assert!(approx(current.estimated_emissions, 2.924));

    assert_eq!(result.optimal_time.hour, 22);
    assert_eq!(result.optimal_time.traffic_factor, Some(1.14));
    assert!(approx(result.optimal_time.estimated_emissions, 1.938));
    assert_eq!(result.potential_savings.percent, 33.7);
    assert_eq!(
        result.recommendation,
        "Major savings possible! Traveling at 10:00 PM (Tue) could reduce emissions by 34%. \
         Clear roads, minimal traffic."
    );

    assert_eq!(result.insights.len(), 2);
    assert!(result.insights[0].starts_with("Rush hour adds 37%"));
    assert_eq!(result.insights[1], "Optimal travel window: 10pm - 6am (minimal traffic)");
}

#[test]
fn transport_confidence_uses_shorter_horizon() {
    let opt = optimizer(
        FixedGridSource::unavailable(),
        FixedTrafficSource::multiplier(1.0, 1.0),
        FixedClock::weekday(8),
    );
    let request = ForecastRequest::transport("London", Some(10.0), VehicleType::PetrolCar);
    let result = opt.forecast(&request).unwrap();
    let at = |ahead: u32| {
        result
            .forecast
            .iter()
            .find(|s| s.hours_ahead == ahead)
            .unwrap()
            .confidence
    };
    assert_eq!(at(3), Confidence::High);
    assert_eq!(at(4), Confidence::Medium);
    assert_eq!(at(8), Confidence::Low);
}

#[test]
fn transport_without_traffic_uses_free_flow_baseline() {
    let opt = optimizer(
        FixedGridSource::unavailable(),
        FixedTrafficSource::unavailable(),
        FixedClock::weekday(3),
    );
    let request = ForecastRequest::transport("London", None, VehicleType::Electric);
    let result = opt.forecast(&request).unwrap();

    let current = result.current_time.as_ref().unwrap();
    assert_eq!(current.traffic_factor, Some(1.0));
    assert!(approx(current.estimated_emissions, 0.53));
    assert_eq!(current.confidence, Confidence::Medium);
    assert_eq!(result.methodology.data_sources.current_baseline, "Historical average");
}

#[test]
fn zero_emission_vehicle_has_flat_horizon() {
    let opt = optimizer(
        FixedGridSource::unavailable(),
        FixedTrafficSource::multiplier(1.4, 1.4),
        FixedClock::weekday(17),
    );
    let request = ForecastRequest::transport("London", Some(5.0), VehicleType::Bicycle);
    let result = opt.forecast(&request).unwrap();

    assert!(result.forecast.iter().all(|s| s.estimated_emissions == 0.0));
    assert!(result.forecast.iter().all(|s| s.savings_percent == 0.0));
    assert_eq!(result.optimal_time.hours_ahead, 0);
    assert!(result.recommendation.starts_with("Great timing!"));
    assert_eq!(result.potential_savings.percent, 0.0);
    assert!((2..=4).contains(&result.insights.len()));
}

struct RecordingTraffic(Mutex<Vec<TrafficQuery>>);

impl ITrafficSource for RecordingTraffic {
    fn traffic_impact(&self, query: &TrafficQuery) -> SignalResult<TrafficReading> {
        self.0.lock().unwrap().push(query.clone());
        Ok(traffic_reading(1.0, 1.0))
    }
}

#[test]
fn transport_probes_a_synthetic_route_once() {
    let traffic = Arc::new(RecordingTraffic(Mutex::new(Vec::new())));
    let opt = TemporalOptimizer::new(
        Arc::new(FixedGridSource::unavailable()),
        traffic.clone(),
        Arc::new(FixedClock::weekday(9)),
    );
    opt.forecast(&ForecastRequest::transport("Delhi", None, VehicleType::Bus))
        .unwrap();

    let queries = traffic.0.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].distance_km, 10.0);
    let (start, end) = queries[0].route().unwrap();
    assert!((start.lat - 28.6139).abs() < 1e-9);
    assert!((end.lat - (28.6139 + 10.0 / 111.0)).abs() < 1e-9);
}

#[test]
fn explicit_route_is_used_for_the_probe() {
    let traffic = Arc::new(RecordingTraffic(Mutex::new(Vec::new())));
    let opt = TemporalOptimizer::new(
        Arc::new(FixedGridSource::unavailable()),
        traffic.clone(),
        Arc::new(FixedClock::weekday(9)),
    );
    let start = Coordinates::new(1.0, 2.0);
    let end = Coordinates::new(3.0, 4.0);
    let request =
        ForecastRequest::transport("London", Some(25.0), VehicleType::Train).with_route(start, end);
    opt.forecast(&request).unwrap();

    let queries = traffic.0.lock().unwrap();
    assert_eq!(queries[0].route(), Some((start, end)));
    assert_eq!(queries[0].distance_km, 25.0);
}

// ── T-O3: failures ──

#[test]
fn non_finite_estimate_is_an_error() {
    let err = forecast_from_baseline(
        &ForecastRequest::energy("UK", Some(f64::INFINITY)),
        FixedClock::weekday(14).0,
        Baseline::fallback(carbonsense_core::Domain::Energy),
    )
    .unwrap_err();
    assert_eq!(err, OptimizationError::NonFiniteEstimate { hour: 14 });
}

#[test]
fn forecast_is_deterministic_for_fixed_inputs() {
    let opt = optimizer(
        FixedGridSource::intensity(321.0),
        FixedTrafficSource::unavailable(),
        FixedClock::saturday(7),
    );
    let request = ForecastRequest::energy("California", Some(3.0));
    assert_eq!(opt.forecast(&request).unwrap(), opt.forecast(&request).unwrap());
}

#[test]
fn fallback_grid_baseline_is_the_training_intensity() {
    use carbonsense_core::constants::TRAINING_GRID_INTENSITY;

    let baseline = Baseline::fallback(carbonsense_core::Domain::Energy);
    assert_eq!(baseline.value, TRAINING_GRID_INTENSITY);
    assert!(!baseline.is_observed());
}

// ── T-O4: recommendation tiers ──

fn slot(hour: u32, time: &str, emissions: f64) -> ForecastSlot {
    ForecastSlot {
        time: time.to_string(),
        datetime: format!("2024-03-13T{hour:02}:00:00"),
        hour,
        day: "Wed".to_string(),
        hours_ahead: 0,
        is_weekend: false,
        estimated_emissions: emissions,
        grid_intensity: None,
        traffic_factor: None,
        confidence: Confidence::Medium,
        forecast_method: "real_baseline_plus_patterns".to_string(),
        savings_percent: 0.0,
    }
}

#[test]
fn recommendation_tiers_follow_savings_thresholds() {
    let optimal = slot(10, "10:00 AM", 1.0);
    let current = slot(19, "07:00 PM", 1.2);
    let tier = |savings: f64| recommend(Domain::Energy, &optimal, Some(&current), savings);

    // Display rounds, so the values just below a threshold read as the next one.
    assert_eq!(tier(4.99), "Current timing is good. Only 5% potential improvement.");
    assert_eq!(tier(5.0), "Consider 10:00 AM (Wed) for 5% lower emissions.");
    assert_eq!(tier(14.99), "Consider 10:00 AM (Wed) for 15% lower emissions.");
    assert_eq!(
        tier(15.0),
        "Significant savings available! Charging at 10:00 AM (Wed) could reduce \
         emissions by 15%. Grid will be cleaner (solar generation peak)."
    );
}

#[test]
fn transport_major_savings_describe_the_optimal_hour() {
    let optimal = slot(23, "11:00 PM", 1.0);
    let current = slot(8, "08:00 AM", 1.7);
    assert_eq!(
        recommend(Domain::Transport, &optimal, Some(&current), 41.2),
        "Major savings possible! Traveling at 11:00 PM (Wed) could reduce emissions by \
         41%. Clear roads, minimal traffic."
    );
}

#[test]
fn recommendation_without_current_slot_names_the_optimal_time() {
    let optimal = slot(3, "03:00 AM", 0.8);
    assert_eq!(
        recommend(Domain::Energy, &optimal, None, 0.0),
        "Optimal time: 03:00 AM (Wed)"
    );
}
