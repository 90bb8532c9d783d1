//! `/optimize` pipeline tests.

mod common;

use carbonsense_core::errors::{CarbonError, CarbonErrorCode, OptimizationError};
use carbonsense_core::models::Domain;
use carbonsense_pipeline::OptimizeRequest;
use test_fixtures::{FixedGridSource, FixedTrafficSource, FixedWeatherSource};

use common::{registry, service, sources};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── T-OP1: forecasts through the service ──

#[test]
fn energy_optimization_uses_live_grid_baseline() {
    let svc = service(
        registry(),
        sources(
            FixedGridSource::intensity(200.0),
            FixedTrafficSource::unavailable(),
            FixedWeatherSource::unavailable(),
        ),
    );
    let result = svc.optimize(&OptimizeRequest::energy(10.0, "UK")).unwrap();

    assert_eq!(result.domain, Domain::Energy);
    assert_eq!(result.location, "UK");
    assert_eq!(result.forecast.len(), 24);
    assert_eq!(result.optimal_time.hour, 14);
    assert!(approx(result.optimal_time.estimated_emissions, 1.5));
    assert!(result.recommendation.starts_with("Great timing!"));
    assert_eq!(result.methodology.data_sources.current_baseline, "Real-time API data");
    assert_eq!(result.best_times.len(), 5);
    assert_eq!(result.worst_times.len(), 3);
}

#[test]
fn optimization_quantity_is_optional() {
    let svc = service(
        registry(),
        sources(
            FixedGridSource::intensity(200.0),
            FixedTrafficSource::unavailable(),
            FixedWeatherSource::unavailable(),
        ),
    );
    let mut request = OptimizeRequest::energy(1.0, "UK");
    request.kwh = None;

    let result = svc.optimize(&request).unwrap();
    assert_eq!(result.forecast.len(), 24);
    assert!(result.optimal_time.estimated_emissions > 0.0);
}

#[test]
fn transport_optimization_falls_back_without_traffic() {
    let svc = service(
        registry(),
        sources(
            FixedGridSource::unavailable(),
            FixedTrafficSource::unavailable(),
            FixedWeatherSource::unavailable(),
        ),
    );
    let request = OptimizeRequest::transport(10.0, "London").vehicle("electric");
    let result = svc.optimize(&request).unwrap();

    assert_eq!(result.domain, Domain::Transport);
    assert_eq!(result.methodology.data_sources.current_baseline, "Historical average");
    assert!(result.forecast.iter().all(|slot| slot.grid_intensity.is_none()));
    assert!(result.forecast.iter().all(|slot| slot.traffic_factor.is_some()));
}

// ── T-OP2: errors ──

#[test]
fn negative_quantity_is_rejected() {
    let svc = service(
        registry(),
        sources(
            FixedGridSource::intensity(200.0),
            FixedTrafficSource::unavailable(),
            FixedWeatherSource::unavailable(),
        ),
    );
    let err = svc.optimize(&OptimizeRequest::energy(-5.0, "UK")).unwrap_err();
    assert_eq!(err.http_status(), 400);
    assert_eq!(err.error_code(), "VALIDATION_NEGATIVE");
}

#[test]
fn overflowing_estimate_is_a_server_error() {
    let svc = service(
        registry(),
        sources(
            FixedGridSource::intensity(200.0),
            FixedTrafficSource::unavailable(),
            FixedWeatherSource::unavailable(),
        ),
    );
    let err = svc.optimize(&OptimizeRequest::energy(f64::MAX, "UK")).unwrap_err();

    assert!(matches!(
        err,
        CarbonError::Optimization(OptimizationError::NonFiniteEstimate { .. })
    ));
    assert_eq!(err.http_status(), 500);
}
