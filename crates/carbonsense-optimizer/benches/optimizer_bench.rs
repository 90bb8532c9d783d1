//! Criterion benchmarks for carbonsense-optimizer.
//!
//! The forecast loop is CPU-only after the baseline fetch, so these measure
//! the whole request minus I/O.

use criterion::{criterion_group, criterion_main, Criterion};

use carbonsense_core::models::Method;
use carbonsense_core::VehicleType;
use carbonsense_optimizer::{forecast_from_baseline, Baseline, ForecastRequest};
use chrono::NaiveDate;

fn bench_now() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .and_then(|d| d.and_hms_opt(18, 30, 0))
        .unwrap()
}

fn bench_energy_forecast(c: &mut Criterion) {
    let request = ForecastRequest::energy("UK", Some(10.0));
    let baseline = Baseline::observed(212.0, Method::Api);
    let now = bench_now();

    c.bench_function("energy_forecast_24h", |b| {
        b.iter(|| forecast_from_baseline(&request, now, baseline).unwrap());
    });
}

fn bench_transport_forecast(c: &mut Criterion) {
    let request = ForecastRequest::transport("London", Some(18.0), VehicleType::DieselCar);
    let baseline = Baseline::observed(1.4, Method::RealTimeApi);
    let now = bench_now();

    c.bench_function("transport_forecast_24h", |b| {
        b.iter(|| forecast_from_baseline(&request, now, baseline).unwrap());
    });
}

criterion_group!(benches, bench_energy_forecast, bench_transport_forecast);
criterion_main!(benches);
