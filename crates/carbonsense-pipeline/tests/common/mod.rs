//! Shared service builders for pipeline tests.

#![allow(dead_code)]

use std::sync::Arc;

use carbonsense_core::config::ContextConfig;
use carbonsense_core::models::{Domain, ModelVariant};
use carbonsense_pipeline::health::{ProviderState, ProviderStatus};
use carbonsense_pipeline::{CarbonService, ModelRegistry, SignalSources};
use test_fixtures::{FixedClock, FixedGridSource, FixedTrafficSource, FixedWeatherSource, StubModel};

pub fn all_unconfigured() -> ProviderStatus {
    ProviderStatus {
        grid_uk: ProviderState::Configured,
        grid_california: ProviderState::Unconfigured,
        traffic_realtime: ProviderState::Unconfigured,
        weather: ProviderState::Unconfigured,
    }
}

pub fn sources(
    grid: FixedGridSource,
    traffic: FixedTrafficSource,
    weather: FixedWeatherSource,
) -> SignalSources {
    SignalSources {
        grid: Arc::new(grid),
        traffic: Arc::new(traffic),
        weather: Arc::new(weather),
        clock: Arc::new(FixedClock::weekday(14)),
    }
}

/// Energy: all four variants, Bayesian 2.0 ± 0.1.
/// Transport: linear 1.1 and rf 1.0.
pub fn registry() -> ModelRegistry {
    ModelRegistry::new()
        .with_model(Domain::Energy, ModelVariant::Linear, Arc::new(StubModel::point(2.3)))
        .with_model(Domain::Energy, ModelVariant::Rf, Arc::new(StubModel::point(2.1)))
        .with_model(Domain::Energy, ModelVariant::Xgb, Arc::new(StubModel::point(2.2)))
        .with_model(
            Domain::Energy,
            ModelVariant::Bayesian,
            Arc::new(StubModel::probabilistic(2.0, 0.1)),
        )
        .with_model(Domain::Transport, ModelVariant::Linear, Arc::new(StubModel::point(1.1)))
        .with_model(Domain::Transport, ModelVariant::Rf, Arc::new(StubModel::point(1.0)))
}

pub fn service(registry: ModelRegistry, sources: SignalSources) -> CarbonService {
    CarbonService::with_sources(registry, sources, &ContextConfig::default(), all_unconfigured())
}
