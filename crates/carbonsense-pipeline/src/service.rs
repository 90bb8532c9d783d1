//! Service wiring: every collaborator is built once and injected.

use std::path::Path;
use std::sync::Arc;

use uuid::Uuid;

use carbonsense_context::{AdjustmentEngine, ContextScoreCalculator, ScoreInputs};
use carbonsense_core::config::{CarbonConfig, ContextConfig, ProviderCredentials};
use carbonsense_core::errors::CarbonResult;
use carbonsense_core::models::{
    Domain, FeatureVector, GridReading, ModelOutcome, ModelVariant, OptimizationResult,
    TrafficReading, WeatherReading,
};
use carbonsense_core::traits::{
    GridQuery, IClock, IGridIntensitySource, IJsonTransport, ITrafficSource, IWeatherSource,
    SystemClock, TrafficQuery,
};
use carbonsense_optimizer::TemporalOptimizer;
use carbonsense_signals::grid::compare_live_vs_static;
use carbonsense_signals::{
    GridIntensityResolver, HttpClient, OpenWeatherProvider, TrafficImpactResolver,
};

use crate::health::{self, HealthReport, ProviderStatus};
use crate::optimize;
use crate::predict::{self, PredictResponse, CONTEXT_AWARE, TRAFFIC_AWARE};
use crate::registry::ModelRegistry;
use crate::request::{OptimizeRequest, PredictRequest};
use crate::tracing_setup;
use crate::validation::{self, ValidatedRequest};

/// External signal sources and the clock.
#[derive(Clone)]
pub struct SignalSources {
    pub grid: Arc<dyn IGridIntensitySource>,
    pub traffic: Arc<dyn ITrafficSource>,
    pub weather: Arc<dyn IWeatherSource>,
    pub clock: Arc<dyn IClock>,
}

impl SignalSources {
    /// Real providers over one shared HTTP transport.
    pub fn from_config(
        config: &CarbonConfig,
        credentials: &ProviderCredentials,
    ) -> CarbonResult<Self> {
        let transport: Arc<dyn IJsonTransport> = Arc::new(HttpClient::new()?);
        Ok(Self::with_transport(transport, Arc::new(SystemClock), config, credentials))
    }

    /// Real providers over an injected transport and clock.
    pub fn with_transport(
        transport: Arc<dyn IJsonTransport>,
        clock: Arc<dyn IClock>,
        config: &CarbonConfig,
        credentials: &ProviderCredentials,
    ) -> Self {
        let providers = &config.providers;
        Self {
            grid: Arc::new(GridIntensityResolver::new(
                transport.clone(),
                clock.clone(),
                providers,
                credentials,
            )),
            traffic: Arc::new(TrafficImpactResolver::new(
                transport.clone(),
                clock.clone(),
                providers,
                credentials,
            )),
            weather: Arc::new(OpenWeatherProvider::new(transport, providers, credentials)),
            clock,
        }
    }
}

/// Serves `/predict`, `/optimize` and `/health`.
pub struct CarbonService {
    registry: ModelRegistry,
    sources: SignalSources,
    engine: AdjustmentEngine,
    scorer: ContextScoreCalculator,
    optimizer: TemporalOptimizer,
    providers: ProviderStatus,
}

impl CarbonService {
    /// Process startup: layered config rooted at `root`, credentials from
    /// the environment, tracing, then the real providers.
    pub fn bootstrap(root: &Path, registry: ModelRegistry) -> CarbonResult<Self> {
        let config = CarbonConfig::load(root)?;
        tracing_setup::init_from_config(&config.observability);
        let credentials = ProviderCredentials::from_env();

        let service = Self::from_config(&config, &credentials, registry)?;
        tracing::info!(
            providers = ?service.providers,
            "carbonsense service ready"
        );
        Ok(service)
    }

    /// Build with the real providers.
    pub fn from_config(
        config: &CarbonConfig,
        credentials: &ProviderCredentials,
        registry: ModelRegistry,
    ) -> CarbonResult<Self> {
        let sources = SignalSources::from_config(config, credentials)?;
        Ok(Self::with_sources(
            registry,
            sources,
            &config.context,
            ProviderStatus::from_credentials(credentials),
        ))
    }

    pub fn with_sources(
        registry: ModelRegistry,
        sources: SignalSources,
        context: &ContextConfig,
        providers: ProviderStatus,
    ) -> Self {
        let optimizer = TemporalOptimizer::new(
            sources.grid.clone(),
            sources.traffic.clone(),
            sources.clock.clone(),
        );
        Self {
            registry,
            sources,
            engine: AdjustmentEngine::new(context),
            scorer: ContextScoreCalculator::new(),
            optimizer,
            providers,
        }
    }

    /// Predict emissions for one activity with live-context adjustments.
    pub fn predict(&self, request: &PredictRequest) -> CarbonResult<PredictResponse> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "predict",
            %request_id,
            domain = %request.domain,
            location = %request.location
        );
        let _guard = span.enter();

        let request = validation::validate_predict(request)?;
        let response = match request.domain {
            Domain::Energy => self.predict_energy(request_id, &request),
            Domain::Transport => self.predict_transport(request_id, &request),
        };

        tracing::info!(
            models = response.models_used.len(),
            score = response.context_score.score,
            "prediction complete"
        );
        Ok(response)
    }

    /// Recommend the lowest-emission time in the next 24 hours.
    pub fn optimize(&self, request: &OptimizeRequest) -> CarbonResult<OptimizationResult> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "optimize",
            %request_id,
            domain = %request.domain,
            location = %request.location
        );
        let _guard = span.enter();

        let request = validation::validate_optimize(request)?;
        let result = self.optimizer.forecast(&optimize::forecast_request(&request))?;

        tracing::info!(
            optimal_hour = result.optimal_time.hour,
            savings_percent = result.potential_savings.percent,
            "optimization complete"
        );
        Ok(result)
    }

    pub fn health(&self) -> HealthReport {
        health::report(&self.registry, &self.providers)
    }

    fn predict_energy(&self, request_id: Uuid, request: &ValidatedRequest) -> PredictResponse {
        let kwh = request.quantity.unwrap_or_default();
        let query = GridQuery::new(&request.location, Some(request.hour), request.is_weekend);
        let grid = self.grid(&query);
        let weather = self.weather(&request.location);

        let features =
            FeatureVector::energy(kwh, request.hour, request.day_of_week, request.is_weekend);
        let mut results = predict::run_models(&self.registry, Domain::Energy, &features);

        if let Some(adjusted) = self.engine.adjust_energy(
            results.success(ModelVariant::Bayesian),
            grid.as_ref(),
            weather.as_ref(),
        ) {
            results.push(CONTEXT_AWARE, ModelOutcome::Success(adjusted));
        }

        let context_score = self.scorer.score(
            Domain::Energy,
            &ScoreInputs {
                traffic: None,
                weather: weather.as_ref().map(|w| &w.observation),
                grid: grid.as_ref(),
                hour: request.hour,
                is_weekend: request.is_weekend,
            },
        );

        let grid_context = grid.map(|mut reading| {
            reading.comparison = Some(compare_live_vs_static(&reading, query.region));
            reading
        });

        PredictResponse {
            status: "success".to_string(),
            request_id,
            domain: Domain::Energy,
            models_used: results.models_used(),
            explainability: std::mem::take(&mut results.explainability),
            predictions: results.into_predictions(),
            grid_context,
            weather_context: weather,
            traffic_context: None,
            context_score,
        }
    }

    fn predict_transport(&self, request_id: Uuid, request: &ValidatedRequest) -> PredictResponse {
        let distance_km = request.quantity.unwrap_or_default();
        let mut query = TrafficQuery::new(distance_km, &request.location);
        if let Some((start, end)) = request.route {
            query = query.with_route(start, end);
        }
        let traffic = self.traffic(&query);
        let weather = self.weather(&request.location);

        let features = FeatureVector::transport(
            distance_km,
            request.hour,
            request.day_of_week,
            request.is_weekend,
        );
        let mut results = predict::run_models(&self.registry, Domain::Transport, &features);

        if let Some(adjusted) = self.engine.adjust_transport(
            results.success(ModelVariant::Rf),
            request.vehicle,
            traffic.as_ref(),
            weather.as_ref(),
        ) {
            results.push(TRAFFIC_AWARE, ModelOutcome::Success(adjusted.traffic_aware));
            results.push(CONTEXT_AWARE, ModelOutcome::Success(adjusted.context_aware));
        }

        let context_score = self.scorer.score(
            Domain::Transport,
            &ScoreInputs {
                traffic: traffic.as_ref(),
                weather: weather.as_ref().map(|w| &w.observation),
                grid: None,
                hour: request.hour,
                is_weekend: request.is_weekend,
            },
        );

        PredictResponse {
            status: "success".to_string(),
            request_id,
            domain: Domain::Transport,
            models_used: results.models_used(),
            explainability: std::mem::take(&mut results.explainability),
            predictions: results.into_predictions(),
            grid_context: None,
            weather_context: weather,
            traffic_context: traffic,
            context_score,
        }
    }

    fn grid(&self, query: &GridQuery) -> Option<GridReading> {
        self.sources
            .grid
            .grid_intensity(query)
            .map_err(|e| tracing::warn!(error = %e, "no grid context"))
            .ok()
    }

    fn traffic(&self, query: &TrafficQuery) -> Option<TrafficReading> {
        self.sources
            .traffic
            .traffic_impact(query)
            .map_err(|e| tracing::warn!(error = %e, "no traffic context"))
            .ok()
    }

    /// Weather is optional context; any failure just leaves it out.
    fn weather(&self, location: &str) -> Option<WeatherReading> {
        self.sources
            .weather
            .current_weather(location)
            .map_err(|e| tracing::debug!(error = %e, "no weather context"))
            .ok()
    }
}
