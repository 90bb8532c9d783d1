//! Request-scoped value types shared across the workspace.

pub mod context_score;
pub mod forecast;
pub mod prediction;
pub mod signal;

pub use context_score::{ContextScore, Rating};
pub use forecast::{DataSources, ForecastSlot, Methodology, OptimizationResult, PotentialSavings};
pub use prediction::{
    AdjustmentBreakdown, Domain, Explainability, FeatureContribution, FeatureVector, ModelOutcome,
    ModelOutput, ModelVariant, PredictionResult, ShapExplanation, ShapValues,
};
pub use signal::{
    Confidence, GridComparison, GridReading, Method, SignalMeta, SignalResult,
    TemporalComponents, TrafficReading, WeatherCondition, WeatherImpact, WeatherObservation,
    WeatherReading,
};
