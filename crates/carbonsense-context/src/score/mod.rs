//! Context Score Calculator.
//!
//! Starts at a neutral 50, adds three per-domain sub-scores, clamps to
//! [0, 100] and rates the result. `factors` keeps evaluation order.

pub mod energy;
pub mod transport;

use std::collections::BTreeMap;

use carbonsense_core::models::{
    ContextScore, Domain, GridReading, Rating, TrafficReading, WeatherObservation,
};

const NEUTRAL_SCORE: f64 = 50.0;

/// Signals available to the calculator. Any of them may be missing; a
/// missing signal contributes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreInputs<'a> {
    pub traffic: Option<&'a TrafficReading>,
    pub weather: Option<&'a WeatherObservation>,
    pub grid: Option<&'a GridReading>,
    pub hour: u32,
    pub is_weekend: bool,
}

/// One named component of the score.
#[derive(Debug, Clone, PartialEq)]
pub struct SubScore {
    pub name: &'static str,
    pub points: f64,
    pub factors: Vec<String>,
}

impl SubScore {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            points: 0.0,
            factors: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, points: f64, factor: impl Into<String>) {
        self.points += points;
        self.factors.push(factor.into());
    }
}

/// Stateless scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextScoreCalculator;

impl ContextScoreCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Per-domain sub-scores, in evaluation order.
    pub fn sub_scores(&self, domain: Domain, inputs: &ScoreInputs<'_>) -> [SubScore; 3] {
        match domain {
            Domain::Transport => [
                transport::traffic(inputs.traffic),
                transport::weather(inputs.weather),
                transport::time(inputs.hour, inputs.is_weekend),
            ],
            Domain::Energy => [
                energy::grid(inputs.grid),
                energy::weather(inputs.weather),
                energy::time(inputs.hour, inputs.is_weekend),
            ],
        }
    }

    pub fn score(&self, domain: Domain, inputs: &ScoreInputs<'_>) -> ContextScore {
        let subs = self.sub_scores(domain, inputs);

        let raw = subs.iter().fold(NEUTRAL_SCORE, |acc, s| acc + s.points);
        let score = raw.clamp(0.0, 100.0);
        let rating = Rating::from_score(score);

        let weights: BTreeMap<String, f64> = subs
            .iter()
            .map(|s| (s.name.to_string(), s.points.abs()))
            .collect();
        let factors: Vec<String> = subs.into_iter().flat_map(|s| s.factors).collect();

        tracing::debug!(%domain, raw, score, rating = rating.label(), "context score");

        ContextScore {
            score,
            rating,
            message: rating.message().to_string(),
            factors,
            weights,
        }
    }
}
