//! Property tests for the Context Score Calculator.

use proptest::prelude::*;

use carbonsense_context::{ContextScoreCalculator, ScoreInputs};
use carbonsense_core::models::{Domain, Rating, WeatherCondition};
use test_fixtures::sources::{grid_reading, traffic_reading, weather_reading};

fn arb_condition() -> impl Strategy<Value = WeatherCondition> {
    prop_oneof![
        Just(WeatherCondition::Clear),
        Just(WeatherCondition::Clouds),
        Just(WeatherCondition::Rain),
        Just(WeatherCondition::Drizzle),
        Just(WeatherCondition::Thunderstorm),
        Just(WeatherCondition::Snow),
        Just(WeatherCondition::Other),
    ]
}

fn arb_domain() -> impl Strategy<Value = Domain> {
    prop_oneof![Just(Domain::Transport), Just(Domain::Energy)]
}

// ── Score is always clamped and rated consistently ──

proptest! {
    #[test]
    fn score_is_clamped_and_rating_matches(
        domain in arb_domain(),
        intensity in 0.0f64..2000.0,
        multiplier in 1.0f64..2.0,
        temp in -40.0f64..50.0,
        wind in 0.0f64..30.0,
        condition in arb_condition(),
        hour in 0u32..24,
        is_weekend in any::<bool>(),
        with_signals in any::<bool>(),
    ) {
        let grid = grid_reading(intensity);
        let traffic = traffic_reading(multiplier, multiplier);
        let mut weather = weather_reading(temp, condition, 0);
        weather.observation.wind_speed_ms = wind;

        let inputs = if with_signals {
            ScoreInputs {
                traffic: Some(&traffic),
                weather: Some(&weather.observation),
                grid: Some(&grid),
                hour,
                is_weekend,
            }
        } else {
            ScoreInputs { hour, is_weekend, ..Default::default() }
        };

        let score = ContextScoreCalculator::new().score(domain, &inputs);
        prop_assert!((0.0..=100.0).contains(&score.score));
        prop_assert_eq!(score.rating, Rating::from_score(score.score));
        prop_assert_eq!(score.message.as_str(), score.rating.message());
        prop_assert!(score.weights.values().all(|w| *w >= 0.0));
    }
}
