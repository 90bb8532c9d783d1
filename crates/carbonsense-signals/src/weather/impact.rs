//! Weather Impact Scorer: raw observation → signed grid impact.
//!
//! Negative scores favour low emissions (renewables up, HVAC demand down).

use carbonsense_core::models::{WeatherCondition, WeatherImpact, WeatherObservation};

/// Score an observation additively across temperature, sky, wind and rain.
pub fn score(observation: &WeatherObservation) -> WeatherImpact {
    let temp = observation.temperature_c;
    let mut total = 0;
    let mut factors = Vec::new();

    if temp < 10.0 {
        total += 15;
        factors.push(format!("Cold ({temp:.0}°C) increases heating demand"));
    } else if temp > 28.0 {
        total += 20;
        factors.push(format!("Hot ({temp:.0}°C) increases cooling demand"));
    } else if (18.0..=22.0).contains(&temp) {
        total -= 10;
        factors.push(format!("Mild ({temp:.0}°C) reduces HVAC demand"));
    }

    if observation.condition == WeatherCondition::Clear && observation.clouds_percent < 50.0 {
        total -= 5;
        factors.push("Clear skies boost solar generation".to_string());
    }

    let wind = observation.wind_speed_ms;
    if wind > 5.0 {
        total -= 8;
        factors.push(format!("Strong wind ({wind:.1} m/s) boosts wind power"));
    } else if wind < 2.0 {
        total += 5;
        factors.push(format!("Calm air ({wind:.1} m/s) reduces wind generation"));
    }

    if observation.condition.is_rain() {
        total += 5;
        factors.push("Rain increases indoor energy use".to_string());
    }

    WeatherImpact {
        score: total,
        factors,
        message: message(total).to_string(),
    }
}

/// Five-tier message for a total score.
pub fn message(score: i32) -> &'static str {
    if score <= -10 {
        "Excellent: weather is lowering grid emissions."
    } else if score <= 0 {
        "Good: weather has a neutral to favourable effect on the grid."
    } else if score <= 10 {
        "Moderate: weather is slightly raising energy demand."
    } else if score <= 15 {
        "High: weather is driving up energy demand."
    } else {
        "Extreme: weather is pushing grid emissions well above normal."
    }
}
