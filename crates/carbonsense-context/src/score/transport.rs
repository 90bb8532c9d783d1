//! Transport sub-scores: traffic, weather, time of day.

use carbonsense_core::models::{TrafficReading, WeatherCondition, WeatherObservation};

use super::SubScore;

pub fn traffic(reading: Option<&TrafficReading>) -> SubScore {
    let mut sub = SubScore::new("traffic");
    let Some(reading) = reading else {
        return sub;
    };
    let m = reading.emission_multiplier;
    // The top band scores zero rather than the most negative value.
    if m >= 1.8 {
        sub.add(0.0, format!("Severe congestion (x{m:.1} emissions)"));
    } else if m >= 1.5 {
        sub.add(-30.0, format!("Heavy traffic (x{m:.1} emissions)"));
    } else if m >= 1.3 {
        sub.add(-15.0, format!("Moderate traffic (x{m:.1} emissions)"));
    } else if m >= 1.1 {
        sub.add(-5.0, format!("Light traffic (x{m:.1} emissions)"));
    } else {
        sub.add(10.0, "Free-flowing traffic");
    }
    sub
}

pub fn weather(observation: Option<&WeatherObservation>) -> SubScore {
    let mut sub = SubScore::new("weather");
    let Some(obs) = observation else {
        return sub;
    };
    let temp = obs.temperature_c;

    if temp < 0.0 {
        sub.add(-15.0, format!("Freezing ({temp:.0}°C) raises fuel use"));
    } else if temp < 5.0 {
        sub.add(-10.0, format!("Cold ({temp:.0}°C) raises fuel use"));
    } else if (15.0..=25.0).contains(&temp) {
        sub.add(5.0, format!("Mild ({temp:.0}°C) for efficient driving"));
    } else if temp > 30.0 {
        sub.add(-10.0, format!("Hot ({temp:.0}°C) adds air conditioning load"));
    }

    if obs.condition.is_rain() {
        sub.add(-10.0, "Rain slows traffic");
    } else if obs.condition == WeatherCondition::Snow {
        sub.add(-15.0, "Snow slows traffic");
    }
    sub
}

/// Rush hour, night and weekend are mutually exclusive, checked in that
/// order.
pub fn time(hour: u32, is_weekend: bool) -> SubScore {
    let mut sub = SubScore::new("time");
    let rush = matches!(hour, 7..=9 | 17..=19);
    let night = hour >= 22 || hour <= 5;

    if !is_weekend && rush {
        sub.add(-20.0, "Rush hour");
    } else if night {
        sub.add(15.0, "Off-peak night travel");
    } else if is_weekend {
        sub.add(10.0, "Weekend, lighter commuter traffic");
    }
    sub
}
