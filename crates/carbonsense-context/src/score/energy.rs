//! Energy sub-scores: grid intensity, weather, time of day.

use carbonsense_core::models::{GridReading, WeatherCondition, WeatherObservation};

use super::SubScore;

pub fn grid(reading: Option<&GridReading>) -> SubScore {
    let mut sub = SubScore::new("grid");
    let Some(reading) = reading else {
        return sub;
    };
    let g = reading.intensity_gco2_kwh;
    if g < 100.0 {
        sub.add(30.0, format!("Very clean grid ({g:.0} gCO2/kWh)"));
    } else if g < 200.0 {
        sub.add(20.0, format!("Clean grid ({g:.0} gCO2/kWh)"));
    } else if g < 300.0 {
        sub.add(10.0, format!("Moderately clean grid ({g:.0} gCO2/kWh)"));
    } else if g < 400.0 {
        sub.add(0.0, format!("Average grid ({g:.0} gCO2/kWh)"));
    } else if g < 500.0 {
        sub.add(-15.0, format!("Carbon-heavy grid ({g:.0} gCO2/kWh)"));
    } else {
        sub.add(-30.0, format!("Very carbon-heavy grid ({g:.0} gCO2/kWh)"));
    }
    sub
}

pub fn weather(observation: Option<&WeatherObservation>) -> SubScore {
    let mut sub = SubScore::new("weather");
    let Some(obs) = observation else {
        return sub;
    };
    let temp = obs.temperature_c;

    if (18.0..=22.0).contains(&temp) {
        sub.add(10.0, format!("Mild ({temp:.0}°C), low HVAC demand"));
    }
    if obs.condition == WeatherCondition::Clear {
        sub.add(5.0, "Clear skies, strong solar output");
    }
    if obs.wind_speed_ms > 5.0 {
        sub.add(10.0, format!("Windy ({:.1} m/s), strong wind output", obs.wind_speed_ms));
    }
    if !(5.0..=30.0).contains(&temp) {
        sub.add(-10.0, format!("Extreme temperature ({temp:.0}°C), high HVAC demand"));
    }
    sub
}

/// Solar, evening and night bands are exclusive; the weekend bonus stacks.
pub fn time(hour: u32, is_weekend: bool) -> SubScore {
    let mut sub = SubScore::new("time");
    match hour {
        10..=16 => sub.add(10.0, "Daytime solar generation"),
        18..=21 => sub.add(-20.0, "Evening demand peak"),
        22..=23 | 0..=5 => sub.add(5.0, "Low overnight demand"),
        _ => {}
    }
    if is_weekend {
        sub.add(10.0, "Weekend, lower industrial demand");
    }
    sub
}
