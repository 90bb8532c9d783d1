use carbonsense_core::models::{WeatherCondition, WeatherObservation};

/// Weather multiplier for road transport with the reasons that raised it.
///
/// Starts at 1.0; each condition adds its own penalty.
pub fn weather_multiplier(observation: &WeatherObservation) -> (f64, Vec<String>) {
    let mut multiplier = 1.0;
    let mut reasons = Vec::new();
    let temp = observation.temperature_c;

    if temp < 0.0 {
        multiplier += 0.15;
        reasons.push(format!("Freezing ({temp:.0}°C): cold starts and cabin heating"));
    } else if temp < 10.0 {
        multiplier += 0.08;
        reasons.push(format!("Cold ({temp:.0}°C): longer engine warm-up"));
    }
    if temp > 30.0 {
        multiplier += 0.10;
        reasons.push(format!("Hot ({temp:.0}°C): air conditioning load"));
    }

    if observation.wind_speed_ms > 10.0 {
        multiplier += 0.05;
        reasons.push(format!(
            "High wind ({:.1} m/s): extra aerodynamic drag",
            observation.wind_speed_ms
        ));
    }

    match observation.condition {
        WeatherCondition::Rain | WeatherCondition::Drizzle => {
            multiplier += 0.05;
            reasons.push("Rain: higher rolling resistance and slower traffic".to_string());
        }
        WeatherCondition::Snow => {
            multiplier += 0.15;
            reasons.push("Snow: low traction and slow traffic".to_string());
        }
        WeatherCondition::Thunderstorm => {
            multiplier += 0.08;
            reasons.push("Thunderstorm: heavy rain and disrupted traffic".to_string());
        }
        _ => {}
    }

    (multiplier, reasons)
}
