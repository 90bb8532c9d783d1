//! Time-of-day traffic estimate, used without coordinates or when every
//! routing provider fails.

use carbonsense_core::constants::FREE_FLOW_SPEED_KMH;

/// A named traffic band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrafficBand {
    pub delay_factor: f64,
    pub condition: &'static str,
}

const fn band(delay_factor: f64, condition: &'static str) -> TrafficBand {
    TrafficBand {
        delay_factor,
        condition,
    }
}

/// Typical traffic for `hour` on a weekday or weekend.
pub fn typical_band(hour: u32, is_weekend: bool) -> TrafficBand {
    if is_weekend {
        return match hour {
            10..=16 => band(1.3, "Moderate Traffic"),
            18..=20 => band(1.2, "Light Traffic"),
            _ => band(1.05, "Free Flow"),
        };
    }
    match hour {
        7..=9 => band(1.7, "Heavy Traffic"),
        17..=19 => band(1.8, "Heavy Traffic"),
        12..=14 => band(1.3, "Moderate Traffic"),
        10..=16 => band(1.2, "Light-Moderate Traffic"),
        22..=23 | 0..=5 => band(1.0, "Free Flow"),
        _ => band(1.1, "Light Traffic"),
    }
}

/// Travel minutes for `distance_km` without and with `delay_factor`.
pub fn travel_minutes(distance_km: f64, delay_factor: f64) -> (f64, f64) {
    let free_flow = distance_km / FREE_FLOW_SPEED_KMH * 60.0;
    (free_flow, free_flow * delay_factor)
}
