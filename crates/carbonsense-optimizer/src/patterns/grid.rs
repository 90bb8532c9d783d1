//! Diurnal grid-intensity pattern (UK National Grid ESO, CAISO, IEA).

/// Lower bound for a forecast intensity (gCO2/kWh).
pub const MIN_INTENSITY: f64 = 50.0;

/// Upper bound for a forecast intensity (gCO2/kWh).
pub const MAX_INTENSITY: f64 = 900.0;

/// Weekend demand reduction, stacked on the time-of-day factor.
pub const WEEKEND_FACTOR: f64 = 0.90;

/// Multiplicative adjustment for `hour`.
pub fn adjustment_factor(hour: u32, is_weekend: bool) -> f64 {
    let time_of_day = match hour {
        // Solar peak.
        10..=16 => 0.75,
        // Evening demand peak.
        18..=21 => 1.35,
        // Low demand, wind.
        22..=23 | 0..=5 => 0.80,
        // Morning ramp-up.
        6..=9 => 1.15,
        _ => 1.0,
    };

    if is_weekend {
        time_of_day * WEEKEND_FACTOR
    } else {
        time_of_day
    }
}

/// Forecast intensity at `hour` from the current baseline.
pub fn forecast_intensity(baseline: f64, hour: u32, is_weekend: bool) -> f64 {
    (baseline * adjustment_factor(hour, is_weekend)).clamp(MIN_INTENSITY, MAX_INTENSITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekend_stacks_on_time_of_day() {
        assert!((adjustment_factor(12, true) - 0.675).abs() < 1e-12);
        assert!((adjustment_factor(17, true) - 0.90).abs() < 1e-12);
        assert_eq!(adjustment_factor(17, false), 1.0);
    }

    #[test]
    fn forecast_is_clamped() {
        assert_eq!(forecast_intensity(40.0, 12, false), MIN_INTENSITY);
        assert_eq!(forecast_intensity(800.0, 19, false), MAX_INTENSITY);
        assert!((forecast_intensity(200.0, 2, false) - 160.0).abs() < 1e-9);
    }
}
