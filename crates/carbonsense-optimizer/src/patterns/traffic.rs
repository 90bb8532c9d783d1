//! Diurnal traffic pattern (INRIX Global Traffic Scorecard, TomTom Traffic
//! Index) and the baseline blend.

/// Pattern multiplier for `hour`.
pub fn target_multiplier(hour: u32, is_weekend: bool) -> f64 {
    if is_weekend {
        return match hour {
            10..=16 => 1.3,
            18..=20 => 1.2,
            _ => 1.0,
        };
    }

    match hour {
        7..=9 => 1.8,
        17..=19 => 1.9,
        12..=14 => 1.3,
        10..=16 => 1.2,
        22..=23 | 0..=5 => 1.0,
        _ => 1.1,
    }
}

/// Share of the forecast taken from the live baseline.
pub fn baseline_weight(hours_ahead: u32) -> f64 {
    match hours_ahead {
        0..=2 => 0.8,
        3..=6 => 0.5,
        _ => 0.2,
    }
}

/// Forecast emission multiplier `hours_ahead` from now. Never below 1.0.
pub fn forecast_multiplier(baseline: f64, hours_ahead: u32, hour: u32, is_weekend: bool) -> f64 {
    let weight = baseline_weight(hours_ahead);
    let blended = weight * baseline + (1.0 - weight) * target_multiplier(hour, is_weekend);
    blended.max(1.0)
}
