/// Live grid intensity relative to the intensity the models were trained on.
pub fn grid_factor(live_intensity: f64, training_intensity: f64) -> f64 {
    live_intensity / training_intensity
}

/// Linear weather adjustment: a score of +10 raises emissions by 10%.
pub fn weather_factor(impact_score: i32) -> f64 {
    1.0 + f64::from(impact_score) / 100.0
}
