//! Delay factor → emission multiplier, condition label, and message.
//!
//! Stop-and-go driving burns more fuel per km than free flow; the bands
//! quantise the continuous delay factor into fixed emission increases.

/// Emission multiplier for a delay factor.
pub fn emission_multiplier(delay_factor: f64) -> f64 {
    if delay_factor >= 2.0 {
        2.0
    } else if delay_factor >= 1.5 {
        1.7
    } else if delay_factor >= 1.3 {
        1.4
    } else if delay_factor >= 1.15 {
        1.2
    } else if delay_factor >= 1.05 {
        1.1
    } else {
        1.0
    }
}

/// Condition label over the same thresholds as [`emission_multiplier`].
pub fn condition(delay_factor: f64) -> &'static str {
    if delay_factor >= 2.0 {
        "Severe Congestion"
    } else if delay_factor >= 1.5 {
        "Heavy Traffic"
    } else if delay_factor >= 1.3 {
        "Moderate Traffic"
    } else if delay_factor >= 1.15 {
        "Light Traffic"
    } else if delay_factor >= 1.05 {
        "Mostly Clear"
    } else {
        "Free Flow"
    }
}

/// Human message keyed by the percentage emission increase.
pub fn message(emission_multiplier: f64) -> String {
    let increase = (emission_multiplier - 1.0) * 100.0;
    if increase >= 80.0 {
        format!("Severe congestion adding {increase:.0}% to emissions. Consider alternate routes or delaying travel.")
    } else if increase >= 50.0 {
        format!("Heavy traffic increasing emissions by {increase:.0}%. Alternate routes recommended.")
    } else if increase >= 30.0 {
        format!("Moderate congestion adding {increase:.0}% to fuel consumption.")
    } else if increase >= 15.0 {
        format!("Light traffic impact: +{increase:.0}% emissions.")
    } else if increase >= 5.0 {
        format!("Minimal traffic delay: +{increase:.0}% emissions.")
    } else {
        "Clear roads, optimal conditions for fuel efficiency.".to_string()
    }
}
