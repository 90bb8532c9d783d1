//! Deterministic time-of-day grid model for India. No network access.

use carbonsense_core::models::{
    Confidence, GridReading, Method, SignalMeta, TemporalComponents,
};

pub const SOURCE: &str = "Temporal Model";

const BASE_INTENSITY: f64 = 700.0;
const DAYTIME_ADJUSTMENT: f64 = 50.0;
const NIGHT_ADJUSTMENT: f64 = -100.0;
const SHOULDER_ADJUSTMENT: f64 = 20.0;
const WEEKEND_ADJUSTMENT: f64 = -30.0;

/// Time-of-day adjustment for `hour`: daytime 9–21, night before 6 or from
/// 22, shoulder otherwise.
pub fn time_adjustment(hour: u32, is_weekend: bool) -> f64 {
    let band = if (9..=21).contains(&hour) {
        DAYTIME_ADJUSTMENT
    } else if hour < 6 || hour >= 22 {
        NIGHT_ADJUSTMENT
    } else {
        SHOULDER_ADJUSTMENT
    };
    if is_weekend {
        band + WEEKEND_ADJUSTMENT
    } else {
        band
    }
}

/// Estimate intensity for `hour`. Always succeeds.
pub fn estimate(hour: u32, is_weekend: bool, timestamp: String) -> GridReading {
    let adjustment = time_adjustment(hour, is_weekend);
    GridReading {
        intensity_gco2_kwh: BASE_INTENSITY + adjustment,
        meta: SignalMeta {
            source: SOURCE.to_string(),
            location: "India".to_string(),
            timestamp,
            confidence: Confidence::Medium,
            method: Method::Temporal,
        },
        components: Some(TemporalComponents {
            base: BASE_INTENSITY,
            time_adjustment: adjustment,
            hour,
            is_weekend,
        }),
        comparison: None,
    }
}
