//! Forecast provenance attached to every optimization result.

use carbonsense_core::models::{DataSources, Domain, Methodology};

use crate::baseline::Baseline;

pub fn describe(domain: Domain, baseline: &Baseline) -> Methodology {
    let current_baseline = if baseline.is_live() {
        "Real-time API data"
    } else if baseline.is_observed() {
        "Estimated current conditions"
    } else {
        "Historical average"
    };

    let confidence_decay = match domain {
        Domain::Energy => "High (0-6h), Medium (6-12h), Low (12-24h)",
        Domain::Transport => "High (0-4h), Medium (4-8h), Low (8-24h)",
    };

    Methodology {
        kind: "hybrid_forecast".to_string(),
        description:
            "Uses current real-time data as baseline, applies validated time-based patterns"
                .to_string(),
        data_sources: DataSources {
            current_baseline: current_baseline.to_string(),
            patterns: "Empirical time-of-day patterns from historical data".to_string(),
            confidence_decay: confidence_decay.to_string(),
        },
        limitations: "Does not account for unpredictable events (weather changes, accidents, \
                      grid outages)"
            .to_string(),
    }
}
