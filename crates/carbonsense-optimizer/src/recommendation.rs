//! Natural-language timing recommendation.

use carbonsense_core::models::{Domain, ForecastSlot};

/// Below this saving (%) the current time is good enough.
pub const GOOD_ENOUGH_PERCENT: f64 = 5.0;

/// At or above this saving (%) the savings are called significant.
pub const SIGNIFICANT_PERCENT: f64 = 15.0;

/// Recommendation for moving from `current` to `optimal`.
pub fn recommend(
    domain: Domain,
    optimal: &ForecastSlot,
    current: Option<&ForecastSlot>,
    savings_percent: f64,
) -> String {
    let Some(current) = current else {
        return format!("Optimal time: {} ({})", optimal.time, optimal.day);
    };

    if optimal.hour == current.hour {
        return match domain {
            Domain::Energy => "Great timing! This is one of the best times to use energy. \
                               Grid is relatively clean right now."
                .to_string(),
            Domain::Transport => {
                "Great timing! Traffic conditions are favorable right now for your trip."
                    .to_string()
            }
        };
    }

    if savings_percent < GOOD_ENOUGH_PERCENT {
        return format!(
            "Current timing is good. Only {savings_percent:.0}% potential improvement."
        );
    }

    if savings_percent < SIGNIFICANT_PERCENT {
        return format!(
            "Consider {} ({}) for {savings_percent:.0}% lower emissions.",
            optimal.time, optimal.day
        );
    }

    match domain {
        Domain::Energy => format!(
            "Significant savings available! Charging at {} ({}) could reduce emissions by \
             {savings_percent:.0}%. Grid will be {}.",
            optimal.time,
            optimal.day,
            time_description(domain, optimal.hour)
        ),
        Domain::Transport => format!(
            "Major savings possible! Traveling at {} ({}) could reduce emissions by \
             {savings_percent:.0}%. {}.",
            optimal.time,
            optimal.day,
            time_description(domain, optimal.hour)
        ),
    }
}

/// Typical conditions at `hour`.
pub fn time_description(domain: Domain, hour: u32) -> &'static str {
    match domain {
        Domain::Energy => match hour {
            10..=16 => "cleaner (solar generation peak)",
            22..=23 | 0..=5 => "cleaner (low demand, wind power)",
            18..=21 => "at evening peak (avoid if possible)",
            _ => "at moderate intensity",
        },
        Domain::Transport => match hour {
            7..=9 | 17..=19 => "Rush hour conditions",
            22..=23 | 0..=5 => "Clear roads, minimal traffic",
            12..=14 => "Moderate lunch-time traffic",
            _ => "Light to moderate traffic",
        },
    }
}
