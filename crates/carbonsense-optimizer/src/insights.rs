//! Pattern insights over a ranked horizon.

use carbonsense_core::models::{Domain, ForecastSlot};

/// Insights reported per forecast, at most.
pub const MAX_INSIGHTS: usize = 4;

/// Slots within this ratio of the minimum count as the best window.
const WINDOW_TOLERANCE: f64 = 1.10;

const RUSH_HOURS: [u32; 5] = [7, 8, 17, 18, 19];

fn is_night(hour: u32) -> bool {
    hour >= 22 || hour <= 5
}

fn mean<'a>(slots: impl Iterator<Item = &'a ForecastSlot>) -> Option<f64> {
    let (sum, count) = slots.fold((0.0, 0usize), |(sum, n), s| (sum + s.estimated_emissions, n + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Between two and four insights for a ranked (best-first) horizon.
pub fn generate(ranked: &[ForecastSlot], domain: Domain) -> Vec<String> {
    let Some(optimal) = ranked.first() else {
        return Vec::new();
    };

    let mut chronological: Vec<&ForecastSlot> = ranked.iter().collect();
    chronological.sort_by_key(|s| s.hours_ahead);

    let mut insights = Vec::new();
    match domain {
        Domain::Energy => {
            insights.extend(best_window(&chronological, optimal.estimated_emissions));
            insights.extend(weekend_vs_weekday(ranked, domain));
            insights.extend(night_vs_day(ranked));
        }
        Domain::Transport => {
            insights.extend(rush_vs_off_peak(ranked));
            insights.push("Optimal travel window: 10pm - 6am (minimal traffic)".to_string());
            insights.extend(midday_option(ranked, optimal.estimated_emissions));
            insights.extend(weekend_vs_weekday(ranked, domain));
        }
    }

    if insights.len() < 2 {
        insights.push(spread(optimal));
    }
    insights.truncate(MAX_INSIGHTS);
    insights
}

/// Longest chronological run of slots within 10% of the minimum.
fn best_window(chronological: &[&ForecastSlot], minimum: f64) -> Option<String> {
    let threshold = minimum * WINDOW_TOLERANCE;
    let mut best: Option<(usize, usize)> = None;
    let mut run_start: Option<usize> = None;

    for (i, slot) in chronological.iter().enumerate() {
        if slot.estimated_emissions <= threshold {
            let start = *run_start.get_or_insert(i);
            if best.map_or(true, |(s, e)| i - start > e - s) {
                best = Some((start, i));
            }
        } else {
            run_start = None;
        }
    }

    let (start, end) = best?;
    let (first, last) = (chronological[start], chronological[end]);
    Some(if start == end {
        format!("Best hour: {} ({})", first.time, first.day)
    } else {
        format!("Best window: {} - {}", first.time, last.time)
    })
}

fn weekend_vs_weekday(ranked: &[ForecastSlot], domain: Domain) -> Option<String> {
    let weekend = mean(ranked.iter().filter(|s| s.is_weekend))?;
    let weekday = mean(ranked.iter().filter(|s| !s.is_weekend))?;
    if weekday <= 0.0 || weekend >= weekday * 0.9 {
        return None;
    }

    let diff = (weekday - weekend) / weekday * 100.0;
    Some(match domain {
        Domain::Energy => format!("Weekend charging is {diff:.0}% cleaner on average"),
        Domain::Transport => format!("Weekend travel produces {diff:.0}% less emissions on average"),
    })
}

fn night_vs_day(ranked: &[ForecastSlot]) -> Option<String> {
    let night = mean(ranked.iter().filter(|s| is_night(s.hour)))?;
    let day = mean(ranked.iter().filter(|s| (9..=17).contains(&s.hour)))?;

    if night < day * 0.85 {
        Some("Night charging (10pm-6am) reduces emissions significantly".to_string())
    } else if day < night * 0.85 {
        Some("Daytime charging (9am-5pm) is cleaner due to solar generation".to_string())
    } else {
        None
    }
}

fn rush_vs_off_peak(ranked: &[ForecastSlot]) -> Option<String> {
    let rush = mean(ranked.iter().filter(|s| RUSH_HOURS.contains(&s.hour)))?;
    let off_peak = mean(ranked.iter().filter(|s| is_night(s.hour)))?;
    if rush <= 0.0 {
        return None;
    }

    let diff = (rush - off_peak) / rush * 100.0;
    (diff > 30.0).then(|| format!("Rush hour adds {diff:.0}% more emissions due to traffic"))
}

fn midday_option(ranked: &[ForecastSlot], minimum: f64) -> Option<String> {
    let midday = mean(ranked.iter().filter(|s| (10..=15).contains(&s.hour)))?;
    (midday <= minimum * 1.15).then(|| "Midday (10am-3pm) is also a good option".to_string())
}

fn spread(optimal: &ForecastSlot) -> String {
    if optimal.savings_percent > 0.0 {
        format!(
            "Timing can cut emissions by up to {:.0}% over the next 24 hours",
            optimal.savings_percent
        )
    } else {
        "Emissions are flat across the next 24 hours, so timing makes little difference"
            .to_string()
    }
}
