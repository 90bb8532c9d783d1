//! Slot ranking and savings.

use carbonsense_core::errors::OptimizationError;
use carbonsense_core::models::{ForecastSlot, PotentialSavings};

use crate::round_to;

/// Sort ascending by estimated emissions and set each slot's saving
/// relative to the worst slot. Equal estimates keep chronological order.
pub fn rank(mut slots: Vec<ForecastSlot>) -> Result<Vec<ForecastSlot>, OptimizationError> {
    slots.sort_by(|a, b| a.estimated_emissions.total_cmp(&b.estimated_emissions));

    let worst = slots
        .last()
        .map(|s| s.estimated_emissions)
        .ok_or(OptimizationError::EmptyHorizon)?;

    for slot in &mut slots {
        slot.savings_percent = if worst > 0.0 {
            round_to((worst - slot.estimated_emissions) / worst * 100.0, 1)
        } else {
            0.0
        };
    }
    Ok(slots)
}

/// The `n` lowest-emission slots, best first.
pub fn best(ranked: &[ForecastSlot], n: usize) -> Vec<ForecastSlot> {
    ranked.iter().take(n).cloned().collect()
}

/// The `n` highest-emission slots, in ranked order (worst last).
pub fn worst(ranked: &[ForecastSlot], n: usize) -> Vec<ForecastSlot> {
    ranked[ranked.len().saturating_sub(n)..].to_vec()
}

/// The slot for the current hour.
pub fn current(ranked: &[ForecastSlot]) -> Option<&ForecastSlot> {
    ranked.iter().find(|s| s.hours_ahead == 0)
}

/// What moving from the current slot to the optimal one saves, as kg and as
/// a percentage of the current estimate.
pub fn potential_savings(current: Option<&ForecastSlot>, optimal: &ForecastSlot) -> PotentialSavings {
    let Some(current) = current else {
        return PotentialSavings {
            absolute_kg: 0.0,
            percent: 0.0,
        };
    };

    let absolute = current.estimated_emissions - optimal.estimated_emissions;
    let percent = if current.estimated_emissions > 0.0 {
        absolute / current.estimated_emissions * 100.0
    } else {
        0.0
    };

    PotentialSavings {
        absolute_kg: round_to(absolute, 3),
        percent: round_to(percent, 1),
    }
}
