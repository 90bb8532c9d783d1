//! Live reading versus the regional static average.

use carbonsense_core::models::{GridComparison, GridReading};
use carbonsense_core::region::Region;

use crate::round_to;

/// Average the comparison is made against. Only the three regions with a
/// dedicated grid strategy have their own baseline.
pub fn static_baseline(region: Region) -> f64 {
    match region {
        Region::UnitedKingdom => 280.0,
        Region::California => 400.0,
        Region::India => 700.0,
        Region::UnitedStates | Region::Global => 475.0,
    }
}

/// Compare an already-resolved reading with the regional average.
pub fn compare_live_vs_static(reading: &GridReading, region: Region) -> GridComparison {
    let baseline = static_baseline(region);
    let diff = reading.intensity_gco2_kwh - baseline;
    let diff_pct = diff / baseline * 100.0;

    let message = if diff_pct.abs() < 5.0 {
        format!("Grid is near average ({baseline:.0} gCO2/kWh).")
    } else if diff_pct < -10.0 {
        format!(
            "Grid is {:.0}% cleaner than usual. Great time for high-energy activities.",
            diff_pct.abs()
        )
    } else if diff_pct > 10.0 {
        format!("Grid is {diff_pct:.0}% dirtier than usual. Consider delaying energy use if possible.")
    } else {
        let direction = if diff < 0.0 { "cleaner" } else { "dirtier" };
        format!("Grid is {:.0}% {direction} than average.", diff_pct.abs())
    };

    GridComparison {
        static_average: baseline,
        difference_gco2_kwh: round_to(diff, 1),
        difference_percent: round_to(diff_pct, 1),
        is_cleaner: diff < 0.0,
        message,
    }
}
