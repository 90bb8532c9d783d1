//! Static regional averages, the last step of the grid chain.

use carbonsense_core::models::{Confidence, GridReading, Method, SignalMeta};
use carbonsense_core::region::Region;

pub const SOURCE: &str = "Static Average";

/// Static reading for `region`, labelled with the caller's location.
pub fn lookup(region: Region, location: &str, timestamp: String) -> GridReading {
    GridReading {
        intensity_gco2_kwh: region.static_intensity(),
        meta: SignalMeta {
            source: SOURCE.to_string(),
            location: location.to_string(),
            timestamp,
            confidence: Confidence::Low,
            method: Method::Static,
        },
        components: None,
        comparison: None,
    }
}
