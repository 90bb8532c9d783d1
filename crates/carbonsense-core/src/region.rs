//! Enumerated grid/traffic regions, resolved once at the request boundary.
//!
//! Matching is on whole words, not substrings, so "Indiana" does not resolve
//! to India and "Calgary" does not resolve to California.

use serde::{Deserialize, Serialize};

/// A region with distinct grid-intensity behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    UnitedKingdom,
    California,
    India,
    UnitedStates,
    Global,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::UnitedKingdom,
        Region::California,
        Region::India,
        Region::UnitedStates,
        Region::Global,
    ];

    /// Resolve a free-form location label. Priority follows the grid
    /// resolver's chain: UK, California, India, US, then Global.
    pub fn from_location(location: &str) -> Self {
        let lowered = location.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();

        let has = |word: &str| tokens.iter().any(|t| *t == word);
        let has_phrase = |a: &str, b: &str| tokens.windows(2).any(|w| w[0] == a && w[1] == b);

        if has("uk") || has("britain") || has_phrase("united", "kingdom") {
            Region::UnitedKingdom
        } else if has("california") || has("cal") {
            Region::California
        } else if has("india") || has("hyderabad") {
            Region::India
        } else if has("us") || has("usa") || has_phrase("united", "states") {
            Region::UnitedStates
        } else {
            Region::Global
        }
    }

    /// Static average grid intensity (gCO2/kWh) used as the last fallback.
    pub fn static_intensity(self) -> f64 {
        match self {
            Region::UnitedKingdom => 280.0,
            Region::California => 400.0,
            Region::India => 700.0,
            Region::UnitedStates => 400.0,
            Region::Global => 475.0,
        }
    }

    /// Short lowercase code.
    pub fn code(self) -> &'static str {
        match self {
            Region::UnitedKingdom => "uk",
            Region::California => "california",
            Region::India => "india",
            Region::UnitedStates => "us",
            Region::Global => "global",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_word_matching() {
        assert_eq!(Region::from_location("UK"), Region::UnitedKingdom);
        assert_eq!(Region::from_location("London, UK"), Region::UnitedKingdom);
        assert_eq!(Region::from_location("Great Britain"), Region::UnitedKingdom);
        assert_eq!(Region::from_location("united kingdom"), Region::UnitedKingdom);
        assert_eq!(Region::from_location("California"), Region::California);
        assert_eq!(Region::from_location("Hyderabad"), Region::India);
        assert_eq!(Region::from_location("Indiana"), Region::Global);
        assert_eq!(Region::from_location("Calgary"), Region::Global);
        assert_eq!(Region::from_location("Ukraine"), Region::Global);
        assert_eq!(Region::from_location("US"), Region::UnitedStates);
        assert_eq!(Region::from_location(""), Region::Global);
    }

    #[test]
    fn every_region_round_trips_through_its_code() {
        let averages: Vec<(&str, f64)> = Region::ALL
            .iter()
            .map(|r| (r.code(), r.static_intensity()))
            .collect();
        assert_eq!(
            averages,
            vec![
                ("uk", 280.0),
                ("california", 400.0),
                ("india", 700.0),
                ("us", 400.0),
                ("global", 475.0),
            ]
        );
        for region in Region::ALL {
            assert_eq!(Region::from_location(region.code()), region);
        }
    }
}
