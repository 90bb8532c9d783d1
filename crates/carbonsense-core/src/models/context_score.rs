use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Five-tier rating derived from a clamped context score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
}

impl Rating {
    /// Step function over a score already clamped to [0, 100].
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Rating::Excellent
        } else if score >= 65.0 {
            Rating::Good
        } else if score >= 50.0 {
            Rating::Fair
        } else if score >= 35.0 {
            Rating::Poor
        } else {
            Rating::VeryPoor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Fair => "Fair",
            Rating::Poor => "Poor",
            Rating::VeryPoor => "Very Poor",
        }
    }

    /// Fixed message for the tier.
    pub fn message(self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent conditions for low-emission activity right now.",
            Rating::Good => "Good conditions. Emissions should be below average.",
            Rating::Fair => "Fair conditions. Emissions are close to typical levels.",
            Rating::Poor => "Poor conditions. Consider shifting this activity if you can.",
            Rating::VeryPoor => "Very poor conditions. Delaying would noticeably cut emissions.",
        }
    }
}

/// Unified 0–100 favourability score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextScore {
    pub score: f64,
    pub rating: Rating,
    pub message: String,
    /// Contributing reasons, in evaluation order.
    pub factors: Vec<String>,
    /// Absolute magnitude of each sub-score.
    pub weights: BTreeMap<String, f64>,
}
