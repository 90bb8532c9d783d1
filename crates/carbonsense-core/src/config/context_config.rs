use serde::{Deserialize, Serialize};

use super::defaults;

/// Training-time assumptions the context-aware adjustments are relative to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Static grid intensity (gCO2/kWh) baked into the energy training labels.
    pub training_grid_intensity: f64,
    /// Per-km factor (kg CO2/km) baked into the transport training labels.
    pub training_transport_factor: f64,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            training_grid_intensity: defaults::DEFAULT_TRAINING_GRID_INTENSITY,
            training_transport_factor: defaults::DEFAULT_TRAINING_TRANSPORT_FACTOR,
        }
    }
}
