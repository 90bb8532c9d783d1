//! Test fixtures for CarbonSense: canned upstream payloads and fake
//! collaborators for every trait seam in `carbonsense-core`.
//!
//! Payloads live in `data/` next to this crate's manifest and are loaded by
//! relative path, e.g. `load_fixture_value("uk_intensity.json")`.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

pub mod clock;
pub mod models;
pub mod sources;
pub mod transport;

pub use clock::FixedClock;
pub use models::{FailingExplainer, FailingModel, StubExplainer, StubModel};
pub use sources::{FixedGridSource, FixedTrafficSource, FixedWeatherSource};
pub use transport::MockTransport;

/// Root directory of the fixture payloads.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// List all JSON payload fixtures.
pub fn list_fixtures() -> Vec<PathBuf> {
    let dir = fixtures_root();
    std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixture_parses() {
        let files = list_fixtures();
        assert!(files.len() >= 8);
        for path in files {
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            let value = load_fixture_value(&name);
            assert!(value.is_object(), "{name} is not a JSON object");
        }
    }
}
