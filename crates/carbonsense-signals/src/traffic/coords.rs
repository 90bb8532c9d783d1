//! Default coordinates for known locations, London otherwise.

use carbonsense_core::constants::KM_PER_DEGREE_LATITUDE;
use carbonsense_core::traits::Coordinates;

const LONDON: Coordinates = Coordinates::new(51.5074, -0.1278);
const SAN_FRANCISCO: Coordinates = Coordinates::new(37.7749, -122.4194);
const LOS_ANGELES: Coordinates = Coordinates::new(34.0522, -118.2437);
const DELHI: Coordinates = Coordinates::new(28.6139, 77.2090);
const HYDERABAD: Coordinates = Coordinates::new(17.3850, 78.4867);
const MUMBAI: Coordinates = Coordinates::new(19.0760, 72.8777);
const BANGALORE: Coordinates = Coordinates::new(12.9716, 77.5946);

const KNOWN: &[(&str, Coordinates)] = &[
    ("uk", LONDON),
    ("united kingdom", LONDON),
    ("london", LONDON),
    ("california", SAN_FRANCISCO),
    ("san francisco", SAN_FRANCISCO),
    ("los angeles", LOS_ANGELES),
    ("india", DELHI),
    ("delhi", DELHI),
    ("hyderabad", HYDERABAD),
    ("mumbai", MUMBAI),
    ("bangalore", BANGALORE),
];

/// Coordinates for `location` (case-insensitive exact name).
pub fn location_coords(location: &str) -> Coordinates {
    let key = location.trim().to_lowercase();
    KNOWN
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, coords)| *coords)
        .unwrap_or(LONDON)
}

/// A due-north probe route of `distance_km` starting at `location`.
pub fn probe_route(location: &str, distance_km: f64) -> (Coordinates, Coordinates) {
    let start = location_coords(location);
    let end = Coordinates::new(start.lat + distance_km / KM_PER_DEGREE_LATITUDE, start.lon);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_locations_default_to_london() {
        assert_eq!(location_coords("Atlantis"), LONDON);
        assert_eq!(location_coords("Mumbai"), MUMBAI);
    }

    #[test]
    fn probe_moves_north() {
        let (start, end) = probe_route("delhi", 111.0);
        assert_eq!(start, DELHI);
        assert!((end.lat - (DELHI.lat + 1.0)).abs() < 1e-9);
        assert_eq!(end.lon, DELHI.lon);
    }
}
