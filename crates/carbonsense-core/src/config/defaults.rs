// Single source of truth for all default values.

// --- Providers ---
pub const DEFAULT_UK_GRID_URL: &str = "https://api.carbonintensity.org.uk";
pub const DEFAULT_WATTTIME_URL: &str = "https://api.watttime.org";
pub const DEFAULT_ELECTRICITYMAPS_URL: &str = "https://api.electricitymap.org";
pub const DEFAULT_TOMTOM_URL: &str = "https://api.tomtom.com";
pub const DEFAULT_GOOGLE_MAPS_URL: &str = "https://maps.googleapis.com";
pub const DEFAULT_OPENWEATHER_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_GRID_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_ROUTING_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_WEATHER_TIMEOUT_SECS: u64 = 5;

// --- Context ---
pub const DEFAULT_TRAINING_GRID_INTENSITY: f64 = crate::constants::TRAINING_GRID_INTENSITY;
pub const DEFAULT_TRAINING_TRANSPORT_FACTOR: f64 = crate::constants::TRAINING_TRANSPORT_FACTOR;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = true;

// --- Files & environment ---
pub const DEFAULT_CONFIG_FILENAME: &str = "carbonsense.toml";
pub const ENV_PREFIX: &str = "CARBONSENSE_";
