/// CarbonSense version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Grid intensity (gCO2/kWh) assumed when the energy models were trained.
pub const TRAINING_GRID_INTENSITY: f64 = 400.0;

/// Per-km factor (kg CO2/km) baked into the transport training labels.
/// Vehicle-specific factors are expressed relative to this.
pub const TRAINING_TRANSPORT_FACTOR: f64 = 0.150;

/// lbs/MWh → gCO2/kWh.
pub const LBS_PER_MWH_TO_G_PER_KWH: f64 = 453.592 / 1000.0;

/// z-score used for the Bayesian 95% interval.
pub const CI_Z_95: f64 = 1.96;

/// Number of hourly slots in one forecast horizon.
pub const FORECAST_HORIZON_HOURS: u32 = 24;

/// Number of slots reported as `best_times`.
pub const BEST_SLOT_COUNT: usize = 5;

/// Number of slots reported as `worst_times`.
pub const WORST_SLOT_COUNT: usize = 3;

/// Free-flow speed used by the time-of-day traffic heuristic (km/h).
pub const FREE_FLOW_SPEED_KMH: f64 = 60.0;

/// Kilometres per degree of latitude, for synthesising probe routes.
pub const KM_PER_DEGREE_LATITUDE: f64 = 111.0;

/// Distance used when the optimizer probes traffic without a trip distance.
pub const DEFAULT_PROBE_DISTANCE_KM: f64 = 10.0;

/// Energy used when the optimizer forecasts without a kWh figure.
pub const DEFAULT_FORECAST_KWH: f64 = 1.0;
