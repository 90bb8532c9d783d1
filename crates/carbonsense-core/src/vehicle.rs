use serde::{Deserialize, Serialize};

/// Vehicle types with fixed per-km emission factors (kg CO2/km).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    #[default]
    PetrolCar,
    DieselCar,
    Hybrid,
    Electric,
    Motorcycle,
    Bus,
    Train,
    Bicycle,
    Walking,
}

impl VehicleType {
    pub const ALL: [VehicleType; 9] = [
        VehicleType::PetrolCar,
        VehicleType::DieselCar,
        VehicleType::Hybrid,
        VehicleType::Electric,
        VehicleType::Motorcycle,
        VehicleType::Bus,
        VehicleType::Train,
        VehicleType::Bicycle,
        VehicleType::Walking,
    ];

    /// Emission factor in kg CO2 per km.
    pub fn emission_factor(self) -> f64 {
        match self {
            VehicleType::PetrolCar => 0.170,
            VehicleType::DieselCar => 0.165,
            VehicleType::Hybrid => 0.110,
            VehicleType::Electric => 0.053,
            VehicleType::Motorcycle => 0.113,
            VehicleType::Bus => 0.089,
            VehicleType::Train => 0.041,
            VehicleType::Bicycle => 0.000,
            VehicleType::Walking => 0.000,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VehicleType::PetrolCar => "petrol_car",
            VehicleType::DieselCar => "diesel_car",
            VehicleType::Hybrid => "hybrid",
            VehicleType::Electric => "electric",
            VehicleType::Motorcycle => "motorcycle",
            VehicleType::Bus => "bus",
            VehicleType::Train => "train",
            VehicleType::Bicycle => "bicycle",
            VehicleType::Walking => "walking",
        }
    }

    /// Parse a snake_case name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|v| v.name() == name)
    }

    /// Parse a name, falling back to the petrol-car default for unknown or
    /// missing values.
    pub fn from_name_or_default(name: Option<&str>) -> Self {
        match name {
            Some(n) => Self::from_name(n).unwrap_or_else(|| {
                tracing::debug!(vehicle_type = %n, "unknown vehicle type, using petrol_car");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
