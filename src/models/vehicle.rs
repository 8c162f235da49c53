use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Truck,
    Plane,
    Ship,
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Truck => write!(f, "truck"),
            TransportMode::Plane => write!(f, "plane"),
            TransportMode::Ship => write!(f, "ship"),
        }
    }
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "truck" | "road" => Ok(TransportMode::Truck),
            "plane" | "air" => Ok(TransportMode::Plane),
            "ship" | "sea" | "ocean" => Ok(TransportMode::Ship),
            _ => Err(format!("Invalid transport mode: '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub mode: TransportMode,
    /// Weight capacity in kg
    pub capacity_kg: f64,
    /// Volume capacity in m³
    pub volume_capacity_m3: f64,
    pub base_location: String,
    pub cost_per_km: f64,
    pub co2_per_km: f64,
    pub speed_kmh: f64,
}

impl Vehicle {
    /// Cost per km per kg of capacity; lower is more efficient
    pub fn cost_per_capacity(&self) -> f64 {
        self.cost_per_km / self.capacity_kg
    }

    pub fn can_carry(&self, weight_kg: f64, volume_m3: f64) -> bool {
        self.capacity_kg >= weight_kg && self.volume_capacity_m3 >= volume_m3
    }
}
