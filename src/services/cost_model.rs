//! Per-mode cost, time and emission rates, mode selection and lane pricing.

use crate::constants::*;
use crate::models::TransportMode;
use crate::services::gazetteer::has_ocean_between;

/// Negotiated lanes: (origin, destination, cost multiplier). Lower is cheaper.
const LANE_MULTIPLIERS: &[(&str, &str, f64)] = &[
    ("New York, USA", "London, UK", 0.85),
    ("New York, USA", "Frankfurt, Germany", 0.9),
    ("New York, USA", "Delhi, India", 1.3),
    ("New York, USA", "Mumbai, India", 1.35),
    ("New York, USA", "Tokyo, Japan", 1.1),
    ("New York, USA", "Los Angeles, USA", 0.75),
    ("London, UK", "New York, USA", 0.85),
    ("London, UK", "Dubai, UAE", 0.8),
    ("London, UK", "Delhi, India", 0.9),
    ("London, UK", "Mumbai, India", 0.95),
    ("London, UK", "Frankfurt, Germany", 0.7),
    ("Dubai, UAE", "Delhi, India", 0.7),
    ("Dubai, UAE", "Mumbai, India", 0.75),
    ("Dubai, UAE", "London, UK", 0.8),
    ("Dubai, UAE", "Frankfurt, Germany", 0.85),
];

/// Flat rate per km for a whole consolidated load
pub fn cost_per_km(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Truck => TRUCK_COST_PER_KM,
        TransportMode::Plane => PLANE_COST_PER_KM,
        TransportMode::Ship => SHIP_COST_PER_KM,
    }
}

pub fn mode_cost(mode: TransportMode, distance_km: u32) -> f64 {
    distance_km as f64 * cost_per_km(mode)
}

pub fn transit_time_hours(mode: TransportMode, distance_km: u32) -> f64 {
    let distance = distance_km as f64;
    match mode {
        TransportMode::Truck => distance / TRUCK_SPEED_KMH,
        TransportMode::Plane => distance / PLANE_SPEED_KMH + PLANE_AIRPORT_OVERHEAD_HOURS,
        TransportMode::Ship => distance / SHIP_SPEED_KMH,
    }
}

pub fn co2_kg(mode: TransportMode, distance_km: u32) -> f64 {
    let distance = distance_km as f64;
    match mode {
        TransportMode::Truck => distance * TRUCK_CO2_PER_KM,
        TransportMode::Plane => distance * PLANE_CO2_PER_KM,
        TransportMode::Ship => distance * SHIP_CO2_PER_KM,
    }
}

/// Pick the transport mode for a leg.
///
/// Short legs go by road. Long-haul or intercontinental legs go by sea when
/// they cross an ocean and are longer than 2000 km, otherwise by air.
pub fn select_mode(origin: &str, destination: &str, distance_km: u32) -> TransportMode {
    let ocean = has_ocean_between(origin, destination);

    if distance_km < TRUCK_MAX_DISTANCE_KM {
        TransportMode::Truck
    } else if distance_km > LONG_HAUL_DISTANCE_KM || ocean {
        if ocean && distance_km > OCEAN_SHIPPING_MIN_DISTANCE_KM {
            TransportMode::Ship
        } else {
            TransportMode::Plane
        }
    } else {
        TransportMode::Plane
    }
}

/// Lane pricing lookup: `(origin, destination)` multipliers keyed by exact name
#[derive(Debug, Clone)]
pub struct LaneTable {
    lanes: &'static [(&'static str, &'static str, f64)],
    reverse_penalty: f64,
}

impl Default for LaneTable {
    fn default() -> Self {
        Self::new(DEFAULT_REVERSE_LANE_PENALTY)
    }
}

impl LaneTable {
    pub fn new(reverse_penalty: f64) -> Self {
        LaneTable {
            lanes: LANE_MULTIPLIERS,
            reverse_penalty,
        }
    }

    /// Multiplier for a known lane. A lane only known in the opposite
    /// direction costs `reverse_penalty` times more.
    pub fn modifier(&self, origin: &str, destination: &str) -> Option<f64> {
        self.lookup(origin, destination).or_else(|| {
            self.lookup(destination, origin)
                .map(|m| m * self.reverse_penalty)
        })
    }

    /// Multiplier to apply to a leg's base cost; 1.0 when the lane is unknown
    pub fn modifier_or_default(&self, origin: &str, destination: &str) -> f64 {
        self.modifier(origin, destination).unwrap_or(1.0)
    }

    fn lookup(&self, origin: &str, destination: &str) -> Option<f64> {
        self.lanes
            .iter()
            .find(|(from, to, _)| *from == origin && *to == destination)
            .map(|(_, _, multiplier)| *multiplier)
    }
}
