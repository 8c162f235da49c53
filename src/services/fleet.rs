//! Fleet roster and transfer hub network.

use crate::models::{TransportMode, Vehicle};

/// Hubs every route may transfer through, in preference order
pub const MAJOR_HUBS: [&str; 5] = [
    "New York, USA",
    "London, UK",
    "Frankfurt, Germany",
    "Singapore",
    "Dubai, UAE",
];

/// Direct hub connections per origin
const HUB_CONNECTIONS: &[(&str, &[&str])] = &[
    (
        "New York, USA",
        &[
            "London, UK",
            "Frankfurt, Germany",
            "Tokyo, Japan",
            "Los Angeles, USA",
        ],
    ),
    (
        "London, UK",
        &[
            "New York, USA",
            "Dubai, UAE",
            "Delhi, India",
            "Frankfurt, Germany",
        ],
    ),
    (
        "Singapore",
        &[
            "Hong Kong",
            "Sydney, Australia",
            "Mumbai, India",
            "Tokyo, Japan",
        ],
    ),
    (
        "Dubai, UAE",
        &[
            "London, UK",
            "Mumbai, India",
            "Delhi, India",
            "Frankfurt, Germany",
        ],
    ),
    (
        "Frankfurt, Germany",
        &[
            "New York, USA",
            "London, UK",
            "Dubai, UAE",
            "Hong Kong",
        ],
    ),
];

/// Hubs directly connected to `origin`; empty if the origin is not a hub
pub fn connected_hubs(origin: &str) -> &'static [&'static str] {
    HUB_CONNECTIONS
        .iter()
        .find(|(hub, _)| *hub == origin)
        .map(|(_, connections)| *connections)
        .unwrap_or(&[])
}

/// Candidate transfer hubs for a leg: the origin's own connections followed by
/// the major hubs, de-duplicated, never the origin or destination itself
pub fn candidate_hubs(origin: &str, destination: &str) -> Vec<&'static str> {
    let mut hubs: Vec<&'static str> = Vec::new();
    for hub in connected_hubs(origin).iter().chain(MAJOR_HUBS.iter()) {
        if *hub != origin && *hub != destination && !hubs.contains(hub) {
            hubs.push(*hub);
        }
    }
    hubs
}

/// The standard roster vehicles are assigned from
pub fn default_fleet() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: "truck-1".to_string(),
            name: "Truck A".to_string(),
            mode: TransportMode::Truck,
            capacity_kg: 10_000.0,
            volume_capacity_m3: 80.0,
            base_location: "New York, USA".to_string(),
            cost_per_km: 0.8,
            co2_per_km: 0.8,
            speed_kmh: 80.0,
        },
        Vehicle {
            id: "truck-2".to_string(),
            name: "Truck B".to_string(),
            mode: TransportMode::Truck,
            capacity_kg: 15_000.0,
            volume_capacity_m3: 100.0,
            base_location: "Los Angeles, USA".to_string(),
            cost_per_km: 0.9,
            co2_per_km: 0.9,
            speed_kmh: 75.0,
        },
        Vehicle {
            id: "plane-1".to_string(),
            name: "Cargo Plane A".to_string(),
            mode: TransportMode::Plane,
            capacity_kg: 50_000.0,
            volume_capacity_m3: 300.0,
            base_location: "New York, USA".to_string(),
            cost_per_km: 8.5,
            co2_per_km: 2.5,
            speed_kmh: 800.0,
        },
        Vehicle {
            id: "plane-2".to_string(),
            name: "Cargo Plane B".to_string(),
            mode: TransportMode::Plane,
            capacity_kg: 80_000.0,
            volume_capacity_m3: 450.0,
            base_location: "London, UK".to_string(),
            cost_per_km: 9.2,
            co2_per_km: 2.7,
            speed_kmh: 850.0,
        },
        Vehicle {
            id: "ship-1".to_string(),
            name: "Container Ship A".to_string(),
            mode: TransportMode::Ship,
            capacity_kg: 5_000_000.0,
            volume_capacity_m3: 25_000.0,
            base_location: "Singapore".to_string(),
            cost_per_km: 0.4,
            co2_per_km: 0.4,
            speed_kmh: 35.0,
        },
        Vehicle {
            id: "ship-2".to_string(),
            name: "Container Ship B".to_string(),
            mode: TransportMode::Ship,
            capacity_kg: 8_000_000.0,
            volume_capacity_m3: 40_000.0,
            base_location: "Rotterdam, Netherlands".to_string(),
            cost_per_km: 0.35,
            co2_per_km: 0.35,
            speed_kmh: 30.0,
        },
    ]
}
