use crate::models::{Coordinates, Shipment};
use serde::{Deserialize, Serialize};

/// Shipments grouped by destination region (or city, for large regions)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterInfo {
    pub id: String,
    pub name: String,
    pub shipments: Vec<Shipment>,
    pub total_weight: f64,
    pub total_volume: f64,
    pub region: String,
    pub centroid: Coordinates,
}

impl ClusterInfo {
    pub fn new(
        id: String,
        name: String,
        region: String,
        shipments: Vec<Shipment>,
        centroid: Coordinates,
    ) -> Self {
        let total_weight = shipments.iter().map(|s| s.weight).sum();
        let total_volume = shipments.iter().map(Shipment::volume_m3).sum();

        ClusterInfo {
            id,
            name,
            shipments,
            total_weight,
            total_volume,
            region,
            centroid,
        }
    }

    /// Distinct shipment origins in first-appearance order
    pub fn origins(&self) -> Vec<&str> {
        let mut origins: Vec<&str> = Vec::new();
        for shipment in &self.shipments {
            if !origins.contains(&shipment.origin.as_str()) {
                origins.push(&shipment.origin);
            }
        }
        origins
    }
}
