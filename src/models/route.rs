use crate::models::{Shipment, TransportMode};
use serde::{Deserialize, Serialize};

/// One leg of a route, travelled with a single transport mode
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteSegment {
    pub from: String,
    pub to: String,
    /// Great-circle distance in km
    pub distance: u32,
    pub mode: TransportMode,
    pub cost: f64,
    /// Hours
    pub time: f64,
    /// kg CO2
    pub co2: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackhaulInfo {
    pub route_id: String,
    pub savings: f64,
    pub destination: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizedRoute {
    pub id: String,
    pub name: String,
    pub shipments: Vec<Shipment>,
    /// One segment for a direct route, two for a hub route
    pub segments: Vec<RouteSegment>,
    /// Assigned vehicle ids
    pub vehicles: Vec<String>,
    pub total_distance: u32,
    pub total_cost: f64,
    pub total_time: f64,
    pub total_co2: f64,
    pub is_multi_modal: bool,
    #[serde(default)]
    pub has_backhaul: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backhaul: Option<BackhaulInfo>,
}

impl OptimizedRoute {
    /// Build a route whose totals are the sums of its segments
    pub fn new(
        id: String,
        name: String,
        shipments: Vec<Shipment>,
        segments: Vec<RouteSegment>,
        vehicles: Vec<String>,
    ) -> Self {
        let totals = SegmentTotals::of(&segments);

        OptimizedRoute {
            id,
            name,
            shipments,
            is_multi_modal: segments.len() > 1,
            segments,
            vehicles,
            total_distance: totals.distance,
            total_cost: totals.cost,
            total_time: totals.time,
            total_co2: totals.co2,
            has_backhaul: false,
            backhaul: None,
        }
    }

    pub fn origin(&self) -> Option<&str> {
        self.segments.first().map(|s| s.from.as_str())
    }

    pub fn destination(&self) -> Option<&str> {
        self.segments.last().map(|s| s.to.as_str())
    }
}

/// Summed segment metrics
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SegmentTotals {
    pub distance: u32,
    pub cost: f64,
    pub time: f64,
    pub co2: f64,
}

impl SegmentTotals {
    pub fn of(segments: &[RouteSegment]) -> Self {
        segments.iter().fold(SegmentTotals::default(), |acc, s| SegmentTotals {
            distance: acc.distance + s.distance,
            cost: acc.cost + s.cost,
            time: acc.time + s.time,
            co2: acc.co2 + s.co2,
        })
    }
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
pub struct OptimizeBatchRequest {
    pub shipments: Vec<Shipment>,
}

impl OptimizeBatchRequest {
    pub fn validate(&self) -> Result<(), String> {
        for shipment in &self.shipments {
            shipment.validate()?;
        }

        let mut ids: Vec<&str> = self.shipments.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        if let Some(pair) = ids.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(format!("duplicate shipment id: {}", pair[0]));
        }

        Ok(())
    }
}
