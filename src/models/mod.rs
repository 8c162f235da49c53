pub mod cluster;
pub mod coordinates;
pub mod route;
pub mod shipment;
pub mod vehicle;

pub use cluster::ClusterInfo;
pub use coordinates::{distance_km, Coordinates};
pub use route::{BackhaulInfo, OptimizedRoute, RouteSegment};
pub use shipment::{Shipment, ShipmentPriority, TemperatureRange};
pub use vehicle::{TransportMode, Vehicle};
