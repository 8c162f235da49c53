use super::ids::IdGenerator;
use super::vehicle_assignment::VehicleAssignment;
use crate::error::{AppError, Result};
use crate::models::{distance_km, Coordinates, OptimizedRoute, RouteSegment, Shipment};
use crate::services::cost_model::{co2_kg, mode_cost, select_mode, transit_time_hours, LaneTable};
use crate::services::fleet::candidate_hubs;
use crate::services::gazetteer::resolve_coordinates;

/// Builds one route per (cluster, origin), direct or via the cheapest hub
pub struct RouteBuilder<'a> {
    lanes: LaneTable,
    hub_transfer_hours: f64,
    ids: &'a dyn IdGenerator,
}

impl<'a> RouteBuilder<'a> {
    pub fn new(lanes: LaneTable, hub_transfer_hours: f64, ids: &'a dyn IdGenerator) -> Self {
        Self {
            lanes,
            hub_transfer_hours,
            ids,
        }
    }

    /// Routes for every assignment, in assignment order and then origin
    /// first-appearance order. Fails on the first unresolvable location.
    pub fn build(&self, assignments: &[VehicleAssignment]) -> Result<Vec<OptimizedRoute>> {
        let mut routes = Vec::new();

        for assignment in assignments {
            let cluster = &assignment.cluster;
            let vehicles = assignment.vehicle_ids();

            for origin in cluster.origins() {
                let shipments: Vec<Shipment> = cluster
                    .shipments
                    .iter()
                    .filter(|s| s.origin == origin)
                    .cloned()
                    .collect();

                // Every cluster origin comes from at least one member
                let Some(destination) = shipments.first().map(|s| s.destination.clone()) else {
                    continue;
                };

                let segments = self.plan(origin, &destination)?;

                routes.push(OptimizedRoute::new(
                    self.ids.next_id("route"),
                    format!("{} to {}", origin, cluster.name),
                    shipments,
                    segments,
                    vehicles.clone(),
                ));
            }
        }

        Ok(routes)
    }

    /// Cheaper of the direct leg and the best hub route; direct wins ties
    pub fn plan(&self, origin: &str, destination: &str) -> Result<Vec<RouteSegment>> {
        let direct = self.direct(origin, destination)?;

        match self.best_hub_route(origin, destination)? {
            Some(via_hub) if total_cost(&via_hub) < direct.cost => Ok(via_hub),
            _ => Ok(vec![direct]),
        }
    }

    /// Single-segment route
    pub fn direct(&self, origin: &str, destination: &str) -> Result<RouteSegment> {
        let from = locate(origin)?;
        let to = locate(destination)?;
        Ok(self.segment(origin, &from, destination, &to))
    }

    /// Cheapest two-segment route over the candidate hubs, `None` when no hub
    /// qualifies. The first hub wins ties.
    pub fn best_hub_route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Option<Vec<RouteSegment>>> {
        let hubs = candidate_hubs(origin, destination);
        if hubs.is_empty() {
            return Ok(None);
        }

        let from = locate(origin)?;
        let to = locate(destination)?;

        let mut best: Option<Vec<RouteSegment>> = None;
        for hub in hubs {
            let at = locate(hub)?;

            let first = self.segment(origin, &from, hub, &at);
            let mut second = self.segment(hub, &at, destination, &to);
            second.time += self.hub_transfer_hours;

            let candidate = vec![first, second];
            let cheaper = match &best {
                Some(current) => total_cost(&candidate) < total_cost(current),
                None => true,
            };
            if cheaper {
                best = Some(candidate);
            }
        }

        Ok(best)
    }

    fn segment(&self, from: &str, a: &Coordinates, to: &str, b: &Coordinates) -> RouteSegment {
        let distance = distance_km(a, b);
        let mode = select_mode(from, to, distance);
        let cost = mode_cost(mode, distance) * self.lanes.modifier_or_default(from, to);

        RouteSegment {
            from: from.to_string(),
            to: to.to_string(),
            distance,
            mode,
            cost,
            time: transit_time_hours(mode, distance),
            co2: co2_kg(mode, distance),
        }
    }
}

fn locate(name: &str) -> Result<Coordinates> {
    resolve_coordinates(name).ok_or_else(|| AppError::UnresolvableLocation(name.to_string()))
}

fn total_cost(segments: &[RouteSegment]) -> f64 {
    segments.iter().map(|s| s.cost).sum()
}
