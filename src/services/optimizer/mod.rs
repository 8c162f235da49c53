mod backhaul;
mod clustering;
pub mod ids;
mod route_builder;
mod vehicle_assignment;

use crate::config::OptimizerConfig;
use crate::error::Result;
use crate::models::{OptimizedRoute, Shipment, Vehicle};
use crate::services::cost_model::LaneTable;
use crate::services::fleet::default_fleet;
use std::sync::Arc;

pub use backhaul::BackhaulMatcher;
pub use clustering::ClusterBuilder;
pub use ids::{id_generator_for, IdGenerator, SequentialIds, UuidIds};
pub use route_builder::RouteBuilder;
pub use vehicle_assignment::{VehicleAssigner, VehicleAssignment};

/// Batch route optimizer: clusters shipments, books vehicles, picks direct
/// or hub routes and pairs backhauls.
///
/// Stateless apart from the id generator; safe to share across threads.
pub struct BatchOptimizer {
    config: OptimizerConfig,
    fleet: Vec<Vehicle>,
    lanes: LaneTable,
    ids: Arc<dyn IdGenerator>,
}

impl BatchOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        let ids = id_generator_for(config.id_strategy);
        let lanes = LaneTable::new(config.reverse_lane_penalty);

        BatchOptimizer {
            config,
            fleet: default_fleet(),
            lanes,
            ids,
        }
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_fleet(mut self, fleet: Vec<Vehicle>) -> Self {
        self.fleet = fleet;
        self
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    pub fn fleet(&self) -> &[Vehicle] {
        &self.fleet
    }

    /// Optimize a batch. An unresolvable location anywhere in the batch fails
    /// the whole call; no partial result is returned.
    pub fn optimize(&self, shipments: &[Shipment]) -> Result<Vec<OptimizedRoute>> {
        if shipments.is_empty() {
            return Ok(Vec::new());
        }

        let clusters =
            ClusterBuilder::new(self.config.city_split_threshold, self.ids.as_ref()).build(shipments);
        tracing::debug!(
            shipments = shipments.len(),
            clusters = clusters.len(),
            "Clustered shipments"
        );

        let assignments =
            VehicleAssigner::new(self.fleet.clone(), self.config.fleet_policy).assign(clusters);
        tracing::debug!(
            vehicles = assignments.iter().map(|a| a.vehicles.len()).sum::<usize>(),
            under_served = assignments.iter().filter(|a| !a.is_fully_served()).count(),
            "Assigned vehicles"
        );

        let routes = RouteBuilder::new(
            self.lanes.clone(),
            self.config.hub_transfer_hours,
            self.ids.as_ref(),
        )
        .build(&assignments)?;
        tracing::debug!(
            routes = routes.len(),
            multi_modal = routes.iter().filter(|r| r.is_multi_modal).count(),
            "Built routes"
        );

        Ok(BackhaulMatcher::new(self.config.backhaul_savings_rate).apply(routes))
    }

    /// Like [`optimize`](Self::optimize), but a failed batch is logged and
    /// yields no routes.
    pub fn optimize_routes(&self, shipments: &[Shipment]) -> Vec<OptimizedRoute> {
        match self.optimize(shipments) {
            Ok(routes) => routes,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    shipments = shipments.len(),
                    "Batch optimization failed, returning no routes"
                );
                Vec::new()
            }
        }
    }
}

impl Default for BatchOptimizer {
    fn default() -> Self {
        Self::new(OptimizerConfig::default())
    }
}
