use crate::config::FleetPolicy;
use crate::constants::MAX_VEHICLES_PER_CLUSTER;
use crate::models::{ClusterInfo, Vehicle};
use std::cmp::Ordering;

/// Vehicles booked for one cluster
#[derive(Debug, Clone)]
pub struct VehicleAssignment {
    pub cluster: ClusterInfo,
    pub vehicles: Vec<Vehicle>,
    /// Demand left uncovered when the fleet ran out
    pub unserved_weight: f64,
    pub unserved_volume: f64,
}

impl VehicleAssignment {
    pub fn is_fully_served(&self) -> bool {
        self.unserved_weight <= 0.0 && self.unserved_volume <= 0.0
    }

    pub fn vehicle_ids(&self) -> Vec<String> {
        self.vehicles.iter().map(|v| v.id.clone()).collect()
    }
}

/// Greedy bin-packing of clusters onto the fleet
pub struct VehicleAssigner {
    fleet: Vec<Vehicle>,
    policy: FleetPolicy,
}

impl VehicleAssigner {
    pub fn new(fleet: Vec<Vehicle>, policy: FleetPolicy) -> Self {
        Self { fleet, policy }
    }

    /// Assign vehicles to every cluster, heaviest cluster first.
    ///
    /// Per cluster, the cheapest vehicle (cost per km per kg of capacity)
    /// that can take all remaining demand closes the cluster; otherwise the
    /// largest vehicle is added, its capacity deducted, and the loop repeats.
    /// A cluster stops at [`MAX_VEHICLES_PER_CLUSTER`] bookings; whatever is
    /// left is recorded as unserved.
    ///
    /// Under [`FleetPolicy::Unlimited`] every cluster draws from the full
    /// roster and a vehicle may be booked repeatedly. Under
    /// [`FleetPolicy::Reserved`] a booked vehicle leaves the pool.
    pub fn assign(&self, clusters: Vec<ClusterInfo>) -> Vec<VehicleAssignment> {
        let mut clusters = clusters;
        clusters.sort_by(|a, b| {
            b.total_weight
                .partial_cmp(&a.total_weight)
                .unwrap_or(Ordering::Equal)
        });

        let mut pool = self.fleet.clone();
        pool.sort_by(|a, b| a.cost_per_capacity().total_cmp(&b.cost_per_capacity()));

        clusters
            .into_iter()
            .map(|cluster| {
                let assignment = self.assign_cluster(cluster, &mut pool);

                if !assignment.is_fully_served() {
                    tracing::warn!(
                        cluster = %assignment.cluster.name,
                        unserved_weight = assignment.unserved_weight,
                        unserved_volume = assignment.unserved_volume,
                        "Fleet exhausted, cluster is under-served"
                    );
                }

                assignment
            })
            .collect()
    }

    /// `pool` is sorted by ascending cost per capacity
    fn assign_cluster(&self, cluster: ClusterInfo, pool: &mut Vec<Vehicle>) -> VehicleAssignment {
        let mut vehicles = Vec::new();
        let mut remaining_weight = cluster.total_weight;
        let mut remaining_volume = cluster.total_volume;

        if !remaining_weight.is_finite() || !remaining_volume.is_finite() {
            return VehicleAssignment {
                cluster,
                vehicles,
                unserved_weight: remaining_weight,
                unserved_volume: remaining_volume,
            };
        }

        while remaining_weight > 0.0 || remaining_volume > 0.0 {
            if vehicles.len() >= MAX_VEHICLES_PER_CLUSTER {
                break;
            }

            if let Some(index) = pool
                .iter()
                .position(|v| v.can_carry(remaining_weight, remaining_volume))
            {
                vehicles.push(self.book(pool, index));
                remaining_weight = 0.0;
                remaining_volume = 0.0;
                break;
            }

            let Some(index) = largest_vehicle(pool) else {
                break;
            };
            let weight_left = (remaining_weight - pool[index].capacity_kg).max(0.0);
            let volume_left = (remaining_volume - pool[index].volume_capacity_m3).max(0.0);

            // A vehicle that takes nothing off either demand cannot help
            if weight_left >= remaining_weight && volume_left >= remaining_volume {
                break;
            }

            vehicles.push(self.book(pool, index));
            remaining_weight = weight_left;
            remaining_volume = volume_left;
        }

        VehicleAssignment {
            cluster,
            vehicles,
            unserved_weight: remaining_weight,
            unserved_volume: remaining_volume,
        }
    }

    /// Copy the vehicle record, taking it out of the pool when reserving
    fn book(&self, pool: &mut Vec<Vehicle>, index: usize) -> Vehicle {
        match self.policy {
            FleetPolicy::Unlimited => pool[index].clone(),
            FleetPolicy::Reserved => pool.remove(index),
        }
    }
}

/// Index of the vehicle with the greatest weight capacity; the earlier
/// (more cost-efficient) one wins ties
fn largest_vehicle(pool: &[Vehicle]) -> Option<usize> {
    pool.iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, v)| match best {
            Some((_, capacity)) if capacity >= v.capacity_kg => best,
            _ => Some((i, v.capacity_kg)),
        })
        .map(|(i, _)| i)
}
