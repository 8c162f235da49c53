use crate::models::{distance_km, Shipment};
use crate::services::cost_model::{co2_kg, mode_cost, select_mode};
use crate::services::gazetteer::resolve_coordinates;
use serde::Serialize;

/// Cost and emissions of sending every shipment on its own
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IndividualBaseline {
    pub cost: f64,
    pub co2: f64,
}

impl IndividualBaseline {
    /// Each shipment travels origin -> destination with the mode the cost
    /// model would pick, priced at `cost_multiplier` times the base rate and
    /// emitting `co2_multiplier` times the base emissions. Unknown locations
    /// are placed at {0, 0}.
    pub fn compute(shipments: &[Shipment], cost_multiplier: f64, co2_multiplier: f64) -> Self {
        shipments
            .iter()
            .fold(IndividualBaseline::default(), |acc, shipment| {
                let origin = resolve_coordinates(&shipment.origin).unwrap_or_default();
                let destination = resolve_coordinates(&shipment.destination).unwrap_or_default();
                let distance = distance_km(&origin, &destination);
                let mode = select_mode(&shipment.origin, &shipment.destination, distance);

                IndividualBaseline {
                    cost: acc.cost + mode_cost(mode, distance) * cost_multiplier,
                    co2: acc.co2 + co2_kg(mode, distance) * co2_multiplier,
                }
            })
    }
}
