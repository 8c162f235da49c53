pub mod baseline;

use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Write;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::config::OptimizerConfig;
use crate::models::{OptimizedRoute, Shipment};

pub use baseline::IndividualBaseline;

/// Batch-level totals and savings against shipping every item alone
#[derive(Debug, Clone, Serialize)]
pub struct BatchOptimizationResult {
    pub routes: Vec<OptimizedRoute>,
    pub total_shipments: usize,
    pub total_vehicles: usize,
    pub total_distance: u64,
    pub total_cost: f64,
    pub total_time: f64,
    pub total_co2: f64,
    pub baseline: IndividualBaseline,
    pub cost_savings: f64,
    pub co2_savings: f64,
    /// Distinct final destinations
    pub cluster_count: usize,
    pub multi_modal_count: usize,
    pub backhaul_count: usize,
    pub generated_at: String,
}

impl BatchOptimizationResult {
    pub fn compute(
        shipments: &[Shipment],
        routes: Vec<OptimizedRoute>,
        config: &OptimizerConfig,
    ) -> Self {
        let baseline = IndividualBaseline::compute(
            shipments,
            config.baseline_cost_multiplier,
            config.baseline_co2_multiplier,
        );

        let total_vehicles = routes.iter().map(|r| r.vehicles.len()).sum();
        let total_distance = routes.iter().map(|r| u64::from(r.total_distance)).sum();
        let total_cost: f64 = routes.iter().map(|r| r.total_cost).sum();
        let total_time = routes.iter().map(|r| r.total_time).sum();
        let total_co2: f64 = routes.iter().map(|r| r.total_co2).sum();

        let cluster_count = routes
            .iter()
            .filter_map(OptimizedRoute::destination)
            .collect::<HashSet<_>>()
            .len();
        let multi_modal_count = routes.iter().filter(|r| r.is_multi_modal).count();
        let backhaul_count = routes.iter().filter(|r| r.has_backhaul).count();

        let generated_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string());

        BatchOptimizationResult {
            total_shipments: shipments.len(),
            total_vehicles,
            total_distance,
            total_cost,
            total_time,
            total_co2,
            cost_savings: baseline.cost - total_cost,
            co2_savings: baseline.co2 - total_co2,
            baseline,
            cluster_count,
            multi_modal_count,
            backhaul_count,
            generated_at,
            routes,
        }
    }
}

// ── Display formatting ──────────────────────────────────────

pub fn format_summary(result: &BatchOptimizationResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Batch optimization ({})", result.generated_at);
    let _ = writeln!(
        out,
        "  {} shipments, {} routes, {} vehicles, {} destinations",
        result.total_shipments,
        result.routes.len(),
        result.total_vehicles,
        result.cluster_count,
    );
    let _ = writeln!(
        out,
        "  {} multi-modal, {} with backhaul",
        result.multi_modal_count, result.backhaul_count
    );
    let _ = writeln!(
        out,
        "  distance {} km, time {:.1} h",
        result.total_distance, result.total_time
    );
    let _ = writeln!(
        out,
        "  cost {:.2} (individual {:.2}, saved {:.2}{})",
        result.total_cost,
        result.baseline.cost,
        result.cost_savings,
        percent_of(result.cost_savings, result.baseline.cost),
    );
    let _ = writeln!(
        out,
        "  CO2 {:.2} kg (individual {:.2}, saved {:.2}{})",
        result.total_co2,
        result.baseline.co2,
        result.co2_savings,
        percent_of(result.co2_savings, result.baseline.co2),
    );

    for route in &result.routes {
        let _ = writeln!(
            out,
            "\n{} [{}] {} shipments",
            route.name,
            route.id,
            route.shipments.len()
        );
        for segment in &route.segments {
            let _ = writeln!(
                out,
                "  {:<6} {} -> {} {} km, {:.2}, {:.1} h",
                segment.mode.to_string(),
                segment.from,
                segment.to,
                segment.distance,
                segment.cost,
                segment.time,
            );
        }
        if !route.vehicles.is_empty() {
            let _ = writeln!(out, "  vehicles: {}", route.vehicles.join(", "));
        }
        if let Some(backhaul) = &route.backhaul {
            let _ = writeln!(
                out,
                "  backhaul via {} to {} saves {:.2}",
                backhaul.route_id, backhaul.destination, backhaul.savings
            );
        }
    }

    out
}

fn percent_of(part: f64, whole: f64) -> String {
    if whole.abs() < f64::EPSILON {
        String::new()
    } else {
        format!(", {:.1}%", part / whole * 100.0)
    }
}
