use batchroute::config::{FleetPolicy, OptimizerConfig};
use batchroute::models::{distance_km, Shipment, TransportMode};
use batchroute::services::gazetteer::resolve_coordinates;
use batchroute::services::optimizer::{BatchOptimizer, SequentialIds};
use batchroute::summary::BatchOptimizationResult;
use batchroute::AppError;
use std::sync::Arc;

mod common;

use common::{approx_eq, create_test_shipment, european_batch, test_optimizer, transatlantic_batch};

#[test]
fn test_transatlantic_batch_end_to_end() {
    let shipments = transatlantic_batch();
    let routes = test_optimizer().optimize(&shipments).unwrap();

    assert_eq!(routes.len(), 2);

    // The heavier UK cluster is routed first
    let uk = &routes[0];
    assert_eq!(uk.id, "route-3");
    assert_eq!(uk.name, "New York, USA to UK");
    assert_eq!(uk.segments.len(), 1);
    assert_eq!(uk.segments[0].mode, TransportMode::Ship);
    assert_eq!(uk.total_distance, 5570);
    assert!(approx_eq(uk.total_cost, 1893.8));
    assert!(approx_eq(uk.total_co2, 167.1));
    assert!(!uk.is_multi_modal);
    assert!(!uk.has_backhaul);

    // Flying LA -> NY directly is far dearer than shipping through London
    let usa = &routes[1];
    assert_eq!(usa.name, "Los Angeles, USA to USA");
    assert!(usa.is_multi_modal);
    assert_eq!(usa.segments[0].to, "London, UK");
    assert_eq!(usa.destination(), Some("New York, USA"));
    assert_eq!(usa.total_distance, 8756 + 5570);
    assert!(approx_eq(usa.total_cost, 5396.2));
    assert!(approx_eq(usa.total_co2, 429.78));

    // Arriving in New York, the vessel can take the New York -> London load
    assert!(usa.has_backhaul);
    let backhaul = usa.backhaul.as_ref().unwrap();
    assert_eq!(backhaul.route_id, uk.id);
    assert!(approx_eq(backhaul.savings, 757.52));
    assert_eq!(backhaul.destination, "London, UK");

    for route in &routes {
        assert_eq!(route.vehicles, vec!["ship-2"]);
    }
}

#[test]
fn test_transatlantic_batch_summary() {
    let shipments = transatlantic_batch();
    let routes = test_optimizer().optimize(&shipments).unwrap();
    let result = BatchOptimizationResult::compute(&shipments, routes, &OptimizerConfig::default());

    assert_eq!(result.total_shipments, 2);
    assert_eq!(result.total_vehicles, 2);
    assert_eq!(result.cluster_count, 2);
    assert_eq!(result.multi_modal_count, 1);
    assert_eq!(result.backhaul_count, 1);
    assert!(approx_eq(result.total_cost, 7290.0));
    assert!(approx_eq(result.baseline.cost, 53526.0));
    assert!(approx_eq(result.cost_savings, 53526.0 - 7290.0));
    assert!(approx_eq(result.baseline.co2, 2775.63));
    assert!(approx_eq(result.co2_savings, 2775.63 - (167.1 + 429.78)));
}

#[test]
fn test_haversine_distance_is_symmetric() {
    let la = resolve_coordinates("Los Angeles, USA").unwrap();
    let ny = resolve_coordinates("New York, USA").unwrap();
    assert_eq!(distance_km(&la, &ny), 3936);
    assert_eq!(distance_km(&ny, &la), 3936);
    assert_eq!(distance_km(&la, &la), 0);
}

#[test]
fn test_every_shipment_routed_exactly_once() {
    let mut shipments = european_batch();
    shipments.extend(transatlantic_batch());
    let routes = test_optimizer().optimize(&shipments).unwrap();

    let mut routed: Vec<&str> = routes
        .iter()
        .flat_map(|r| r.shipments.iter().map(|s| s.id.as_str()))
        .collect();
    routed.sort_unstable();

    let mut expected: Vec<&str> = shipments.iter().map(|s| s.id.as_str()).collect();
    expected.sort_unstable();

    assert_eq!(routed, expected);
}

#[test]
fn test_route_totals_are_segment_sums() {
    let mut shipments = european_batch();
    shipments.extend(transatlantic_batch());
    let routes = test_optimizer().optimize(&shipments).unwrap();

    for route in &routes {
        let distance: u32 = route.segments.iter().map(|s| s.distance).sum();
        let cost: f64 = route.segments.iter().map(|s| s.cost).sum();
        let time: f64 = route.segments.iter().map(|s| s.time).sum();
        let co2: f64 = route.segments.iter().map(|s| s.co2).sum();

        assert_eq!(route.total_distance, distance, "{}", route.name);
        assert!(approx_eq(route.total_cost, cost), "{}", route.name);
        assert!(approx_eq(route.total_time, time), "{}", route.name);
        assert!(approx_eq(route.total_co2, co2), "{}", route.name);
        assert_eq!(route.is_multi_modal, route.segments.len() > 1, "{}", route.name);
    }
}

#[test]
fn test_european_batch_routes_and_backhauls() {
    let routes = test_optimizer().optimize(&european_batch()).unwrap();

    let names: Vec<&str> = routes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Paris, France to Germany",
            "Rome, Italy to Germany",
            "Berlin, Germany to France",
            "Madrid, Spain to UK",
        ]
    );

    // Paris -> Berlin stays on the road
    assert_eq!(routes[0].shipments.len(), 2);
    assert!(!routes[0].is_multi_modal);
    assert!(approx_eq(routes[0].total_cost, 701.6));

    // Rome -> Berlin trucks through Frankfurt rather than flying
    assert!(routes[1].is_multi_modal);
    assert_eq!(routes[1].segments[0].to, "Frankfurt, Germany");
    assert!(routes[1]
        .segments
        .iter()
        .all(|s| s.mode == TransportMode::Truck));
    assert!(approx_eq(routes[1].total_cost, 1106.4));
    assert!(approx_eq(
        routes[1].total_time,
        959.0 / 80.0 + 424.0 / 80.0 + 3.0
    ));

    // Both Berlin arrivals pair with the Berlin -> Paris run, and vice versa
    let berlin_paris = routes[2].id.clone();
    for route in &routes[..2] {
        let backhaul = route.backhaul.as_ref().unwrap();
        assert_eq!(backhaul.route_id, berlin_paris);
        assert!(approx_eq(backhaul.savings, 0.4 * 701.6));
    }
    assert_eq!(routes[2].backhaul.as_ref().unwrap().route_id, routes[0].id);
    assert!(!routes[3].has_backhaul);
}

#[test]
fn test_large_country_split_per_city() {
    let shipments: Vec<Shipment> = (0..12)
        .map(|i| {
            let (city, weight) = if i % 2 == 0 {
                ("Berlin, Germany", 20.0)
            } else {
                ("Frankfurt, Germany", 10.0)
            };
            create_test_shipment(&format!("de-{i}"), "Paris, France", city, weight)
        })
        .collect();

    let routes = test_optimizer().optimize(&shipments).unwrap();

    // 12 shipments to Germany exceed the threshold: one route per city
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].name, "Paris, France to Berlin, Germany");
    assert_eq!(routes[1].name, "Paris, France to Frankfurt, Germany");
    assert_eq!(routes[0].shipments.len(), 6);
}

#[test]
fn test_unresolvable_location_fails_closed() {
    let mut shipments = transatlantic_batch();
    shipments.push(create_test_shipment("bad", "Gotham", "London, UK", 10.0));

    let optimizer = test_optimizer();
    match optimizer.optimize(&shipments) {
        Err(AppError::UnresolvableLocation(name)) => assert_eq!(name, "Gotham"),
        other => panic!("expected unresolvable location, got {:?}", other.map(|r| r.len())),
    }
    assert!(optimizer.optimize_routes(&shipments).is_empty());
}

#[test]
fn test_empty_batch() {
    let optimizer = test_optimizer();
    assert!(optimizer.optimize(&[]).unwrap().is_empty());
    assert!(optimizer.optimize_routes(&[]).is_empty());
}

#[test]
fn test_repeated_runs_agree_on_totals() {
    let shipments = european_batch();
    let optimizer = BatchOptimizer::default();

    let first = optimizer.optimize_routes(&shipments);
    let second = optimizer.optimize_routes(&shipments);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.total_distance, b.total_distance);
        assert!(approx_eq(a.total_cost, b.total_cost));
        assert!(approx_eq(a.total_time, b.total_time));
        assert!(approx_eq(a.total_co2, b.total_co2));
    }
    // Uuid ids differ per run
    assert_ne!(first[0].id, second[0].id);
}

#[test]
fn test_reserved_fleet_runs_dry() {
    let config = OptimizerConfig {
        fleet_policy: FleetPolicy::Reserved,
        ..OptimizerConfig::default()
    };
    let optimizer = BatchOptimizer::new(config).with_id_generator(Arc::new(SequentialIds::new()));

    // Seven destination countries, six vehicles
    let destinations = [
        "Berlin, Germany",
        "Paris, France",
        "Rome, Italy",
        "Madrid, Spain",
        "Vienna, Austria",
        "Brussels, Belgium",
        "Warsaw, Poland",
    ];
    let shipments: Vec<Shipment> = destinations
        .iter()
        .enumerate()
        .map(|(i, dest)| {
            create_test_shipment(&format!("s{i}"), "London, UK", dest, 100.0 - i as f64)
        })
        .collect();

    let routes = optimizer.optimize(&shipments).unwrap();

    assert_eq!(routes.len(), 7);
    let booked: Vec<&str> = routes
        .iter()
        .flat_map(|r| r.vehicles.iter().map(String::as_str))
        .collect();
    assert_eq!(
        booked,
        vec!["ship-2", "ship-1", "truck-2", "truck-1", "plane-2", "plane-1"]
    );
    assert!(routes[6].vehicles.is_empty());
}
