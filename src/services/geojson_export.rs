use crate::models::{Coordinates, OptimizedRoute, RouteSegment};
use crate::services::gazetteer::resolve_coordinates;
use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

/// One LineString feature per route segment, `[lng, lat]` ordered.
/// Segments whose endpoints cannot be located are left out.
pub fn routes_to_geojson(routes: &[OptimizedRoute]) -> FeatureCollection {
    let features = routes
        .iter()
        .flat_map(|route| {
            route
                .segments
                .iter()
                .enumerate()
                .filter_map(move |(index, segment)| segment_feature(route, index, segment))
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn segment_feature(route: &OptimizedRoute, index: usize, segment: &RouteSegment) -> Option<Feature> {
    let (Some(from), Some(to)) = (
        resolve_coordinates(&segment.from),
        resolve_coordinates(&segment.to),
    ) else {
        tracing::warn!(
            route = %route.id,
            from = %segment.from,
            to = %segment.to,
            "Segment endpoint not in gazetteer, leaving it off the map"
        );
        return None;
    };

    let mut properties = JsonObject::new();
    properties.insert("route_id".to_string(), json!(route.id));
    properties.insert("route_name".to_string(), json!(route.name));
    properties.insert("segment".to_string(), json!(index));
    properties.insert("from".to_string(), json!(segment.from));
    properties.insert("to".to_string(), json!(segment.to));
    properties.insert("mode".to_string(), json!(segment.mode));
    properties.insert("distance_km".to_string(), json!(segment.distance));
    properties.insert("cost".to_string(), json!(segment.cost));
    properties.insert("multi_modal".to_string(), json!(route.is_multi_modal));
    properties.insert("has_backhaul".to_string(), json!(route.has_backhaul));

    Some(Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::LineString(vec![
            position(&from),
            position(&to),
        ]))),
        id: Some(Id::String(format!("{}-{}", route.id, index))),
        properties: Some(properties),
        foreign_members: None,
    })
}

fn position(point: &Coordinates) -> Vec<f64> {
    vec![point.lng, point.lat]
}
