use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use batchroute::routes::create_router;
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

fn setup_test_app(with_cache: bool) -> Router {
    create_router(common::test_state(with_cache))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn transatlantic_request() -> Value {
    json!({ "shipments": common::transatlantic_batch() })
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = setup_test_app(true);
    let (status, json) = send(&app, get("/debug/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["checks"]["gazetteer_locations"], 30);
    assert_eq!(json["checks"]["fleet_size"], 6);
    assert_eq!(json["checks"]["cache"]["backend"], "memory");
}

#[tokio::test]
async fn test_health_check_without_cache() {
    let app = setup_test_app(false);
    let (status, json) = send(&app, get("/debug/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["checks"]["cache"], "disabled");
}

#[tokio::test]
async fn test_optimize_batch_endpoint() {
    let app = setup_test_app(false);
    let (status, json) = send(&app, post_json("/batches/optimize", transatlantic_request())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_shipments"], 2);
    assert_eq!(json["cluster_count"], 2);
    assert_eq!(json["multi_modal_count"], 1);
    assert_eq!(json["backhaul_count"], 1);
    assert_eq!(json["total_distance"], 19896);

    let routes = json["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0]["segments"][0]["mode"], "ship");
    assert_eq!(routes[1]["is_multi_modal"], true);
    assert_eq!(routes[1]["backhaul"]["destination"], "London, UK");

    let total_cost = json["total_cost"].as_f64().unwrap();
    assert!(common::approx_eq(total_cost, 7290.0));
}

#[tokio::test]
async fn test_optimize_empty_batch() {
    let app = setup_test_app(false);
    let (status, json) = send(&app, post_json("/batches/optimize", json!({ "shipments": [] }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["routes"].as_array().unwrap().len(), 0);
    assert_eq!(json["total_cost"], 0.0);
}

#[tokio::test]
async fn test_unknown_location_is_unprocessable() {
    let app = setup_test_app(false);
    let request = json!({
        "shipments": [
            { "id": "a", "origin": "Paris, France", "destination": "Berlin, Germany", "weight": 10.0 },
            { "id": "b", "origin": "Gotham", "destination": "Berlin, Germany", "weight": 10.0 }
        ]
    });

    let (status, json) = send(&app, post_json("/batches/optimize", request)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["message"].as_str().unwrap().contains("Gotham"));
}

#[tokio::test]
async fn test_optimize_validation() {
    let app = setup_test_app(false);

    let bad_weight = json!({
        "shipments": [
            { "id": "a", "origin": "Paris, France", "destination": "Berlin, Germany", "weight": 0.0 }
        ]
    });
    let (status, json) = send(&app, post_json("/batches/optimize", bad_weight)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("weight"));

    let duplicate_ids = json!({
        "shipments": [
            { "id": "a", "origin": "Paris, France", "destination": "Berlin, Germany", "weight": 5.0 },
            { "id": "a", "origin": "Rome, Italy", "destination": "Berlin, Germany", "weight": 5.0 }
        ]
    });
    let (status, json) = send(&app, post_json("/batches/optimize", duplicate_ids)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("duplicate"));
}

#[tokio::test]
async fn test_optimize_rejects_malformed_body() {
    let app = setup_test_app(false);
    let request = Request::builder()
        .method("POST")
        .uri("/batches/optimize")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"shipments": [{"id": "a"}]}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_repeated_batch_served_from_cache() {
    let app = setup_test_app(true);

    let (status, first) = send(&app, post_json("/batches/optimize", transatlantic_request())).await;
    assert_eq!(status, StatusCode::OK);
    let (status, second) = send(&app, post_json("/batches/optimize", transatlantic_request())).await;
    assert_eq!(status, StatusCode::OK);

    // A fresh run would draw new route ids
    assert_eq!(first["generated_at"], second["generated_at"]);
    assert_eq!(first["routes"][0]["id"], second["routes"][0]["id"]);

    let (_, health) = send(&app, get("/debug/health")).await;
    assert_eq!(health["checks"]["cache"]["stats"]["hits"], 1);
    assert_eq!(health["checks"]["cache"]["stats"]["misses"], 1);
}

#[tokio::test]
async fn test_uncached_runs_draw_new_ids() {
    let app = setup_test_app(false);

    let (_, first) = send(&app, post_json("/batches/optimize", transatlantic_request())).await;
    let (_, second) = send(&app, post_json("/batches/optimize", transatlantic_request())).await;

    assert_eq!(first["routes"][0]["id"], "route-3");
    assert_eq!(second["routes"][0]["id"], "route-7");
}

#[tokio::test]
async fn test_geojson_endpoint() {
    let app = setup_test_app(false);
    let (status, json) = send(&app, post_json("/batches/geojson", transatlantic_request())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["type"], "FeatureCollection");

    // One direct segment plus two through London
    let features = json["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);
    assert_eq!(features[0]["geometry"]["type"], "LineString");
    assert_eq!(features[0]["properties"]["from"], "New York, USA");
    assert_eq!(features[0]["geometry"]["coordinates"][0][0], -74.006);
}

const CSV_BODY: &str = "\
Id,Origin,Destination,Weight,Dimensions
ship-la-ny,\"Los Angeles, USA\",\"New York, USA\",450,
ship-ny-lon,\"New York, USA\",\"London, UK\",1200,
ship-x,Gotham,\"London, UK\",10,
bad,\"Paris, France\",\"Berlin, Germany\",heavy,
";

fn post_csv(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "text/csv")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_import_fails_on_unknown_location() {
    let app = setup_test_app(false);
    let (status, json) = send(&app, post_csv("/batches/import", CSV_BODY)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["message"].as_str().unwrap().contains("Gotham"));
}

#[tokio::test]
async fn test_import_skipping_unresolvable_rows() {
    let app = setup_test_app(false);
    let (status, json) = send(
        &app,
        post_csv("/batches/import?skip_unresolvable=true", CSV_BODY),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["upload"]["valid_count"], 2);
    assert_eq!(json["upload"]["invalid_count"], 2);

    let errors = json["upload"]["errors"].as_array().unwrap();
    assert_eq!(errors[0]["row"], 4);
    assert_eq!(errors[0]["message"], "unknown location 'Gotham'");
    assert_eq!(errors[1]["row"], 5);

    assert_eq!(json["result"]["total_shipments"], 2);
    assert_eq!(json["result"]["routes"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_import_skips_row_with_invalid_utf8() {
    let app = setup_test_app(false);
    let mut body = b"Origin,Destination,Weight,Dimensions\n\
\"Paris, France\",\"Berlin, Germany\",100,\n"
        .to_vec();
    body.extend_from_slice(b"\"Par\xffis\",\"Berlin, Germany\",100,\n");

    let request = Request::builder()
        .method("POST")
        .uri("/batches/import")
        .header("content-type", "text/csv")
        .body(Body::from(body))
        .unwrap();
    let (status, json) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["upload"]["valid_count"], 1);
    assert_eq!(json["upload"]["invalid_count"], 1);
    assert_eq!(json["upload"]["errors"][0]["row"], 3);
    assert_eq!(json["result"]["routes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_optimize_with_oversized_dimensions_completes() {
    let app = setup_test_app(false);
    let request = json!({
        "shipments": [{
            "id": "a",
            "origin": "Paris, France",
            "destination": "Berlin, Germany",
            "weight": 10.0,
            "dimensions": "1e300x1e300x1e300"
        }]
    });

    let (status, json) = send(&app, post_json("/batches/optimize", request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_vehicles"], 1);
}

#[tokio::test]
async fn test_import_missing_column() {
    let app = setup_test_app(false);
    let (status, json) = send(
        &app,
        post_csv("/batches/import", "Origin,Destination,Weight\nA,B,1\n"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("Dimensions"));
}

#[tokio::test]
async fn test_resolve_location_endpoint() {
    let app = setup_test_app(false);

    let (status, json) = send(&app, get("/locations/resolve?name=Tokyo")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Tokyo");
    assert_eq!(json["coordinates"]["lat"], 35.6762);
    assert_eq!(json["continent"], "asia");

    let (status, _) = send(&app, get("/locations/resolve?name=Atlantis")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_locations_endpoint() {
    let app = setup_test_app(false);
    let (status, json) = send(&app, get("/locations")).await;

    assert_eq!(status, StatusCode::OK);
    let names = json.as_array().unwrap();
    assert_eq!(names.len(), 30);
    assert_eq!(names[0], "Los Angeles, USA");
}
