use axum::Router;
use batchroute::cache::{MemoryCacheService, ResultCache};
use batchroute::config::Config;
use batchroute::services::optimizer::BatchOptimizer;
use batchroute::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "batchroute=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting BatchRoute API server");
    tracing::info!(
        fleet_policy = ?config.optimizer.fleet_policy,
        id_strategy = ?config.optimizer.id_strategy,
        "Configuration loaded successfully"
    );

    let cache: Arc<dyn ResultCache> = Arc::new(MemoryCacheService::new(
        config.result_cache_ttl,
        config.result_cache_max_entries,
    ));
    tracing::info!(
        "Using in-memory result cache (TTL {}s, {} entries)",
        config.result_cache_ttl,
        config.result_cache_max_entries
    );

    // Create application state
    let state = Arc::new(AppState {
        optimizer: Arc::new(BatchOptimizer::new(config.optimizer.clone())),
        cache: Some(cache),
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", batchroute::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
