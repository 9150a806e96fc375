use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use miras_store::MemoryCatalog;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use miras_api::config::ApiConfig;
use miras_api::router::create_router;
use miras_api::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "miras_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();

    tracing::info!(port = config.port, "Starting miras catalog API");

    // The relational/spatial backend is reached through the store ports;
    // this binary ships with the in-memory catalog.
    let catalog = Arc::new(MemoryCatalog::new());
    tracing::info!("Using in-memory catalog storage");

    let state = Arc::new(AppState::from_catalog(catalog));

    let cors = if config.allows_any_origin() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
    };

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.unwrap();
}
