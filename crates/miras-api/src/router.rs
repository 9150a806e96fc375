use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/api/v1/health", get(handlers::health_check))

        // Assets
        .route("/api/v1/assets", get(handlers::list_assets))
        .route("/api/v1/assets", post(handlers::create_asset))
        .route("/api/v1/assets/geojson", get(handlers::assets_geojson))
        .route("/api/v1/assets/stats/summary", get(handlers::asset_stats))
        .route("/api/v1/assets/identifier/{identifier}", get(handlers::get_asset_by_identifier))
        .route("/api/v1/assets/{id}", get(handlers::get_asset))
        .route("/api/v1/assets/{id}", patch(handlers::update_asset))
        .route("/api/v1/assets/{id}", delete(handlers::delete_asset))
        .route("/api/v1/assets/{id}/actors", get(handlers::asset_actors))
        .route("/api/v1/assets/{id}/media", get(handlers::asset_media))

        // Search & dataset metadata
        .route("/api/v1/search", get(handlers::search_assets))
        .route("/api/v1/metadata", get(handlers::dataset_metadata))

        // Segments
        .route("/api/v1/segments", get(handlers::list_segments))
        .route("/api/v1/segments", post(handlers::create_segment))
        .route("/api/v1/segments/types", get(handlers::segment_types))
        .route("/api/v1/segments/stats/summary", get(handlers::segment_stats))
        .route("/api/v1/segments/stats/by-asset/{id}", get(handlers::segment_stats_by_asset))
        .route("/api/v1/segments/by-asset/{id}", get(handlers::segments_by_asset))
        .route("/api/v1/segments/{id}", get(handlers::get_segment))
        .route("/api/v1/segments/{id}", patch(handlers::update_segment))
        .route("/api/v1/segments/{id}", delete(handlers::delete_segment))

        // Notes
        .route("/api/v1/notes", get(handlers::list_notes))
        .route("/api/v1/notes", post(handlers::create_note))
        .route("/api/v1/notes/stats/summary", get(handlers::note_stats))
        .route("/api/v1/notes/by-asset/{id}", get(handlers::notes_by_asset))
        .route("/api/v1/notes/{id}", get(handlers::get_note))
        .route("/api/v1/notes/{id}", delete(handlers::delete_note))

        // OGC WFS
        .route("/api/v1/ogc/wfs", get(handlers::wfs_get_feature))
        .route("/api/v1/ogc/wfs/capabilities", get(handlers::wfs_capabilities))
        .route("/api/v1/ogc/wfs/describe", get(handlers::wfs_describe))

        .with_state(state)
}
