use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::MetadataResponse;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn dataset_metadata(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MetadataResponse>, ApiError> {
    let record = state.metadata.get_metadata().await?;

    Ok(Json(match record {
        Some(record) => MetadataResponse::from_record(record),
        None => MetadataResponse::stub(),
    }))
}
