use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::dto::{DescribeParams, WfsQuery};
use crate::error::ApiError;
use crate::services::wfs::{self, WfsService};
use crate::state::AppState;

pub async fn wfs_capabilities() -> Json<serde_json::Value> {
    Json(WfsService::capabilities_document())
}

pub async fn wfs_get_feature(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WfsQuery>,
) -> Result<Response, ApiError> {
    let type_name = query.type_name.as_deref().unwrap_or(wfs::HERITAGE_ASSETS);
    tracing::info!(type_name, has_bbox = query.bbox.is_some(), "WFS GetFeature");

    match type_name {
        wfs::HERITAGE_ASSETS => {
            let collection = WfsService::heritage_asset_collection(&state, &query).await?;
            Ok(Json(collection).into_response())
        }
        wfs::ASSET_SEGMENTS => {
            let collection = WfsService::segment_collection(&state, &query).await?;
            Ok(Json(collection).into_response())
        }
        other => Err(ApiError::bad_request(format!(
            "Unknown typeName: {other}. Available types: {}, {}",
            wfs::HERITAGE_ASSETS,
            wfs::ASSET_SEGMENTS
        ))),
    }
}

pub async fn wfs_describe(
    Query(params): Query<DescribeParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let type_name = params.type_name.as_deref().unwrap_or(wfs::HERITAGE_ASSETS);
    WfsService::describe_feature_type(type_name).map(Json)
}
