use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use miras_core::filter::{Page, SegmentFilter};
use miras_core::models::{AssetSegment, SegmentDraft, SegmentPatch, SegmentType};
use miras_core::ports::SegmentFacet;
use miras_core::stats::summarize_segments;

use crate::dto::{
    AssetSegmentStats, SegmentDetail, SegmentListParams, SegmentStats, SegmentTypeEntry,
    SegmentTypeList, SegmentTypeParam,
};
use crate::error::ApiError;
use crate::handlers::assets::require_asset;
use crate::state::AppState;

pub async fn list_segments(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SegmentListParams>,
) -> Result<Json<Vec<AssetSegment>>, ApiError> {
    let filter = params.to_filter();
    let page = Page::new(params.limit, params.offset);

    let segments = state.segments.list_segments(&filter, Some(page)).await?;
    Ok(Json(segments))
}

pub async fn segment_types() -> Json<SegmentTypeList> {
    Json(SegmentTypeList {
        types: SegmentType::ALL
            .into_iter()
            .map(|kind| SegmentTypeEntry {
                code: kind.code(),
                name_tr: kind.label_tr(),
            })
            .collect(),
    })
}

pub async fn segments_by_asset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(params): Query<SegmentTypeParam>,
) -> Result<Json<Vec<AssetSegment>>, ApiError> {
    require_asset(&state, id).await?;

    let filter = SegmentFilter {
        asset_id: Some(id),
        segment_type: params.segment_type,
        ..SegmentFilter::default()
    };
    let segments = state.segments.list_segments(&filter, None).await?;
    Ok(Json(segments))
}

pub async fn get_segment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SegmentDetail>, ApiError> {
    let segment = state
        .segments
        .get_segment(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Segment not found"))?;

    let asset = state.assets.get_asset(segment.asset_id).await?;
    Ok(Json(SegmentDetail {
        asset_name_tr: asset.as_ref().map(|a| a.name_tr.clone()),
        asset_identifier: asset.map(|a| a.identifier),
        segment,
    }))
}

pub async fn create_segment(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<SegmentDraft>,
) -> Result<(StatusCode, Json<AssetSegment>), ApiError> {
    tracing::info!(asset_id = draft.asset_id, "Creating segment");

    draft.validate()?;
    let segment = state.segments.create_segment(&draft).await?;
    Ok((StatusCode::CREATED, Json(segment)))
}

pub async fn update_segment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(patch): Json<SegmentPatch>,
) -> Result<Json<AssetSegment>, ApiError> {
    tracing::info!(segment_id = id, "Updating segment");

    patch.validate()?;
    let segment = state.segments.update_segment(id, &patch).await?;
    Ok(Json(segment))
}

pub async fn delete_segment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(segment_id = id, "Deleting segment");

    state.segments.delete_segment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn segment_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SegmentStats>, ApiError> {
    let total_segments = state
        .segments
        .count_segments(&SegmentFilter::default())
        .await?;
    let by_type = state.segments.segment_counts(SegmentFacet::Type).await?;
    let by_condition = state
        .segments
        .segment_counts(SegmentFacet::Condition)
        .await?;

    Ok(Json(SegmentStats {
        total_segments,
        by_type,
        by_condition,
    }))
}

pub async fn segment_stats_by_asset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<AssetSegmentStats>, ApiError> {
    let asset = require_asset(&state, id).await?;

    let filter = SegmentFilter {
        asset_id: Some(id),
        ..SegmentFilter::default()
    };
    let segments = state.segments.list_segments(&filter, None).await?;

    Ok(Json(AssetSegmentStats {
        asset_id: id,
        asset_name_tr: asset.name_tr,
        rollup: summarize_segments(&segments),
    }))
}
