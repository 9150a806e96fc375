use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use miras_core::filter::{AssetFilter, Page, SegmentFilter};
use miras_core::models::{AssetDraft, AssetPatch, Media};
use miras_core::ports::AssetFacet;
use miras_geo::BoundingBox;

use crate::dto::{
    ActorWithRole, AssetDetail, AssetFeature, AssetFeatureProperties, AssetGeoJsonParams,
    AssetListParams, AssetStats, AssetSummary, CrsRef, FeatureCollection, SearchHit,
    SearchParams, SearchResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

const SEARCH_LIMIT: usize = 20;

pub async fn list_assets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AssetListParams>,
) -> Result<Json<Vec<AssetSummary>>, ApiError> {
    let filter = params.to_filter();
    let page = Page::new(params.limit, params.offset);

    let rows = state.assets.asset_rows(&filter, Some(page)).await?;
    Ok(Json(rows.into_iter().map(AssetSummary::from_row).collect()))
}

pub async fn assets_geojson(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AssetGeoJsonParams>,
) -> Result<Json<FeatureCollection<AssetFeature<AssetFeatureProperties>>>, ApiError> {
    let mut filter = AssetFilter {
        asset_type: params.asset_type,
        historical_period: params.historical_period,
        ..AssetFilter::default()
    };
    if let Some(raw) = &params.bbox {
        filter.bbox = Some(BoundingBox::parse(raw)?);
    }

    let rows = state.assets.asset_rows(&filter, None).await?;
    let features = rows.iter().map(AssetFeature::from).collect();
    Ok(Json(FeatureCollection::plain(CrsRef::wgs84(), features)))
}

pub async fn get_asset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<AssetDetail>, ApiError> {
    let asset = state
        .assets
        .get_asset(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Asset not found"))?;

    detail_response(&state, asset).await
}

pub async fn get_asset_by_identifier(
    State(state): State<Arc<AppState>>,
    Path(identifier): Path<String>,
) -> Result<Json<AssetDetail>, ApiError> {
    let asset = state
        .assets
        .get_asset_by_identifier(&identifier)
        .await?
        .ok_or_else(|| ApiError::not_found("Asset not found"))?;

    detail_response(&state, asset).await
}

async fn detail_response(
    state: &AppState,
    asset: miras_core::models::HeritageAsset,
) -> Result<Json<AssetDetail>, ApiError> {
    let id = asset.id;
    let (longitude, latitude) = state.assets.asset_coordinates(id).await?;
    let segment_count = state
        .segments
        .count_segments(&SegmentFilter {
            asset_id: Some(id),
            ..SegmentFilter::default()
        })
        .await?;

    Ok(Json(AssetDetail::new(
        asset,
        segment_count,
        longitude,
        latitude,
    )))
}

pub async fn create_asset(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<AssetDraft>,
) -> Result<(StatusCode, Json<AssetSummary>), ApiError> {
    tracing::info!(identifier = %draft.identifier, "Creating asset");

    let location = draft.validate()?;
    let asset = state.assets.create_asset(&draft, location).await?;

    Ok((
        StatusCode::CREATED,
        Json(AssetSummary::from_asset(asset, 0)),
    ))
}

pub async fn update_asset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(patch): Json<AssetPatch>,
) -> Result<Json<AssetSummary>, ApiError> {
    tracing::info!(asset_id = id, "Updating asset");

    patch.validate()?;
    let asset = state.assets.update_asset(id, &patch).await?;
    let segment_count = state
        .segments
        .count_segments(&SegmentFilter {
            asset_id: Some(id),
            ..SegmentFilter::default()
        })
        .await?;

    Ok(Json(AssetSummary::from_asset(asset, segment_count)))
}

pub async fn delete_asset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(asset_id = id, "Deleting asset");

    state.assets.delete_asset(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn asset_actors(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<ActorWithRole>>, ApiError> {
    require_asset(&state, id).await?;

    let actors = state.actors.actors_for_asset(id).await?;
    Ok(Json(
        actors
            .into_iter()
            .map(|(actor, role)| ActorWithRole::new(actor, role))
            .collect(),
    ))
}

pub async fn asset_media(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Media>>, ApiError> {
    require_asset(&state, id).await?;

    let media = state.media.media_for_asset(id).await?;
    Ok(Json(media))
}

pub async fn asset_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AssetStats>, ApiError> {
    let total_assets = state.assets.count_assets(&AssetFilter::default()).await?;
    let by_type = state.assets.asset_counts(AssetFacet::Type).await?;
    let by_period = state
        .assets
        .asset_counts(AssetFacet::HistoricalPeriod)
        .await?;
    let by_protection = state
        .assets
        .asset_counts(AssetFacet::ProtectionStatus)
        .await?;

    Ok(Json(AssetStats {
        total_assets,
        by_type,
        by_period,
        by_protection,
    }))
}

pub async fn search_assets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let filter = AssetFilter {
        search: Some(params.q),
        ..AssetFilter::default()
    };
    let page = Page {
        limit: SEARCH_LIMIT,
        offset: 0,
    };

    let rows = state.assets.asset_rows(&filter, Some(page)).await?;
    let results: Vec<SearchHit> = rows
        .into_iter()
        .map(|row| SearchHit {
            id: row.asset.id,
            identifier: row.asset.identifier,
            name_tr: row.asset.name_tr,
            name_en: row.asset.name_en,
            asset_type: row.asset.asset_type,
            longitude: row.longitude,
            latitude: row.latitude,
        })
        .collect();

    let count = results.len();
    Ok(Json(SearchResponse { results, count }))
}

pub(crate) async fn require_asset(
    state: &AppState,
    id: i64,
) -> Result<miras_core::models::HeritageAsset, ApiError> {
    state
        .assets
        .get_asset(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Asset not found"))
}
