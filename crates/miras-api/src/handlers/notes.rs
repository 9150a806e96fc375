use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use miras_core::filter::{NoteFilter, Page};
use miras_core::models::{NoteDraft, UserNote};

use crate::dto::{AssetNoteCount, NoteListParams, NoteStats};
use crate::error::ApiError;
use crate::handlers::assets::require_asset;
use crate::state::AppState;

pub async fn list_notes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NoteListParams>,
) -> Result<Json<Vec<UserNote>>, ApiError> {
    let filter = params.to_filter();
    let page = Page::new(params.limit, params.offset);

    let notes = state.notes.list_notes(&filter, Some(page)).await?;
    Ok(Json(notes))
}

pub async fn notes_by_asset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<UserNote>>, ApiError> {
    require_asset(&state, id).await?;

    let filter = NoteFilter {
        asset_id: Some(id),
        ..NoteFilter::default()
    };
    let notes = state.notes.list_notes(&filter, None).await?;
    Ok(Json(notes))
}

pub async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<UserNote>, ApiError> {
    let note = state
        .notes
        .get_note(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Note not found"))?;
    Ok(Json(note))
}

pub async fn create_note(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<NoteDraft>,
) -> Result<(StatusCode, Json<UserNote>), ApiError> {
    tracing::info!(asset_id = draft.asset_id, "Creating note");

    draft.validate()?;
    let note = state.notes.create_note(&draft).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(note_id = id, "Deleting note");

    state.notes.delete_note(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn note_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NoteStats>, ApiError> {
    let counts = state.notes.note_counts_by_asset().await?;

    let mut assets_with_notes = Vec::with_capacity(counts.len());
    let mut total_notes = 0;
    for (asset_id, note_count) in counts {
        total_notes += note_count;
        // Notes whose asset vanished mid-request are skipped, not errors.
        if let Some(asset) = state.assets.get_asset(asset_id).await? {
            assets_with_notes.push(AssetNoteCount {
                asset_id,
                asset_name_tr: asset.name_tr,
                note_count,
            });
        }
    }

    Ok(Json(NoteStats {
        total_notes,
        assets_with_notes,
    }))
}
