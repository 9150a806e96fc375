//! Error taxonomy for catalog operations.

use miras_geo::GeoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    // Missing resources
    #[error("asset not found: {key}")]
    AssetNotFound { key: String },

    #[error("segment not found: {id}")]
    SegmentNotFound { id: i64 },

    #[error("note not found: {id}")]
    NoteNotFound { id: i64 },

    #[error("actor not found: {id}")]
    ActorNotFound { id: i64 },

    // Input rejected before any write
    #[error("asset with identifier {identifier:?} already exists")]
    DuplicateIdentifier { identifier: String },

    #[error("actor {actor_id} already holds role {role:?} on asset {asset_id}")]
    DuplicateRoleLink {
        asset_id: i64,
        actor_id: i64,
        role: String,
    },

    #[error("invalid segment type {given:?}; valid types: {valid}")]
    UnknownSegmentType { given: String, valid: String },

    #[error("{field} must not be empty")]
    MissingField { field: &'static str },

    #[error("{field} must be >= 0, got {value}")]
    NegativeMeasurement { field: &'static str, value: f64 },

    #[error(transparent)]
    Geometry(#[from] GeoError),

    // Backend failures
    #[error("storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
