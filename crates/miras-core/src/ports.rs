//! Store ports. Each request-scoped operation goes through one of these
//! traits; implementations own transactional isolation so that an
//! aggregate create/update/delete never partially applies.

use async_trait::async_trait;
use miras_geo::Location;

use crate::error::Result;
use crate::filter::{AssetFilter, NoteFilter, Page, SegmentFilter};
use crate::models::{
    Actor, ActorDraft, AssetActor, AssetDraft, AssetPatch, AssetRow, AssetSegment, DatasetMetadata,
    HeritageAsset, Media, MediaDraft, NoteDraft, SegmentDraft, SegmentPatch, UserNote,
};
use crate::stats::CategoryCount;

/// Facets the statistics endpoints group assets by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFacet {
    Type,
    HistoricalPeriod,
    ProtectionStatus,
}

/// Facets the statistics endpoints group segments by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentFacet {
    Type,
    Condition,
}

/// Port for heritage-asset storage, including the point geometry.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Create an asset with its validated location. Fails with
    /// `DuplicateIdentifier` without writing anything when the identifier
    /// is taken.
    async fn create_asset(&self, draft: &AssetDraft, location: Location)
        -> Result<HeritageAsset>;

    async fn get_asset(&self, id: i64) -> Result<Option<HeritageAsset>>;

    async fn get_asset_by_identifier(&self, identifier: &str) -> Result<Option<HeritageAsset>>;

    /// Total predicate matches, independent of any paging.
    async fn count_assets(&self, filter: &AssetFilter) -> Result<u64>;

    /// Joined rows (attributes + coordinates + segment count), ordered by
    /// id ascending. `page: None` returns every match.
    async fn asset_rows(&self, filter: &AssetFilter, page: Option<Page>) -> Result<Vec<AssetRow>>;

    /// Point coordinates for one asset; `(None, None)` when no geometry
    /// row exists. Missing geometry is a data-quality condition, not an
    /// error.
    async fn asset_coordinates(&self, id: i64) -> Result<(Option<f64>, Option<f64>)>;

    /// Apply a partial update and refresh `updated_at`.
    async fn update_asset(&self, id: i64, patch: &AssetPatch) -> Result<HeritageAsset>;

    /// Delete the asset and cascade to its segments, media, notes and
    /// actor links.
    async fn delete_asset(&self, id: i64) -> Result<()>;

    async fn asset_counts(&self, facet: AssetFacet) -> Result<Vec<CategoryCount>>;
}

/// Port for segment storage.
#[async_trait]
pub trait SegmentStore: Send + Sync {
    /// Create a segment; fails with `AssetNotFound` when the owner does
    /// not exist.
    async fn create_segment(&self, draft: &SegmentDraft) -> Result<AssetSegment>;

    async fn get_segment(&self, id: i64) -> Result<Option<AssetSegment>>;

    /// Filtered listing, ordered by id ascending. `page: None` returns
    /// every match.
    async fn list_segments(
        &self,
        filter: &SegmentFilter,
        page: Option<Page>,
    ) -> Result<Vec<AssetSegment>>;

    async fn count_segments(&self, filter: &SegmentFilter) -> Result<u64>;

    async fn update_segment(&self, id: i64, patch: &SegmentPatch) -> Result<AssetSegment>;

    async fn delete_segment(&self, id: i64) -> Result<()>;

    async fn segment_counts(&self, facet: SegmentFacet) -> Result<Vec<CategoryCount>>;
}

/// Port for user-note storage.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Create a note; fails with `AssetNotFound` when the owner does not
    /// exist.
    async fn create_note(&self, draft: &NoteDraft) -> Result<UserNote>;

    async fn get_note(&self, id: i64) -> Result<Option<UserNote>>;

    /// Filtered listing, newest first. `page: None` returns every match.
    async fn list_notes(&self, filter: &NoteFilter, page: Option<Page>) -> Result<Vec<UserNote>>;

    async fn delete_note(&self, id: i64) -> Result<()>;

    /// `(asset_id, note count)` for every asset with at least one note.
    async fn note_counts_by_asset(&self) -> Result<Vec<(i64, u64)>>;
}

/// Port for actors and their role links.
#[async_trait]
pub trait ActorStore: Send + Sync {
    async fn create_actor(&self, draft: &ActorDraft) -> Result<Actor>;

    /// Link an actor to an asset under a role. Fails with
    /// `DuplicateRoleLink` when the (asset, actor, role) triple exists.
    async fn link_actor(&self, asset_id: i64, actor_id: i64, role: &str) -> Result<AssetActor>;

    /// Actors linked to an asset, each paired with the role from its link.
    async fn actors_for_asset(&self, asset_id: i64) -> Result<Vec<(Actor, String)>>;
}

/// Port for media attachments.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn add_media(&self, draft: &MediaDraft) -> Result<Media>;

    async fn media_for_asset(&self, asset_id: i64) -> Result<Vec<Media>>;
}

/// Port for the dataset-level metadata record.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// The authoritative record: lowest id wins when several rows exist.
    async fn get_metadata(&self) -> Result<Option<DatasetMetadata>>;

    /// Store a metadata record, assigning a fresh id.
    async fn put_metadata(&self, metadata: &DatasetMetadata) -> Result<DatasetMetadata>;
}
