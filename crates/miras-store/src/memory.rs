//! In-memory catalog for development and testing.
//!
//! A single `RwLock` guards every table, so each aggregate operation
//! (validate-then-insert, cascade delete) is one atomic unit. Lock
//! poisoning only happens when another thread panicked mid-write, which is
//! unrecoverable here; `unwrap()` on the lock is intentional.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use miras_core::error::{CatalogError, Result};
use miras_core::filter::{AssetFilter, NoteFilter, Page, SegmentFilter};
use miras_core::models::{
    Actor, ActorDraft, AssetActor, AssetDraft, AssetPatch, AssetRow, AssetSegment, DatasetMetadata,
    HeritageAsset, Media, MediaDraft, NoteDraft, SegmentDraft, SegmentPatch, UserNote,
};
use miras_core::ports::{
    ActorStore, AssetFacet, AssetStore, MediaStore, MetadataStore, NoteStore, SegmentFacet,
    SegmentStore,
};
use miras_core::stats::{count_by_category, CategoryCount};
use miras_geo::Location;

/// In-memory implementation of every catalog port.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    data: Arc<RwLock<CatalogData>>,
}

#[derive(Debug, Default)]
struct CatalogData {
    assets: HashMap<i64, HeritageAsset>,
    // Geometry columns live beside the attribute rows, as in the backing
    // schema; an asset without a location row yields (None, None).
    locations: HashMap<i64, Location>,
    footprints: HashMap<i64, geojson::Geometry>,
    segments: HashMap<i64, AssetSegment>,
    notes: HashMap<i64, UserNote>,
    actors: HashMap<i64, Actor>,
    links: HashMap<i64, AssetActor>,
    media: HashMap<i64, Media>,
    metadata: HashMap<i64, DatasetMetadata>,
    next_asset_id: i64,
    next_segment_id: i64,
    next_note_id: i64,
    next_actor_id: i64,
    next_link_id: i64,
    next_media_id: i64,
    next_metadata_id: i64,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogData {
    fn coordinates(&self, asset_id: i64) -> (Option<f64>, Option<f64>) {
        match self.locations.get(&asset_id) {
            Some(location) => (Some(location.longitude), Some(location.latitude)),
            None => (None, None),
        }
    }

    fn segment_count_for(&self, asset_id: i64) -> u64 {
        self.segments
            .values()
            .filter(|s| s.asset_id == asset_id)
            .count() as u64
    }

    /// Matching assets ordered by id ascending; the stable ordering is what
    /// makes offset-based paging a consistent partition.
    fn matching_assets(&self, filter: &AssetFilter) -> Vec<&HeritageAsset> {
        let mut hits: Vec<&HeritageAsset> = self
            .assets
            .values()
            .filter(|asset| {
                let (lon, lat) = self.coordinates(asset.id);
                filter.matches(asset, lon, lat)
            })
            .collect();
        hits.sort_by_key(|asset| asset.id);
        hits
    }

    fn matching_segments(&self, filter: &SegmentFilter) -> Vec<&AssetSegment> {
        let mut hits: Vec<&AssetSegment> = self
            .segments
            .values()
            .filter(|segment| filter.matches(segment))
            .collect();
        hits.sort_by_key(|segment| segment.id);
        hits
    }

    fn require_asset(&self, id: i64) -> Result<&HeritageAsset> {
        self.assets.get(&id).ok_or(CatalogError::AssetNotFound {
            key: id.to_string(),
        })
    }
}

fn paged<T: Clone>(items: &[&T], page: Option<Page>) -> Vec<T> {
    let (skip, take) = match page {
        Some(page) => (page.offset, page.limit),
        None => (0, usize::MAX),
    };
    items
        .iter()
        .skip(skip)
        .take(take)
        .map(|item| (*item).clone())
        .collect()
}

#[async_trait]
impl AssetStore for MemoryCatalog {
    async fn create_asset(
        &self,
        draft: &AssetDraft,
        location: Location,
    ) -> Result<HeritageAsset> {
        let mut data = self.data.write().unwrap();

        if data
            .assets
            .values()
            .any(|asset| asset.identifier == draft.identifier)
        {
            return Err(CatalogError::DuplicateIdentifier {
                identifier: draft.identifier.clone(),
            });
        }

        data.next_asset_id += 1;
        let id = data.next_asset_id;
        let now = Utc::now();

        let asset = HeritageAsset {
            id,
            identifier: draft.identifier.clone(),
            name_tr: draft.name_tr.clone(),
            name_en: draft.name_en.clone(),
            asset_type: draft.asset_type.clone(),
            description_tr: draft.description_tr.clone(),
            description_en: draft.description_en.clone(),
            construction_year: draft.construction_year,
            construction_period: draft.construction_period.clone(),
            historical_period: draft.historical_period.clone(),
            neighborhood: draft.neighborhood.clone(),
            address: draft.address.clone(),
            inspire_id: draft.inspire_id.clone(),
            protection_status: draft.protection_status.clone(),
            registration_no: draft.registration_no.clone(),
            registration_date: draft.registration_date,
            legal_foundation: draft.legal_foundation.clone(),
            model_url: draft.model_url.clone(),
            model_type: draft.model_type.clone(),
            model_lod: draft.model_lod.clone(),
            is_visitable: draft.is_visitable,
            data_source: draft.data_source.clone(),
            created_at: now,
            updated_at: now,
        };

        data.assets.insert(id, asset.clone());
        data.locations.insert(id, location);
        if let Some(footprint) = &draft.footprint {
            data.footprints.insert(id, footprint.clone());
        }

        Ok(asset)
    }

    async fn get_asset(&self, id: i64) -> Result<Option<HeritageAsset>> {
        let data = self.data.read().unwrap();
        Ok(data.assets.get(&id).cloned())
    }

    async fn get_asset_by_identifier(&self, identifier: &str) -> Result<Option<HeritageAsset>> {
        let data = self.data.read().unwrap();
        Ok(data
            .assets
            .values()
            .find(|asset| asset.identifier == identifier)
            .cloned())
    }

    async fn count_assets(&self, filter: &AssetFilter) -> Result<u64> {
        let data = self.data.read().unwrap();
        Ok(data.matching_assets(filter).len() as u64)
    }

    async fn asset_rows(&self, filter: &AssetFilter, page: Option<Page>) -> Result<Vec<AssetRow>> {
        let data = self.data.read().unwrap();
        let selected: Vec<HeritageAsset> = paged(&data.matching_assets(filter), page);

        Ok(selected
            .into_iter()
            .map(|asset| {
                let (longitude, latitude) = data.coordinates(asset.id);
                let segment_count = data.segment_count_for(asset.id);
                AssetRow {
                    asset,
                    longitude,
                    latitude,
                    segment_count,
                }
            })
            .collect())
    }

    async fn asset_coordinates(&self, id: i64) -> Result<(Option<f64>, Option<f64>)> {
        let data = self.data.read().unwrap();
        Ok(data.coordinates(id))
    }

    async fn update_asset(&self, id: i64, patch: &AssetPatch) -> Result<HeritageAsset> {
        let mut data = self.data.write().unwrap();
        let asset = data
            .assets
            .get_mut(&id)
            .ok_or(CatalogError::AssetNotFound {
                key: id.to_string(),
            })?;

        patch.apply(asset);
        asset.updated_at = Utc::now();
        Ok(asset.clone())
    }

    async fn delete_asset(&self, id: i64) -> Result<()> {
        let mut data = self.data.write().unwrap();
        if data.assets.remove(&id).is_none() {
            return Err(CatalogError::AssetNotFound {
                key: id.to_string(),
            });
        }

        data.locations.remove(&id);
        data.footprints.remove(&id);
        data.segments.retain(|_, segment| segment.asset_id != id);
        data.notes.retain(|_, note| note.asset_id != id);
        data.media.retain(|_, media| media.asset_id != id);
        data.links.retain(|_, link| link.asset_id != id);
        Ok(())
    }

    async fn asset_counts(&self, facet: AssetFacet) -> Result<Vec<CategoryCount>> {
        let data = self.data.read().unwrap();
        Ok(count_by_category(data.assets.values().map(
            |asset| match facet {
                AssetFacet::Type => Some(asset.asset_type.clone()),
                AssetFacet::HistoricalPeriod => asset.historical_period.clone(),
                AssetFacet::ProtectionStatus => asset.protection_status.clone(),
            },
        )))
    }
}

#[async_trait]
impl SegmentStore for MemoryCatalog {
    async fn create_segment(&self, draft: &SegmentDraft) -> Result<AssetSegment> {
        let mut data = self.data.write().unwrap();
        data.require_asset(draft.asset_id)?;

        // Re-check under the lock so the normalized type is what gets
        // stored even if the caller skipped validation.
        let segment_type = draft.validate()?;

        data.next_segment_id += 1;
        let segment = AssetSegment {
            id: data.next_segment_id,
            asset_id: draft.asset_id,
            segment_name: draft.segment_name.clone(),
            segment_type,
            object_id: draft.object_id.clone(),
            material: draft.material.clone(),
            height_m: draft.height_m,
            width_m: draft.width_m,
            volume_m3: draft.volume_m3,
            condition: draft.condition.clone(),
            restoration_year: draft.restoration_year,
            description_tr: draft.description_tr.clone(),
            description_en: draft.description_en.clone(),
            created_at: Utc::now(),
        };

        data.segments.insert(segment.id, segment.clone());
        Ok(segment)
    }

    async fn get_segment(&self, id: i64) -> Result<Option<AssetSegment>> {
        let data = self.data.read().unwrap();
        Ok(data.segments.get(&id).cloned())
    }

    async fn list_segments(
        &self,
        filter: &SegmentFilter,
        page: Option<Page>,
    ) -> Result<Vec<AssetSegment>> {
        let data = self.data.read().unwrap();
        Ok(paged(&data.matching_segments(filter), page))
    }

    async fn count_segments(&self, filter: &SegmentFilter) -> Result<u64> {
        let data = self.data.read().unwrap();
        Ok(data.matching_segments(filter).len() as u64)
    }

    async fn update_segment(&self, id: i64, patch: &SegmentPatch) -> Result<AssetSegment> {
        let mut data = self.data.write().unwrap();
        let segment = data
            .segments
            .get_mut(&id)
            .ok_or(CatalogError::SegmentNotFound { id })?;

        patch.apply(segment)?;
        Ok(segment.clone())
    }

    async fn delete_segment(&self, id: i64) -> Result<()> {
        let mut data = self.data.write().unwrap();
        if data.segments.remove(&id).is_none() {
            return Err(CatalogError::SegmentNotFound { id });
        }
        Ok(())
    }

    async fn segment_counts(&self, facet: SegmentFacet) -> Result<Vec<CategoryCount>> {
        let data = self.data.read().unwrap();
        Ok(count_by_category(data.segments.values().map(
            |segment| match facet {
                SegmentFacet::Type => Some(segment.segment_type.code().to_string()),
                SegmentFacet::Condition => segment.condition.clone(),
            },
        )))
    }
}

#[async_trait]
impl NoteStore for MemoryCatalog {
    async fn create_note(&self, draft: &NoteDraft) -> Result<UserNote> {
        let mut data = self.data.write().unwrap();
        data.require_asset(draft.asset_id)?;

        data.next_note_id += 1;
        let note = UserNote {
            id: data.next_note_id,
            asset_id: draft.asset_id,
            user_identifier: draft.user_identifier.clone(),
            note_text: draft.note_text.clone(),
            created_at: Utc::now(),
        };

        data.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn get_note(&self, id: i64) -> Result<Option<UserNote>> {
        let data = self.data.read().unwrap();
        Ok(data.notes.get(&id).cloned())
    }

    async fn list_notes(&self, filter: &NoteFilter, page: Option<Page>) -> Result<Vec<UserNote>> {
        let data = self.data.read().unwrap();
        let mut hits: Vec<&UserNote> = data
            .notes
            .values()
            .filter(|note| filter.matches(note))
            .collect();
        // Newest first; id breaks ties from same-instant inserts.
        hits.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(paged(&hits, page))
    }

    async fn delete_note(&self, id: i64) -> Result<()> {
        let mut data = self.data.write().unwrap();
        if data.notes.remove(&id).is_none() {
            return Err(CatalogError::NoteNotFound { id });
        }
        Ok(())
    }

    async fn note_counts_by_asset(&self) -> Result<Vec<(i64, u64)>> {
        let data = self.data.read().unwrap();
        let mut counts: BTreeMap<i64, u64> = BTreeMap::new();
        for note in data.notes.values() {
            *counts.entry(note.asset_id).or_default() += 1;
        }
        Ok(counts.into_iter().collect())
    }
}

#[async_trait]
impl ActorStore for MemoryCatalog {
    async fn create_actor(&self, draft: &ActorDraft) -> Result<Actor> {
        let mut data = self.data.write().unwrap();

        data.next_actor_id += 1;
        let actor = Actor {
            id: data.next_actor_id,
            identifier: draft.identifier.clone(),
            name_tr: draft.name_tr.clone(),
            name_en: draft.name_en.clone(),
            actor_type: draft.actor_type.clone(),
            bio_tr: draft.bio_tr.clone(),
            birth_year: draft.birth_year,
            death_year: draft.death_year,
        };

        data.actors.insert(actor.id, actor.clone());
        Ok(actor)
    }

    async fn link_actor(&self, asset_id: i64, actor_id: i64, role: &str) -> Result<AssetActor> {
        let mut data = self.data.write().unwrap();
        data.require_asset(asset_id)?;
        if !data.actors.contains_key(&actor_id) {
            return Err(CatalogError::ActorNotFound { id: actor_id });
        }

        let duplicate = data.links.values().any(|link| {
            link.asset_id == asset_id && link.actor_id == actor_id && link.role == role
        });
        if duplicate {
            return Err(CatalogError::DuplicateRoleLink {
                asset_id,
                actor_id,
                role: role.to_string(),
            });
        }

        data.next_link_id += 1;
        let link = AssetActor {
            id: data.next_link_id,
            asset_id,
            actor_id,
            role: role.to_string(),
        };

        data.links.insert(link.id, link.clone());
        Ok(link)
    }

    async fn actors_for_asset(&self, asset_id: i64) -> Result<Vec<(Actor, String)>> {
        let data = self.data.read().unwrap();
        let mut links: Vec<&AssetActor> = data
            .links
            .values()
            .filter(|link| link.asset_id == asset_id)
            .collect();
        links.sort_by_key(|link| link.id);

        Ok(links
            .into_iter()
            .filter_map(|link| {
                data.actors
                    .get(&link.actor_id)
                    .map(|actor| (actor.clone(), link.role.clone()))
            })
            .collect())
    }
}

#[async_trait]
impl MediaStore for MemoryCatalog {
    async fn add_media(&self, draft: &MediaDraft) -> Result<Media> {
        let mut data = self.data.write().unwrap();
        data.require_asset(draft.asset_id)?;

        data.next_media_id += 1;
        let media = Media {
            id: data.next_media_id,
            asset_id: draft.asset_id,
            media_type: draft.media_type.clone(),
            url: draft.url.clone(),
            caption: draft.caption.clone(),
            is_primary: draft.is_primary,
            created_at: Utc::now(),
        };

        data.media.insert(media.id, media.clone());
        Ok(media)
    }

    async fn media_for_asset(&self, asset_id: i64) -> Result<Vec<Media>> {
        let data = self.data.read().unwrap();
        let mut media: Vec<Media> = data
            .media
            .values()
            .filter(|item| item.asset_id == asset_id)
            .cloned()
            .collect();
        media.sort_by_key(|item| item.id);
        Ok(media)
    }
}

#[async_trait]
impl MetadataStore for MemoryCatalog {
    async fn get_metadata(&self) -> Result<Option<DatasetMetadata>> {
        let data = self.data.read().unwrap();
        Ok(data
            .metadata
            .values()
            .min_by_key(|record| record.id)
            .cloned())
    }

    async fn put_metadata(&self, metadata: &DatasetMetadata) -> Result<DatasetMetadata> {
        let mut data = self.data.write().unwrap();

        data.next_metadata_id += 1;
        let mut record = metadata.clone();
        record.id = data.next_metadata_id;

        data.metadata.insert(record.id, record.clone());
        Ok(record)
    }
}
