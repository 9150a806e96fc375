use chrono::{DateTime, NaiveDate, Utc};
use miras_core::models::{Actor, AssetRow, AssetSegment, DatasetMetadata, HeritageAsset};
use miras_core::stats::{CategoryCount, SegmentRollup};
use serde::Serialize;

/// Asset summary for list and mutation responses; no geometry.
#[derive(Debug, Serialize)]
pub struct AssetSummary {
    pub id: i64,
    pub identifier: String,
    pub name_tr: String,
    pub name_en: Option<String>,
    pub asset_type: String,
    pub description_tr: Option<String>,
    pub description_en: Option<String>,
    pub construction_year: Option<i32>,
    pub construction_period: Option<String>,
    pub historical_period: Option<String>,
    pub neighborhood: Option<String>,
    pub address: Option<String>,
    pub protection_status: Option<String>,
    pub registration_no: Option<String>,
    pub model_url: Option<String>,
    pub model_type: Option<String>,
    pub model_lod: Option<String>,
    pub is_visitable: bool,
    pub data_source: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub segment_count: u64,
}

impl AssetSummary {
    pub fn from_asset(asset: HeritageAsset, segment_count: u64) -> Self {
        Self {
            id: asset.id,
            identifier: asset.identifier,
            name_tr: asset.name_tr,
            name_en: asset.name_en,
            asset_type: asset.asset_type,
            description_tr: asset.description_tr,
            description_en: asset.description_en,
            construction_year: asset.construction_year,
            construction_period: asset.construction_period,
            historical_period: asset.historical_period,
            neighborhood: asset.neighborhood,
            address: asset.address,
            protection_status: asset.protection_status,
            registration_no: asset.registration_no,
            model_url: asset.model_url,
            model_type: asset.model_type,
            model_lod: asset.model_lod,
            is_visitable: asset.is_visitable,
            data_source: asset.data_source,
            created_at: asset.created_at,
            updated_at: asset.updated_at,
            segment_count,
        }
    }

    pub fn from_row(row: AssetRow) -> Self {
        Self::from_asset(row.asset, row.segment_count)
    }
}

/// Asset detail: summary plus extracted coordinates. Missing geometry
/// yields null coordinates, not an error.
#[derive(Debug, Serialize)]
pub struct AssetDetail {
    #[serde(flatten)]
    pub summary: AssetSummary,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

impl AssetDetail {
    pub fn new(
        asset: HeritageAsset,
        segment_count: u64,
        longitude: Option<f64>,
        latitude: Option<f64>,
    ) -> Self {
        Self {
            summary: AssetSummary::from_asset(asset, segment_count),
            longitude,
            latitude,
        }
    }
}

/// Actor record with the role from its link to the queried asset.
#[derive(Debug, Serialize)]
pub struct ActorWithRole {
    pub id: i64,
    pub identifier: Option<String>,
    pub name_tr: String,
    pub name_en: Option<String>,
    pub actor_type: String,
    pub bio_tr: Option<String>,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub role: String,
}

impl ActorWithRole {
    pub fn new(actor: Actor, role: String) -> Self {
        Self {
            id: actor.id,
            identifier: actor.identifier,
            name_tr: actor.name_tr,
            name_en: actor.name_en,
            actor_type: actor.actor_type,
            bio_tr: actor.bio_tr,
            birth_year: actor.birth_year,
            death_year: actor.death_year,
            role,
        }
    }
}

/// Segment detail with owning-asset context.
#[derive(Debug, Serialize)]
pub struct SegmentDetail {
    #[serde(flatten)]
    pub segment: AssetSegment,
    pub asset_name_tr: Option<String>,
    pub asset_identifier: Option<String>,
}

/// One vocabulary entry for `GET /api/v1/segments/types`.
#[derive(Debug, Serialize)]
pub struct SegmentTypeEntry {
    pub code: &'static str,
    pub name_tr: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SegmentTypeList {
    pub types: Vec<SegmentTypeEntry>,
}

#[derive(Debug, Serialize)]
pub struct AssetStats {
    pub total_assets: u64,
    pub by_type: Vec<CategoryCount>,
    pub by_period: Vec<CategoryCount>,
    pub by_protection: Vec<CategoryCount>,
}

#[derive(Debug, Serialize)]
pub struct SegmentStats {
    pub total_segments: u64,
    pub by_type: Vec<CategoryCount>,
    pub by_condition: Vec<CategoryCount>,
}

/// Per-asset segment rollup with the owning asset named.
#[derive(Debug, Serialize)]
pub struct AssetSegmentStats {
    pub asset_id: i64,
    pub asset_name_tr: String,
    #[serde(flatten)]
    pub rollup: SegmentRollup,
}

#[derive(Debug, Serialize)]
pub struct AssetNoteCount {
    pub asset_id: i64,
    pub asset_name_tr: String,
    pub note_count: u64,
}

#[derive(Debug, Serialize)]
pub struct NoteStats {
    pub total_notes: u64,
    pub assets_with_notes: Vec<AssetNoteCount>,
}

#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub id: i64,
    pub identifier: String,
    pub name_tr: String,
    pub name_en: Option<String>,
    pub asset_type: String,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub storage: &'static str,
    pub version: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy",
            storage: "memory",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Dataset metadata document, grouped the way the metadata standard groups
/// it. Absent fields stay null; a missing record produces a stub with only
/// the defaults filled.
#[derive(Debug, Serialize)]
pub struct MetadataResponse {
    pub id: Option<i64>,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub purpose: Option<String>,
    pub language: String,
    pub spatial_extent: SpatialExtent,
    pub temporal_extent: TemporalExtent,
    pub data_quality: DataQuality,
    pub distribution: Distribution,
    pub contact: Contact,
    pub constraints: Constraints,
    pub metadata_info: MetadataInfo,
}

#[derive(Debug, Default, Serialize)]
pub struct SpatialExtent {
    pub west_bound: Option<f64>,
    pub east_bound: Option<f64>,
    pub south_bound: Option<f64>,
    pub north_bound: Option<f64>,
    pub coordinate_system: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct TemporalExtent {
    pub begin: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Default, Serialize)]
pub struct DataQuality {
    pub lineage: Option<String>,
    pub spatial_resolution: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct Distribution {
    pub format: Option<String>,
    pub access_url: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct Contact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct Constraints {
    pub use_constraints: Option<String>,
    pub license: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct MetadataInfo {
    pub date: Option<DateTime<Utc>>,
    pub standard: Option<String>,
}

impl MetadataResponse {
    pub fn from_record(record: DatasetMetadata) -> Self {
        Self {
            id: Some(record.id),
            title: record.title,
            abstract_text: record.abstract_text,
            purpose: record.purpose,
            language: record.language,
            spatial_extent: SpatialExtent {
                west_bound: record.west_bound,
                east_bound: record.east_bound,
                south_bound: record.south_bound,
                north_bound: record.north_bound,
                coordinate_system: Some(record.coordinate_system),
            },
            temporal_extent: TemporalExtent {
                begin: record.temporal_begin,
                end: record.temporal_end,
            },
            data_quality: DataQuality {
                lineage: record.lineage,
                spatial_resolution: record.spatial_resolution,
            },
            distribution: Distribution {
                format: Some(record.distribution_format),
                access_url: record.access_url,
            },
            contact: Contact {
                name: record.contact_name,
                email: record.contact_email,
                organization: record.contact_organization,
            },
            constraints: Constraints {
                use_constraints: record.use_constraints,
                license: record.license,
            },
            metadata_info: MetadataInfo {
                date: Some(record.metadata_date),
                standard: Some(record.metadata_standard),
            },
        }
    }

    /// Document served when no metadata row exists yet.
    pub fn stub() -> Self {
        Self {
            id: None,
            title: "Istanbul Tarihi Yarimada Kulturel Miras Envanteri".to_string(),
            abstract_text: Some("Henuz metadata kaydedilmemis".to_string()),
            purpose: None,
            language: "tr".to_string(),
            spatial_extent: SpatialExtent::default(),
            temporal_extent: TemporalExtent::default(),
            data_quality: DataQuality::default(),
            distribution: Distribution::default(),
            contact: Contact::default(),
            constraints: Constraints::default(),
            metadata_info: MetadataInfo {
                date: None,
                standard: Some("ISO 19115:2014".to_string()),
            },
        }
    }
}
