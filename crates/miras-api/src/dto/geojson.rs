//! Typed GeoJSON projections.
//!
//! Each output contract is a fixed, named structure with an explicit
//! property subset. A row whose geometry is missing still projects to a
//! feature; its coordinate components serialize as null.

use miras_core::models::{AssetRow, AssetSegment};
use miras_geo::DEFAULT_SRS_NAME;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub coordinates: [Option<f64>; 2],
}

impl PointGeometry {
    pub fn new(longitude: Option<f64>, latitude: Option<f64>) -> Self {
        Self {
            kind: "Point",
            coordinates: [longitude, latitude],
        }
    }
}

/// Named CRS member for FeatureCollections.
#[derive(Debug, Clone, Serialize)]
pub struct CrsRef {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: CrsProperties,
}

#[derive(Debug, Clone, Serialize)]
struct CrsProperties {
    name: String,
}

impl CrsRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            kind: "name",
            properties: CrsProperties { name: name.into() },
        }
    }

    pub fn wgs84() -> Self {
        Self::named(DEFAULT_SRS_NAME)
    }
}

/// A GeoJSON Feature keyed by the asset's external identifier.
#[derive(Debug, Serialize)]
pub struct AssetFeature<P> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: String,
    pub geometry: PointGeometry,
    pub properties: P,
}

/// Property subset served by the plain `/assets/geojson` path.
#[derive(Debug, Serialize)]
pub struct AssetFeatureProperties {
    pub identifier: String,
    pub name_tr: String,
    pub asset_type: String,
    pub historical_period: Option<String>,
    pub construction_year: Option<i32>,
    pub protection_status: Option<String>,
    pub model_type: Option<String>,
    pub segment_count: u64,
}

impl From<&AssetRow> for AssetFeature<AssetFeatureProperties> {
    fn from(row: &AssetRow) -> Self {
        let asset = &row.asset;
        Self {
            kind: "Feature",
            id: asset.identifier.clone(),
            geometry: PointGeometry::new(row.longitude, row.latitude),
            properties: AssetFeatureProperties {
                identifier: asset.identifier.clone(),
                name_tr: asset.name_tr.clone(),
                asset_type: asset.asset_type.clone(),
                historical_period: asset.historical_period.clone(),
                construction_year: asset.construction_year,
                protection_status: asset.protection_status.clone(),
                model_type: asset.model_type.clone(),
                segment_count: row.segment_count,
            },
        }
    }
}

/// Richer property subset served by the WFS heritage feature type.
#[derive(Debug, Serialize)]
pub struct WfsAssetProperties {
    pub identifier: String,
    pub name_tr: String,
    pub name_en: Option<String>,
    pub asset_type: String,
    pub historical_period: Option<String>,
    pub construction_year: Option<i32>,
    pub construction_period: Option<String>,
    pub neighborhood: Option<String>,
    pub protection_status: Option<String>,
    pub model_type: Option<String>,
    pub model_url: Option<String>,
    pub is_visitable: bool,
    pub segment_count: u64,
}

impl From<&AssetRow> for AssetFeature<WfsAssetProperties> {
    fn from(row: &AssetRow) -> Self {
        let asset = &row.asset;
        Self {
            kind: "Feature",
            id: asset.identifier.clone(),
            geometry: PointGeometry::new(row.longitude, row.latitude),
            properties: WfsAssetProperties {
                identifier: asset.identifier.clone(),
                name_tr: asset.name_tr.clone(),
                name_en: asset.name_en.clone(),
                asset_type: asset.asset_type.clone(),
                historical_period: asset.historical_period.clone(),
                construction_year: asset.construction_year,
                construction_period: asset.construction_period.clone(),
                neighborhood: asset.neighborhood.clone(),
                protection_status: asset.protection_status.clone(),
                model_type: asset.model_type.clone(),
                model_url: asset.model_url.clone(),
                is_visitable: asset.is_visitable,
                segment_count: row.segment_count,
            },
        }
    }
}

/// WFS feature for a segment. Segments carry no independent geometry in
/// this model, so the feature has no geometry member; its id is the
/// zero-padded synthetic key.
#[derive(Debug, Serialize)]
pub struct SegmentFeature {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: String,
    pub properties: SegmentFeatureProperties,
}

#[derive(Debug, Serialize)]
pub struct SegmentFeatureProperties {
    pub id: i64,
    pub asset_id: i64,
    pub segment_name: String,
    pub segment_type: String,
    pub object_id: Option<String>,
    pub material: Option<String>,
    pub height_m: Option<f64>,
    pub width_m: Option<f64>,
    pub volume_m3: Option<f64>,
    pub condition: Option<String>,
    pub restoration_year: Option<i32>,
    pub description_tr: Option<String>,
}

impl From<&AssetSegment> for SegmentFeature {
    fn from(segment: &AssetSegment) -> Self {
        Self {
            kind: "Feature",
            id: format!("SEG-{:04}", segment.id),
            properties: SegmentFeatureProperties {
                id: segment.id,
                asset_id: segment.asset_id,
                segment_name: segment.segment_name.clone(),
                segment_type: segment.segment_type.code().to_string(),
                object_id: segment.object_id.clone(),
                material: segment.material.clone(),
                height_m: segment.height_m,
                width_m: segment.width_m,
                volume_m3: segment.volume_m3,
                condition: segment.condition.clone(),
                restoration_year: segment.restoration_year,
                description_tr: segment.description_tr.clone(),
            },
        }
    }
}

/// GeoJSON FeatureCollection wrapper. The plain API path omits the WFS
/// paging counters; the WFS path carries both `numberMatched` (total
/// predicate matches, independent of paging) and `numberReturned`
/// (features actually delivered).
#[derive(Debug, Serialize)]
pub struct FeatureCollection<F> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crs: Option<CrsRef>,
    #[serde(rename = "numberMatched", skip_serializing_if = "Option::is_none")]
    pub number_matched: Option<u64>,
    #[serde(rename = "numberReturned", skip_serializing_if = "Option::is_none")]
    pub number_returned: Option<u64>,
    pub features: Vec<F>,
}

impl<F> FeatureCollection<F> {
    /// Collection without paging metadata (plain GeoJSON endpoint).
    pub fn plain(crs: CrsRef, features: Vec<F>) -> Self {
        Self {
            kind: "FeatureCollection",
            crs: Some(crs),
            number_matched: None,
            number_returned: None,
            features,
        }
    }

    /// Collection with WFS paging metadata. `numberReturned` is always the
    /// delivered length; `number_matched` must be computed by the caller
    /// from the unpaged filter.
    pub fn paged(crs: Option<CrsRef>, number_matched: u64, features: Vec<F>) -> Self {
        Self {
            kind: "FeatureCollection",
            crs,
            number_matched: Some(number_matched),
            number_returned: Some(features.len() as u64),
            features,
        }
    }
}
