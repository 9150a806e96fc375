use miras_core::filter::{AssetFilter, NoteFilter, SegmentFilter};
use serde::Deserialize;

/// Query parameters for `GET /api/v1/assets`.
#[derive(Debug, Default, Deserialize)]
pub struct AssetListParams {
    pub asset_type: Option<String>,
    pub historical_period: Option<String>,
    pub neighborhood: Option<String>,
    pub protection_status: Option<String>,
    pub search: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl AssetListParams {
    /// The attribute predicates; paging is handled separately.
    pub fn to_filter(&self) -> AssetFilter {
        AssetFilter {
            asset_type: self.asset_type.clone(),
            historical_period: self.historical_period.clone(),
            neighborhood: self.neighborhood.clone(),
            protection_status: self.protection_status.clone(),
            search: self.search.clone(),
            bbox: None,
        }
    }
}

/// Query parameters for `GET /api/v1/assets/geojson`. The bbox literal is
/// parsed (and rejected) by the handler, not coerced here.
#[derive(Debug, Default, Deserialize)]
pub struct AssetGeoJsonParams {
    pub asset_type: Option<String>,
    pub historical_period: Option<String>,
    pub bbox: Option<String>,
}

/// Query parameters for `GET /api/v1/segments`.
#[derive(Debug, Default, Deserialize)]
pub struct SegmentListParams {
    pub asset_id: Option<i64>,
    pub segment_type: Option<String>,
    pub condition: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl SegmentListParams {
    pub fn to_filter(&self) -> SegmentFilter {
        SegmentFilter {
            asset_id: self.asset_id,
            segment_type: self.segment_type.clone(),
            condition: self.condition.clone(),
        }
    }
}

/// Optional type narrowing for `GET /api/v1/segments/by-asset/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct SegmentTypeParam {
    pub segment_type: Option<String>,
}

/// Query parameters for `GET /api/v1/notes`.
#[derive(Debug, Default, Deserialize)]
pub struct NoteListParams {
    pub asset_id: Option<i64>,
    pub user_identifier: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl NoteListParams {
    pub fn to_filter(&self) -> NoteFilter {
        NoteFilter {
            asset_id: self.asset_id,
            user_identifier: self.user_identifier.clone(),
        }
    }
}

/// Query parameters for `GET /api/v1/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}

/// WFS GetFeature query string, OGC KVP parameter names.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WfsQuery {
    pub service: Option<String>,
    pub request: Option<String>,
    pub type_name: Option<String>,
    pub output_format: Option<String>,
    pub srs_name: Option<String>,
    pub bbox: Option<String>,
    /// Accepted for KVP compatibility; property subsetting is not applied.
    pub property_name: Option<String>,
    pub max_features: Option<usize>,
    pub start_index: Option<usize>,
}

/// Query parameters for `GET /api/v1/ogc/wfs/describe`.
#[derive(Debug, Default, Deserialize)]
pub struct DescribeParams {
    #[serde(rename = "typeName")]
    pub type_name: Option<String>,
}
