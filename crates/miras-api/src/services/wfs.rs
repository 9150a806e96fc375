//! Simplified OGC WFS 2.0 surface: GetCapabilities, DescribeFeatureType
//! and GetFeature over the two served feature types. No XML/GML, JSON
//! encodings only.

use miras_core::filter::{AssetFilter, Page, SegmentFilter};
use miras_geo::{BoundingBox, DEFAULT_SRS_NAME, STORAGE_EPSG};
use serde_json::json;

use crate::dto::{
    AssetFeature, CrsRef, FeatureCollection, SegmentFeature, WfsAssetProperties, WfsQuery,
};
use crate::error::ApiError;
use crate::state::AppState;

pub const HERITAGE_ASSETS: &str = "heritage_assets";
pub const ASSET_SEGMENTS: &str = "asset_segments";

/// Service for the WFS operations.
pub struct WfsService;

impl WfsService {
    /// Static GetCapabilities document: service identification, served
    /// feature types and the filter operators the GetFeature path honors.
    pub fn capabilities_document() -> serde_json::Value {
        json!({
            "service": "WFS",
            "version": "2.0.0",
            "title": "Tarihi Yarimada Kulturel Miras WFS Servisi",
            "abstract": "Istanbul Tarihi Yarimada kulturel miras yapilarinin WFS servisi",
            "keywords": ["kulturel miras", "heritage", "istanbul", "tarihi yarimada", "gis"],
            "provider": {
                "name": "Miras",
                "site": "https://github.com/mirasgis/miras"
            },
            "operations": [
                {"name": "GetCapabilities", "url": "/api/v1/ogc/wfs/capabilities"},
                {"name": "DescribeFeatureType", "url": "/api/v1/ogc/wfs/describe"},
                {"name": "GetFeature", "url": "/api/v1/ogc/wfs"}
            ],
            "featureTypes": [
                {
                    "name": HERITAGE_ASSETS,
                    "title": "Kulturel Miras Yapilari",
                    "abstract": "Tarihi yarimadaki tescilli kulturel miras yapilari",
                    "defaultCRS": DEFAULT_SRS_NAME,
                    "outputFormats": ["application/json", "application/geo+json"]
                },
                {
                    "name": ASSET_SEGMENTS,
                    "title": "Yapi Segmentleri",
                    "abstract": "3D segmentasyonla ayrilmis yapi elemanlari",
                    "defaultCRS": DEFAULT_SRS_NAME,
                    "outputFormats": ["application/json"]
                }
            ],
            "filterCapabilities": {
                "spatialOperators": ["BBOX", "Within"],
                "comparisonOperators": ["EqualTo", "Like"]
            }
        })
    }

    /// Property schema for one feature type; unknown names are a client
    /// error naming the unrecognized value.
    pub fn describe_feature_type(type_name: &str) -> Result<serde_json::Value, ApiError> {
        match type_name {
            HERITAGE_ASSETS => Ok(json!({
                "typeName": HERITAGE_ASSETS,
                "properties": {
                    "identifier": {"type": "string", "maxLength": 20, "description": "Unique identifier (e.g., HA-0001)"},
                    "name_tr": {"type": "string", "maxLength": 255, "description": "Turkish name"},
                    "name_en": {"type": "string", "maxLength": 255, "description": "English name"},
                    "asset_type": {"type": "string", "maxLength": 50, "description": "Asset type (cami, hamam, saray, etc.)"},
                    "historical_period": {"type": "string", "maxLength": 50, "description": "Historical period"},
                    "construction_year": {"type": "integer", "description": "Construction year"},
                    "construction_period": {"type": "string", "description": "Construction period range"},
                    "neighborhood": {"type": "string", "maxLength": 100, "description": "Neighborhood"},
                    "protection_status": {"type": "string", "maxLength": 50, "description": "Protection status"},
                    "model_type": {"type": "string", "description": "3D model type (SPLAT, MESH, 3DTILES)"},
                    "model_url": {"type": "string", "description": "URL to 3D model"},
                    "is_visitable": {"type": "boolean", "description": "Whether the asset is visitable"},
                    "segment_count": {"type": "integer", "description": "Number of 3D segments"}
                },
                "geometry": {
                    "type": "Point",
                    "srid": STORAGE_EPSG
                }
            })),
            ASSET_SEGMENTS => Ok(json!({
                "typeName": ASSET_SEGMENTS,
                "properties": {
                    "id": {"type": "integer", "description": "Segment ID"},
                    "asset_id": {"type": "integer", "description": "Parent asset ID"},
                    "segment_name": {"type": "string", "description": "Segment name"},
                    "segment_type": {"type": "string", "description": "Type (dome, minaret, portal, etc.)"},
                    "object_id": {"type": "string", "description": "Object ID in the 3D model"},
                    "material": {"type": "string", "description": "Material"},
                    "height_m": {"type": "number", "description": "Height in meters"},
                    "width_m": {"type": "number", "description": "Width in meters"},
                    "volume_m3": {"type": "number", "description": "Volume in cubic meters"},
                    "condition": {"type": "string", "description": "Condition (original, restored, damaged)"},
                    "restoration_year": {"type": "integer", "description": "Year of restoration"}
                }
            })),
            other => Err(ApiError::bad_request(format!(
                "Unknown typeName: {other}. Available types: {HERITAGE_ASSETS}, {ASSET_SEGMENTS}"
            ))),
        }
    }

    /// GetFeature for the heritage feature type: bbox filter, id-ordered
    /// paging, `numberMatched` from the same filter minus paging.
    pub async fn heritage_asset_collection(
        state: &AppState,
        query: &WfsQuery,
    ) -> Result<FeatureCollection<AssetFeature<WfsAssetProperties>>, ApiError> {
        let mut filter = AssetFilter::default();
        if let Some(raw) = &query.bbox {
            filter.bbox = Some(BoundingBox::parse(raw)?);
        }
        let page = Page::new(query.max_features, query.start_index);

        let rows = state.assets.asset_rows(&filter, Some(page)).await?;
        let number_matched = state.assets.count_assets(&filter).await?;

        let srs_name = query.srs_name.as_deref().unwrap_or(DEFAULT_SRS_NAME);
        let features = rows.iter().map(AssetFeature::from).collect();

        Ok(FeatureCollection::paged(
            Some(CrsRef::named(srs_name)),
            number_matched,
            features,
        ))
    }

    /// GetFeature for segments: plain offset/limit listing, no spatial
    /// filter (segments have no independent geometry).
    pub async fn segment_collection(
        state: &AppState,
        query: &WfsQuery,
    ) -> Result<FeatureCollection<SegmentFeature>, ApiError> {
        let filter = SegmentFilter::default();
        let page = Page::new(query.max_features, query.start_index);

        let segments = state.segments.list_segments(&filter, Some(page)).await?;
        let number_matched = state.segments.count_segments(&filter).await?;

        let features = segments.iter().map(SegmentFeature::from).collect();
        Ok(FeatureCollection::paged(None, number_matched, features))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use miras_core::models::AssetDraft;
    use miras_core::ports::AssetStore;
    use miras_store::MemoryCatalog;

    use super::*;

    fn draft(identifier: &str, lon: f64, lat: f64) -> AssetDraft {
        AssetDraft {
            identifier: identifier.to_string(),
            name_tr: format!("{identifier} yapi"),
            name_en: None,
            asset_type: "cami".to_string(),
            description_tr: None,
            description_en: None,
            construction_year: None,
            construction_period: None,
            historical_period: None,
            longitude: lon,
            latitude: lat,
            footprint: None,
            neighborhood: None,
            address: None,
            inspire_id: None,
            protection_status: None,
            registration_no: None,
            registration_date: None,
            legal_foundation: None,
            model_url: None,
            model_type: None,
            model_lod: None,
            is_visitable: true,
            data_source: None,
        }
    }

    async fn seeded_state(count: usize) -> AppState {
        let catalog = Arc::new(MemoryCatalog::new());
        for i in 1..=count {
            let d = draft(&format!("HA-{i:04}"), 28.95 + i as f64 * 0.001, 41.01);
            let location = d.validate().unwrap();
            catalog.create_asset(&d, location).await.unwrap();
        }
        AppState::from_catalog(catalog)
    }

    #[tokio::test]
    async fn number_matched_ignores_paging() {
        let state = seeded_state(5).await;
        let query = WfsQuery {
            max_features: Some(2),
            start_index: Some(4),
            ..WfsQuery::default()
        };

        let collection = WfsService::heritage_asset_collection(&state, &query)
            .await
            .unwrap();
        assert_eq!(collection.number_matched, Some(5));
        assert_eq!(collection.number_returned, Some(1));
        assert_eq!(collection.features.len(), 1);
        assert_eq!(collection.features[0].id, "HA-0005");
    }

    #[tokio::test]
    async fn paging_partitions_do_not_overlap() {
        let state = seeded_state(5).await;

        let mut seen = Vec::new();
        for start in [0, 2, 4] {
            let query = WfsQuery {
                max_features: Some(2),
                start_index: Some(start),
                ..WfsQuery::default()
            };
            let collection = WfsService::heritage_asset_collection(&state, &query)
                .await
                .unwrap();
            seen.extend(collection.features.iter().map(|f| f.id.clone()));
        }

        assert_eq!(
            seen,
            vec!["HA-0001", "HA-0002", "HA-0003", "HA-0004", "HA-0005"]
        );
    }

    #[tokio::test]
    async fn bbox_filter_drives_both_counters() {
        let state = seeded_state(0).await;
        let catalog = state.assets.clone();

        let inside = draft("HA-0001", 28.9639, 41.0162);
        let location = inside.validate().unwrap();
        catalog.create_asset(&inside, location).await.unwrap();

        let outside = draft("HA-0002", 29.2, 41.0162);
        let location = outside.validate().unwrap();
        catalog.create_asset(&outside, location).await.unwrap();

        let query = WfsQuery {
            bbox: Some("28.9,41.0,29.0,41.1".to_string()),
            ..WfsQuery::default()
        };
        let collection = WfsService::heritage_asset_collection(&state, &query)
            .await
            .unwrap();
        assert_eq!(collection.number_matched, Some(1));
        assert_eq!(collection.features[0].id, "HA-0001");

        let query = WfsQuery {
            bbox: Some("29.0,41.0,29.1,41.1".to_string()),
            ..WfsQuery::default()
        };
        let collection = WfsService::heritage_asset_collection(&state, &query)
            .await
            .unwrap();
        assert_eq!(collection.number_matched, Some(0));
        assert_eq!(collection.number_returned, Some(0));
    }

    #[tokio::test]
    async fn malformed_bbox_is_rejected() {
        let state = seeded_state(1).await;
        let query = WfsQuery {
            bbox: Some("28.9,41.0,29.0".to_string()),
            ..WfsQuery::default()
        };

        let err = WfsService::heritage_asset_collection(&state, &query)
            .await
            .unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert!(err.message.contains("west,south,east,north"));
    }

    #[test]
    fn describe_rejects_unknown_type() {
        let err = WfsService::describe_feature_type("bogus").unwrap_err();
        assert!(err.message.contains("bogus"));
        assert!(err.message.contains(HERITAGE_ASSETS));
    }

    #[test]
    fn capabilities_lists_both_feature_types() {
        let doc = WfsService::capabilities_document();
        let names: Vec<&str> = doc["featureTypes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec![HERITAGE_ASSETS, ASSET_SEGMENTS]);
    }
}
