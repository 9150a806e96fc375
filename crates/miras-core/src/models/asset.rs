use chrono::{DateTime, NaiveDate, Utc};
use miras_geo::{footprint, Location};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// A registered heritage structure. Aggregate root for segments, media,
/// notes and actor links; its point geometry and optional footprint live in
/// the spatial columns of the store, not on this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeritageAsset {
    pub id: i64,

    /// Stable external key, e.g. "HA-0001". Unique, immutable after create.
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

    pub inspire_id: Option<String>,
    pub protection_status: Option<String>,
    pub registration_no: Option<String>,
    pub registration_date: Option<NaiveDate>,
    pub legal_foundation: Option<String>,

    pub model_url: Option<String>,
    pub model_type: Option<String>,
    pub model_lod: Option<String>,

    pub is_visitable: bool,
    pub data_source: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating an asset. Coordinates arrive as separate
/// validated numbers and become the stored point geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetDraft {
    pub identifier: String,
    pub name_tr: String,
    pub name_en: Option<String>,
    pub asset_type: String,
    pub description_tr: Option<String>,
    pub description_en: Option<String>,
    pub construction_year: Option<i32>,
    pub construction_period: Option<String>,
    pub historical_period: Option<String>,
    pub longitude: f64,
    pub latitude: f64,
    pub footprint: Option<geojson::Geometry>,
    pub neighborhood: Option<String>,
    pub address: Option<String>,
    pub inspire_id: Option<String>,
    pub protection_status: Option<String>,
    pub registration_no: Option<String>,
    pub registration_date: Option<NaiveDate>,
    pub legal_foundation: Option<String>,
    pub model_url: Option<String>,
    pub model_type: Option<String>,
    pub model_lod: Option<String>,
    #[serde(default = "default_visitable")]
    pub is_visitable: bool,
    pub data_source: Option<String>,
}

fn default_visitable() -> bool {
    true
}

impl AssetDraft {
    /// Validate everything that needs no store state: required fields,
    /// coordinate ranges, footprint shape. Uniqueness of `identifier` is
    /// checked by the store inside the create call.
    pub fn validate(&self) -> Result<Location> {
        if self.identifier.trim().is_empty() {
            return Err(CatalogError::MissingField { field: "identifier" });
        }
        if self.name_tr.trim().is_empty() {
            return Err(CatalogError::MissingField { field: "name_tr" });
        }
        if self.asset_type.trim().is_empty() {
            return Err(CatalogError::MissingField { field: "asset_type" });
        }

        let location = Location::new(self.longitude, self.latitude)?;

        if let Some(geometry) = &self.footprint {
            footprint::validate_footprint(geometry)?;
        }

        Ok(location)
    }
}

/// Partial update. `None` leaves a field unchanged; `identifier` and the
/// point geometry are immutable through this path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetPatch {
    pub name_tr: Option<String>,
    pub name_en: Option<String>,
    pub asset_type: Option<String>,
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
    pub is_visitable: Option<bool>,
    pub data_source: Option<String>,
}

impl AssetPatch {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name_tr {
            if name.trim().is_empty() {
                return Err(CatalogError::MissingField { field: "name_tr" });
            }
        }
        if let Some(kind) = &self.asset_type {
            if kind.trim().is_empty() {
                return Err(CatalogError::MissingField { field: "asset_type" });
            }
        }
        Ok(())
    }

    /// Copy every supplied field onto the asset. The caller refreshes
    /// `updated_at`.
    pub fn apply(&self, asset: &mut HeritageAsset) {
        if let Some(v) = &self.name_tr {
            asset.name_tr = v.clone();
        }
        if let Some(v) = &self.name_en {
            asset.name_en = Some(v.clone());
        }
        if let Some(v) = &self.asset_type {
            asset.asset_type = v.clone();
        }
        if let Some(v) = &self.description_tr {
            asset.description_tr = Some(v.clone());
        }
        if let Some(v) = &self.description_en {
            asset.description_en = Some(v.clone());
        }
        if let Some(v) = self.construction_year {
            asset.construction_year = Some(v);
        }
        if let Some(v) = &self.construction_period {
            asset.construction_period = Some(v.clone());
        }
        if let Some(v) = &self.historical_period {
            asset.historical_period = Some(v.clone());
        }
        if let Some(v) = &self.neighborhood {
            asset.neighborhood = Some(v.clone());
        }
        if let Some(v) = &self.address {
            asset.address = Some(v.clone());
        }
        if let Some(v) = &self.protection_status {
            asset.protection_status = Some(v.clone());
        }
        if let Some(v) = &self.registration_no {
            asset.registration_no = Some(v.clone());
        }
        if let Some(v) = &self.model_url {
            asset.model_url = Some(v.clone());
        }
        if let Some(v) = &self.model_type {
            asset.model_type = Some(v.clone());
        }
        if let Some(v) = &self.model_lod {
            asset.model_lod = Some(v.clone());
        }
        if let Some(v) = self.is_visitable {
            asset.is_visitable = v;
        }
        if let Some(v) = &self.data_source {
            asset.data_source = Some(v.clone());
        }
    }
}

/// One row of the asset / segment-count join used by the GeoJSON and WFS
/// paths. Coordinates are what the geometry accessor produced and may be
/// absent; projection emits null components rather than dropping the row.
#[derive(Debug, Clone)]
pub struct AssetRow {
    pub asset: HeritageAsset,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub segment_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> AssetDraft {
        AssetDraft {
            identifier: "HA-0001".to_string(),
            name_tr: "Suleymaniye Camii".to_string(),
            name_en: Some("Suleymaniye Mosque".to_string()),
            asset_type: "cami".to_string(),
            description_tr: None,
            description_en: None,
            construction_year: Some(1557),
            construction_period: Some("1550-1557".to_string()),
            historical_period: Some("osmanli_klasik".to_string()),
            longitude: 28.9639,
            latitude: 41.0162,
            footprint: None,
            neighborhood: Some("Suleymaniye".to_string()),
            address: None,
            inspire_id: None,
            protection_status: Some("UNESCO".to_string()),
            registration_no: None,
            registration_date: None,
            legal_foundation: None,
            model_url: None,
            model_type: Some("3DTILES".to_string()),
            model_lod: None,
            is_visitable: true,
            data_source: None,
        }
    }

    #[test]
    fn valid_draft_yields_location() {
        let location = draft().validate().unwrap();
        assert_eq!(location.longitude, 28.9639);
        assert_eq!(location.latitude, 41.0162);
    }

    #[test]
    fn rejects_blank_required_fields() {
        let mut d = draft();
        d.name_tr = "  ".to_string();
        assert!(matches!(
            d.validate(),
            Err(CatalogError::MissingField { field: "name_tr" })
        ));

        let mut d = draft();
        d.asset_type = String::new();
        assert!(d.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let mut d = draft();
        d.latitude = 91.0;
        assert!(matches!(d.validate(), Err(CatalogError::Geometry(_))));
    }

    #[test]
    fn rejects_non_polygon_footprint() {
        let mut d = draft();
        d.footprint = Some(
            serde_json::from_value(serde_json::json!({
                "type": "Point",
                "coordinates": [28.96, 41.01]
            }))
            .unwrap(),
        );
        assert!(d.validate().is_err());
    }

    #[test]
    fn patch_only_touches_supplied_fields() {
        let mut asset = HeritageAsset {
            id: 1,
            identifier: "HA-0001".to_string(),
            name_tr: "Eski Ad".to_string(),
            name_en: None,
            asset_type: "cami".to_string(),
            description_tr: None,
            description_en: None,
            construction_year: Some(1557),
            construction_period: None,
            historical_period: None,
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
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let patch = AssetPatch {
            name_tr: Some("Yeni Ad".to_string()),
            is_visitable: Some(false),
            ..AssetPatch::default()
        };
        patch.apply(&mut asset);

        assert_eq!(asset.name_tr, "Yeni Ad");
        assert!(!asset.is_visitable);
        assert_eq!(asset.asset_type, "cami");
        assert_eq!(asset.construction_year, Some(1557));
    }
}
