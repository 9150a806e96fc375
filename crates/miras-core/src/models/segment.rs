use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Closed vocabulary of structural segment types produced by the 3D
/// segmentation pipeline. Codes are stored lowercase; labels are the
/// Turkish display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentType {
    Dome,
    Minaret,
    Portal,
    Wall,
    Window,
    Courtyard,
    Fountain,
    Column,
    Arch,
    Roof,
    Other,
}

impl SegmentType {
    pub const ALL: [SegmentType; 11] = [
        SegmentType::Dome,
        SegmentType::Minaret,
        SegmentType::Portal,
        SegmentType::Wall,
        SegmentType::Window,
        SegmentType::Courtyard,
        SegmentType::Fountain,
        SegmentType::Column,
        SegmentType::Arch,
        SegmentType::Roof,
        SegmentType::Other,
    ];

    /// Canonical lowercase storage code.
    pub fn code(self) -> &'static str {
        match self {
            SegmentType::Dome => "dome",
            SegmentType::Minaret => "minaret",
            SegmentType::Portal => "portal",
            SegmentType::Wall => "wall",
            SegmentType::Window => "window",
            SegmentType::Courtyard => "courtyard",
            SegmentType::Fountain => "fountain",
            SegmentType::Column => "column",
            SegmentType::Arch => "arch",
            SegmentType::Roof => "roof",
            SegmentType::Other => "other",
        }
    }

    /// Turkish display label.
    pub fn label_tr(self) -> &'static str {
        match self {
            SegmentType::Dome => "Kubbe",
            SegmentType::Minaret => "Minare",
            SegmentType::Portal => "Tackapi/Giris",
            SegmentType::Wall => "Duvar",
            SegmentType::Window => "Pencere",
            SegmentType::Courtyard => "Avlu",
            SegmentType::Fountain => "Sadirvan",
            SegmentType::Column => "Sutun",
            SegmentType::Arch => "Kemer",
            SegmentType::Roof => "Cati",
            SegmentType::Other => "Diger",
        }
    }

    /// Case-insensitive parse to the canonical code. Anything outside the
    /// vocabulary is rejected with the list of valid codes.
    pub fn parse(raw: &str) -> Result<Self> {
        let lowered = raw.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == lowered)
            .ok_or_else(|| CatalogError::UnknownSegmentType {
                given: raw.to_string(),
                valid: Self::valid_codes(),
            })
    }

    fn valid_codes() -> String {
        Self::ALL
            .into_iter()
            .map(SegmentType::code)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A named structural sub-part of a heritage asset (dome, minaret, portal…)
/// with its physical measurements and condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSegment {
    pub id: i64,
    pub asset_id: i64,
    pub segment_name: String,
    pub segment_type: SegmentType,

    /// Segment id inside the external 3D model, when one exists.
    pub object_id: Option<String>,

    pub material: Option<String>,
    pub height_m: Option<f64>,
    pub width_m: Option<f64>,
    pub volume_m3: Option<f64>,

    pub condition: Option<String>,
    pub restoration_year: Option<i32>,

    pub description_tr: Option<String>,
    pub description_en: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating a segment. `segment_type` arrives as raw
/// text and is normalized against the vocabulary.
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentDraft {
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
    pub description_en: Option<String>,
}

impl SegmentDraft {
    /// Validate name, vocabulary membership and measurement signs;
    /// existence of the owning asset is the store's check.
    pub fn validate(&self) -> Result<SegmentType> {
        if self.segment_name.trim().is_empty() {
            return Err(CatalogError::MissingField {
                field: "segment_name",
            });
        }
        let kind = SegmentType::parse(&self.segment_type)?;
        check_measurement("height_m", self.height_m)?;
        check_measurement("width_m", self.width_m)?;
        check_measurement("volume_m3", self.volume_m3)?;
        Ok(kind)
    }
}

/// Partial update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SegmentPatch {
    pub segment_name: Option<String>,
    pub segment_type: Option<String>,
    pub object_id: Option<String>,
    pub material: Option<String>,
    pub height_m: Option<f64>,
    pub width_m: Option<f64>,
    pub volume_m3: Option<f64>,
    pub condition: Option<String>,
    pub restoration_year: Option<i32>,
    pub description_tr: Option<String>,
    pub description_en: Option<String>,
}

impl SegmentPatch {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.segment_name {
            if name.trim().is_empty() {
                return Err(CatalogError::MissingField {
                    field: "segment_name",
                });
            }
        }
        if let Some(kind) = &self.segment_type {
            SegmentType::parse(kind)?;
        }
        check_measurement("height_m", self.height_m)?;
        check_measurement("width_m", self.width_m)?;
        check_measurement("volume_m3", self.volume_m3)?;
        Ok(())
    }

    /// Copy every supplied field onto the segment, re-normalizing the type.
    pub fn apply(&self, segment: &mut AssetSegment) -> Result<()> {
        if let Some(v) = &self.segment_name {
            segment.segment_name = v.clone();
        }
        if let Some(v) = &self.segment_type {
            segment.segment_type = SegmentType::parse(v)?;
        }
        if let Some(v) = &self.object_id {
            segment.object_id = Some(v.clone());
        }
        if let Some(v) = &self.material {
            segment.material = Some(v.clone());
        }
        if let Some(v) = self.height_m {
            segment.height_m = Some(v);
        }
        if let Some(v) = self.width_m {
            segment.width_m = Some(v);
        }
        if let Some(v) = self.volume_m3 {
            segment.volume_m3 = Some(v);
        }
        if let Some(v) = &self.condition {
            segment.condition = Some(v.clone());
        }
        if let Some(v) = self.restoration_year {
            segment.restoration_year = Some(v);
        }
        if let Some(v) = &self.description_tr {
            segment.description_tr = Some(v.clone());
        }
        if let Some(v) = &self.description_en {
            segment.description_en = Some(v.clone());
        }
        Ok(())
    }
}

fn check_measurement(field: &'static str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !(v >= 0.0) => Err(CatalogError::NegativeMeasurement { field, value: v }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(SegmentType::parse("DOME").unwrap(), SegmentType::Dome);
        assert_eq!(SegmentType::parse(" minaret ").unwrap(), SegmentType::Minaret);
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        let err = SegmentType::parse("kubbe").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("kubbe"));
        assert!(message.contains("dome"));
        assert!(message.contains("other"));
    }

    #[test]
    fn serializes_as_lowercase_code() {
        let json = serde_json::to_string(&SegmentType::Dome).unwrap();
        assert_eq!(json, "\"dome\"");
        let parsed: SegmentType = serde_json::from_str("\"minaret\"").unwrap();
        assert_eq!(parsed, SegmentType::Minaret);
    }

    #[test]
    fn draft_rejects_negative_measurements() {
        let draft = SegmentDraft {
            asset_id: 1,
            segment_name: "Ana Kubbe".to_string(),
            segment_type: "dome".to_string(),
            object_id: None,
            material: None,
            height_m: Some(-1.0),
            width_m: None,
            volume_m3: None,
            condition: None,
            restoration_year: None,
            description_tr: None,
            description_en: None,
        };
        assert!(matches!(
            draft.validate(),
            Err(CatalogError::NegativeMeasurement {
                field: "height_m",
                ..
            })
        ));
    }

    #[test]
    fn patch_normalizes_type_on_apply() {
        let mut segment = AssetSegment {
            id: 1,
            asset_id: 1,
            segment_name: "Kuzey Minare".to_string(),
            segment_type: SegmentType::Minaret,
            object_id: None,
            material: None,
            height_m: None,
            width_m: None,
            volume_m3: None,
            condition: None,
            restoration_year: None,
            description_tr: None,
            description_en: None,
            created_at: Utc::now(),
        };

        let patch = SegmentPatch {
            segment_type: Some("WALL".to_string()),
            ..SegmentPatch::default()
        };
        patch.apply(&mut segment).unwrap();
        assert_eq!(segment.segment_type, SegmentType::Wall);
    }
}
