//! Compiled filter predicates and pagination.
//!
//! Every provided filter combines with logical AND. Categorical filters
//! compare case-insensitively against the stored value; substring filters
//! are case-insensitive "contains".

use miras_geo::BoundingBox;
use serde::{Deserialize, Serialize};

use crate::models::{AssetSegment, HeritageAsset, UserNote};

/// Predicate set for asset queries.
#[derive(Debug, Clone, Default)]
pub struct AssetFilter {
    /// Case-insensitive exact match on `asset_type`.
    pub asset_type: Option<String>,
    /// Case-insensitive exact match on `historical_period`.
    pub historical_period: Option<String>,
    /// Case-insensitive exact match on `neighborhood`.
    pub neighborhood: Option<String>,
    /// Case-insensitive substring match on `protection_status`.
    pub protection_status: Option<String>,
    /// Case-insensitive substring match on either localized name.
    pub search: Option<String>,
    /// Point-in-box test on the stored location.
    pub bbox: Option<BoundingBox>,
}

impl AssetFilter {
    /// Evaluate the attribute and spatial predicates against one row.
    ///
    /// An asset whose geometry is missing never matches a spatial filter
    /// but passes when no bbox is set.
    pub fn matches(
        &self,
        asset: &HeritageAsset,
        longitude: Option<f64>,
        latitude: Option<f64>,
    ) -> bool {
        if let Some(kind) = &self.asset_type {
            if !eq_ci(&asset.asset_type, kind) {
                return false;
            }
        }
        if let Some(period) = &self.historical_period {
            if !opt_eq_ci(asset.historical_period.as_deref(), period) {
                return false;
            }
        }
        if let Some(neighborhood) = &self.neighborhood {
            if !opt_eq_ci(asset.neighborhood.as_deref(), neighborhood) {
                return false;
            }
        }
        if let Some(status) = &self.protection_status {
            let hit = asset
                .protection_status
                .as_deref()
                .is_some_and(|v| contains_ci(v, status));
            if !hit {
                return false;
            }
        }
        if let Some(query) = &self.search {
            let hit = contains_ci(&asset.name_tr, query)
                || asset
                    .name_en
                    .as_deref()
                    .is_some_and(|name| contains_ci(name, query));
            if !hit {
                return false;
            }
        }
        if let Some(bbox) = &self.bbox {
            match (longitude, latitude) {
                (Some(lon), Some(lat)) if bbox.contains(lon, lat) => {}
                _ => return false,
            }
        }
        true
    }
}

/// Predicate set for segment queries.
#[derive(Debug, Clone, Default)]
pub struct SegmentFilter {
    pub asset_id: Option<i64>,
    /// Case-insensitive match against the vocabulary code; values outside
    /// the vocabulary simply match nothing.
    pub segment_type: Option<String>,
    /// Case-insensitive exact match on `condition`.
    pub condition: Option<String>,
}

impl SegmentFilter {
    pub fn matches(&self, segment: &AssetSegment) -> bool {
        if let Some(id) = self.asset_id {
            if segment.asset_id != id {
                return false;
            }
        }
        if let Some(kind) = &self.segment_type {
            if !eq_ci(segment.segment_type.code(), kind) {
                return false;
            }
        }
        if let Some(condition) = &self.condition {
            if !opt_eq_ci(segment.condition.as_deref(), condition) {
                return false;
            }
        }
        true
    }
}

/// Predicate set for note queries.
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    pub asset_id: Option<i64>,
    /// Exact match; user identifiers are opaque keys.
    pub user_identifier: Option<String>,
}

impl NoteFilter {
    pub fn matches(&self, note: &UserNote) -> bool {
        if let Some(id) = self.asset_id {
            if note.asset_id != id {
                return false;
            }
        }
        if let Some(user) = &self.user_identifier {
            if note.user_identifier.as_deref() != Some(user.as_str()) {
                return false;
            }
        }
        true
    }
}

pub const DEFAULT_LIMIT: usize = 100;
pub const MAX_LIMIT: usize = 1000;

/// Pagination window, separate from the predicate filters. Limits above
/// [`MAX_LIMIT`] are clamped, not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Page {
    pub fn new(limit: Option<usize>, offset: Option<usize>) -> Self {
        Self {
            limit: limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT),
            offset: offset.unwrap_or(0),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}

fn eq_ci(stored: &str, wanted: &str) -> bool {
    stored.to_lowercase() == wanted.to_lowercase()
}

fn opt_eq_ci(stored: Option<&str>, wanted: &str) -> bool {
    stored.is_some_and(|v| eq_ci(v, wanted))
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn asset() -> HeritageAsset {
        HeritageAsset {
            id: 1,
            identifier: "HA-0001".to_string(),
            name_tr: "Suleymaniye Camii".to_string(),
            name_en: Some("Suleymaniye Mosque".to_string()),
            asset_type: "cami".to_string(),
            description_tr: None,
            description_en: None,
            construction_year: Some(1557),
            construction_period: None,
            historical_period: Some("osmanli_klasik".to_string()),
            neighborhood: Some("Suleymaniye".to_string()),
            address: None,
            inspire_id: None,
            protection_status: Some("UNESCO Dunya Mirasi".to_string()),
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
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(AssetFilter::default().matches(&asset(), None, None));
    }

    #[test]
    fn categorical_filters_are_case_insensitive() {
        let filter = AssetFilter {
            asset_type: Some("CAMI".to_string()),
            historical_period: Some("Osmanli_Klasik".to_string()),
            neighborhood: Some("suleymaniye".to_string()),
            ..AssetFilter::default()
        };
        assert!(filter.matches(&asset(), None, None));

        let filter = AssetFilter {
            asset_type: Some("hamam".to_string()),
            ..AssetFilter::default()
        };
        assert!(!filter.matches(&asset(), None, None));
    }

    #[test]
    fn missing_categorical_value_never_matches() {
        let mut subject = asset();
        subject.historical_period = None;
        let filter = AssetFilter {
            historical_period: Some("bizans".to_string()),
            ..AssetFilter::default()
        };
        assert!(!filter.matches(&subject, None, None));
    }

    #[test]
    fn protection_status_is_substring_match() {
        let filter = AssetFilter {
            protection_status: Some("unesco".to_string()),
            ..AssetFilter::default()
        };
        assert!(filter.matches(&asset(), None, None));
    }

    #[test]
    fn search_covers_both_name_fields() {
        let filter = AssetFilter {
            search: Some("mosque".to_string()),
            ..AssetFilter::default()
        };
        assert!(filter.matches(&asset(), None, None));

        let filter = AssetFilter {
            search: Some("camii".to_string()),
            ..AssetFilter::default()
        };
        assert!(filter.matches(&asset(), None, None));

        let filter = AssetFilter {
            search: Some("hagia".to_string()),
            ..AssetFilter::default()
        };
        assert!(!filter.matches(&asset(), None, None));
    }

    #[test]
    fn bbox_requires_coordinates() {
        let filter = AssetFilter {
            bbox: Some(BoundingBox::new(28.9, 41.0, 29.0, 41.1)),
            ..AssetFilter::default()
        };
        assert!(filter.matches(&asset(), Some(28.9639), Some(41.0162)));
        assert!(!filter.matches(&asset(), Some(29.5), Some(41.0162)));
        assert!(!filter.matches(&asset(), None, None));
    }

    #[test]
    fn filters_combine_with_and() {
        let filter = AssetFilter {
            asset_type: Some("cami".to_string()),
            search: Some("yok boyle bir ad".to_string()),
            ..AssetFilter::default()
        };
        assert!(!filter.matches(&asset(), None, None));
    }

    #[test]
    fn page_clamps_limit_and_defaults() {
        assert_eq!(Page::default(), Page { limit: 100, offset: 0 });
        assert_eq!(
            Page::new(Some(5000), Some(20)),
            Page {
                limit: 1000,
                offset: 20
            }
        );
        assert_eq!(Page::new(Some(10), None), Page { limit: 10, offset: 0 });
    }
}
