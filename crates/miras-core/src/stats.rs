//! Read-only statistics aggregation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::AssetSegment;

/// One group-by bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: u64,
}

/// Count values by category. Absent and empty categories are excluded from
/// the output (there is no "unknown" bucket); buckets come back ordered by
/// value so repeated calls are deterministic.
pub fn count_by_category<I>(values: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for value in values.into_iter().flatten() {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            *counts.entry(trimmed.to_string()).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(value, count)| CategoryCount { value, count })
        .collect()
}

/// Per-asset segment rollup: counts by type and condition plus measurement
/// sums, rounded to 2 decimal places.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentRollup {
    pub total_segments: u64,
    pub by_type: Vec<CategoryCount>,
    pub by_condition: Vec<CategoryCount>,
    pub total_height_m: f64,
    pub total_volume_m3: f64,
}

pub fn summarize_segments(segments: &[AssetSegment]) -> SegmentRollup {
    let total_height: f64 = segments.iter().filter_map(|s| s.height_m).sum();
    let total_volume: f64 = segments.iter().filter_map(|s| s.volume_m3).sum();

    SegmentRollup {
        total_segments: segments.len() as u64,
        by_type: count_by_category(
            segments
                .iter()
                .map(|s| Some(s.segment_type.code().to_string())),
        ),
        by_condition: count_by_category(segments.iter().map(|s| s.condition.clone())),
        total_height_m: round2(total_height),
        total_volume_m3: round2(total_volume),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::SegmentType;

    fn segment(kind: SegmentType, height: Option<f64>, condition: Option<&str>) -> AssetSegment {
        AssetSegment {
            id: 0,
            asset_id: 1,
            segment_name: "test".to_string(),
            segment_type: kind,
            object_id: None,
            material: None,
            height_m: height,
            width_m: None,
            volume_m3: None,
            condition: condition.map(str::to_string),
            restoration_year: None,
            description_tr: None,
            description_en: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn excludes_missing_and_empty_categories() {
        let counts = count_by_category(vec![
            Some("original".to_string()),
            Some("original".to_string()),
            Some("  ".to_string()),
            None,
            Some("damaged".to_string()),
        ]);
        assert_eq!(
            counts,
            vec![
                CategoryCount {
                    value: "damaged".to_string(),
                    count: 1
                },
                CategoryCount {
                    value: "original".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn sums_heights_rounded_to_two_decimals() {
        let segments = vec![
            segment(SegmentType::Dome, Some(5.5), Some("original")),
            segment(SegmentType::Minaret, Some(3.25), None),
        ];
        let rollup = summarize_segments(&segments);
        assert_eq!(rollup.total_segments, 2);
        assert_eq!(rollup.total_height_m, 8.75);
        assert_eq!(rollup.total_volume_m3, 0.0);
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        let segments = vec![
            segment(SegmentType::Wall, Some(1.111), None),
            segment(SegmentType::Wall, Some(2.222), None),
        ];
        assert_eq!(summarize_segments(&segments).total_height_m, 3.33);
    }

    #[test]
    fn counts_segments_without_condition_only_by_type() {
        let segments = vec![segment(SegmentType::Dome, None, None)];
        let rollup = summarize_segments(&segments);
        assert_eq!(rollup.by_type.len(), 1);
        assert!(rollup.by_condition.is_empty());
    }
}
