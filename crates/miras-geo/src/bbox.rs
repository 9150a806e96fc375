use geo::{coord, Rect};
use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// Axis-aligned bounding rectangle in EPSG:4326, parsed from the
/// `west,south,east,north` literal shared by the API and WFS paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self { west, south, east, north }
    }

    /// Parse the comma-separated literal. Exactly four numeric tokens are
    /// required; anything else is an error, never an absent filter.
    pub fn parse(raw: &str) -> Result<Self, GeoError> {
        let invalid = || GeoError::InvalidBbox { raw: raw.to_string() };

        let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(invalid());
        }

        let mut values = [0.0_f64; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| invalid())?;
        }

        let [west, south, east, north] = values;
        Ok(Self { west, south, east, north })
    }

    /// Inclusive containment test against the box edges.
    ///
    /// A degenerate box (west > east or south > north) contains nothing;
    /// there is no antimeridian wrapping.
    pub fn contains(&self, longitude: f64, latitude: f64) -> bool {
        if self.west > self.east || self.south > self.north {
            return false;
        }
        let rect = self.to_rect();
        longitude >= rect.min().x
            && longitude <= rect.max().x
            && latitude >= rect.min().y
            && latitude <= rect.max().y
    }

    /// The box as a `geo` rectangle on the storage CRS.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.west, y: self.south },
            coord! { x: self.east, y: self.north },
        )
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn parses_plain_literal() {
        let bbox = BoundingBox::parse("28.9,41.0,29.0,41.1").unwrap();
        assert_eq!(bbox, BoundingBox::new(28.9, 41.0, 29.0, 41.1));
    }

    #[test]
    fn parses_with_whitespace() {
        let bbox = BoundingBox::parse(" 28.9, 41.0 ,29.0, 41.1 ").unwrap();
        assert_eq!(bbox.west, 28.9);
        assert_eq!(bbox.north, 41.1);
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert!(BoundingBox::parse("28.9,41.0,29.0").is_err());
        assert!(BoundingBox::parse("28.9,41.0,29.0,41.1,0").is_err());
        assert!(BoundingBox::parse("").is_err());
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        let err = BoundingBox::parse("28.9,foo,29.0,41.1").unwrap_err();
        assert!(matches!(err, GeoError::InvalidBbox { .. }));
        assert!(err.to_string().contains("west,south,east,north"));
    }

    #[test]
    fn contains_is_inclusive_on_edges() {
        let bbox = BoundingBox::new(28.9, 41.0, 29.0, 41.1);
        assert!(bbox.contains(28.9, 41.0));
        assert!(bbox.contains(29.0, 41.1));
        assert!(bbox.contains(28.95, 41.05));
    }

    #[test]
    fn excludes_points_outside() {
        let bbox = BoundingBox::new(28.9, 41.0, 29.0, 41.1);
        assert!(!bbox.contains(28.8999, 41.05));
        assert!(!bbox.contains(28.95, 41.1001));
    }

    #[test]
    fn inverted_box_contains_nothing() {
        let bbox = BoundingBox::new(29.0, 41.0, 28.9, 41.1);
        assert!(!bbox.contains(28.95, 41.05));
        assert!(!bbox.contains(29.0, 41.0));
    }

    proptest! {
        #[test]
        fn parse_roundtrips_formatted_literals(
            west in -180.0_f64..180.0,
            south in -90.0_f64..90.0,
            east in -180.0_f64..180.0,
            north in -90.0_f64..90.0,
        ) {
            let raw = format!("{west},{south},{east},{north}");
            let bbox = BoundingBox::parse(&raw).unwrap();
            prop_assert_eq!(bbox, BoundingBox::new(west, south, east, north));
        }

        #[test]
        fn contained_points_satisfy_inclusive_bounds(
            west in -180.0_f64..179.0,
            south in -90.0_f64..89.0,
            width in 0.0_f64..1.0,
            height in 0.0_f64..1.0,
            fx in 0.0_f64..=1.0,
            fy in 0.0_f64..=1.0,
        ) {
            let bbox = BoundingBox::new(west, south, west + width, south + height);
            let lon = west + width * fx;
            let lat = south + height * fy;
            prop_assert!(bbox.contains(lon, lat));
            prop_assert!(lon >= bbox.west && lon <= bbox.east);
            prop_assert!(lat >= bbox.south && lat <= bbox.north);
        }
    }
}
