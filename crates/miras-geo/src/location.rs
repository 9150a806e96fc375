use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// A point location in EPSG:4326. Every heritage asset has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
}

impl Location {
    /// Build a location, rejecting coordinates outside valid WGS 84 ranges.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, GeoError> {
        if !(-180.0..=180.0).contains(&longitude) || !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::CoordinatesOutOfRange { longitude, latitude });
        }
        Ok(Self { longitude, latitude })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_coordinates() {
        let loc = Location::new(28.9802, 41.0086).unwrap();
        assert_eq!(loc.longitude, 28.9802);
        assert_eq!(loc.latitude, 41.0086);
    }

    #[test]
    fn accepts_range_edges() {
        assert!(Location::new(-180.0, -90.0).is_ok());
        assert!(Location::new(180.0, 90.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        let err = Location::new(181.0, 0.0).unwrap_err();
        assert!(matches!(err, GeoError::CoordinatesOutOfRange { .. }));
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        assert!(Location::new(0.0, -90.5).is_err());
    }
}
