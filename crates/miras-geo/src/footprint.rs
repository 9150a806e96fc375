use geo::Polygon;

use crate::error::GeoError;

/// Validate a GeoJSON geometry as a polygon footprint.
///
/// Footprints are stored in their GeoJSON form; validation converts through
/// `geo` so non-polygon geometries and malformed rings are rejected before
/// anything is written.
pub fn validate_footprint(geometry: &geojson::Geometry) -> Result<(), GeoError> {
    Polygon::<f64>::try_from(geometry.clone())
        .map(|_| ())
        .map_err(|_| GeoError::InvalidFootprint)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(value: serde_json::Value) -> geojson::Geometry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn accepts_polygon() {
        let geom = geometry(serde_json::json!({
            "type": "Polygon",
            "coordinates": [[
                [28.96, 41.01], [28.97, 41.01], [28.97, 41.02], [28.96, 41.02], [28.96, 41.01]
            ]]
        }));
        assert!(validate_footprint(&geom).is_ok());
    }

    #[test]
    fn rejects_point() {
        let geom = geometry(serde_json::json!({
            "type": "Point",
            "coordinates": [28.96, 41.01]
        }));
        assert_eq!(validate_footprint(&geom), Err(GeoError::InvalidFootprint));
    }
}
