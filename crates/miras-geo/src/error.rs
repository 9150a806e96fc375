use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("invalid bbox {raw:?}: expected west,south,east,north as decimal degrees")]
    InvalidBbox { raw: String },

    #[error(
        "coordinates out of range: longitude {longitude} must be in [-180, 180] and latitude {latitude} in [-90, 90]"
    )]
    CoordinatesOutOfRange { longitude: f64, latitude: f64 },

    #[error("footprint must be a valid GeoJSON Polygon")]
    InvalidFootprint,
}
