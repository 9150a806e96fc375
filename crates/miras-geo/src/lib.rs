//! Spatial primitives for the miras catalog.
//!
//! Everything here works in EPSG:4326 (WGS 84). The catalog stores point
//! locations and optional polygon footprints; filtering is axis-aligned
//! bounding boxes only.

pub mod bbox;
pub mod error;
pub mod footprint;
pub mod location;

pub use bbox::BoundingBox;
pub use error::GeoError;
pub use location::Location;

/// EPSG code of the storage coordinate reference system.
pub const STORAGE_EPSG: u32 = 4326;

/// `srsName` advertised and assumed by default on all output paths.
pub const DEFAULT_SRS_NAME: &str = "EPSG:4326";
