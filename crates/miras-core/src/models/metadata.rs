use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Dataset-level descriptive record (ISO 19115 basic profile). The schema
/// does not enforce a single row; readers take the lowest id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub id: i64,

    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub purpose: Option<String>,
    pub language: String,

    // Spatial extent
    pub west_bound: Option<f64>,
    pub east_bound: Option<f64>,
    pub south_bound: Option<f64>,
    pub north_bound: Option<f64>,
    pub coordinate_system: String,

    // Temporal extent
    pub temporal_begin: Option<NaiveDate>,
    pub temporal_end: Option<NaiveDate>,

    // Data quality
    pub lineage: Option<String>,
    pub spatial_resolution: Option<String>,

    // Distribution
    pub distribution_format: String,
    pub access_url: Option<String>,

    // Contact
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_organization: Option<String>,

    // Constraints
    pub use_constraints: Option<String>,
    pub license: Option<String>,

    pub metadata_date: DateTime<Utc>,
    pub metadata_standard: String,
}
