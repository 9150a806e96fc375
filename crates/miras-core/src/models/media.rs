use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// An image, video or panorama attached to an asset. Several media rows may
/// carry `is_primary` for the same asset; the flag is plain data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    pub id: i64,
    pub asset_id: i64,
    pub media_type: String,
    pub url: String,
    pub caption: Option<String>,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaDraft {
    pub asset_id: i64,
    #[serde(default = "default_media_type")]
    pub media_type: String,
    pub url: String,
    pub caption: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

fn default_media_type() -> String {
    "image".to_string()
}

impl MediaDraft {
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(CatalogError::MissingField { field: "url" });
        }
        Ok(())
    }
}
