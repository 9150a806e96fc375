use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Free-text annotation on an asset. Immutable once created except by
/// deletion; listings return newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserNote {
    pub id: i64,
    pub asset_id: i64,
    pub user_identifier: Option<String>,
    pub note_text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoteDraft {
    pub asset_id: i64,
    pub user_identifier: Option<String>,
    pub note_text: String,
}

impl NoteDraft {
    pub fn validate(&self) -> Result<()> {
        if self.note_text.trim().is_empty() {
            return Err(CatalogError::MissingField { field: "note_text" });
        }
        Ok(())
    }
}
