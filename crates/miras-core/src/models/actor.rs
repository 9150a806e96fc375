use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// A person connected to the catalog: architect, patron or restorer.
/// Independently owned; assets reference actors through [`AssetActor`]
/// role links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: i64,
    pub identifier: Option<String>,
    pub name_tr: String,
    pub name_en: Option<String>,
    pub actor_type: String,
    pub bio_tr: Option<String>,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActorDraft {
    pub identifier: Option<String>,
    pub name_tr: String,
    pub name_en: Option<String>,
    pub actor_type: String,
    pub bio_tr: Option<String>,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

impl ActorDraft {
    pub fn validate(&self) -> Result<()> {
        if self.name_tr.trim().is_empty() {
            return Err(CatalogError::MissingField { field: "name_tr" });
        }
        if self.actor_type.trim().is_empty() {
            return Err(CatalogError::MissingField { field: "actor_type" });
        }
        Ok(())
    }
}

/// Role link between an asset and an actor. Unique per
/// (asset, actor, role) triple: the same actor may hold different roles on
/// one asset, never the same role twice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetActor {
    pub id: i64,
    pub asset_id: i64,
    pub actor_id: i64,
    pub role: String,
}
