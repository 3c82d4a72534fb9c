use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::users::repo_types::CompetitorType;

/// Partner-search result. Exposes contact basics only, never the hash.
#[derive(Debug, Serialize, FromRow)]
pub struct CompetitorSummary {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub competitor_type: CompetitorType,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    /// The competitor type the caller is looking for.
    pub target: CompetitorType,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub bios: String,
    pub competitor_type: CompetitorType,
}
