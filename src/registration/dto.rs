use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::registration::repo_types::{CartStatus, Division, TeamStatus};

/// One team in a submitted batch.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntry {
    pub rider_id: Uuid,
    pub skier_id: Uuid,
    #[serde(default)]
    pub horse_name: Option<String>,
    #[serde(default)]
    pub horse_owner: Option<String>,
    #[serde(default)]
    pub division: Option<Division>,
}

/// Waiver + guardian details collected alongside the batch.
#[derive(Debug, Deserialize)]
pub struct AdditionalInfo {
    pub waiver_agreed: bool,
    #[serde(default)]
    pub guardian_name: Option<String>,
    #[serde(default)]
    pub guardian_phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitCartRequest {
    pub user_id: Uuid,
    pub teams: Vec<TeamEntry>,
    #[serde(default)]
    pub additional_info: Option<AdditionalInfo>,
}

/// Body for finalize/reopen; the target user must be the caller.
#[derive(Debug, Deserialize)]
pub struct CartActionRequest {
    pub user_id: Uuid,
}

/// One row of a competitor's registration activity: the team, both members,
/// the cart owner (creator) and the cart status.
#[derive(Debug, Serialize, FromRow)]
pub struct TeamRegistrationRow {
    pub team_id: Uuid,
    pub team_number: Option<i32>,
    pub division: Option<Division>,
    pub horse_name: String,
    pub horse_owner: String,
    pub status: TeamStatus,
    pub created_at: OffsetDateTime,
    pub rider_id: Uuid,
    pub rider_name: String,
    pub skier_id: Uuid,
    pub skier_name: String,
    pub creator_id: Uuid,
    pub creator_name: String,
    pub cart_status: CartStatus,
}

#[derive(Debug, Serialize)]
pub struct RegistrationOpenResponse {
    pub is_registration_open: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_request_accepts_minimal_entries() {
        let body = r#"{
            "user_id": "7f2c1b6a-9d0e-4f3a-8b5c-2e1d0a9f8b7c",
            "teams": [
                { "rider_id": "7f2c1b6a-9d0e-4f3a-8b5c-2e1d0a9f8b7c",
                  "skier_id": "0b1a2c3d-4e5f-6071-8293-a4b5c6d7e8f9" }
            ]
        }"#;
        let req: SubmitCartRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.teams.len(), 1);
        assert!(req.teams[0].horse_name.is_none());
        assert!(req.teams[0].division.is_none());
        assert!(req.additional_info.is_none());
    }

    #[test]
    fn submit_request_accepts_full_entries() {
        let body = r#"{
            "user_id": "7f2c1b6a-9d0e-4f3a-8b5c-2e1d0a9f8b7c",
            "teams": [
                { "rider_id": "7f2c1b6a-9d0e-4f3a-8b5c-2e1d0a9f8b7c",
                  "skier_id": "0b1a2c3d-4e5f-6071-8293-a4b5c6d7e8f9",
                  "horse_name": "Star",
                  "horse_owner": "Jane Doe",
                  "division": "OPEN" }
            ],
            "additional_info": { "waiver_agreed": true, "guardian_name": "A Parent" }
        }"#;
        let req: SubmitCartRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.teams[0].division, Some(Division::Open));
        assert!(req.additional_info.unwrap().waiver_agreed);
    }
}
