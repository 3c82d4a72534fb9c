use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::registration::repo_types::{CartStatus, Division, TeamStatus};
use crate::users::repo_types::{AccountStatus, CompetitorType, Role};
use crate::waitlist::repo::WaitlistStatus;

/// Dashboard headline numbers.
#[derive(Debug, Serialize, FromRow)]
pub struct OverviewCounts {
    pub users: i64,
    pub teams: i64,
    pub waitlist: i64,
}

/// Registration carts joined with their owner, for the back-office table.
#[derive(Debug, Serialize, FromRow)]
pub struct CartAdminRow {
    pub id: Uuid,
    pub status: CartStatus,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Teams joined with both members, for the division and review tables.
#[derive(Debug, Serialize, FromRow)]
pub struct TeamAdminRow {
    pub id: Uuid,
    pub team_number: Option<i32>,
    pub rider_id: Uuid,
    pub rider_name: String,
    pub rider_bio: String,
    pub skier_id: Uuid,
    pub skier_name: String,
    pub skier_bio: String,
    pub horse_name: String,
    pub horse_owner: String,
    pub division: Option<Division>,
    pub status: TeamStatus,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize, FromRow)]
pub struct UserAdminRow {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub competitor_type: CompetitorType,
    pub status: AccountStatus,
    pub role: Role,
    pub waiver_signed: bool,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize, FromRow)]
pub struct WaitlistAdminRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub status: WaitlistStatus,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTeamStatusRequest {
    pub status: TeamStatus,
}

#[derive(Debug, Deserialize)]
pub struct AssignTeamNumberRequest {
    pub team_number: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct CartFilter {
    pub status: Option<CartStatus>,
}

#[derive(Debug, Deserialize)]
pub struct TeamFilter {
    pub status: Option<TeamStatus>,
    pub division: Option<Division>,
}

#[derive(Debug, Serialize)]
pub struct RegistrationToggleResponse {
    pub is_registration_open: bool,
}
