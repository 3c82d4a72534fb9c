use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Lifecycle of a competitor's registration cart.
///
/// PENDING while the competitor is still editing, SUBMITTED once sent for
/// approval; APPROVED/REJECTED are reserved for admin decisions on the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "cart_status_enum", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartStatus {
    Pending,
    Submitted,
    Approved,
    Rejected,
}

/// Review status of an individual team. Teams are created SUBMITTED while
/// their cart starts PENDING; only non-REJECTED teams count toward run caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "team_status_enum", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamStatus {
    Pending,
    Submitted,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "division_enum", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Division {
    Novice,
    Sport,
    Open,
    Snowboard,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RegistrationCart {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: CartStatus,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Team {
    pub id: Uuid,
    pub cart_id: Uuid,
    pub rider_id: Uuid,
    pub skier_id: Uuid,
    pub horse_name: String,
    pub horse_owner: String,
    pub division: Option<Division>,
    pub team_number: Option<i32>,
    pub status: TeamStatus,
    pub created_at: OffsetDateTime,
}

/// Team joined with its owning cart's user, for ownership checks.
#[derive(Debug, Clone, FromRow)]
pub struct TeamWithCreator {
    pub id: Uuid,
    pub rider_id: Uuid,
    pub skier_id: Uuid,
    pub creator_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_use_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&CartStatus::Submitted).unwrap(),
            r#""SUBMITTED""#
        );
        assert_eq!(
            serde_json::to_string(&Division::Snowboard).unwrap(),
            r#""SNOWBOARD""#
        );
        let status: TeamStatus = serde_json::from_str(r#""REJECTED""#).unwrap();
        assert_eq!(status, TeamStatus::Rejected);
    }
}
