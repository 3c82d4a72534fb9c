use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "role_enum", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
    Invitee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "account_status_enum", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Pending,
    Approved,
    Rejected,
}

/// What a competitor does on the course. Riders pair with non-riders;
/// the dual types count on both sides of the partner search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "competitor_type_enum", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompetitorType {
    Rider,
    Skier,
    Snowboarder,
    SkierAndSnowboarder,
    RiderAndSkierSnowboarder,
}

impl CompetitorType {
    /// Whether a partner search for this target should return riders.
    pub fn wants_riders(self) -> bool {
        matches!(self, CompetitorType::Rider)
    }
}

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub bios: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub waiver_signed: bool,
    pub waiver_signed_at: Option<OffsetDateTime>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub competitor_type: CompetitorType,
    pub status: AccountStatus,
    pub role: Role,
    pub last_activity_date: Date,
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn competitor_type_uses_screaming_snake_case() {
        let json = serde_json::to_string(&CompetitorType::RiderAndSkierSnowboarder).unwrap();
        assert_eq!(json, r#""RIDER_AND_SKIER_SNOWBOARDER""#);

        let parsed: CompetitorType = serde_json::from_str(r#""SKIER_AND_SNOWBOARDER""#).unwrap();
        assert_eq!(parsed, CompetitorType::SkierAndSnowboarder);
    }

    #[test]
    fn only_the_pure_rider_target_wants_riders() {
        assert!(CompetitorType::Rider.wants_riders());
        assert!(!CompetitorType::Skier.wants_riders());
        assert!(!CompetitorType::Snowboarder.wants_riders());
        assert!(!CompetitorType::SkierAndSnowboarder.wants_riders());
        assert!(!CompetitorType::RiderAndSkierSnowboarder.wants_riders());
    }
}
