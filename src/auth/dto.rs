use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::users::repo_types::{CompetitorType, Role, User};

/// Request body for competitor sign-up.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub bios: String,
    pub competitor_type: Option<CompetitorType>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for token refresh.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Response returned after login, register or refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: PublicUser,
}

/// Public part of a user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub competitor_type: CompetitorType,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            role: user.role,
            competitor_type: user.competitor_type,
        }
    }
}

/// Full own-profile view for /me. Never carries the credential hash.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub bios: String,
    pub competitor_type: CompetitorType,
    pub role: Role,
    pub waiver_signed: bool,
    pub waiver_signed_at: Option<OffsetDateTime>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub created_at: OffsetDateTime,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
            address: user.address,
            bios: user.bios,
            competitor_type: user.competitor_type,
            role: user.role,
            waiver_signed: user.waiver_signed,
            waiver_signed_at: user.waiver_signed_at,
            guardian_name: user.guardian_name,
            guardian_phone: user.guardian_phone,
            created_at: user.created_at,
        }
    }
}
