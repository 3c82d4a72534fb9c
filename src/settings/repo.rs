use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Singleton system settings row; created lazily on the first toggle.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SystemSettings {
    pub id: Uuid,
    pub is_registration_open: bool,
}

pub async fn get(db: &PgPool) -> sqlx::Result<Option<SystemSettings>> {
    sqlx::query_as::<_, SystemSettings>(
        r#"SELECT id, is_registration_open FROM system_settings LIMIT 1"#,
    )
    .fetch_optional(db)
    .await
}

/// Registration is closed until an admin opens it for the first time.
pub async fn is_registration_open(db: &PgPool) -> sqlx::Result<bool> {
    Ok(get(db).await?.map(|s| s.is_registration_open).unwrap_or(false))
}

/// Flip the flag, creating the row (open) on first use. Returns the new value.
pub async fn toggle_registration_open(db: &PgPool) -> sqlx::Result<bool> {
    match get(db).await? {
        None => {
            let settings = sqlx::query_as::<_, SystemSettings>(
                r#"
                INSERT INTO system_settings (is_registration_open)
                VALUES (TRUE)
                RETURNING id, is_registration_open
                "#,
            )
            .fetch_one(db)
            .await?;
            Ok(settings.is_registration_open)
        }
        Some(settings) => {
            let updated = sqlx::query_scalar::<_, bool>(
                r#"
                UPDATE system_settings
                SET is_registration_open = NOT is_registration_open
                WHERE id = $1
                RETURNING is_registration_open
                "#,
            )
            .bind(settings.id)
            .fetch_one(db)
            .await?;
            Ok(updated)
        }
    }
}
