use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "waitlist_status_enum", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WaitlistStatus {
    Pending,
    Notified,
    Expired,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: WaitlistStatus,
    pub created_at: OffsetDateTime,
}

pub async fn find_pending(db: &PgPool, user_id: Uuid) -> sqlx::Result<Option<WaitlistEntry>> {
    sqlx::query_as::<_, WaitlistEntry>(
        r#"
        SELECT id, user_id, status, created_at
        FROM waitlist_entries
        WHERE user_id = $1 AND status = 'PENDING'
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
}

pub async fn insert(db: &PgPool, user_id: Uuid) -> sqlx::Result<WaitlistEntry> {
    sqlx::query_as::<_, WaitlistEntry>(
        r#"
        INSERT INTO waitlist_entries (user_id, status)
        VALUES ($1, 'PENDING')
        RETURNING id, user_id, status, created_at
        "#,
    )
    .bind(user_id)
    .fetch_one(db)
    .await
}

/// Idempotent join: an existing PENDING entry is returned as-is rather than
/// duplicated. The bool reports whether a new entry was created.
pub async fn join(db: &PgPool, user_id: Uuid) -> sqlx::Result<(WaitlistEntry, bool)> {
    if let Some(existing) = find_pending(db, user_id).await? {
        return Ok((existing, false));
    }
    let entry = insert(db, user_id).await?;
    Ok((entry, true))
}
