use sqlx::PgPool;
use uuid::Uuid;

use crate::users::dto::CompetitorSummary;
use crate::users::repo_types::{CompetitorType, Role, User};

const USER_COLUMNS: &str = r#"
    id, full_name, email, phone, address, bios, password_hash,
    waiver_signed, waiver_signed_at, guardian_name, guardian_phone,
    competitor_type, status, role, last_activity_date, created_at
"#;

pub struct NewUser<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub bios: &'a str,
    pub password_hash: &'a str,
    pub competitor_type: CompetitorType,
}

impl User {
    /// Find a user by (already lowercased) email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE lower(email) = $1
            "#
        ))
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(db: &PgPool, new: NewUser<'_>) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (full_name, email, phone, bios, password_hash, competitor_type)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(new.full_name)
        .bind(new.email)
        .bind(new.phone)
        .bind(new.bios)
        .bind(new.password_hash)
        .bind(new.competitor_type)
        .fetch_one(db)
        .await
    }

    /// Self-service account settings update.
    pub async fn update_account(
        db: &PgPool,
        id: Uuid,
        full_name: &str,
        email: &str,
        phone: &str,
        address: &str,
        bios: &str,
        competitor_type: CompetitorType,
    ) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET full_name = $2, email = $3, phone = $4, address = $5,
                bios = $6, competitor_type = $7
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(full_name)
        .bind(email)
        .bind(phone)
        .bind(address)
        .bind(bios)
        .bind(competitor_type)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn find_role(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Role>> {
        sqlx::query_scalar::<_, Role>(r#"SELECT role FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn update_role(db: &PgPool, id: Uuid, role: Role) -> sqlx::Result<u64> {
        let result = sqlx::query(r#"UPDATE users SET role = $2 WHERE id = $1"#)
            .bind(id)
            .bind(role)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }

    /// Hard delete; carts, teams and waitlist entries cascade.
    pub async fn delete(db: &PgPool, id: Uuid) -> sqlx::Result<u64> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn touch_last_activity(db: &PgPool, id: Uuid) -> sqlx::Result<()> {
        sqlx::query(r#"UPDATE users SET last_activity_date = CURRENT_DATE WHERE id = $1"#)
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}

/// Name search for the partner picker. A rider target matches riders and the
/// dual rider type; anything else matches every non-pure-rider. The caller is
/// always excluded.
pub async fn search_competitors(
    db: &PgPool,
    query: &str,
    target: CompetitorType,
    self_id: Uuid,
) -> sqlx::Result<Vec<CompetitorSummary>> {
    let pattern = format!("%{}%", query);

    let sql = if target.wants_riders() {
        r#"
        SELECT id, full_name, email, competitor_type
        FROM users
        WHERE competitor_type IN ('RIDER', 'RIDER_AND_SKIER_SNOWBOARDER')
          AND id <> $1
          AND full_name ILIKE $2
        LIMIT 10
        "#
    } else {
        r#"
        SELECT id, full_name, email, competitor_type
        FROM users
        WHERE competitor_type <> 'RIDER'
          AND id <> $1
          AND full_name ILIKE $2
        LIMIT 10
        "#
    };

    sqlx::query_as::<_, CompetitorSummary>(sql)
        .bind(self_id)
        .bind(pattern)
        .fetch_all(db)
        .await
}
