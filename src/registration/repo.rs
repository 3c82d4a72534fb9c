use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::registration::dto::{AdditionalInfo, TeamEntry, TeamRegistrationRow};
use crate::registration::repo_types::{CartStatus, RegistrationCart, Team, TeamWithCreator};

/// Drop every PENDING cart the user owns; their teams cascade. A user has
/// at most one open draft at a time.
pub async fn delete_pending_carts(conn: &mut PgConnection, user_id: Uuid) -> sqlx::Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM registration_carts
        WHERE user_id = $1 AND status = 'PENDING'
        "#,
    )
    .bind(user_id)
    .execute(conn)
    .await?;
    Ok(result.rows_affected())
}

/// Non-rejected historical runs for a horse, matched case-insensitively on
/// trimmed name + owner.
pub async fn count_horse_runs(
    conn: &mut PgConnection,
    name_norm: &str,
    owner_norm: &str,
) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM teams
        WHERE status <> 'REJECTED'
          AND lower(btrim(horse_name)) = $1
          AND lower(btrim(horse_owner)) = $2
        "#,
    )
    .bind(name_norm)
    .bind(owner_norm)
    .fetch_one(conn)
    .await
}

/// Non-rejected historical runs where the user is rider or skier.
pub async fn count_competitor_runs(conn: &mut PgConnection, user_id: Uuid) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM teams
        WHERE status <> 'REJECTED'
          AND (rider_id = $1 OR skier_id = $1)
        "#,
    )
    .bind(user_id)
    .fetch_one(conn)
    .await
}

pub async fn lookup_full_name(conn: &mut PgConnection, user_id: Uuid) -> sqlx::Result<Option<String>> {
    sqlx::query_scalar::<_, String>(r#"SELECT full_name FROM users WHERE id = $1"#)
        .bind(user_id)
        .fetch_optional(conn)
        .await
}

/// Waiver + guardian details onto the user row. Guardian fields are kept
/// when not provided; the waiver timestamp is stamped only when agreed.
pub async fn apply_additional_info(
    conn: &mut PgConnection,
    user_id: Uuid,
    info: &AdditionalInfo,
) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        UPDATE users
        SET waiver_signed = $2,
            waiver_signed_at = CASE WHEN $2 THEN now() ELSE waiver_signed_at END,
            guardian_name = COALESCE($3, guardian_name),
            guardian_phone = COALESCE($4, guardian_phone)
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(info.waiver_agreed)
    .bind(info.guardian_name.as_deref())
    .bind(info.guardian_phone.as_deref())
    .execute(conn)
    .await?;
    Ok(())
}

pub async fn insert_cart(conn: &mut PgConnection, user_id: Uuid) -> sqlx::Result<RegistrationCart> {
    sqlx::query_as::<_, RegistrationCart>(
        r#"
        INSERT INTO registration_carts (user_id, status)
        VALUES ($1, 'PENDING')
        RETURNING id, user_id, status, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .fetch_one(conn)
    .await
}

/// Materialize one batch entry as a team. Teams start SUBMITTED while the
/// cart stays PENDING.
pub async fn insert_team(
    conn: &mut PgConnection,
    cart_id: Uuid,
    entry: &TeamEntry,
) -> sqlx::Result<Team> {
    sqlx::query_as::<_, Team>(
        r#"
        INSERT INTO teams (cart_id, rider_id, skier_id, horse_name, horse_owner, division, status)
        VALUES ($1, $2, $3, $4, $5, $6, 'SUBMITTED')
        RETURNING id, cart_id, rider_id, skier_id, horse_name, horse_owner,
                  division, team_number, status, created_at
        "#,
    )
    .bind(cart_id)
    .bind(entry.rider_id)
    .bind(entry.skier_id)
    .bind(entry.horse_name.as_deref().unwrap_or(""))
    .bind(entry.horse_owner.as_deref().unwrap_or(""))
    .bind(entry.division)
    .fetch_one(conn)
    .await
}

/// Move the user's cart from one status to another, touching updated_at.
/// Returns the number of carts moved (0 or 1).
pub async fn transition_cart(
    db: &PgPool,
    user_id: Uuid,
    from: CartStatus,
    to: CartStatus,
) -> sqlx::Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE registration_carts
        SET status = $3, updated_at = now()
        WHERE user_id = $1 AND status = $2
        "#,
    )
    .bind(user_id)
    .bind(from)
    .bind(to)
    .execute(db)
    .await?;
    Ok(result.rows_affected())
}

pub async fn find_team_with_creator(
    db: &PgPool,
    team_id: Uuid,
) -> sqlx::Result<Option<TeamWithCreator>> {
    sqlx::query_as::<_, TeamWithCreator>(
        r#"
        SELECT t.id, t.rider_id, t.skier_id, c.user_id AS creator_id
        FROM teams t
        JOIN registration_carts c ON c.id = t.cart_id
        WHERE t.id = $1
        "#,
    )
    .bind(team_id)
    .fetch_optional(db)
    .await
}

pub async fn delete_team(db: &PgPool, team_id: Uuid) -> sqlx::Result<u64> {
    let result = sqlx::query(r#"DELETE FROM teams WHERE id = $1"#)
        .bind(team_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}

/// Every team the user is part of, newest first, with member and creator
/// names and the owning cart's status.
pub async fn list_for_user(db: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<TeamRegistrationRow>> {
    sqlx::query_as::<_, TeamRegistrationRow>(
        r#"
        SELECT t.id AS team_id,
               t.team_number,
               t.division,
               t.horse_name,
               t.horse_owner,
               t.status,
               t.created_at,
               t.rider_id,
               rider.full_name AS rider_name,
               t.skier_id,
               skier.full_name AS skier_name,
               c.user_id AS creator_id,
               creator.full_name AS creator_name,
               c.status AS cart_status
        FROM teams t
        JOIN registration_carts c ON c.id = t.cart_id
        JOIN users rider ON rider.id = t.rider_id
        JOIN users skier ON skier.id = t.skier_id
        JOIN users creator ON creator.id = c.user_id
        WHERE t.rider_id = $1 OR t.skier_id = $1
        ORDER BY t.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}
