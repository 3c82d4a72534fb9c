use sqlx::PgPool;
use uuid::Uuid;

use crate::admin::dto::{CartAdminRow, OverviewCounts, TeamAdminRow, UserAdminRow, WaitlistAdminRow};
use crate::registration::repo_types::{CartStatus, Division, TeamStatus};

pub async fn overview_counts(db: &PgPool) -> sqlx::Result<OverviewCounts> {
    sqlx::query_as::<_, OverviewCounts>(
        r#"
        SELECT (SELECT COUNT(*) FROM users)            AS users,
               (SELECT COUNT(*) FROM teams)            AS teams,
               (SELECT COUNT(*) FROM waitlist_entries) AS waitlist
        "#,
    )
    .fetch_one(db)
    .await
}

pub async fn list_users(db: &PgPool) -> sqlx::Result<Vec<UserAdminRow>> {
    sqlx::query_as::<_, UserAdminRow>(
        r#"
        SELECT id, full_name, email, phone, competitor_type, status, role,
               waiver_signed, created_at
        FROM users
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(db)
    .await
}

/// Carts with their owner; left join so carts survive odd data.
pub async fn list_carts(db: &PgPool, status: Option<CartStatus>) -> sqlx::Result<Vec<CartAdminRow>> {
    sqlx::query_as::<_, CartAdminRow>(
        r#"
        SELECT c.id, c.status, u.full_name AS user_name, u.email AS user_email,
               c.created_at, c.updated_at
        FROM registration_carts c
        LEFT JOIN users u ON u.id = c.user_id
        WHERE ($1::cart_status_enum IS NULL OR c.status = $1)
        ORDER BY c.created_at DESC
        "#,
    )
    .bind(status)
    .fetch_all(db)
    .await
}

pub async fn list_teams(
    db: &PgPool,
    status: Option<TeamStatus>,
    division: Option<Division>,
) -> sqlx::Result<Vec<TeamAdminRow>> {
    sqlx::query_as::<_, TeamAdminRow>(
        r#"
        SELECT t.id, t.team_number,
               t.rider_id, rider.full_name AS rider_name, rider.bios AS rider_bio,
               t.skier_id, skier.full_name AS skier_name, skier.bios AS skier_bio,
               t.horse_name, t.horse_owner, t.division, t.status, t.created_at
        FROM teams t
        JOIN users rider ON rider.id = t.rider_id
        JOIN users skier ON skier.id = t.skier_id
        WHERE ($1::team_status_enum IS NULL OR t.status = $1)
          AND ($2::division_enum IS NULL OR t.division = $2)
        ORDER BY t.team_number NULLS LAST, t.created_at
        "#,
    )
    .bind(status)
    .bind(division)
    .fetch_all(db)
    .await
}

pub async fn list_waitlist(db: &PgPool) -> sqlx::Result<Vec<WaitlistAdminRow>> {
    sqlx::query_as::<_, WaitlistAdminRow>(
        r#"
        SELECT w.id, w.user_id, u.full_name AS user_name, u.email AS user_email,
               w.status, w.created_at
        FROM waitlist_entries w
        LEFT JOIN users u ON u.id = w.user_id
        ORDER BY w.created_at
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn update_team_status(
    db: &PgPool,
    team_id: Uuid,
    status: TeamStatus,
) -> sqlx::Result<u64> {
    let result = sqlx::query(r#"UPDATE teams SET status = $2 WHERE id = $1"#)
        .bind(team_id)
        .bind(status)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}

/// Soft removal: the row stays with status REJECTED. Rejected rows do not
/// count toward the horse/competitor run caps.
pub async fn soft_delete_team(db: &PgPool, team_id: Uuid) -> sqlx::Result<u64> {
    update_team_status(db, team_id, TeamStatus::Rejected).await
}

pub async fn assign_team_number(
    db: &PgPool,
    team_id: Uuid,
    team_number: i32,
) -> sqlx::Result<u64> {
    let result = sqlx::query(r#"UPDATE teams SET team_number = $2 WHERE id = $1"#)
        .bind(team_id)
        .bind(team_number)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}
