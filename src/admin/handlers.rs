use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::admin::dto::{
    AssignTeamNumberRequest, CartAdminRow, CartFilter, OverviewCounts, RegistrationToggleResponse,
    TeamAdminRow, TeamFilter, UpdateRoleRequest, UpdateTeamStatusRequest, UserAdminRow,
    WaitlistAdminRow,
};
use crate::admin::repo;
use crate::auth::extractors::AdminUser;
use crate::error::{ActionResponse, ApiResult, AppError};
use crate::settings;
use crate::state::AppState;
use crate::users::repo_types::User;

/// GET /admin/overview
#[instrument(skip(state))]
pub async fn overview(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> ApiResult<OverviewCounts> {
    let counts = repo::overview_counts(&state.db).await?;
    Ok(Json(ActionResponse::data(counts)))
}

/// GET /admin/users
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> ApiResult<Vec<UserAdminRow>> {
    let users = repo::list_users(&state.db).await?;
    Ok(Json(ActionResponse::data(users)))
}

/// PATCH /admin/users/:id/role
#[instrument(skip(state))]
pub async fn update_user_role(
    State(state): State<AppState>,
    AdminUser(admin_id): AdminUser,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<UpdateRoleRequest>,
) -> ApiResult<()> {
    let updated = User::update_role(&state.db, user_id, payload.role).await?;
    if updated == 0 {
        return Err(AppError::NotFound("User"));
    }
    info!(admin = %admin_id, user_id = %user_id, role = ?payload.role, "user role updated");
    Ok(Json(ActionResponse::message("User role updated")))
}

/// DELETE /admin/users/:id — hard delete; carts, teams and waitlist entries
/// cascade with the row.
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(admin_id): AdminUser,
    Path(user_id): Path<Uuid>,
) -> ApiResult<()> {
    let deleted = User::delete(&state.db, user_id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("User"));
    }
    info!(admin = %admin_id, user_id = %user_id, "user deleted");
    Ok(Json(ActionResponse::message("User deleted")))
}

/// GET /admin/carts?status=
#[instrument(skip(state))]
pub async fn list_carts(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Query(filter): Query<CartFilter>,
) -> ApiResult<Vec<CartAdminRow>> {
    let carts = repo::list_carts(&state.db, filter.status).await?;
    Ok(Json(ActionResponse::data(carts)))
}

/// GET /admin/teams?status=&division=
#[instrument(skip(state))]
pub async fn list_teams(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Query(filter): Query<TeamFilter>,
) -> ApiResult<Vec<TeamAdminRow>> {
    let teams = repo::list_teams(&state.db, filter.status, filter.division).await?;
    Ok(Json(ActionResponse::data(teams)))
}

/// PATCH /admin/teams/:id/status
#[instrument(skip(state))]
pub async fn update_team_status(
    State(state): State<AppState>,
    AdminUser(admin_id): AdminUser,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<UpdateTeamStatusRequest>,
) -> ApiResult<()> {
    let updated = repo::update_team_status(&state.db, team_id, payload.status).await?;
    if updated == 0 {
        return Err(AppError::NotFound("Team"));
    }
    info!(admin = %admin_id, team_id = %team_id, status = ?payload.status, "team status updated");
    Ok(Json(ActionResponse::message("Team status updated")))
}

/// DELETE /admin/teams/:id — soft removal; distinct from the competitor
/// "scratch", which hard-deletes.
#[instrument(skip(state))]
pub async fn delete_team(
    State(state): State<AppState>,
    AdminUser(admin_id): AdminUser,
    Path(team_id): Path<Uuid>,
) -> ApiResult<()> {
    let updated = repo::soft_delete_team(&state.db, team_id).await?;
    if updated == 0 {
        return Err(AppError::NotFound("Team"));
    }
    info!(admin = %admin_id, team_id = %team_id, "team rejected");
    Ok(Json(ActionResponse::message("Team removed")))
}

/// PATCH /admin/teams/:id/number
#[instrument(skip(state))]
pub async fn assign_team_number(
    State(state): State<AppState>,
    AdminUser(admin_id): AdminUser,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<AssignTeamNumberRequest>,
) -> ApiResult<()> {
    let updated = repo::assign_team_number(&state.db, team_id, payload.team_number).await?;
    if updated == 0 {
        return Err(AppError::NotFound("Team"));
    }
    info!(admin = %admin_id, team_id = %team_id, number = payload.team_number, "team number assigned");
    Ok(Json(ActionResponse::message("Team number assigned")))
}

/// POST /admin/settings/toggle-registration
#[instrument(skip(state))]
pub async fn toggle_registration(
    State(state): State<AppState>,
    AdminUser(admin_id): AdminUser,
) -> ApiResult<RegistrationToggleResponse> {
    let is_open = settings::repo::toggle_registration_open(&state.db).await?;
    info!(admin = %admin_id, is_open, "registration toggled");
    Ok(Json(ActionResponse::data(RegistrationToggleResponse {
        is_registration_open: is_open,
    })))
}

/// GET /admin/waitlist
#[instrument(skip(state))]
pub async fn list_waitlist(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> ApiResult<Vec<WaitlistAdminRow>> {
    let entries = repo::list_waitlist(&state.db).await?;
    Ok(Json(ActionResponse::data(entries)))
}
