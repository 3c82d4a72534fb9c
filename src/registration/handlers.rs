use axum::{
    extract::{Path, State},
    Json,
};
use tracing::instrument;
use uuid::Uuid;

use crate::auth::extractors::AuthUser;
use crate::error::{ActionResponse, ApiResult};
use crate::registration::dto::{
    CartActionRequest, RegistrationOpenResponse, SubmitCartRequest, TeamRegistrationRow,
};
use crate::registration::services;
use crate::settings;
use crate::state::AppState;

/// POST /registration/cart
#[instrument(skip(state, payload))]
pub async fn submit_cart(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Json(payload): Json<SubmitCartRequest>,
) -> ApiResult<()> {
    services::submit_registration_cart(&state.db, actor, &payload).await?;
    Ok(Json(ActionResponse::message(
        "Registration submitted successfully",
    )))
}

/// POST /registration/finalize
#[instrument(skip(state))]
pub async fn finalize(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Json(payload): Json<CartActionRequest>,
) -> ApiResult<()> {
    services::finalize_registration(&state.db, actor, payload.user_id).await?;
    Ok(Json(ActionResponse::message(
        "Registration submitted for approval",
    )))
}

/// POST /registration/reopen
#[instrument(skip(state))]
pub async fn reopen(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Json(payload): Json<CartActionRequest>,
) -> ApiResult<()> {
    services::reopen_registration(&state.db, actor, payload.user_id).await?;
    Ok(Json(ActionResponse::message(
        "Registration reopened for edits",
    )))
}

/// GET /registration/teams
#[instrument(skip(state))]
pub async fn my_registrations(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
) -> ApiResult<Vec<TeamRegistrationRow>> {
    let rows = services::get_user_team_registrations(&state.db, actor).await?;
    Ok(Json(ActionResponse::data(rows)))
}

/// DELETE /registration/teams/:id
#[instrument(skip(state))]
pub async fn scratch_team(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(team_id): Path<Uuid>,
) -> ApiResult<()> {
    services::scratch_team(&state.db, actor, team_id).await?;
    Ok(Json(ActionResponse::message("Team scratched successfully")))
}

/// GET /registration/open — public; the client decides what to show.
#[instrument(skip(state))]
pub async fn registration_open(
    State(state): State<AppState>,
) -> ApiResult<RegistrationOpenResponse> {
    let is_open = settings::repo::is_registration_open(&state.db).await?;
    Ok(Json(ActionResponse::data(RegistrationOpenResponse {
        is_registration_open: is_open,
    })))
}
