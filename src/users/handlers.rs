use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{info, instrument, warn};

use crate::auth::extractors::AuthUser;
use crate::auth::handlers::is_valid_email;
use crate::error::{ActionResponse, ApiResult, AppError};
use crate::state::AppState;
use crate::users::dto::{CompetitorSummary, SearchParams, UpdateAccountRequest};
use crate::users::repo;
use crate::users::repo_types::User;

/// GET /competitors/search?q=&target=
#[instrument(skip(state))]
pub async fn search_competitors(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(params): Query<SearchParams>,
) -> ApiResult<Vec<CompetitorSummary>> {
    let query = params.q.trim();
    if query.chars().count() < 2 {
        return Ok(Json(ActionResponse::data(Vec::new())));
    }

    let results = repo::search_competitors(&state.db, query, params.target, user_id).await?;
    Ok(Json(ActionResponse::data(results)))
}

/// PUT /account
#[instrument(skip(state, payload))]
pub async fn update_account(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(mut payload): Json<UpdateAccountRequest>,
) -> ApiResult<()> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(AppError::validation("Invalid email"));
    }
    if payload.full_name.trim().chars().count() < 3 {
        return Err(AppError::validation("Full name too short"));
    }

    let updated = User::update_account(
        &state.db,
        user_id,
        payload.full_name.trim(),
        &payload.email,
        payload.phone.trim(),
        payload.address.trim(),
        &payload.bios,
        payload.competitor_type,
    )
    .await
    .map_err(|e| {
        if AppError::is_unique_violation(&e) {
            AppError::Conflict("User with this email already exists".into())
        } else {
            AppError::Database(e)
        }
    })?;

    if updated == 0 {
        return Err(AppError::NotFound("User"));
    }

    info!(user_id = %user_id, "account details updated");
    Ok(Json(ActionResponse::message("Account details updated")))
}
