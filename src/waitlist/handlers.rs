use axum::{extract::State, Json};
use tracing::{info, instrument};

use crate::auth::extractors::AuthUser;
use crate::error::{ActionResponse, ApiResult};
use crate::state::AppState;
use crate::waitlist::repo;

/// POST /waitlist
#[instrument(skip(state))]
pub async fn join_waitlist(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<()> {
    let (_, created) = repo::join(&state.db, user_id).await?;
    let message = if created {
        info!(user_id = %user_id, "joined waitlist");
        "Joined waitlist"
    } else {
        "Already on waitlist"
    };
    Ok(Json(ActionResponse::message(message)))
}
