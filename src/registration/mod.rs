use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

pub mod caps;
pub mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/registration/cart", post(handlers::submit_cart))
        .route("/registration/finalize", post(handlers::finalize))
        .route("/registration/reopen", post(handlers::reopen))
        .route("/registration/teams", get(handlers::my_registrations))
        .route("/registration/teams/:id", delete(handlers::scratch_team))
        .route("/registration/open", get(handlers::registration_open))
}
