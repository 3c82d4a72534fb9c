use axum::{routing::post, Router};

use crate::state::AppState;

pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(handlers::join_waitlist))
}
