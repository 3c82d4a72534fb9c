use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/overview", get(handlers::overview))
        .route("/admin/users", get(handlers::list_users))
        .route("/admin/users/:id/role", patch(handlers::update_user_role))
        .route("/admin/users/:id", delete(handlers::delete_user))
        .route("/admin/carts", get(handlers::list_carts))
        .route("/admin/teams", get(handlers::list_teams))
        .route("/admin/teams/:id/status", patch(handlers::update_team_status))
        .route("/admin/teams/:id/number", patch(handlers::assign_team_number))
        .route("/admin/teams/:id", delete(handlers::delete_team))
        .route(
            "/admin/settings/toggle-registration",
            post(handlers::toggle_registration),
        )
        .route("/admin/waitlist", get(handlers::list_waitlist))
}
