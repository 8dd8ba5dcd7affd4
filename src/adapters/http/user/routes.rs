//! Axum router configuration for profile endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_user, register_user, UserAppState};

/// # Routes
/// - `POST /api/users` - Mirror an auth user into the profile table
/// - `GET /api/users/:identifier` - Look up by UUID or email
pub fn user_router() -> Router<UserAppState> {
    Router::new()
        .route("/api/users", post(register_user))
        .route("/api/users/:identifier", get(get_user))
}
