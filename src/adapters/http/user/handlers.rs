//! HTTP handlers for profile endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::user::{
    GetUserProfileHandler, GetUserProfileQuery, RegisterUserProfileCommand,
    RegisterUserProfileHandler,
};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::UserRepository;

use super::dto::{RegisterUserRequest, UserProfileResponse};
use crate::adapters::http::error::ApiError;

#[derive(Clone)]
pub struct UserAppState {
    pub user_repository: Arc<dyn UserRepository>,
}

impl UserAppState {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    pub fn register_handler(&self) -> RegisterUserProfileHandler {
        RegisterUserProfileHandler::new(self.user_repository.clone())
    }

    pub fn get_handler(&self) -> GetUserProfileHandler {
        GetUserProfileHandler::new(self.user_repository.clone())
    }
}

/// POST /api/users
///
/// 201 when the profile was created, 200 when it already existed.
pub async fn register_user(
    State(state): State<UserAppState>,
    Json(request): Json<RegisterUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id: UserId = request
        .id
        .trim()
        .parse()
        .map_err(|_| DomainError::validation("id", "id must be a UUID"))?;

    let cmd = RegisterUserProfileCommand {
        user_id,
        email: request.email,
        username: request.username,
        full_name: request.full_name,
    };

    let result = state.register_handler().handle(cmd).await?;
    let status = if result.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(UserProfileResponse::from(result.profile))))
}

/// GET /api/users/:identifier
pub async fn get_user(
    State(state): State<UserAppState>,
    Path(identifier): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let profile = state
        .get_handler()
        .handle(GetUserProfileQuery { identifier })
        .await?;
    Ok(Json(UserProfileResponse::from(profile)))
}
