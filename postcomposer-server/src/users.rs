//! `/api/users` handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use libpostcomposer::types::{NewUser, User, UserSummary};
use serde::Serialize;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserSummary>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// `GET /api/users`
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UsersResponse>, ApiError> {
    let users = state
        .users()
        .list_users()
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to fetch users"))?;

    Ok(Json(UsersResponse { users }))
}

/// `POST /api/users`
///
/// Only `email` is required; `name`, `username` and `clerkId` are optional.
/// A body that cannot be read as a user is a server-side failure like any
/// other, so the parser's message stays in the logs.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected user payload");
        ApiError::Internal("Failed to create user")
    })?;

    let user = state
        .users()
        .create_user(input)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to create user"))?;

    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}
