//! User API endpoints. Read-only.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use super::ApiResult;
use crate::errors::AppError;
use crate::AppState;

/// GET /api/users - List all users.
pub async fn list_users(State(state): State<AppState>) -> ApiResult {
    let users = state.repo.list_users().await?;
    Ok(Json(json!({ "users": users })).into_response())
}

/// GET /api/users/:username - Get a single user.
pub async fn get_user(State(state): State<AppState>, Path(username): Path<String>) -> ApiResult {
    let user = state
        .repo
        .get_user(&username)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(json!({ "user": user })).into_response())
}
