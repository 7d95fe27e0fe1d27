//! Endpoint directory served at the API root.

use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use super::ApiResult;

/// GET /api - Static map of the available endpoints.
pub async fn get_endpoints() -> ApiResult {
    let endpoints = json!({
        "/api": "GET",
        "/api/topics": "GET & POST",
        "/api/topics/:topic/articles": "GET & POST",
        "/api/articles": "GET",
        "/api/articles/:article_id": "GET & PATCH & DELETE",
        "/api/articles/:article_id/comments": "GET & POST",
        "/api/articles/:article_id/comments/:comment_id": "PATCH & DELETE",
        "/api/users": "GET",
        "/api/users/:username": "GET",
    });

    Ok(Json(json!({ "endpoints": endpoints })).into_response())
}
