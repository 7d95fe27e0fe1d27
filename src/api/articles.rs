//! Article API endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use super::{parse_id, require_votes_body, ApiResult};
use crate::errors::AppError;
use crate::models::IncVotesRequest;
use crate::query::{ListParams, SortContext};
use crate::AppState;

/// GET /api/articles - List all articles.
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult {
    let page = params.normalize(SortContext::Articles)?;
    let articles = state.repo.list_articles(&page, None).await?;
    Ok(Json(json!({ "articles": articles })).into_response())
}

/// GET /api/articles/:article_id - Get a single article, body included.
pub async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> ApiResult {
    let article_id = parse_id(&article_id)?;
    let article = state
        .repo
        .get_article(article_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(json!({ "article": article })).into_response())
}

/// PATCH /api/articles/:article_id - Apply a vote increment.
pub async fn update_article_votes(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    payload: Result<Json<IncVotesRequest>, JsonRejection>,
) -> ApiResult {
    let article_id = parse_id(&article_id)?;
    let request = require_votes_body(payload)?;
    let article = state
        .repo
        .increment_article_votes(article_id, request.inc_votes)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(json!({ "article": article })).into_response())
}

/// DELETE /api/articles/:article_id - Delete an article and its comments.
pub async fn delete_article(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> ApiResult {
    let article_id = parse_id(&article_id)?;
    state.repo.delete_article(article_id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
