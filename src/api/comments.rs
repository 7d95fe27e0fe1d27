//! Comment API endpoints, nested under articles.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use super::{parse_id, require_body, require_votes_body, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateCommentRequest, IncVotesRequest};
use crate::query::{ListParams, SortContext};
use crate::AppState;

/// GET /api/articles/:article_id/comments - List comments for an article.
///
/// Returns an empty page both for a comment-less article and for an article
/// that does not exist; existence is deliberately not checked here.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    Query(params): Query<ListParams>,
) -> ApiResult {
    let article_id = parse_id(&article_id)?;
    let page = params.normalize(SortContext::Comments)?;
    let comments = state.repo.list_comments(article_id, &page).await?;
    Ok(Json(json!({ "comments": comments })).into_response())
}

/// POST /api/articles/:article_id/comments - Post a comment on an article.
pub async fn create_comment(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> ApiResult {
    let article_id = parse_id(&article_id)?;
    let request = require_body(payload)?;
    let comment = state.repo.create_comment(article_id, &request).await?;
    Ok((StatusCode::CREATED, Json(json!({ "comment": comment }))).into_response())
}

/// PATCH /api/articles/:article_id/comments/:comment_id - Apply a vote
/// increment to a comment. The comment is matched on its id alone.
pub async fn update_comment_votes(
    State(state): State<AppState>,
    Path((_article_id, comment_id)): Path<(String, String)>,
    payload: Result<Json<IncVotesRequest>, JsonRejection>,
) -> ApiResult {
    let comment_id = parse_id(&comment_id)?;
    let request = require_votes_body(payload)?;
    let comment = state
        .repo
        .increment_comment_votes(comment_id, request.inc_votes)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(json!({ "commentVotes": comment })).into_response())
}

/// DELETE /api/articles/:article_id/comments/:comment_id - Delete a comment.
pub async fn delete_comment(
    State(state): State<AppState>,
    Path((article_id, comment_id)): Path<(String, String)>,
) -> ApiResult {
    let article_id = parse_id(&article_id)?;
    let comment_id = parse_id(&comment_id)?;
    state.repo.delete_comment(article_id, comment_id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
