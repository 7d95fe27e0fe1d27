//! Topic API endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use super::{require_body, ApiResult};
use crate::models::{CreateArticleRequest, CreateTopicRequest};
use crate::query::{ListParams, SortContext};
use crate::AppState;

/// GET /api/topics - List all topics.
pub async fn list_topics(State(state): State<AppState>) -> ApiResult {
    let topics = state.repo.list_topics().await?;
    Ok(Json(json!({ "topics": topics })).into_response())
}

/// POST /api/topics - Create a new topic.
pub async fn create_topic(
    State(state): State<AppState>,
    payload: Result<Json<CreateTopicRequest>, JsonRejection>,
) -> ApiResult {
    let request = require_body(payload)?;
    let topic = state.repo.create_topic(&request).await?;
    Ok((StatusCode::CREATED, Json(json!({ "topic": topic }))).into_response())
}

/// GET /api/topics/:topic/articles - List articles for a topic.
pub async fn list_articles_by_topic(
    State(state): State<AppState>,
    Path(topic): Path<String>,
    Query(params): Query<ListParams>,
) -> ApiResult {
    let page = params.normalize(SortContext::Articles)?;
    let articles = state.repo.list_articles(&page, Some(&topic)).await?;
    Ok(Json(json!({ "articles": articles })).into_response())
}

/// POST /api/topics/:topic/articles - Post an article under a topic.
pub async fn create_article(
    State(state): State<AppState>,
    Path(topic): Path<String>,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> ApiResult {
    let request = require_body(payload)?;
    let article = state.repo.create_article(&topic, &request).await?;
    Ok((StatusCode::CREATED, Json(json!({ "article": article }))).into_response())
}
