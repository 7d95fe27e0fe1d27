//! News board backend
//!
//! A REST API exposing topics, articles, comments, and users over SQLite,
//! with pagination and sorting on the list endpoints.

mod api;
mod config;
mod db;
mod errors;
mod models;
mod query;

use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;
use errors::AppError;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting news board backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Create application state
    let state = AppState { repo };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        .route("/", get(api::get_endpoints))
        // Topics
        .route("/topics", get(api::list_topics).post(api::create_topic))
        .route(
            "/topics/{topic}/articles",
            get(api::list_articles_by_topic).post(api::create_article),
        )
        // Articles
        .route("/articles", get(api::list_articles))
        .route(
            "/articles/{article_id}",
            get(api::get_article)
                .patch(api::update_article_votes)
                .delete(api::delete_article),
        )
        // Comments
        .route(
            "/articles/{article_id}/comments",
            get(api::list_comments).post(api::create_comment),
        )
        .route(
            "/articles/{article_id}/comments/{comment_id}",
            patch(api::update_comment_votes).delete(api::delete_comment),
        )
        // Users
        .route("/users", get(api::list_users))
        .route("/users/{username}", get(api::get_user))
        .method_not_allowed_fallback(handle_405);

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .fallback(handle_404)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Unmatched route.
async fn handle_404() -> AppError {
    AppError::NotFound
}

/// Matched route, unregistered verb.
async fn handle_405() -> AppError {
    AppError::MethodNotAllowed
}
