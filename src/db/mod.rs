//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for all application data. Foreign keys are
//! enforced per-connection; comment rows are removed by cascade when their
//! article is deleted.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // Run embedded migrations
    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS topics (
            slug TEXT PRIMARY KEY NOT NULL,
            description TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            username TEXT PRIMARY KEY NOT NULL,
            avatar_url TEXT,
            name TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS articles (
            article_id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            body TEXT NOT NULL,
            votes INTEGER NOT NULL DEFAULT 0,
            topic TEXT NOT NULL REFERENCES topics(slug),
            username TEXT NOT NULL REFERENCES users(username),
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            comment_id INTEGER PRIMARY KEY AUTOINCREMENT,
            body TEXT NOT NULL,
            votes INTEGER NOT NULL DEFAULT 0,
            article_id INTEGER NOT NULL REFERENCES articles(article_id) ON DELETE CASCADE,
            username TEXT NOT NULL REFERENCES users(username),
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Indexes for the join/filter paths used by the list queries
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_articles_topic ON articles(topic);
        CREATE INDEX IF NOT EXISTS idx_articles_created_at ON articles(created_at);
        CREATE INDEX IF NOT EXISTS idx_comments_article_id ON comments(article_id);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
