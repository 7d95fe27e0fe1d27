//! Database repository for all read and mutation operations.
//!
//! Each public method is a single statement (plus, for creations, the
//! read-back of the inserted row). Sort column and direction are interpolated
//! from the validated [`PageQuery`] enums, never from raw input; limit and
//! offset are bound parameters.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    Article, Comment, CreateArticleRequest, CreateCommentRequest, CreateTopicRequest, Topic, User,
};
use crate::query::PageQuery;

const ARTICLE_LIST_COLUMNS: &str = "articles.username AS author, articles.title, \
     articles.article_id, articles.votes, articles.created_at, articles.topic, \
     COUNT(comments.comment_id) AS comment_count";

const COMMENT_COLUMNS: &str = "comments.comment_id, comments.votes, comments.created_at, \
     users.username AS author, comments.body";

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== TOPIC OPERATIONS ====================

    /// List all topics.
    pub async fn list_topics(&self) -> Result<Vec<Topic>, AppError> {
        let rows = sqlx::query("SELECT slug, description FROM topics ORDER BY slug")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(topic_from_row).collect())
    }

    /// Create a new topic. A duplicate slug surfaces as a unique violation;
    /// a missing slug as a not-null violation.
    pub async fn create_topic(&self, request: &CreateTopicRequest) -> Result<Topic, AppError> {
        sqlx::query("INSERT INTO topics (slug, description) VALUES (?, ?)")
            .bind(&request.slug)
            .bind(&request.description)
            .execute(&self.pool)
            .await?;

        let row = sqlx::query("SELECT slug, description FROM topics WHERE slug = ?")
            .bind(&request.slug)
            .fetch_one(&self.pool)
            .await?;

        Ok(topic_from_row(&row))
    }

    // ==================== ARTICLE OPERATIONS ====================

    /// List articles, optionally filtered by topic slug, with the derived
    /// comment count. The outer join keeps comment-less articles in the
    /// result with `comment_count = 0`.
    pub async fn list_articles(
        &self,
        page: &PageQuery,
        topic: Option<&str>,
    ) -> Result<Vec<Article>, AppError> {
        let filter = if topic.is_some() {
            "WHERE articles.topic = ? "
        } else {
            ""
        };
        let sql = format!(
            "SELECT {ARTICLE_LIST_COLUMNS} \
             FROM articles \
             LEFT JOIN comments ON comments.article_id = articles.article_id \
             {filter}\
             GROUP BY articles.article_id \
             {} LIMIT ? OFFSET ?",
            page.order_clause(),
        );

        let query = match topic {
            Some(slug) => sqlx::query(&sql).bind(slug),
            None => sqlx::query(&sql),
        };
        let rows = query
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(|row| article_from_row(row, false)).collect())
    }

    /// Get a single article by id, with body and comment count. `None` when
    /// the id does not exist.
    pub async fn get_article(&self, article_id: i64) -> Result<Option<Article>, AppError> {
        let row = sqlx::query(
            "SELECT users.username AS author, articles.title, articles.article_id, \
                    articles.votes, articles.created_at, articles.topic, articles.body, \
                    COUNT(comments.comment_id) AS comment_count \
             FROM articles \
             JOIN users ON users.username = articles.username \
             LEFT JOIN comments ON comments.article_id = articles.article_id \
             WHERE articles.article_id = ? \
             GROUP BY articles.article_id",
        )
        .bind(article_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(|row| article_from_row(row, true)))
    }

    /// Create a new article under a topic. The topic slug comes from the
    /// path; title, body and username from the request body.
    pub async fn create_article(
        &self,
        topic: &str,
        request: &CreateArticleRequest,
    ) -> Result<Article, AppError> {
        let now = Utc::now().to_rfc3339();
        let result = sqlx::query(
            "INSERT INTO articles (title, body, username, topic, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&request.title)
        .bind(&request.body)
        .bind(&request.username)
        .bind(topic)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let article = self
            .get_article(result.last_insert_rowid())
            .await?
            .ok_or(AppError::Internal)?;
        Ok(article)
    }

    /// Apply a signed vote increment to an article and return the updated
    /// row. `None` when the id does not exist.
    pub async fn increment_article_votes(
        &self,
        article_id: i64,
        inc_votes: i64,
    ) -> Result<Option<Article>, AppError> {
        let result = sqlx::query("UPDATE articles SET votes = votes + ? WHERE article_id = ?")
            .bind(inc_votes)
            .bind(article_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_article(article_id).await
    }

    /// Delete an article; its comments are removed by cascade.
    pub async fn delete_article(&self, article_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM articles WHERE article_id = ?")
            .bind(article_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    // ==================== COMMENT OPERATIONS ====================

    /// List comments for an article. An empty page is returned both for a
    /// comment-less article and for an id that does not exist; this endpoint
    /// does not check article existence.
    pub async fn list_comments(
        &self,
        article_id: i64,
        page: &PageQuery,
    ) -> Result<Vec<Comment>, AppError> {
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} \
             FROM comments \
             JOIN users ON users.username = comments.username \
             WHERE comments.article_id = ? \
             {} LIMIT ? OFFSET ?",
            page.order_clause(),
        );

        let rows = sqlx::query(&sql)
            .bind(article_id)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(comment_from_row).collect())
    }

    /// Create a comment on an article. The article id comes from the path.
    pub async fn create_comment(
        &self,
        article_id: i64,
        request: &CreateCommentRequest,
    ) -> Result<Comment, AppError> {
        let now = Utc::now().to_rfc3339();
        let result = sqlx::query(
            "INSERT INTO comments (body, username, article_id, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&request.body)
        .bind(&request.username)
        .bind(article_id)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let comment = self
            .get_comment(result.last_insert_rowid())
            .await?
            .ok_or(AppError::Internal)?;
        Ok(comment)
    }

    /// Apply a signed vote increment to a comment and return the updated
    /// row. Matches on comment id alone. `None` when the id does not exist.
    pub async fn increment_comment_votes(
        &self,
        comment_id: i64,
        inc_votes: i64,
    ) -> Result<Option<Comment>, AppError> {
        let result = sqlx::query("UPDATE comments SET votes = votes + ? WHERE comment_id = ?")
            .bind(inc_votes)
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_comment(comment_id).await
    }

    /// Delete a comment, matched on both its id and its parent article id.
    pub async fn delete_comment(&self, article_id: i64, comment_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE article_id = ? AND comment_id = ?")
            .bind(article_id)
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn get_comment(&self, comment_id: i64) -> Result<Option<Comment>, AppError> {
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} \
             FROM comments \
             JOIN users ON users.username = comments.username \
             WHERE comments.comment_id = ?"
        );
        let row = sqlx::query(&sql)
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(comment_from_row))
    }

    // ==================== USER OPERATIONS ====================

    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query("SELECT username, avatar_url, name FROM users ORDER BY username")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(user_from_row).collect())
    }

    /// Get a user by username.
    pub async fn get_user(&self, username: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query("SELECT username, avatar_url, name FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    /// Insert a user. Users are not creatable through the API; this exists
    /// for seeding and tests.
    pub async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        sqlx::query("INSERT INTO users (username, avatar_url, name) VALUES (?, ?, ?)")
            .bind(&user.username)
            .bind(&user.avatar_url)
            .bind(&user.name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

// Helper functions for row conversion

fn topic_from_row(row: &sqlx::sqlite::SqliteRow) -> Topic {
    Topic {
        slug: row.get("slug"),
        description: row.get("description"),
    }
}

fn article_from_row(row: &sqlx::sqlite::SqliteRow, with_body: bool) -> Article {
    Article {
        author: row.get("author"),
        title: row.get("title"),
        article_id: row.get("article_id"),
        votes: row.get("votes"),
        created_at: row.get("created_at"),
        topic: row.get("topic"),
        body: if with_body { row.get("body") } else { None },
        comment_count: row.get("comment_count"),
    }
}

fn comment_from_row(row: &sqlx::sqlite::SqliteRow) -> Comment {
    Comment {
        comment_id: row.get("comment_id"),
        votes: row.get("votes"),
        created_at: row.get("created_at"),
        author: row.get("author"),
        body: row.get("body"),
    }
}

fn user_from_row(row: &sqlx::sqlite::SqliteRow) -> User {
    User {
        username: row.get("username"),
        avatar_url: row.get("avatar_url"),
        name: row.get("name"),
    }
}
