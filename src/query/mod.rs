//! Query parameter normalization for paginated list endpoints.
//!
//! Turns raw `{limit, p, sort_by, sort_ascending}` query strings into a
//! validated [`PageQuery`]. Two asymmetries here are part of the API contract:
//! an unparseable `limit` or `p` is a hard 400, while an unrecognized
//! `sort_by` silently falls back to `created_at`, and `sort_ascending` is
//! ascending only for the exact string `"true"`.

use serde::Deserialize;

use crate::errors::AppError;

/// Default page size when `limit` is absent.
const DEFAULT_LIMIT: i64 = 10;

/// Raw, string-typed query parameters as they arrive on the wire.
///
/// Everything stays `Option<String>` so validation and error wording are
/// owned here rather than by the framework's deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub p: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_ascending: Option<String>,
}

/// Which entity a list query targets; selects the sort allow-list and the
/// column expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortContext {
    Articles,
    Comments,
}

/// Allow-listed sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Author,
    ArticleId,
    CreatedAt,
    Topic,
    Votes,
    CommentCount,
    CommentId,
}

impl SortKey {
    /// Parse a raw `sort_by` value against the context's allow-list. Anything
    /// outside it, including absence, falls back to `created_at` without
    /// erroring.
    fn parse(raw: Option<&str>, context: SortContext) -> SortKey {
        let candidate = match raw {
            Some("title") => SortKey::Title,
            Some("author") => SortKey::Author,
            Some("article_id") => SortKey::ArticleId,
            Some("created_at") => SortKey::CreatedAt,
            Some("topic") => SortKey::Topic,
            Some("votes") => SortKey::Votes,
            Some("comment_count") => SortKey::CommentCount,
            Some("comment_id") => SortKey::CommentId,
            _ => return SortKey::CreatedAt,
        };
        if candidate.allowed_in(context) {
            candidate
        } else {
            SortKey::CreatedAt
        }
    }

    fn allowed_in(self, context: SortContext) -> bool {
        match context {
            SortContext::Articles => !matches!(self, SortKey::CommentId),
            // Only keys that exist in the comments projection are sortable.
            SortContext::Comments => matches!(
                self,
                SortKey::CommentId
                    | SortKey::Author
                    | SortKey::ArticleId
                    | SortKey::CreatedAt
                    | SortKey::Votes
            ),
        }
    }

    /// SQL column expression for this key within the context's query shape.
    pub fn column(self, context: SortContext) -> &'static str {
        match context {
            SortContext::Articles => match self {
                SortKey::Title => "articles.title",
                SortKey::Author => "articles.username",
                SortKey::ArticleId => "articles.article_id",
                SortKey::CreatedAt => "articles.created_at",
                SortKey::Topic => "articles.topic",
                SortKey::Votes => "articles.votes",
                SortKey::CommentCount => "comment_count",
                SortKey::CommentId => "articles.article_id",
            },
            SortContext::Comments => match self {
                SortKey::CommentId => "comments.comment_id",
                SortKey::Author => "users.username",
                SortKey::ArticleId => "comments.article_id",
                SortKey::Votes => "comments.votes",
                _ => "comments.created_at",
            },
        }
    }
}

/// Sort direction; descending unless `sort_ascending` is exactly `"true"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A validated, typed page descriptor ready for the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub limit: i64,
    pub offset: i64,
    pub sort_by: SortKey,
    pub direction: SortDirection,
    pub context: SortContext,
}

impl PageQuery {
    /// The `ORDER BY` clause for this page, with the primary key appended as
    /// a tie-break so pagination stays deterministic across equal sort keys.
    pub fn order_clause(&self) -> String {
        let tie_break = match self.context {
            SortContext::Articles => "articles.article_id ASC",
            SortContext::Comments => "comments.comment_id ASC",
        };
        format!(
            "ORDER BY {} {}, {}",
            self.sort_by.column(self.context),
            self.direction.as_sql(),
            tie_break
        )
    }
}

impl ListParams {
    /// Normalize raw parameters into a [`PageQuery`]. Pure function of its
    /// input.
    pub fn normalize(&self, context: SortContext) -> Result<PageQuery, AppError> {
        let limit = parse_int_param(self.limit.as_deref(), DEFAULT_LIMIT)?;
        let page = parse_int_param(self.p.as_deref(), 1)?;

        let direction = match self.sort_ascending.as_deref() {
            Some("true") => SortDirection::Asc,
            _ => SortDirection::Desc,
        };

        Ok(PageQuery {
            limit,
            offset: limit * (page - 1),
            sort_by: SortKey::parse(self.sort_by.as_deref(), context),
            direction,
            context,
        })
    }
}

fn parse_int_param(raw: Option<&str>, default: i64) -> Result<i64, AppError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| AppError::InvalidInteger),
    }
}
