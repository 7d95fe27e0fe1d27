//! Comment model and request types.

use serde::{Deserialize, Serialize};

/// A comment on an article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: i64,
    pub votes: i64,
    pub created_at: String,
    pub author: String,
    pub body: String,
}

/// Request body for posting a comment on an article.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}
