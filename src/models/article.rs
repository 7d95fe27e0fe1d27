//! Article model and request types.

use serde::{Deserialize, Serialize};

/// An article as returned by the API.
///
/// `comment_count` is derived at query time and is `0`, never null, for
/// articles without comments. `body` is present on single-article fetches and
/// creations but omitted from listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub author: String,
    pub title: String,
    pub article_id: i64,
    pub votes: i64,
    pub created_at: String,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub comment_count: i64,
}

/// Request body for posting an article under a topic.
///
/// Optional fields let missing columns fail in the database as not-null
/// violations, matching the error contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Request body for incrementing votes on an article or comment.
#[derive(Debug, Clone, Deserialize)]
pub struct IncVotesRequest {
    pub inc_votes: i64,
}
