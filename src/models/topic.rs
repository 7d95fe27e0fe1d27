//! Topic model and request types.

use serde::{Deserialize, Serialize};

/// A topic grouping articles, keyed by its slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub slug: String,
    pub description: Option<String>,
}

/// Request body for creating a new topic.
///
/// Fields stay optional so that a missing `slug` reaches the database and
/// surfaces as a not-null violation rather than a deserialization failure.
/// Unknown keys are rejected at the extractor boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTopicRequest {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
