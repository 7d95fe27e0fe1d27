//! User model. Users are read-only through the API.

use serde::{Deserialize, Serialize};

/// A registered user. Created out-of-band (seeding), never via the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub avatar_url: Option<String>,
    pub name: Option<String>,
}
