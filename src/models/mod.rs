//! Data models for the news board API.
//!
//! Field names match the JSON wire format exactly; the `username` column is
//! rendered as `author` by the queries that build these types.

mod article;
mod comment;
mod topic;
mod user;

pub use article::*;
pub use comment::*;
pub use topic::*;
pub use user::*;
