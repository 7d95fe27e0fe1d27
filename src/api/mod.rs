//! REST API module.
//!
//! One handler file per resource. Handlers normalize their inputs, call the
//! repository, and translate empty results into `NotFound`; everything else
//! propagates to the error taxonomy via `?`.

mod articles;
mod comments;
mod endpoints;
mod topics;
mod users;

pub use articles::*;
pub use comments::*;
pub use endpoints::*;
pub use topics::*;
pub use users::*;

use axum::extract::rejection::JsonRejection;
use axum::response::Response;
use axum::Json;

use crate::errors::AppError;

/// Handler result; errors render as `{"msg": ...}` with their fixed status.
pub type ApiResult = Result<Response, AppError>;

/// Parse a path segment that must be an integer id. Non-integer ids get the
/// same wording as unparseable `limit`/`p` query params.
pub(crate) fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::InvalidInteger)
}

/// Unwrap a create-style JSON body. Malformed or unrecognized bodies map to
/// the generic invalid-input error.
pub(crate) fn require_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(body)| body).map_err(|_| AppError::InvalidInput)
}

/// Unwrap an `inc_votes` JSON body. A missing or non-integer `inc_votes`
/// maps to the integer-syntax error.
pub(crate) fn require_votes_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|_| AppError::InvalidInteger)
}
