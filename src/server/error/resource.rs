use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};

use crate::server::error::{error_response, Error};

/// Failures the caller can correct by changing the request.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ResourceError {
    /// A row with the same natural key already exists.
    #[error("A {label} with name \"{name}\" already exists")]
    Conflict { label: &'static str, name: String },
    /// The request payload was rejected before reaching storage.
    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        };

        tracing::debug!("Rejected request: {}", self);

        error_response(status, self.to_string())
    }
}

/// Translates a unique constraint violation into [`ResourceError::Conflict`].
///
/// Applied to the insert of a row whose `name` is its natural key. Any other database error
/// is returned as [`Error::DbErr`] exactly as it was received.
///
/// # Arguments
/// - `err` - Error returned by the insert
/// - `label` - Human readable entity label used in the conflict message
/// - `name` - The name that was being inserted
pub fn map_unique_violation(err: DbErr, label: &'static str, name: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ResourceError::Conflict {
            label,
            name: name.to_string(),
        }
        .into(),
        _ => Error::DbErr(err),
    }
}
