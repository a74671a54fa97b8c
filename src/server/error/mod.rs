//! Error types for the roster server.
//!
//! Only a handful of failures are translated into client-facing responses: duplicate names
//! (409) and rejected input (400). Every other error, storage errors included, crosses the
//! service and controller layers unchanged and is answered with a generic 500 after being
//! logged.

pub mod config;
pub mod resource;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, resource::ResourceError},
};

pub use resource::map_unique_violation;

/// Main error type for the roster server.
///
/// Aggregates domain errors and external library errors so services and controllers can
/// propagate everything with `?`. The `IntoResponse` implementation decides which of them
/// the HTTP caller gets to see.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Duplicate natural key or rejected request payload.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Database error (query failures, missing rows, constraint violations other than
    /// duplicate names).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Socket error while binding or serving.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Payload failed validation
/// - 409 Conflict - A row with the same name already exists
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ResourceError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

/// Builds a JSON error response whose body repeats the status code.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            status_code: status.as_u16(),
            message: message.into(),
        }),
    )
        .into_response()
}
