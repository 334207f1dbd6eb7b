use std::any::Any;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Body sent with every 500. Nothing about the underlying failure leaks.
pub const INTERNAL_SERVER_ERROR_BODY: &str = "Internal Server Error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// An id that cannot be an `i32` can never match a row, so it is a 404
/// like any other absent id.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Unmatched path id: {}", rejection.body_text());
        Self::NotFound
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::BadRequest(ref reason) => {
                tracing::debug!("Rejected request: {}", reason);
                StatusCode::BAD_REQUEST.into_response()
            }
            Self::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                internal_server_error()
            }
            Self::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                internal_server_error()
            }
            Self::Other(ref e) => {
                tracing::error!("Unexpected error: {:#}", e);
                internal_server_error()
            }
        }
    }
}

pub fn internal_server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(INTERNAL_SERVER_ERROR_BODY),
    )
        .into_response()
}

/// Turns a handler panic into the same generic 500 as any other failure.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Handler panicked: {}", detail);

    internal_server_error()
}

pub type Result<T> = std::result::Result<T, AppError>;
