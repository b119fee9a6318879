//! HTTP-facing error type.
//!
//! Every variant maps to exactly one status and is rendered as the shared
//! HTML error page. Internal detail never reaches the client; logging
//! happens where the error is raised.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::error_page;
use crate::application::services::ResolveError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method {0} is not allowed")]
    MethodNotAllowed(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Resolve(ResolveError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Resolve(ResolveError::Store { .. })
            | AppError::Resolve(ResolveError::InvalidTarget { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error_page::error_response(self.status_code())
    }
}
