use axum::{http::StatusCode, response::Response};

use crate::modules::tasks::core::errors::TaskError;
use crate::shared::infrastructure::http_response::error_response;

pub fn status_for(error: &TaskError) -> StatusCode {
    match error {
        TaskError::AlreadyEnded(_) => StatusCode::ALREADY_REPORTED,
        TaskError::NotFound(_) => StatusCode::NOT_FOUND,
        TaskError::InvalidName | TaskError::StartTimeInFuture => StatusCode::BAD_REQUEST,
        TaskError::BadRequest(_) | TaskError::Persistence { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Message safe to show a client. Storage failures are masked.
pub fn public_message(error: &TaskError) -> String {
    match error {
        TaskError::Persistence { .. } => "internal server error".to_string(),
        other => other.to_string(),
    }
}

pub fn task_error_response(error: &TaskError) -> Response {
    error_response(status_for(error), public_message(error))
}
