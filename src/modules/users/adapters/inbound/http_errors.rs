use axum::{http::StatusCode, response::Response};

use crate::modules::users::core::errors::UserError;
use crate::shared::infrastructure::http_response::error_response;

pub fn status_for(error: &UserError) -> StatusCode {
    match error {
        UserError::NotFound(_) | UserError::PassportNotFound => StatusCode::NOT_FOUND,
        UserError::AlreadyExists(_) => StatusCode::CONFLICT,
        UserError::InvalidPassport(_) | UserError::Validation(_) => StatusCode::BAD_REQUEST,
        UserError::PassportService(_) => StatusCode::BAD_GATEWAY,
        UserError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message safe to show a client. Storage failures are masked.
pub fn public_message(error: &UserError) -> String {
    match error {
        UserError::Persistence { .. } => "internal server error".to_string(),
        other => other.to_string(),
    }
}

pub fn user_error_response(error: &UserError) -> Response {
    error_response(status_for(error), public_message(error))
}
