use thiserror::Error;

use crate::shared::core::primitives::UserId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("user {0} not found")]
    NotFound(UserId),

    #[error("user with passport {0} already exists")]
    AlreadyExists(String),

    #[error("invalid passport number {0:?}, expected series and number separated by a space")]
    InvalidPassport(String),

    #[error("{0}")]
    Validation(String),

    #[error("passport is unknown to the passport info service")]
    PassportNotFound,

    #[error("passport info service failed: {0}")]
    PassportService(String),

    #[error("{operation}: {reason}")]
    Persistence {
        operation: &'static str,
        reason: String,
    },
}

impl UserError {
    pub fn persistence(operation: &'static str, reason: impl ToString) -> Self {
        Self::Persistence {
            operation,
            reason: reason.to_string(),
        }
    }
}
