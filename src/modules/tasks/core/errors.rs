use thiserror::Error;

use crate::shared::core::primitives::TaskId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("task {0} not found")]
    NotFound(TaskId),

    #[error("task {0} already finished")]
    AlreadyEnded(TaskId),

    #[error("task {0} could not be finished")]
    BadRequest(TaskId),

    #[error("task name must not be empty")]
    InvalidName,

    #[error("task start time must not be in the future")]
    StartTimeInFuture,

    #[error("{operation}: {reason}")]
    Persistence {
        operation: &'static str,
        reason: String,
    },
}

impl TaskError {
    pub fn persistence(operation: &'static str, reason: impl ToString) -> Self {
        Self::Persistence {
            operation,
            reason: reason.to_string(),
        }
    }
}
