use chrono::{DateTime, Utc};

use crate::shared::core::primitives::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTask {
    pub user_id: UserId,
    pub name: String,
    /// Defaults to the moment the store handles the command.
    pub start_time: Option<DateTime<Utc>>,
}
