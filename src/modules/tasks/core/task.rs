use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::{TaskId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub user_id: UserId,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

impl Task {
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    pub fn is_closed(&self) -> bool {
        self.end_time.is_some()
    }

    /// Elapsed time of a closed task, `None` while it is still open.
    pub fn duration(&self) -> Option<TimeDelta> {
        self.end_time.map(|end_time| end_time - self.start_time)
    }
}

/// Row handed to a store on creation; the start time is already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub user_id: UserId,
    pub name: String,
    pub start_time: DateTime<Utc>,
}

/// Name and raw elapsed seconds of a closed task, as returned by a duration query.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDuration {
    pub name: String,
    pub duration_seconds: f64,
}
