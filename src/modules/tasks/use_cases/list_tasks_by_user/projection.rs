use serde::{Deserialize, Serialize};

use crate::modules::tasks::core::duration::{elapsed_from_seconds, format_duration};
use crate::modules::tasks::core::task::TaskDuration;

/// What callers see of a closed task: its name and a formatted elapsed time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDurationView {
    pub name: String,
    pub duration: String,
}

impl From<TaskDuration> for TaskDurationView {
    fn from(row: TaskDuration) -> Self {
        Self {
            name: row.name,
            duration: format_duration(elapsed_from_seconds(row.duration_seconds)),
        }
    }
}
