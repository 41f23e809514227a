// Port through which the task use cases reach persisted tasks.
//
// Adapters implement the primitive row operations. The lifecycle rules (default start time, name
// validation, close-once classification, delete-requires-existence) are provided methods so every
// backend enforces them identically.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::tasks::core::errors::TaskError;
use crate::modules::tasks::core::task::{NewTask, Task, TaskDuration};
use crate::modules::tasks::core::window::TaskWindow;
use crate::shared::core::primitives::{TaskId, UserId};

#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn insert(&self, task: NewTask) -> Result<TaskId, TaskError>;

    async fn find(&self, task_id: TaskId) -> Result<Option<Task>, TaskError>;

    /// Sets `end_time` only if the task exists, belongs to `user_id` and is still open, as a single
    /// atomic step. Returns whether a row was transitioned.
    async fn mark_closed(
        &self,
        task_id: TaskId,
        user_id: UserId,
        end_time: DateTime<Utc>,
    ) -> Result<bool, TaskError>;

    /// Deletes the row scoped to its owner. A mismatched owner affects nothing.
    async fn remove(&self, task_id: TaskId, user_id: UserId) -> Result<(), TaskError>;

    async fn remove_all_for_user(&self, user_id: UserId) -> Result<u64, TaskError>;

    /// Closed tasks matching the window, longest first.
    async fn durations(&self, window: &TaskWindow) -> Result<Vec<TaskDuration>, TaskError>;

    async fn create(
        &self,
        user_id: UserId,
        name: String,
        start_time: Option<DateTime<Utc>>,
    ) -> Result<TaskId, TaskError> {
        let now = Utc::now();
        if name.trim().is_empty() {
            return Err(TaskError::InvalidName);
        }
        let start_time = start_time.unwrap_or(now);
        if start_time > now {
            return Err(TaskError::StartTimeInFuture);
        }
        self.insert(NewTask {
            user_id,
            name,
            start_time,
        })
        .await
    }

    async fn close(&self, task_id: TaskId, user_id: UserId) -> Result<(), TaskError> {
        if self.mark_closed(task_id, user_id, Utc::now()).await? {
            return Ok(());
        }
        match self.find(task_id).await? {
            Some(task) if task.is_closed() => Err(TaskError::AlreadyEnded(task_id)),
            _ => Err(TaskError::BadRequest(task_id)),
        }
    }

    async fn delete(&self, task_id: TaskId, user_id: UserId) -> Result<(), TaskError> {
        self.task_by_id(task_id).await?;
        self.remove(task_id, user_id).await
    }

    async fn task_by_id(&self, task_id: TaskId) -> Result<Task, TaskError> {
        self.find(task_id).await?.ok_or(TaskError::NotFound(task_id))
    }
}
