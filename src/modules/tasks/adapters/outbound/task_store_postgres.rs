// Postgres implementation of the TaskStore port.
//
// The close transition is a single conditional UPDATE, so the database row lock decides which of
// several concurrent closes wins.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::modules::tasks::adapters::outbound::task_store::TaskStore;
use crate::modules::tasks::core::errors::TaskError;
use crate::modules::tasks::core::task::{NewTask, Task, TaskDuration};
use crate::modules::tasks::core::window::{TaskPredicate, TaskWindow};
use crate::shared::core::primitives::{TaskId, UserId};

#[derive(Debug, FromRow)]
struct TaskRow {
    id: i64,
    user_id: i64,
    name: String,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            start_time: row.start_time,
            end_time: row.end_time,
        }
    }
}

#[derive(Debug, FromRow)]
struct TaskDurationRow {
    name: String,
    duration: f64,
}

#[derive(Clone)]
pub struct PostgresTaskStore {
    pool: PgPool,
}

impl PostgresTaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Renders the window into a parameterized duration query. Bind order follows the predicate order.
pub fn durations_query(window: &TaskWindow) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(
        "SELECT name, EXTRACT(EPOCH FROM (end_time - start_time))::DOUBLE PRECISION AS duration \
         FROM tasks WHERE ",
    );
    let mut conditions = builder.separated(" AND ");
    for predicate in window.predicates() {
        match predicate {
            TaskPredicate::OwnedBy(user_id) => {
                conditions.push("user_id = ");
                conditions.push_bind_unseparated(user_id);
            }
            TaskPredicate::Closed => {
                conditions.push("start_time IS NOT NULL AND end_time IS NOT NULL");
            }
            TaskPredicate::StartedAtOrAfter(start_period) => {
                conditions.push("start_time >= ");
                conditions.push_bind_unseparated(start_period);
            }
            TaskPredicate::EndedAtOrBefore(end_period) => {
                conditions.push("end_time <= ");
                conditions.push_bind_unseparated(end_period);
            }
        }
    }
    builder.push(" ORDER BY duration DESC");
    builder
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn insert(&self, task: NewTask) -> Result<TaskId, TaskError> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO tasks (user_id, name, start_time) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(task.user_id)
        .bind(&task.name)
        .bind(task.start_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| TaskError::persistence("tasks.insert", error))
    }

    async fn find(&self, task_id: TaskId) -> Result<Option<Task>, TaskError> {
        let row = sqlx::query_as::<_, TaskRow>(
            "SELECT id, user_id, name, start_time, end_time FROM tasks WHERE id = $1",
        )
        .bind(task_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| TaskError::persistence("tasks.find", error))?;
        Ok(row.map(Task::from))
    }

    async fn mark_closed(
        &self,
        task_id: TaskId,
        user_id: UserId,
        end_time: DateTime<Utc>,
    ) -> Result<bool, TaskError> {
        let result = sqlx::query(
            "UPDATE tasks SET end_time = $1 WHERE id = $2 AND user_id = $3 AND end_time IS NULL",
        )
        .bind(end_time)
        .bind(task_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|error| TaskError::persistence("tasks.mark_closed", error))?;
        Ok(result.rows_affected() == 1)
    }

    async fn remove(&self, task_id: TaskId, user_id: UserId) -> Result<(), TaskError> {
        sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(task_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|error| TaskError::persistence("tasks.remove", error))?;
        Ok(())
    }

    async fn remove_all_for_user(&self, user_id: UserId) -> Result<u64, TaskError> {
        let result = sqlx::query("DELETE FROM tasks WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|error| TaskError::persistence("tasks.remove_all_for_user", error))?;
        Ok(result.rows_affected())
    }

    async fn durations(&self, window: &TaskWindow) -> Result<Vec<TaskDuration>, TaskError> {
        let mut query = durations_query(window);
        let rows = query
            .build_query_as::<TaskDurationRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|error| TaskError::persistence("tasks.durations", error))?;
        Ok(rows
            .into_iter()
            .map(|row| TaskDuration {
                name: row.name,
                duration_seconds: row.duration,
            })
            .collect())
    }
}
