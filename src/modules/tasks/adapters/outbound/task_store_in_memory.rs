// In memory implementation of the TaskStore port.
//
// Purpose
// - Support use case tests and local development without a database.
//
// Responsibilities
// - Hand out increasing task identifiers.
// - Perform the close transition under a single write lock so concurrent closes cannot both win.

use crate::modules::tasks::adapters::outbound::task_store::TaskStore;
use crate::modules::tasks::core::errors::TaskError;
use crate::modules::tasks::core::task::{NewTask, Task, TaskDuration};
use crate::modules::tasks::core::window::TaskWindow;
use crate::shared::core::primitives::{TaskId, UserId};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
#[cfg(test)]
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTaskStore {
    rows: RwLock<BTreeMap<TaskId, Task>>,
    last_id: RwLock<TaskId>,
    is_offline: bool,
    #[cfg(test)]
    close_delay: Option<Duration>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Holds the write lock for `delay` while closing, to widen race windows.
    #[cfg(test)]
    pub fn set_close_delay(&mut self, delay: Duration) {
        self.close_delay = Some(delay);
    }

    fn ensure_online(&self, operation: &'static str) -> Result<(), TaskError> {
        if self.is_offline {
            return Err(TaskError::persistence(operation, "Task store offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, task: NewTask) -> Result<TaskId, TaskError> {
        self.ensure_online("tasks.insert")?;
        let mut last_id = self.last_id.write().await;
        *last_id += 1;
        let id = *last_id;
        self.rows.write().await.insert(
            id,
            Task {
                id,
                user_id: task.user_id,
                name: task.name,
                start_time: task.start_time,
                end_time: None,
            },
        );
        Ok(id)
    }

    async fn find(&self, task_id: TaskId) -> Result<Option<Task>, TaskError> {
        self.ensure_online("tasks.find")?;
        Ok(self.rows.read().await.get(&task_id).cloned())
    }

    async fn mark_closed(
        &self,
        task_id: TaskId,
        user_id: UserId,
        end_time: DateTime<Utc>,
    ) -> Result<bool, TaskError> {
        self.ensure_online("tasks.mark_closed")?;
        let mut rows = self.rows.write().await;
        #[cfg(test)]
        if let Some(delay) = self.close_delay {
            tokio::time::sleep(delay).await;
        }
        match rows.get_mut(&task_id) {
            Some(task) if task.user_id == user_id && task.is_open() => {
                task.end_time = Some(end_time);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn remove(&self, task_id: TaskId, user_id: UserId) -> Result<(), TaskError> {
        self.ensure_online("tasks.remove")?;
        let mut rows = self.rows.write().await;
        if rows.get(&task_id).is_some_and(|task| task.user_id == user_id) {
            rows.remove(&task_id);
        }
        Ok(())
    }

    async fn remove_all_for_user(&self, user_id: UserId) -> Result<u64, TaskError> {
        self.ensure_online("tasks.remove_all_for_user")?;
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|_, task| task.user_id != user_id);
        Ok((before - rows.len()) as u64)
    }

    async fn durations(&self, window: &TaskWindow) -> Result<Vec<TaskDuration>, TaskError> {
        self.ensure_online("tasks.durations")?;
        let rows = self.rows.read().await;
        let mut matching: Vec<(&Task, i64)> = rows
            .values()
            .filter(|task| window.matches(task))
            .filter_map(|task| {
                task.duration()
                    .map(|duration| (task, duration.num_milliseconds()))
            })
            .collect();
        matching.sort_by(|(left, left_ms), (right, right_ms)| {
            right_ms.cmp(left_ms).then(left.id.cmp(&right.id))
        });
        Ok(matching
            .into_iter()
            .map(|(task, milliseconds)| TaskDuration {
                name: task.name.clone(),
                duration_seconds: milliseconds as f64 / 1000.0,
            })
            .collect())
    }
}

#[cfg(test)]
mod task_store_in_memory_tests {
    use super::*;
    use chrono::TimeDelta;
    use rstest::{fixture, rstest};
    use std::sync::Arc;
    use tokio::join;

    #[fixture]
    fn store() -> InMemoryTaskStore {
        InMemoryTaskStore::new()
    }

    async fn closed_task(
        store: &InMemoryTaskStore,
        user_id: UserId,
        name: &str,
        start_time: DateTime<Utc>,
        elapsed: TimeDelta,
    ) -> TaskId {
        let id = store
            .insert(NewTask {
                user_id,
                name: name.into(),
                start_time,
            })
            .await
            .expect("insert failed");
        assert!(
            store
                .mark_closed(id, user_id, start_time + elapsed)
                .await
                .expect("mark_closed failed")
        );
        id
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_create_an_open_task_starting_now(store: InMemoryTaskStore) {
        let before = Utc::now();
        let id = store
            .create(1, "write spec".into(), None)
            .await
            .expect("create failed");
        let task = store.task_by_id(id).await.expect("task_by_id failed");
        assert!(task.is_open());
        assert!(task.start_time >= before && task.start_time <= Utc::now());
        assert_eq!(task.name, "write spec");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_an_explicit_start_time(store: InMemoryTaskStore) {
        let start_time = Utc::now() - TimeDelta::hours(3);
        let id = store
            .create(1, "standup".into(), Some(start_time))
            .await
            .unwrap();
        assert_eq!(store.task_by_id(id).await.unwrap().start_time, start_time);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_hand_out_increasing_ids(store: InMemoryTaskStore) {
        let first = store.create(1, "a".into(), None).await.unwrap();
        let second = store.create(1, "b".into(), None).await.unwrap();
        assert_eq!((first, second), (1, 2));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_blank_name(store: InMemoryTaskStore) {
        let result = store.create(1, "   ".into(), None).await;
        assert_eq!(result, Err(TaskError::InvalidName));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_start_time_in_the_future(store: InMemoryTaskStore) {
        let result = store
            .create(1, "later".into(), Some(Utc::now() + TimeDelta::hours(1)))
            .await;
        assert_eq!(result, Err(TaskError::StartTimeInFuture));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_close_a_task_only_once(store: InMemoryTaskStore) {
        let id = store.create(1, "write spec".into(), None).await.unwrap();

        store.close(id, 1).await.expect("first close failed");
        assert!(store.task_by_id(id).await.unwrap().is_closed());

        assert_eq!(store.close(id, 1).await, Err(TaskError::AlreadyEnded(id)));
        assert_eq!(store.close(id, 1).await, Err(TaskError::AlreadyEnded(id)));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_already_ended_even_for_another_owner(store: InMemoryTaskStore) {
        let id = store.create(1, "write spec".into(), None).await.unwrap();
        store.close(id, 1).await.unwrap();
        assert_eq!(store.close(id, 2).await, Err(TaskError::AlreadyEnded(id)));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_closing_a_task_of_another_owner(store: InMemoryTaskStore) {
        let id = store.create(1, "write spec".into(), None).await.unwrap();
        assert_eq!(store.close(id, 2).await, Err(TaskError::BadRequest(id)));
        assert!(store.task_by_id(id).await.unwrap().is_open());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_bad_request_when_closing_an_unknown_task(store: InMemoryTaskStore) {
        assert_eq!(store.close(42, 1).await, Err(TaskError::BadRequest(42)));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_let_exactly_one_of_two_concurrent_closes_win(mut store: InMemoryTaskStore) {
        store.set_close_delay(Duration::from_millis(10));
        let id = store.create(1, "race".into(), None).await.unwrap();
        let store = Arc::new(store);

        let (first, second) = join!(store.close(id, 1), store.close(id, 1));

        assert!(first.is_ok() ^ second.is_ok(), "exactly one close should win");
        let error = first.err().or(second.err()).unwrap();
        assert_eq!(error, TaskError::AlreadyEnded(id));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_an_existing_task(store: InMemoryTaskStore) {
        let id = store.create(1, "write spec".into(), None).await.unwrap();
        store.delete(id, 1).await.expect("delete failed");
        assert_eq!(store.task_by_id(id).await, Err(TaskError::NotFound(id)));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_delete_an_unknown_task(store: InMemoryTaskStore) {
        assert_eq!(store.delete(9, 1).await, Err(TaskError::NotFound(9)));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_silently_keep_a_task_deleted_by_another_owner(store: InMemoryTaskStore) {
        let id = store.create(1, "write spec".into(), None).await.unwrap();
        store.delete(id, 2).await.expect("delete should succeed");
        assert!(store.task_by_id(id).await.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_remove_all_tasks_of_a_user(store: InMemoryTaskStore) {
        store.create(1, "a".into(), None).await.unwrap();
        store.create(1, "b".into(), None).await.unwrap();
        let other = store.create(2, "c".into(), None).await.unwrap();

        assert_eq!(store.remove_all_for_user(1).await.unwrap(), 2);
        assert!(store.task_by_id(other).await.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_closed_tasks_longest_first(store: InMemoryTaskStore) {
        let start = Utc::now() - TimeDelta::days(3);
        closed_task(&store, 1, "short", start, TimeDelta::minutes(30)).await;
        closed_task(&store, 1, "long", start, TimeDelta::days(1)).await;
        closed_task(&store, 1, "medium", start, TimeDelta::hours(2)).await;
        store.create(1, "still open".into(), None).await.unwrap();
        closed_task(&store, 2, "someone else", start, TimeDelta::days(2)).await;

        let durations = store.durations(&TaskWindow::for_user(1)).await.unwrap();

        let names: Vec<&str> = durations.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["long", "medium", "short"]);
        assert_eq!(durations[0].duration_seconds, 86_400.0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_apply_the_window_bounds(store: InMemoryTaskStore) {
        let base = Utc::now() - TimeDelta::days(10);
        closed_task(&store, 1, "early", base, TimeDelta::hours(1)).await;
        closed_task(&store, 1, "late", base + TimeDelta::days(5), TimeDelta::hours(2)).await;

        let from_day_two = TaskWindow::for_user(1).starting_from(base + TimeDelta::days(2));
        let until_day_two = TaskWindow::for_user(1).ending_by(base + TimeDelta::days(2));
        let both = TaskWindow::for_user(1)
            .starting_from(base)
            .ending_by(base + TimeDelta::hours(1));

        let names = |durations: Vec<TaskDuration>| -> Vec<String> {
            durations.into_iter().map(|d| d.name).collect()
        };
        assert_eq!(names(store.durations(&from_day_two).await.unwrap()), vec!["late"]);
        assert_eq!(names(store.durations(&until_day_two).await.unwrap()), vec!["early"]);
        assert_eq!(names(store.durations(&both).await.unwrap()), vec!["early"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_task_store_is_offline(mut store: InMemoryTaskStore) {
        store.toggle_offline();
        let result = store.create(1, "write spec".into(), None).await;
        assert_eq!(
            result,
            Err(TaskError::Persistence {
                operation: "tasks.insert",
                reason: "Task store offline".into(),
            })
        );
    }
}
