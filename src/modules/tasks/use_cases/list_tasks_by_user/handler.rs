use std::sync::Arc;

use crate::modules::tasks::adapters::outbound::task_store::TaskStore;
use crate::modules::tasks::core::errors::TaskError;
use crate::modules::tasks::core::window::TaskWindow;
use crate::modules::tasks::use_cases::list_tasks_by_user::projection::TaskDurationView;

pub struct ListTasksByUserHandler<TStore: ?Sized> {
    store: Arc<TStore>,
}

impl<TStore> ListTasksByUserHandler<TStore>
where
    TStore: TaskStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "tasks.list_by_user", skip_all, fields(user_id = window.user_id))]
    pub async fn handle(&self, window: TaskWindow) -> Result<Vec<TaskDurationView>, TaskError> {
        tracing::debug!(?window, "received request to get tasks");
        match self.store.durations(&window).await {
            Ok(rows) => {
                tracing::info!(count = rows.len(), "tasks retrieved");
                Ok(rows.into_iter().map(TaskDurationView::from).collect())
            }
            Err(error) => {
                tracing::warn!(%error, "failed getting tasks");
                Err(error)
            }
        }
    }
}
