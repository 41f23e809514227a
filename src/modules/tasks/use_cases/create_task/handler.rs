use std::sync::Arc;

use crate::modules::tasks::adapters::outbound::task_store::TaskStore;
use crate::modules::tasks::core::errors::TaskError;
use crate::modules::tasks::use_cases::create_task::command::CreateTask;
use crate::shared::core::primitives::TaskId;

pub struct CreateTaskHandler<TStore: ?Sized> {
    store: Arc<TStore>,
}

impl<TStore> CreateTaskHandler<TStore>
where
    TStore: TaskStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "tasks.create", skip_all, fields(user_id = command.user_id))]
    pub async fn handle(&self, command: CreateTask) -> Result<TaskId, TaskError> {
        tracing::debug!(?command, "received request to create task");
        match self
            .store
            .create(command.user_id, command.name, command.start_time)
            .await
        {
            Ok(task_id) => {
                tracing::info!(task_id, "task created");
                Ok(task_id)
            }
            Err(error) => {
                tracing::warn!(%error, "failed creating task");
                Err(error)
            }
        }
    }
}
