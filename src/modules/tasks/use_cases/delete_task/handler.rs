use std::sync::Arc;

use crate::modules::tasks::adapters::outbound::task_store::TaskStore;
use crate::modules::tasks::core::errors::TaskError;
use crate::modules::tasks::use_cases::delete_task::command::DeleteTask;

pub struct DeleteTaskHandler<TStore: ?Sized> {
    store: Arc<TStore>,
}

impl<TStore> DeleteTaskHandler<TStore>
where
    TStore: TaskStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(
        name = "tasks.delete",
        skip_all,
        fields(task_id = command.task_id, user_id = command.user_id)
    )]
    pub async fn handle(&self, command: DeleteTask) -> Result<(), TaskError> {
        tracing::debug!("received request to delete task");
        self.store
            .delete(command.task_id, command.user_id)
            .await
            .inspect(|_| tracing::info!("task deleted"))
            .inspect_err(|error| tracing::warn!(%error, "failed deleting task"))
    }
}
