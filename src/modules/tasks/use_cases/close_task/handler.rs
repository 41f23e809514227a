use std::sync::Arc;

use crate::modules::tasks::adapters::outbound::task_store::TaskStore;
use crate::modules::tasks::core::errors::TaskError;
use crate::modules::tasks::use_cases::close_task::command::CloseTask;

pub struct CloseTaskHandler<TStore: ?Sized> {
    store: Arc<TStore>,
}

impl<TStore> CloseTaskHandler<TStore>
where
    TStore: TaskStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(
        name = "tasks.close",
        skip_all,
        fields(task_id = command.task_id, user_id = command.user_id)
    )]
    pub async fn handle(&self, command: CloseTask) -> Result<(), TaskError> {
        tracing::debug!("received request to close task");
        match self.store.close(command.task_id, command.user_id).await {
            Ok(()) => {
                tracing::info!("task closed");
                Ok(())
            }
            Err(error @ TaskError::AlreadyEnded(_)) => {
                tracing::warn!(%error, "task was already closed");
                Err(error)
            }
            Err(error) => {
                tracing::warn!(%error, "failed closing task");
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod close_task_handler_tests {
    use super::*;
    use crate::modules::tasks::adapters::outbound::task_store_in_memory::InMemoryTaskStore;
    use crate::modules::tasks::core::window::TaskWindow;
    use rstest::{fixture, rstest};
    use tokio::join;

    #[fixture]
    fn store() -> Arc<InMemoryTaskStore> {
        Arc::new(InMemoryTaskStore::new())
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_close_an_open_task(store: Arc<InMemoryTaskStore>) {
        let task_id = store.create(1, "write spec".into(), None).await.unwrap();
        let handler = CloseTaskHandler::new(store.clone());

        handler
            .handle(CloseTask { task_id, user_id: 1 })
            .await
            .expect("handle failed");

        assert!(store.task_by_id(task_id).await.unwrap().is_closed());
        assert_eq!(store.durations(&TaskWindow::for_user(1)).await.unwrap().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_on_the_second_close(store: Arc<InMemoryTaskStore>) {
        let task_id = store.create(1, "write spec".into(), None).await.unwrap();
        let handler = CloseTaskHandler::new(store);
        let command = CloseTask { task_id, user_id: 1 };

        handler.handle(command).await.expect("first close failed");

        assert_eq!(
            handler.handle(command).await,
            Err(TaskError::AlreadyEnded(task_id))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_let_one_of_two_concurrent_handlers_win() {
        let mut store = InMemoryTaskStore::new();
        store.set_close_delay(std::time::Duration::from_millis(10));
        let store = Arc::new(store);
        let task_id = store.create(1, "race".into(), None).await.unwrap();
        let first_handler = CloseTaskHandler::new(store.clone());
        let second_handler = CloseTaskHandler::new(store);
        let command = CloseTask { task_id, user_id: 1 };

        let (first, second) = join!(
            first_handler.handle(command),
            second_handler.handle(command)
        );

        assert!(first.is_ok() ^ second.is_ok(), "exactly one should win");
        assert_eq!(
            first.err().or(second.err()),
            Some(TaskError::AlreadyEnded(task_id))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_bad_request_for_an_unknown_task(store: Arc<InMemoryTaskStore>) {
        let handler = CloseTaskHandler::new(store);
        assert_eq!(
            handler.handle(CloseTask { task_id: 5, user_id: 1 }).await,
            Err(TaskError::BadRequest(5))
        );
    }
}
