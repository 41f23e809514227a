use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::tasks::adapters::inbound::graphql_errors::task_error_to_gql;
use crate::modules::tasks::use_cases::delete_task::command::DeleteTask;
use crate::modules::users::adapters::inbound::graphql_errors::user_error_to_gql;
use crate::shared::core::primitives::{TaskId, UserId};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteTaskMutation;

#[Object]
impl DeleteTaskMutation {
    async fn delete_task(
        &self,
        context: &Context<'_>,
        task_id: TaskId,
        user_id: UserId,
    ) -> GqlResult<TaskId> {
        let state = context.data_unchecked::<AppState>();
        state
            .users
            .user_by_id(user_id)
            .await
            .map_err(user_error_to_gql)?;
        state
            .delete_task
            .handle(DeleteTask { task_id, user_id })
            .await
            .map_err(task_error_to_gql)?;
        Ok(task_id)
    }
}
