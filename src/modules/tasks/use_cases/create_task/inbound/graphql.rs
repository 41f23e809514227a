use async_graphql::{Context, Object, Result as GqlResult};
use chrono::{DateTime, FixedOffset, Utc};

use crate::modules::tasks::adapters::inbound::graphql_errors::task_error_to_gql;
use crate::modules::tasks::use_cases::create_task::command::CreateTask;
use crate::modules::users::adapters::inbound::graphql_errors::user_error_to_gql;
use crate::shared::core::primitives::{TaskId, UserId};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateTaskMutation;

#[Object]
impl CreateTaskMutation {
    async fn create_task(
        &self,
        context: &Context<'_>,
        user_id: UserId,
        name: String,
        start_time: Option<DateTime<FixedOffset>>,
    ) -> GqlResult<TaskId> {
        let state = context.data_unchecked::<AppState>();
        state
            .users
            .user_by_id(user_id)
            .await
            .map_err(user_error_to_gql)?;

        let command = CreateTask {
            user_id,
            name,
            start_time: start_time.map(|start_time| start_time.with_timezone(&Utc)),
        };
        state
            .create_task
            .handle(command)
            .await
            .map_err(task_error_to_gql)
    }
}
