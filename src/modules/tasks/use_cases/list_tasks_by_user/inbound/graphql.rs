use async_graphql::{Context, Object, Result as GqlResult};
use chrono::{DateTime, FixedOffset, Utc};

use crate::modules::tasks::adapters::inbound::graphql_errors::task_error_to_gql;
use crate::modules::tasks::core::window::TaskWindow;
use crate::modules::tasks::use_cases::list_tasks_by_user::projection::TaskDurationView;
use crate::shared::core::primitives::UserId;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTaskDuration {
    pub name: String,
    pub duration: String,
}

impl From<TaskDurationView> for GqlTaskDuration {
    fn from(v: TaskDurationView) -> Self {
        Self {
            name: v.name,
            duration: v.duration,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn tasks_by_user(
        &self,
        context: &Context<'_>,
        user_id: UserId,
        start_time: Option<DateTime<FixedOffset>>,
        end_time: Option<DateTime<FixedOffset>>,
    ) -> GqlResult<Vec<GqlTaskDuration>> {
        let state = context.data_unchecked::<AppState>();
        let window = TaskWindow {
            user_id,
            start_period: start_time.map(|t| t.with_timezone(&Utc)),
            end_period: end_time.map(|t| t.with_timezone(&Utc)),
        };
        let list = state
            .list_tasks_by_user
            .handle(window)
            .await
            .map_err(task_error_to_gql)?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
