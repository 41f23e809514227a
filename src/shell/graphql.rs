use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::tasks::use_cases::close_task::inbound::graphql::CloseTaskMutation;
use crate::modules::tasks::use_cases::create_task::inbound::graphql::CreateTaskMutation;
use crate::modules::tasks::use_cases::delete_task::inbound::graphql::DeleteTaskMutation;
pub use crate::modules::tasks::use_cases::list_tasks_by_user::inbound::graphql::QueryRoot;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(CreateTaskMutation, CloseTaskMutation, DeleteTaskMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
