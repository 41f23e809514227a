use crate::modules::tasks::adapters::inbound::http_errors::public_message;
use crate::modules::tasks::core::errors::TaskError;

pub fn task_error_to_gql(error: TaskError) -> async_graphql::Error {
    async_graphql::Error::new(public_message(&error))
}
