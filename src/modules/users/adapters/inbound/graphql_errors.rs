use crate::modules::users::adapters::inbound::http_errors::public_message;
use crate::modules::users::core::errors::UserError;

pub fn user_error_to_gql(error: UserError) -> async_graphql::Error {
    async_graphql::Error::new(public_message(&error))
}

#[cfg(test)]
mod user_graphql_errors_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(UserError::NotFound(8), "user 8 not found")]
    #[case(UserError::persistence("users.find", "pool timed out"), "internal server error")]
    fn it_should_mask_storage_failures(#[case] error: UserError, #[case] expected: &str) {
        assert_eq!(user_error_to_gql(error).message, expected);
    }
}
