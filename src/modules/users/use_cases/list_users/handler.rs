use std::sync::Arc;

use crate::modules::users::adapters::outbound::user_store::UserStore;
use crate::modules::users::core::errors::UserError;
use crate::modules::users::core::filter::{UserFilter, UserQuery};
use crate::modules::users::core::user::User;

pub struct ListUsersHandler<TStore: ?Sized> {
    store: Arc<TStore>,
}

impl<TStore> ListUsersHandler<TStore>
where
    TStore: UserStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "users.list", skip_all)]
    pub async fn handle(&self, query: UserQuery) -> Result<Vec<User>, UserError> {
        tracing::debug!(?query, "received request to list users");
        let filter = UserFilter::try_from(query)?;
        self.store
            .list(&filter)
            .await
            .inspect(|users| tracing::info!(count = users.len(), "users listed"))
            .inspect_err(|error| tracing::warn!(%error, "failed listing users"))
    }
}
