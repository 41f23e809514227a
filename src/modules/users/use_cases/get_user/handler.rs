use std::sync::Arc;

use crate::modules::users::adapters::outbound::user_store::UserStore;
use crate::modules::users::core::errors::UserError;
use crate::modules::users::core::user::User;
use crate::shared::core::primitives::UserId;

pub struct GetUserHandler<TStore: ?Sized> {
    store: Arc<TStore>,
}

impl<TStore> GetUserHandler<TStore>
where
    TStore: UserStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "users.get", skip(self))]
    pub async fn handle(&self, user_id: UserId) -> Result<User, UserError> {
        tracing::debug!("received request to get user");
        self.store
            .user_by_id(user_id)
            .await
            .inspect_err(|error| tracing::warn!(%error, "failed getting user"))
    }
}
