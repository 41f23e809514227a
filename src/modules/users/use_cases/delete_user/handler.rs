use std::sync::Arc;

use crate::modules::users::adapters::outbound::user_store::UserStore;
use crate::modules::users::core::errors::UserError;
use crate::shared::core::primitives::UserId;

/// Removes a user together with every task they own.
pub struct DeleteUserHandler<TStore: ?Sized> {
    store: Arc<TStore>,
}

impl<TStore> DeleteUserHandler<TStore>
where
    TStore: UserStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "users.delete", skip(self))]
    pub async fn handle(&self, user_id: UserId) -> Result<(), UserError> {
        tracing::debug!("received request to delete user");
        self.delete(user_id)
            .await
            .inspect(|_| tracing::info!("user deleted"))
            .inspect_err(|error| tracing::warn!(%error, "failed deleting user"))
    }

    async fn delete(&self, user_id: UserId) -> Result<(), UserError> {
        self.store.user_by_id(user_id).await?;
        if self.store.remove(user_id).await? {
            Ok(())
        } else {
            Err(UserError::NotFound(user_id))
        }
    }
}
