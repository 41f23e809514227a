use async_trait::async_trait;

use crate::modules::users::core::errors::UserError;
use crate::modules::users::core::filter::UserFilter;
use crate::modules::users::core::user::{NewUser, User, UserChanges};
use crate::shared::core::primitives::UserId;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: NewUser) -> Result<UserId, UserError>;

    async fn find(&self, user_id: UserId) -> Result<Option<User>, UserError>;

    async fn find_by_passport(&self, passport_number: &str) -> Result<Option<User>, UserError>;

    /// Users matching every predicate, ordered by id and paged by limit/offset.
    async fn list(&self, filter: &UserFilter) -> Result<Vec<User>, UserError>;

    /// Returns whether a user was changed.
    async fn update(&self, user_id: UserId, changes: &UserChanges) -> Result<bool, UserError>;

    /// Removes the user together with every task they own, as one step. Returns whether a user
    /// was removed; on error neither the user nor their tasks are gone.
    async fn remove(&self, user_id: UserId) -> Result<bool, UserError>;

    async fn user_by_id(&self, user_id: UserId) -> Result<User, UserError> {
        self.find(user_id).await?.ok_or(UserError::NotFound(user_id))
    }
}
