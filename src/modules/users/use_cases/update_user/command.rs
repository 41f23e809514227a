use crate::modules::users::core::user::UserChanges;
use crate::shared::core::primitives::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUser {
    pub user_id: UserId,
    pub changes: UserChanges,
}
