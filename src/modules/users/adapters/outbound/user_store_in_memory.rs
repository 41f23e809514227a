// In memory implementation of the UserStore port.
//
// Purpose
// - Support use case tests and local development without a database.
//
// Responsibilities
// - Cascade user removal into the linked task store while holding the user write lock.

use crate::modules::tasks::adapters::outbound::task_store::TaskStore;
use crate::modules::users::adapters::outbound::user_store::UserStore;
use crate::modules::users::core::errors::UserError;
use crate::modules::users::core::filter::UserFilter;
use crate::modules::users::core::user::{NewUser, User, UserChanges};
use crate::shared::core::primitives::UserId;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryUserStore {
    rows: RwLock<BTreeMap<UserId, User>>,
    last_id: RwLock<UserId>,
    is_offline: bool,
    owned_tasks: Option<Arc<dyn TaskStore>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose removals also drop the user's tasks from `tasks`.
    pub fn with_tasks(tasks: Arc<dyn TaskStore>) -> Self {
        Self {
            owned_tasks: Some(tasks),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self, operation: &'static str) -> Result<(), UserError> {
        if self.is_offline {
            return Err(UserError::persistence(operation, "User store offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: NewUser) -> Result<UserId, UserError> {
        self.ensure_online("users.insert")?;
        let mut rows = self.rows.write().await;
        if rows
            .values()
            .any(|existing| existing.passport_number == user.passport_number)
        {
            return Err(UserError::AlreadyExists(user.passport_number));
        }
        let mut last_id = self.last_id.write().await;
        *last_id += 1;
        let id = *last_id;
        rows.insert(
            id,
            User {
                id,
                passport_number: user.passport_number,
                name: user.name,
                surname: user.surname,
                patronymic: user.patronymic,
                address: user.address,
            },
        );
        Ok(id)
    }

    async fn find(&self, user_id: UserId) -> Result<Option<User>, UserError> {
        self.ensure_online("users.find")?;
        Ok(self.rows.read().await.get(&user_id).cloned())
    }

    async fn find_by_passport(&self, passport_number: &str) -> Result<Option<User>, UserError> {
        self.ensure_online("users.find_by_passport")?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|user| user.passport_number == passport_number)
            .cloned())
    }

    async fn list(&self, filter: &UserFilter) -> Result<Vec<User>, UserError> {
        self.ensure_online("users.list")?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|user| filter.matches(user))
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, user_id: UserId, changes: &UserChanges) -> Result<bool, UserError> {
        self.ensure_online("users.update")?;
        let mut rows = self.rows.write().await;
        if let Some(passport_number) = &changes.passport_number {
            let taken = rows
                .values()
                .any(|other| other.id != user_id && &other.passport_number == passport_number);
            if taken {
                return Err(UserError::AlreadyExists(passport_number.clone()));
            }
        }
        match rows.get_mut(&user_id) {
            Some(user) => {
                changes.apply_to(user);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, user_id: UserId) -> Result<bool, UserError> {
        self.ensure_online("users.remove")?;
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&user_id) {
            return Ok(false);
        }
        if let Some(tasks) = &self.owned_tasks {
            tasks
                .remove_all_for_user(user_id)
                .await
                .map_err(|error| UserError::persistence("users.remove", error))?;
        }
        rows.remove(&user_id);
        Ok(true)
    }
}
