use std::sync::Arc;

use crate::modules::users::adapters::outbound::user_store::UserStore;
use crate::modules::users::core::errors::UserError;
use crate::modules::users::core::passport::PassportNumber;
use crate::modules::users::use_cases::update_user::command::UpdateUser;

pub struct UpdateUserHandler<TStore: ?Sized> {
    store: Arc<TStore>,
}

impl<TStore> UpdateUserHandler<TStore>
where
    TStore: UserStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "users.update", skip_all, fields(user_id = command.user_id))]
    pub async fn handle(&self, command: UpdateUser) -> Result<(), UserError> {
        tracing::debug!(?command, "received request to update user");
        self.update(command)
            .await
            .inspect(|_| tracing::info!("user updated"))
            .inspect_err(|error| tracing::warn!(%error, "failed updating user"))
    }

    async fn update(&self, command: UpdateUser) -> Result<(), UserError> {
        let UpdateUser {
            user_id,
            mut changes,
        } = command;
        if changes.is_empty() {
            return Err(UserError::Validation(
                "at least one of passport_number or address is required".into(),
            ));
        }
        if let Some(raw) = changes.passport_number.take() {
            let passport: PassportNumber = raw.parse()?;
            changes.passport_number = Some(passport.to_string());
        }

        if self.store.update(user_id, &changes).await? {
            Ok(())
        } else {
            Err(UserError::NotFound(user_id))
        }
    }
}
