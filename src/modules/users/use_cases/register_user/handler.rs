use std::sync::Arc;

use crate::modules::users::adapters::outbound::passport_info::PassportInfoProvider;
use crate::modules::users::adapters::outbound::user_store::UserStore;
use crate::modules::users::core::errors::UserError;
use crate::modules::users::core::passport::PassportNumber;
use crate::modules::users::core::user::NewUser;
use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::shared::core::primitives::UserId;

/// Registers a user by passport, enriching the record through the passport info service.
pub struct RegisterUserHandler<TStore: ?Sized, TPassportInfo: ?Sized> {
    store: Arc<TStore>,
    passport_info: Arc<TPassportInfo>,
}

impl<TStore, TPassportInfo> RegisterUserHandler<TStore, TPassportInfo>
where
    TStore: UserStore + ?Sized,
    TPassportInfo: PassportInfoProvider + ?Sized,
{
    pub fn new(store: Arc<TStore>, passport_info: Arc<TPassportInfo>) -> Self {
        Self {
            store,
            passport_info,
        }
    }

    #[tracing::instrument(name = "users.register", skip_all)]
    pub async fn handle(&self, command: RegisterUser) -> Result<UserId, UserError> {
        tracing::debug!(?command, "received request to register user");
        self.register(command)
            .await
            .inspect(|user_id| tracing::info!(user_id, "user registered"))
            .inspect_err(|error| tracing::warn!(%error, "failed registering user"))
    }

    async fn register(&self, command: RegisterUser) -> Result<UserId, UserError> {
        let passport: PassportNumber = command.passport_number.parse()?;
        let passport_number = passport.to_string();

        if self.store.find_by_passport(&passport_number).await?.is_some() {
            return Err(UserError::AlreadyExists(passport_number));
        }

        let person = self.passport_info.person_by_passport(&passport).await?;
        self.store
            .insert(NewUser {
                passport_number,
                name: person.name,
                surname: person.surname,
                patronymic: person.patronymic,
                address: person.address,
            })
            .await
    }
}
