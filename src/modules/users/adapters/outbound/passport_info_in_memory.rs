// In memory passport directory, used by tests and by local runs without the external service.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::users::adapters::outbound::passport_info::{PassportInfoProvider, PersonInfo};
use crate::modules::users::core::errors::UserError;
use crate::modules::users::core::passport::PassportNumber;

#[derive(Default)]
pub struct InMemoryPassportInfoProvider {
    people: RwLock<HashMap<String, PersonInfo>>,
    is_offline: bool,
}

impl InMemoryPassportInfoProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_people(people: impl IntoIterator<Item = (PassportNumber, PersonInfo)>) -> Self {
        Self {
            people: RwLock::new(
                people
                    .into_iter()
                    .map(|(passport, person)| (passport.to_string(), person))
                    .collect(),
            ),
            is_offline: false,
        }
    }

    pub async fn register(&self, passport: &PassportNumber, person: PersonInfo) {
        self.people.write().await.insert(passport.to_string(), person);
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait]
impl PassportInfoProvider for InMemoryPassportInfoProvider {
    async fn person_by_passport(&self, passport: &PassportNumber) -> Result<PersonInfo, UserError> {
        if self.is_offline {
            return Err(UserError::PassportService("Passport info service offline".into()));
        }
        self.people
            .read()
            .await
            .get(&passport.to_string())
            .cloned()
            .ok_or(UserError::PassportNotFound)
    }
}
