use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub passport_number: String,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    #[serde(rename = "addr", alias = "address")]
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub passport_number: String,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserChanges {
    pub passport_number: Option<String>,
    #[serde(rename = "addr", alias = "address")]
    pub address: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.passport_number.is_none() && self.address.is_none()
    }

    pub fn apply_to(&self, user: &mut User) {
        if let Some(passport_number) = &self.passport_number {
            user.passport_number = passport_number.clone();
        }
        if let Some(address) = &self.address {
            user.address = address.clone();
        }
    }
}
