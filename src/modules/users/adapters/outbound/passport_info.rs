use async_trait::async_trait;
use serde::Deserialize;

use crate::modules::users::core::errors::UserError;
use crate::modules::users::core::passport::PassportNumber;

/// Personal data the passport info service returns for a passport.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonInfo {
    pub surname: String,
    pub name: String,
    #[serde(default)]
    pub patronymic: String,
    #[serde(alias = "addr")]
    pub address: String,
}

#[async_trait]
pub trait PassportInfoProvider: Send + Sync {
    async fn person_by_passport(&self, passport: &PassportNumber) -> Result<PersonInfo, UserError>;
}

#[cfg(test)]
mod person_info_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"surname":"Ivanov","name":"Ivan","patronymic":"Ivanovich","address":"Moscow"}"#)]
    #[case(r#"{"surname":"Ivanov","name":"Ivan","patronymic":"Ivanovich","addr":"Moscow"}"#)]
    fn it_should_accept_both_address_spellings(#[case] body: &str) {
        let person: PersonInfo = serde_json::from_str(body).unwrap();
        assert_eq!(person.address, "Moscow");
        assert_eq!(person.patronymic, "Ivanovich");
    }

    #[rstest]
    fn it_should_default_a_missing_patronymic() {
        let person: PersonInfo =
            serde_json::from_str(r#"{"surname":"Smith","name":"John","address":"London"}"#).unwrap();
        assert_eq!(person.patronymic, "");
    }
}
