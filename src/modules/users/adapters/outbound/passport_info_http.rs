// Passport info client over HTTP.
//
// Built once at startup from configuration; holds the base URL and the request timeout.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::modules::users::adapters::outbound::passport_info::{PassportInfoProvider, PersonInfo};
use crate::modules::users::core::errors::UserError;
use crate::modules::users::core::passport::PassportNumber;

#[derive(Clone)]
pub struct HttpPassportInfoProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPassportInfoProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn info_url(&self) -> String {
        format!("{}/info", self.base_url)
    }
}

fn classify_status(status: StatusCode) -> Option<UserError> {
    match status {
        status if status.is_success() => None,
        StatusCode::BAD_REQUEST => Some(UserError::PassportService("bad request".into())),
        StatusCode::NOT_FOUND => Some(UserError::PassportNotFound),
        status => Some(UserError::PassportService(format!(
            "unexpected status {status}"
        ))),
    }
}

#[async_trait]
impl PassportInfoProvider for HttpPassportInfoProvider {
    #[tracing::instrument(name = "passport_info.lookup", skip_all, fields(series = %passport.series))]
    async fn person_by_passport(&self, passport: &PassportNumber) -> Result<PersonInfo, UserError> {
        let response = self
            .client
            .get(self.info_url())
            .query(&[
                ("passportSerie", passport.series.as_str()),
                ("passportNumber", passport.number.as_str()),
            ])
            .send()
            .await
            .map_err(|error| UserError::PassportService(error.to_string()))?;

        if let Some(error) = classify_status(response.status()) {
            tracing::warn!(status = %response.status(), "passport info service rejected lookup");
            return Err(error);
        }

        response
            .json::<PersonInfo>()
            .await
            .map_err(|error| UserError::PassportService(error.to_string()))
    }
}
