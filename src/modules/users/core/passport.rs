use std::fmt;
use std::str::FromStr;

use crate::modules::users::core::errors::UserError;

/// Passport identifier as issued: a series and a number, written `"1234 567890"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassportNumber {
    pub series: String,
    pub number: String,
}

impl FromStr for PassportNumber {
    type Err = UserError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(series), Some(number), None) => Ok(Self {
                series: series.to_string(),
                number: number.to_string(),
            }),
            _ => Err(UserError::InvalidPassport(raw.to_string())),
        }
    }
}

impl fmt::Display for PassportNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.series, self.number)
    }
}
