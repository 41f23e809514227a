// Filter accepted by the user listing.
//
// Each optional field carries a raw comparison such as `"Ivan"`, `">=10"` or `"<Moscow"`. The
// filter is parsed once into typed predicates; adapters render or evaluate them.

use serde::Deserialize;

use crate::modules::users::core::errors::UserError;
use crate::modules::users::core::user::User;
use crate::shared::core::primitives::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Eq,
    Gt,
    Ge,
    Lt,
    Le,
}

impl ComparisonOperator {
    pub fn as_sql(self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "=",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::Ge => ">=",
            ComparisonOperator::Lt => "<",
            ComparisonOperator::Le => "<=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison<T> {
    pub operator: ComparisonOperator,
    pub value: T,
}

impl Comparison<String> {
    /// Two-character operators are matched before their one-character prefixes.
    pub fn parse(raw: &str) -> Self {
        let (operator, value) = [
            (">=", ComparisonOperator::Ge),
            ("<=", ComparisonOperator::Le),
            (">", ComparisonOperator::Gt),
            ("<", ComparisonOperator::Lt),
        ]
        .into_iter()
        .find_map(|(prefix, operator)| raw.strip_prefix(prefix).map(|rest| (operator, rest)))
        .unwrap_or((ComparisonOperator::Eq, raw));
        Self {
            operator,
            value: value.to_string(),
        }
    }
}

impl<T: PartialOrd> Comparison<T> {
    pub fn matches(&self, actual: &T) -> bool {
        match self.operator {
            ComparisonOperator::Eq => actual == &self.value,
            ComparisonOperator::Gt => actual > &self.value,
            ComparisonOperator::Ge => actual >= &self.value,
            ComparisonOperator::Lt => actual < &self.value,
            ComparisonOperator::Le => actual <= &self.value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Surname,
    Patronymic,
    PassportNumber,
    Address,
}

impl UserField {
    pub fn column(self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Surname => "surname",
            UserField::Patronymic => "patronymic",
            UserField::PassportNumber => "passport_number",
            UserField::Address => "address",
        }
    }

    pub fn value_of(self, user: &User) -> &String {
        match self {
            UserField::Name => &user.name,
            UserField::Surname => &user.surname,
            UserField::Patronymic => &user.patronymic,
            UserField::PassportNumber => &user.passport_number,
            UserField::Address => &user.address,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserPredicate {
    Id(Comparison<UserId>),
    Text(UserField, Comparison<String>),
}

impl UserPredicate {
    pub fn matches(&self, user: &User) -> bool {
        match self {
            UserPredicate::Id(comparison) => comparison.matches(&user.id),
            UserPredicate::Text(field, comparison) => comparison.matches(field.value_of(user)),
        }
    }
}

/// Raw listing parameters as they arrive on the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserQuery {
    pub id: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub patronymic: Option<String>,
    pub passport_number: Option<String>,
    pub address: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFilter {
    pub predicates: Vec<UserPredicate>,
    pub limit: i64,
    pub offset: i64,
}

impl UserFilter {
    pub const DEFAULT_LIMIT: i64 = 10;

    pub fn matches(&self, user: &User) -> bool {
        self.predicates.iter().all(|predicate| predicate.matches(user))
    }
}

impl Default for UserFilter {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

fn present(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|value| !value.is_empty())
}

impl TryFrom<UserQuery> for UserFilter {
    type Error = UserError;

    fn try_from(query: UserQuery) -> Result<Self, Self::Error> {
        let mut predicates = Vec::new();

        if let Some(raw) = present(&query.id) {
            let Comparison { operator, value } = Comparison::parse(raw);
            let value = value
                .trim()
                .parse::<UserId>()
                .map_err(|_| UserError::Validation(format!("invalid id filter {raw:?}")))?;
            predicates.push(UserPredicate::Id(Comparison { operator, value }));
        }

        for (field, raw) in [
            (UserField::Name, &query.name),
            (UserField::Surname, &query.surname),
            (UserField::Patronymic, &query.patronymic),
            (UserField::PassportNumber, &query.passport_number),
            (UserField::Address, &query.address),
        ] {
            if let Some(raw) = present(raw) {
                predicates.push(UserPredicate::Text(field, Comparison::parse(raw)));
            }
        }

        let limit = query.limit.unwrap_or(Self::DEFAULT_LIMIT);
        let offset = query.offset.unwrap_or(0);
        if limit < 0 || offset < 0 {
            return Err(UserError::Validation(
                "limit and offset must not be negative".into(),
            ));
        }

        Ok(Self {
            predicates,
            limit,
            offset,
        })
    }
}
