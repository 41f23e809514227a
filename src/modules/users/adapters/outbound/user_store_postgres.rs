// Postgres implementation of the UserStore port.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::modules::users::adapters::outbound::user_store::UserStore;
use crate::modules::users::core::errors::UserError;
use crate::modules::users::core::filter::{UserFilter, UserPredicate};
use crate::modules::users::core::user::{NewUser, User, UserChanges};
use crate::shared::core::primitives::UserId;

const SELECT_USERS: &str =
    "SELECT id, passport_number, name, surname, patronymic, address FROM users";

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    passport_number: String,
    name: String,
    surname: String,
    patronymic: String,
    address: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            passport_number: row.passport_number,
            name: row.name,
            surname: row.surname,
            patronymic: row.patronymic,
            address: row.address,
        }
    }
}

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub fn list_query(filter: &UserFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_USERS);
    builder.push(" WHERE TRUE");
    for predicate in &filter.predicates {
        builder.push(" AND ");
        match predicate {
            UserPredicate::Id(comparison) => {
                builder
                    .push("id ")
                    .push(comparison.operator.as_sql())
                    .push(" ")
                    .push_bind(comparison.value);
            }
            UserPredicate::Text(field, comparison) => {
                builder
                    .push(field.column())
                    .push(" ")
                    .push(comparison.operator.as_sql())
                    .push(" ")
                    .push_bind(comparison.value.clone());
            }
        }
    }
    builder
        .push(" ORDER BY id LIMIT ")
        .push_bind(filter.limit)
        .push(" OFFSET ")
        .push_bind(filter.offset);
    builder
}

pub fn update_query(user_id: UserId, changes: &UserChanges) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("UPDATE users SET ");
    let mut assignments = builder.separated(", ");
    if let Some(passport_number) = &changes.passport_number {
        assignments.push("passport_number = ");
        assignments.push_bind_unseparated(passport_number.clone());
    }
    if let Some(address) = &changes.address {
        assignments.push("address = ");
        assignments.push_bind_unseparated(address.clone());
    }
    builder.push(" WHERE id = ").push_bind(user_id);
    builder
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .is_some_and(|database_error| database_error.is_unique_violation())
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn insert(&self, user: NewUser) -> Result<UserId, UserError> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (passport_number, name, surname, patronymic, address) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&user.passport_number)
        .bind(&user.name)
        .bind(&user.surname)
        .bind(&user.patronymic)
        .bind(&user.address)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            if is_unique_violation(&error) {
                UserError::AlreadyExists(user.passport_number.clone())
            } else {
                UserError::persistence("users.insert", error)
            }
        })
    }

    async fn find(&self, user_id: UserId) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USERS} WHERE id = $1"))
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| UserError::persistence("users.find", error))?;
        Ok(row.map(User::from))
    }

    async fn find_by_passport(&self, passport_number: &str) -> Result<Option<User>, UserError> {
        let row =
            sqlx::query_as::<_, UserRow>(&format!("{SELECT_USERS} WHERE passport_number = $1"))
                .bind(passport_number)
                .fetch_optional(&self.pool)
                .await
                .map_err(|error| UserError::persistence("users.find_by_passport", error))?;
        Ok(row.map(User::from))
    }

    async fn list(&self, filter: &UserFilter) -> Result<Vec<User>, UserError> {
        let mut query = list_query(filter);
        let rows = query
            .build_query_as::<UserRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|error| UserError::persistence("users.list", error))?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update(&self, user_id: UserId, changes: &UserChanges) -> Result<bool, UserError> {
        if changes.is_empty() {
            return Ok(self.find(user_id).await?.is_some());
        }
        let mut query = update_query(user_id, changes);
        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(|error| match (&changes.passport_number, is_unique_violation(&error)) {
                (Some(passport_number), true) => UserError::AlreadyExists(passport_number.clone()),
                _ => UserError::persistence("users.update", error),
            })?;
        Ok(result.rows_affected() == 1)
    }

    async fn remove(&self, user_id: UserId) -> Result<bool, UserError> {
        // tasks.user_id is ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|error| UserError::persistence("users.remove", error))?;
        Ok(result.rows_affected() == 1)
    }
}
