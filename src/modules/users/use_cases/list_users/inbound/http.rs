use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::users::adapters::inbound::http_errors::user_error_response;
use crate::modules::users::core::filter::UserQuery;
use crate::shared::infrastructure::http_response::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match state.list_users.handle(query).await {
        Ok(users) => Json(users).into_response(),
        Err(error) => user_error_response(&error),
    }
}
