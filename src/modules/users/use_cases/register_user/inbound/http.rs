use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::users::adapters::inbound::http_errors::user_error_response;
use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::http_response::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterUserParams {
    pub passport_number: String,
}

#[derive(Serialize)]
pub struct RegisterUserResponse {
    pub id: UserId,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<RegisterUserParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    let command = RegisterUser {
        passport_number: params.passport_number,
    };
    match state.register_user.handle(command).await {
        Ok(id) => (StatusCode::CREATED, Json(RegisterUserResponse { id })).into_response(),
        Err(error) => user_error_response(&error),
    }
}
