use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::modules::users::adapters::inbound::http_errors::user_error_response;
use crate::shared::core::primitives::UserId;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(user_id): Path<UserId>) -> Response {
    match state.get_user.handle(user_id).await {
        Ok(user) => Json(user).into_response(),
        Err(error) => user_error_response(&error),
    }
}
