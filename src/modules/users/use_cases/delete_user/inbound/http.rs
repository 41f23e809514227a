use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::users::adapters::inbound::http_errors::user_error_response;
use crate::shared::core::primitives::UserId;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeleteUserResponse {
    pub id: UserId,
}

pub async fn handle(State(state): State<AppState>, Path(user_id): Path<UserId>) -> Response {
    match state.delete_user.handle(user_id).await {
        Ok(()) => Json(DeleteUserResponse { id: user_id }).into_response(),
        Err(error) => user_error_response(&error),
    }
}
