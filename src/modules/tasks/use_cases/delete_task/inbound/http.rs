use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::tasks::adapters::inbound::http_errors::task_error_response;
use crate::modules::tasks::use_cases::delete_task::command::DeleteTask;
use crate::modules::users::adapters::inbound::http_errors::user_error_response;
use crate::shared::core::primitives::{TaskId, UserId};
use crate::shared::infrastructure::http_response::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteTaskBody {
    pub user_id: UserId,
}

#[derive(Serialize)]
pub struct DeleteTaskResponse {
    pub id: TaskId,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(task_id): Path<TaskId>,
    body: Result<Json<DeleteTaskBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    if let Err(error) = state.users.user_by_id(body.user_id).await {
        return user_error_response(&error);
    }

    let command = DeleteTask {
        task_id,
        user_id: body.user_id,
    };
    match state.delete_task.handle(command).await {
        Ok(()) => Json(DeleteTaskResponse { id: task_id }).into_response(),
        Err(error) => task_error_response(&error),
    }
}
