use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::tasks::adapters::inbound::http_errors::task_error_response;
use crate::modules::tasks::use_cases::create_task::command::CreateTask;
use crate::modules::users::adapters::inbound::http_errors::user_error_response;
use crate::shared::core::primitives::{TaskId, UserId};
use crate::shared::infrastructure::http_response::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateTaskBody {
    pub user_id: UserId,
    pub name: String,
    pub start_time: Option<DateTime<FixedOffset>>,
}

#[derive(Serialize)]
pub struct CreateTaskResponse {
    pub id: TaskId,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    if let Err(error) = state.users.user_by_id(body.user_id).await {
        return user_error_response(&error);
    }

    let command = CreateTask {
        user_id: body.user_id,
        name: body.name,
        start_time: body.start_time.map(|start_time| start_time.with_timezone(&Utc)),
    };

    match state.create_task.handle(command).await {
        Ok(id) => (StatusCode::CREATED, Json(CreateTaskResponse { id })).into_response(),
        Err(error) => task_error_response(&error),
    }
}
