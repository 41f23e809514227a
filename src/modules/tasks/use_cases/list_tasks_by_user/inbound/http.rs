use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

use crate::modules::tasks::adapters::inbound::http_errors::task_error_response;
use crate::modules::tasks::core::window::TaskWindow;
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::http_response::error_response;
use crate::shell::state::AppState;

/// Bounds are RFC3339 timestamps, e.g. `2024-07-15T13:35:35.481207+03:00` (with `+` percent-encoded).
#[derive(Deserialize)]
pub struct ListTasksParams {
    pub user_id: UserId,
    pub start_time: Option<DateTime<FixedOffset>>,
    pub end_time: Option<DateTime<FixedOffset>>,
}

impl From<ListTasksParams> for TaskWindow {
    fn from(params: ListTasksParams) -> Self {
        Self {
            user_id: params.user_id,
            start_period: params.start_time.map(|t| t.with_timezone(&Utc)),
            end_period: params.end_time.map(|t| t.with_timezone(&Utc)),
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<ListTasksParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match state.list_tasks_by_user.handle(params.into()).await {
        Ok(tasks) => Json(tasks).into_response(),
        Err(error) => task_error_response(&error),
    }
}
