use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::users::adapters::inbound::http_errors::user_error_response;
use crate::modules::users::core::user::UserChanges;
use crate::modules::users::use_cases::update_user::command::UpdateUser;
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::http_response::error_response;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct UpdateUserResponse {
    pub user_id: UserId,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    body: Result<Json<UserChanges>, JsonRejection>,
) -> Response {
    let Json(changes) = match body {
        Ok(b) => b,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match state.update_user.handle(UpdateUser { user_id, changes }).await {
        Ok(()) => Json(UpdateUserResponse { user_id }).into_response(),
        Err(error) => user_error_response(&error),
    }
}

#[cfg(test)]
mod update_user_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::put,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    use super::handle;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::state::{make_test_state, register_user};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/users/{id}", put(handle))
            .with_state(state)
    }

    fn put_json(user_id: i64, body: &str) -> Request<Body> {
        Request::put(format!("/users/{user_id}"))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_user_id() {
        let state = make_test_state();
        let user_id = register_user(&state).await;

        let response = app(state.clone())
            .oneshot(put_json(user_id, r#"{"addr": "Kazan"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["user_id"].as_i64(), Some(user_id));
        let user = state.users.user_by_id(user_id).await.unwrap();
        assert_eq!(user.address, "Kazan");
    }

    #[rstest]
    #[case(r#"{}"#, StatusCode::BAD_REQUEST)]
    #[case(r#"{"address": 5}"#, StatusCode::BAD_REQUEST)]
    #[case(r#"{"passport_number": "12"}"#, StatusCode::BAD_REQUEST)]
    #[tokio::test]
    async fn it_should_reject_invalid_changes(#[case] body: &str, #[case] expected: StatusCode) {
        let state = make_test_state();
        let user_id = register_user(&state).await;

        let response = app(state).oneshot(put_json(user_id, body)).await.unwrap();

        assert_eq!(response.status(), expected);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_user() {
        let response = app(make_test_state())
            .oneshot(put_json(77, r#"{"address": "Kazan"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
