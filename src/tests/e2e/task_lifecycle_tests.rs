use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::commands::create_task::CreateTaskBuilder;
use crate::tests::fixtures::state::make_test_state;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    };
    app.clone().oneshot(request.unwrap()).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn it_should_track_a_task_from_registration_to_report() {
    let app = router(make_test_state());

    let registered = send(&app, "POST", "/users?passport_number=1234%20567890", None).await;
    assert_eq!(registered.status(), StatusCode::CREATED);
    let user_id = json_body(registered).await["id"].as_i64().unwrap();

    let started = (Utc::now() - Duration::hours(25) - Duration::minutes(1)).to_rfc3339();
    let created = send(
        &app,
        "POST",
        "/tasks",
        Some(json!({ "user_id": user_id, "name": "migrate billing", "start_time": started })),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let task_id = json_body(created).await["id"].as_i64().unwrap();

    let open_report = send(&app, "GET", &format!("/tasks?user_id={user_id}"), None).await;
    assert_eq!(json_body(open_report).await, json!([]));

    let closed = send(
        &app,
        "PUT",
        &format!("/tasks/{task_id}"),
        Some(json!({ "user_id": user_id })),
    )
    .await;
    assert_eq!(closed.status(), StatusCode::OK);
    assert_eq!(json_body(closed).await, json!({ "task_id": task_id }));

    let closed_again = send(
        &app,
        "PUT",
        &format!("/tasks/{task_id}"),
        Some(json!({ "user_id": user_id })),
    )
    .await;
    assert_eq!(closed_again.status(), StatusCode::ALREADY_REPORTED);

    let report = send(&app, "GET", &format!("/tasks?user_id={user_id}"), None).await;
    assert_eq!(report.status(), StatusCode::OK);
    assert_eq!(
        json_body(report).await,
        json!([{ "name": "migrate billing", "duration": "1d 01h 01m" }])
    );
}

#[tokio::test]
async fn it_should_report_longest_tasks_first_within_the_window() {
    let state = make_test_state();
    let app = router(state.clone());
    let registered = send(&app, "POST", "/users?passport_number=1234%20567890", None).await;
    let user_id = json_body(registered).await["id"].as_i64().unwrap();

    let window_start = Utc::now() - Duration::hours(5);
    for (name, minutes_ago) in [("standup", 20), ("review", 200), ("before window", 400)] {
        let command = CreateTaskBuilder::new()
            .user_id(user_id)
            .name(name)
            .start_time(Some(Utc::now() - Duration::minutes(minutes_ago)))
            .build();
        let task_id = state.create_task.handle(command).await.unwrap();
        state.tasks.close(task_id, user_id).await.unwrap();
    }

    let uri = format!(
        "/tasks?user_id={user_id}&start_time={}",
        window_start.to_rfc3339().replace('+', "%2B")
    );
    let report = json_body(send(&app, "GET", &uri, None).await).await;

    assert_eq!(
        report,
        json!([
            { "name": "review", "duration": "03h 20m" },
            { "name": "standup", "duration": "00h 20m" },
        ])
    );
}

#[tokio::test]
async fn it_should_drop_tasks_with_their_user() {
    let state = make_test_state();
    let app = router(state.clone());
    let registered = send(&app, "POST", "/users?passport_number=1234%20567890", None).await;
    let user_id = json_body(registered).await["id"].as_i64().unwrap();
    let created = send(
        &app,
        "POST",
        "/tasks",
        Some(json!({ "user_id": user_id, "name": "write spec" })),
    )
    .await;
    let task_id = json_body(created).await["id"].as_i64().unwrap();

    let deleted = send(&app, "DELETE", &format!("/users/{user_id}"), None).await;
    assert_eq!(deleted.status(), StatusCode::OK);

    assert!(state.tasks.find(task_id).await.unwrap().is_none());
    let closed = send(
        &app,
        "PUT",
        &format!("/tasks/{task_id}"),
        Some(json!({ "user_id": user_id })),
    )
    .await;
    assert_eq!(closed.status(), StatusCode::NOT_FOUND);
}
