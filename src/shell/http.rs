use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Json, Router,
    response::Html,
    routing::{get, put},
};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::modules::tasks::use_cases::close_task::inbound::http as close_task_http;
use crate::modules::tasks::use_cases::create_task::inbound::http as create_task_http;
use crate::modules::tasks::use_cases::delete_task::inbound::http as delete_task_http;
use crate::modules::tasks::use_cases::list_tasks_by_user::inbound::http as list_tasks_http;
use crate::modules::users::use_cases::delete_user::inbound::http as delete_user_http;
use crate::modules::users::use_cases::get_user::inbound::http as get_user_http;
use crate::modules::users::use_cases::list_users::inbound::http as list_users_http;
use crate::modules::users::use_cases::register_user::inbound::http as register_user_http;
use crate::modules::users::use_cases::update_user::inbound::http as update_user_http;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/health", get(health))
        .route(
            "/tasks",
            get(list_tasks_http::handle).post(create_task_http::handle),
        )
        .route(
            "/tasks/{id}",
            put(close_task_http::handle).delete(delete_task_http::handle),
        )
        .route(
            "/users",
            get(list_users_http::handle).post(register_user_http::handle),
        )
        .route(
            "/users/{id}",
            get(get_user_http::handle)
                .put(update_user_http::handle)
                .delete(delete_user_http::handle),
        )
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "service is available" }))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
