//! Routes nested under `/api` by `axum_helpers::create_router`

pub mod events;

use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Plain `{message}` body
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/events", events::router(state))
        .route("/hello", get(hello))
}

/// Greeting used by the frontend to check it can reach the API
#[utoipa::path(
    get,
    path = "/api/hello",
    responses((status = 200, description = "Greeting", body = MessageResponse)),
    tag = "meta"
)]
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!",
    })
}
