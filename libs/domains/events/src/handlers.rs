//! HTTP handlers for events API

use crate::models::{CreateEvent, CreatedEvent, EventFilter, EventList};
use crate::repository::EventRepository;
use crate::service::EventService;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_helpers::AppError;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Events router state
pub type EventsState<R> = Arc<EventService<R>>;

/// Create the events router
pub fn events_router<R: EventRepository + 'static>() -> Router<EventsState<R>> {
    Router::new().route("/", get(list_events::<R>).post(create_event::<R>))
}

/// List events, optionally filtered by category and featured flag
#[utoipa::path(
    get,
    path = "/",
    params(EventFilter),
    responses(
        (status = 200, description = "Events in store order", body = EventList),
        (status = 400, response = axum_helpers::errors::responses::BadRequestResponse),
        (status = 500, response = axum_helpers::errors::responses::InternalServerErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state, query))]
pub async fn list_events<R: EventRepository>(
    State(state): State<EventsState<R>>,
    query: Result<Query<EventFilter>, QueryRejection>,
) -> Result<Json<EventList>, AppError> {
    let Query(filter) = query?;
    let events = state.list(&filter).await?;
    Ok(Json(events))
}

/// Create a new event
#[utoipa::path(
    post,
    path = "/",
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event created", body = CreatedEvent),
        (status = 400, response = axum_helpers::errors::responses::BadRequestResponse),
        (status = 500, response = axum_helpers::errors::responses::InternalServerErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state, payload))]
pub async fn create_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = payload?;
    let created = state.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
