//! Events Domain
//!
//! Campus event records stored in MongoDB:
//! - validation of untyped request bodies into [`CreateEvent`]
//! - storage documents keyed `_id` / `event_date` / `event_time`, served to
//!   clients as `id` / `date` / `time`
//! - best-effort seeding of three demo events into an empty collection
//!
//! ```text
//! POST /api/events ─► CreateEvent::from_json ─► to_storage_record ─► MongoDB
//! GET  /api/events ─► seed_if_empty ─► MongoDB find ─► to_api_record ─► {events}
//! ```

use axum_helpers::errors::responses::{BadRequestResponse, InternalServerErrorResponse};
use utoipa::OpenApi;

mod error;
pub mod handlers;
mod mapping;
mod models;
mod mongodb;
mod repository;
mod seed;
mod service;

pub use error::{EventError, Result};
pub use handlers::{EventsState, events_router};
pub use mapping::{to_api_json, to_api_record};
pub use models::{
    CreateEvent, CreatedEvent, EVENT_COLLECTION, EVENT_CREATED, EventFilter, EventList,
};
pub use self::mongodb::MongoEventRepository;
pub use repository::EventRepository;
pub use seed::{sample_events, seed_if_empty};
pub use service::EventService;

/// OpenAPI documentation for Events API
#[derive(OpenApi)]
#[openapi(
    paths(handlers::list_events, handlers::create_event),
    components(
        schemas(CreateEvent, CreatedEvent, EventFilter, EventList),
        responses(BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "events", description = "Campus events stored in MongoDB")
    )
)]
pub struct ApiDoc;
