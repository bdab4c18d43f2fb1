//! OpenAPI document served at `/api-docs/openapi.json`

use axum_helpers::ErrorResponse;
use utoipa::OpenApi;

use crate::api::{self, MessageResponse};
use crate::diagnostics::{self, DiagnosticReport, ReadyResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campus Events API",
        version = "0.1.0",
        description = "College event listings stored in MongoDB"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        diagnostics::root,
        diagnostics::test_database,
        diagnostics::readiness,
        api::hello
    ),
    components(schemas(MessageResponse, DiagnosticReport, ReadyResponse, ErrorResponse)),
    nest(
        (path = "/api/events", api = domain_events::ApiDoc)
    ),
    tags(
        (name = "events", description = "Create and list campus events"),
        (name = "meta", description = "Banner, greeting, readiness and connectivity report")
    )
)]
pub struct ApiDoc;
