//! Root banner, readiness probe and the `/test` connectivity report.
//!
//! `/test` always answers 200; probe failures show up in the report text.

use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{AppError, errors::ErrorResponse};
use database::mongodb::{DATABASE_VARS, URL_VARS, check_health_detailed, list_collections};
use serde::Serialize;
use tracing::{instrument, warn};
use utoipa::ToSchema;

use crate::api::MessageResponse;
use crate::state::AppState;

/// Collections listed in the report
const MAX_COLLECTIONS: usize = 10;
/// Error text kept in the report
const MAX_ERROR_CHARS: usize = 50;

/// Outcome of the `/test` probe
#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    /// Whether a connection string variable is set
    pub database_url: String,
    /// Whether a database name variable is set
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// What the `/test` probe learned about MongoDB
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseProbe {
    /// Ping failed
    Unreachable(String),
    /// Ping answered but listing collections failed
    ListingFailed(String),
    /// Ping answered and collections were listed
    Listed(Vec<String>),
}

impl DiagnosticReport {
    /// Build the report from the probe outcome and the env checks.
    pub fn new(probe: DatabaseProbe, url_set: bool, name_set: bool) -> Self {
        let (database, connection_status, collections) = match probe {
            DatabaseProbe::Unreachable(e) => (
                format!("❌ Not Available: {}", truncate(&e)),
                "Not Connected",
                Vec::new(),
            ),
            DatabaseProbe::ListingFailed(e) => (
                format!("⚠️  Connected but Error: {}", truncate(&e)),
                "Connected",
                Vec::new(),
            ),
            DatabaseProbe::Listed(names) => {
                ("✅ Connected & Working".to_string(), "Connected", names)
            }
        };

        Self {
            backend: "✅ Running".to_string(),
            database,
            database_url: set_marker(url_set),
            database_name: set_marker(name_set),
            connection_status: connection_status.to_string(),
            collections,
        }
    }
}

fn truncate(error: &str) -> String {
    error.chars().take(MAX_ERROR_CHARS).collect()
}

fn set_marker(set: bool) -> String {
    if set { "✅ Set" } else { "❌ Not Set" }.to_string()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/test", get(test_database))
        .route("/ready", get(readiness))
        .with_state(state)
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is running", body = MessageResponse)),
    tag = "meta"
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "College Event Management Backend is running",
    })
}

/// Report backend and database status
#[utoipa::path(
    get,
    path = "/test",
    responses((status = 200, description = "Connectivity report", body = DiagnosticReport)),
    tag = "meta"
)]
#[instrument(skip(state))]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticReport> {
    let health = check_health_detailed(&state.mongo_client).await;

    let probe = if !health.healthy {
        let message = health.message.unwrap_or_default();
        warn!(error = %message, "MongoDB ping failed");
        DatabaseProbe::Unreachable(message)
    } else {
        match list_collections(&state.db, MAX_COLLECTIONS).await {
            Ok(names) => DatabaseProbe::Listed(names),
            Err(e) => {
                warn!(error = %e, "Listing collections failed");
                DatabaseProbe::ListingFailed(e.to_string())
            }
        }
    };

    Json(DiagnosticReport::new(
        probe,
        core_config::env_first(&URL_VARS).is_some(),
        core_config::env_first(&DATABASE_VARS).is_some(),
    ))
}

/// Readiness body
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub mongodb: bool,
    pub response_time_ms: u64,
}

/// Ready when MongoDB answers a ping
#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "MongoDB reachable", body = ReadyResponse),
        (status = 503, description = "MongoDB unreachable", body = ErrorResponse)
    ),
    tag = "meta"
)]
pub async fn readiness(State(state): State<AppState>) -> Result<Json<ReadyResponse>, AppError> {
    let health = check_health_detailed(&state.mongo_client).await;

    if !health.healthy {
        return Err(AppError::ServiceUnavailable(format!(
            "MongoDB unreachable after {}ms: {}",
            health.response_time_ms,
            health.message.unwrap_or_default()
        )));
    }

    Ok(Json(ReadyResponse {
        status: "ready",
        mongodb: true,
        response_time_ms: health.response_time_ms,
    }))
}
