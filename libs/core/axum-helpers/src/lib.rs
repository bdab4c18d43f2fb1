//! # Axum Helpers
//!
//! Shared plumbing for the HTTP services in this workspace.
//!
//! - **[`server`]**: router assembly with Swagger UI, `/health`, graceful shutdown
//! - **[`http`]**: CORS and security headers middleware
//! - **[`errors`]**: [`AppError`] and the `{code, error, message, details}` body

pub mod errors;
pub mod http;
pub mod server;

pub use server::{
    HealthResponse, ShutdownCoordinator, create_production_app, create_router, health_router,
    shutdown_signal,
};

pub use http::{cors_from_env, create_cors_layer, create_mirror_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse, error_response};
