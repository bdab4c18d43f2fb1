//! MongoDB client configuration, connection and health probes

mod config;
mod connector;
mod health;

pub use config::{DATABASE_VARS, MongoConfig, URL_VARS};
pub use connector::{MongoError, build_client};
pub use health::{HealthStatus, check_health_detailed, list_collections};

pub use mongodb::{Client, Collection, Database};
