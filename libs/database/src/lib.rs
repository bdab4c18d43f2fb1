//! Database connectors for the services in this workspace.
//!
//! # Features
//!
//! - `mongodb` (default): MongoDB client configuration, lazy client construction, health probes
//! - `config` (default): `core_config::FromEnv` for [`mongodb::MongoConfig`]
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::mongodb::{MongoConfig, build_client};
//!
//! let config = MongoConfig::from_env()?;
//! let client = build_client(&config).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{RetryConfig, retry, retry_with_backoff};
