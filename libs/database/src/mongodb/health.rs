use super::MongoError;
use mongodb::{Client, Database, bson::doc};
use std::time::Instant;

/// Outcome of a timed ping
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    /// Error text when unhealthy
    pub message: Option<String>,
    pub response_time_ms: u64,
}

/// Ping with timing and error text
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let start = Instant::now();
    let result = ping(client).await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    HealthStatus {
        healthy: result.is_ok(),
        message: result.err().map(|e| e.to_string()),
        response_time_ms,
    }
}

/// Names of up to `limit` collections in `db`, in server order.
pub async fn list_collections(db: &Database, limit: usize) -> Result<Vec<String>, MongoError> {
    let mut names = db.list_collection_names().await?;
    names.truncate(limit);
    Ok(names)
}

async fn ping(client: &Client) -> Result<(), mongodb::error::Error> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
}
