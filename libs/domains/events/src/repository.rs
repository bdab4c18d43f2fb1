//! Event repository trait

use crate::error::Result;
use crate::models::EventFilter;
use async_trait::async_trait;
use mongodb::bson::Document;

/// Storage operations over the `event` collection.
///
/// Records are raw documents: the store may hand back shapes the model never
/// wrote, and the read path has to tolerate them.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Insert one record, returning the identifier the store assigned
    async fn create(&self, record: Document) -> Result<String>;

    /// Records matching the filter, in store order
    async fn list(&self, filter: &EventFilter) -> Result<Vec<Document>>;

    /// Number of records in the collection
    async fn count(&self) -> Result<u64>;
}
