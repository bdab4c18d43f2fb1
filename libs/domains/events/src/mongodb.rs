//! MongoDB implementation of EventRepository

use crate::error::Result;
use crate::mapping::id_to_string;
use crate::models::{EVENT_COLLECTION, EventFilter};
use crate::repository::EventRepository;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, Document, doc};
use mongodb::{Collection, Database, IndexModel};
use tracing::instrument;

/// MongoDB-based event repository
#[derive(Clone)]
pub struct MongoEventRepository {
    collection: Collection<Document>,
}

impl MongoEventRepository {
    /// Create a new MongoDB event repository
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(EVENT_COLLECTION),
        }
    }

    /// Index backing the list filters
    pub async fn create_indexes(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "category": 1, "is_featured": 1 })
            .build();

        self.collection.create_index(index).await?;
        Ok(())
    }
}

#[async_trait]
impl EventRepository for MongoEventRepository {
    #[instrument(skip(self, record))]
    async fn create(&self, mut record: Document) -> Result<String> {
        let now = bson::DateTime::now();
        record.insert("created_at", now);
        record.insert("updated_at", now);

        let result = self.collection.insert_one(record).await?;
        Ok(id_to_string(result.inserted_id))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &EventFilter) -> Result<Vec<Document>> {
        let cursor = self.collection.find(filter.to_query()).await?;
        let records: Vec<Document> = cursor.try_collect().await?;
        Ok(records)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateEvent;
    use serde_json::json;

    async fn test_repository() -> MongoEventRepository {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = mongodb::Client::with_uri_str(&url).await.unwrap();
        let db = client.database(&format!("events_test_{}", bson::oid::ObjectId::new()));
        MongoEventRepository::new(&db)
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_create_then_list() {
        let repo = test_repository().await;
        assert_eq!(repo.count().await.unwrap(), 0);

        let event = CreateEvent::from_json(json!({
            "title": "X",
            "description": "Y",
            "event_date": "2025-05-01",
            "event_time": "5 PM",
            "location": "Hall A",
            "category": "Tech"
        }))
        .unwrap();
        let id = repo.create(event.to_storage_record()).await.unwrap();
        assert_eq!(id.len(), 24);

        let found = repo
            .list(&EventFilter::default().with_featured(false))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].contains_key("created_at"));

        let featured = repo
            .list(&EventFilter::default().with_featured(true))
            .await
            .unwrap();
        assert!(featured.is_empty());
    }
}
