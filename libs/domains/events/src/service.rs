//! Event service layer

use crate::error::Result;
use crate::mapping::to_api_json;
use crate::models::{CreateEvent, CreatedEvent, EventFilter, EventList};
use crate::repository::EventRepository;
use crate::seed::seed_if_empty;
use chrono::Utc;
use serde_json::Value;
use tracing::{info, instrument, warn};

/// Create and list operations over an injected repository
pub struct EventService<R: EventRepository> {
    repository: R,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Best-effort seeding; failures are logged and swallowed so reads keep working.
    #[instrument(skip(self))]
    pub async fn ensure_seeded(&self) {
        if let Err(e) = seed_if_empty(&self.repository, Utc::now().date_naive()).await {
            warn!(error = %e, "Seeding sample events failed, continuing without them");
        }
    }

    /// List events in their API shape, seeding an empty collection first
    #[instrument(skip(self))]
    pub async fn list(&self, filter: &EventFilter) -> Result<EventList> {
        self.ensure_seeded().await;

        let records = self.repository.list(filter).await?;
        let events = records.into_iter().map(to_api_json).collect();
        Ok(EventList { events })
    }

    /// Validate and store a new event
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: Value) -> Result<CreatedEvent> {
        let event = CreateEvent::from_json(input)?;

        let id = self.repository.create(event.to_storage_record()).await?;
        info!(event_id = %id, category = %event.category, "Event stored in MongoDB");

        Ok(CreatedEvent::new(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EventError;
    use crate::repository::mock::MockEventRepository;
    use mockall::predicate::eq;
    use mongodb::bson::{Document, doc};
    use serde_json::json;

    fn body() -> Value {
        json!({
            "title": "X",
            "description": "Y",
            "event_date": "2025-05-01",
            "event_time": "5 PM",
            "location": "Hall A",
            "category": "Tech"
        })
    }

    #[tokio::test]
    async fn test_create_writes_storage_record() {
        let mut repo = MockEventRepository::new();
        repo.expect_create()
            .times(1)
            .withf(|record: &Document| {
                record.get_str("event_time").ok() == Some("5 PM")
                    && !record.contains_key("_id")
                    && record.get_bool("is_featured").ok() == Some(false)
            })
            .returning(|_| Ok("6650f1a2b3c4d5e6f7a8b9c0".to_string()));

        let service = EventService::new(repo);
        let created = service.create(body()).await.unwrap();

        assert_eq!(created.id, "6650f1a2b3c4d5e6f7a8b9c0");
        assert_eq!(created.message, "Event created");
    }

    #[tokio::test]
    async fn test_invalid_create_does_not_write() {
        let mut repo = MockEventRepository::new();
        repo.expect_create().never();

        let mut input = body();
        input.as_object_mut().unwrap().remove("event_date");

        let service = EventService::new(repo);
        let err = service.create(input).await.unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("event_date"));
    }

    #[tokio::test]
    async fn test_create_store_failure_is_database_error() {
        let mut repo = MockEventRepository::new();
        repo.expect_create()
            .returning(|_| Err(EventError::database("insert failed")));

        let service = EventService::new(repo);
        let err = service.create(body()).await.unwrap_err();
        assert!(!err.is_validation());
    }

    #[tokio::test]
    async fn test_list_maps_records_in_store_order() {
        let mut repo = MockEventRepository::new();
        repo.expect_count().returning(|| Ok(2));
        repo.expect_create().never();
        repo.expect_list()
            .with(eq(EventFilter::default().with_featured(false)))
            .returning(|_| {
                Ok(vec![
                    doc! { "_id": "b", "event_date": "2025-05-02", "event_time": "9 AM", "is_featured": false },
                    doc! { "_id": "a", "event_date": "2025-05-01", "event_time": "5 PM", "is_featured": false },
                ])
            });

        let service = EventService::new(repo);
        let list = service
            .list(&EventFilter::default().with_featured(false))
            .await
            .unwrap();

        assert_eq!(list.events.len(), 2);
        assert_eq!(list.events[0]["id"], json!("b"));
        assert_eq!(list.events[0]["date"], json!("2025-05-02"));
        assert_eq!(list.events[1]["time"], json!("5 PM"));
        assert!(list.events[1].get("event_time").is_none());
    }

    #[tokio::test]
    async fn test_list_seeds_empty_collection() {
        let mut repo = MockEventRepository::new();
        repo.expect_count().times(1).returning(|| Ok(0));
        repo.expect_create()
            .times(3)
            .returning(|_| Ok("seeded".to_string()));
        repo.expect_list().returning(|_| Ok(vec![]));

        let service = EventService::new(repo);
        service.list(&EventFilter::default()).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_survives_seeding_failure() {
        let mut repo = MockEventRepository::new();
        repo.expect_count()
            .returning(|| Err(EventError::database("count failed")));
        repo.expect_list().returning(|_| Ok(vec![]));

        let service = EventService::new(repo);
        let list = service.list(&EventFilter::default()).await.unwrap();
        assert!(list.events.is_empty());
    }

    #[tokio::test]
    async fn test_list_store_failure_propagates() {
        let mut repo = MockEventRepository::new();
        repo.expect_count().returning(|| Ok(1));
        repo.expect_list()
            .returning(|_| Err(EventError::database("find failed")));

        let service = EventService::new(repo);
        assert!(service.list(&EventFilter::default()).await.is_err());
    }
}
