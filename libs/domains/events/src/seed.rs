//! Demo data for an empty collection

use crate::error::Result;
use crate::models::CreateEvent;
use crate::repository::EventRepository;
use chrono::{Datelike, NaiveDate};
use tracing::{info, instrument};

/// The three demo events, in insertion order.
pub fn sample_events(today: NaiveDate) -> Vec<CreateEvent> {
    let symposium_date = today.with_day(today.day().min(28)).unwrap_or(today);

    vec![
        CreateEvent {
            title: "Tech Symposium 2025".to_string(),
            description:
                "A showcase of cutting-edge projects, keynote talks, and hackathon finals."
                    .to_string(),
            event_date: symposium_date,
            event_time: "10:00 AM".to_string(),
            location: "Main Auditorium".to_string(),
            category: "Tech".to_string(),
            cover_image: Some(
                "https://images.unsplash.com/photo-1551836022-d5d88e9218df?q=80&w=1600&auto=format&fit=crop"
                    .to_string(),
            ),
            tags: tags(&["ai", "robotics", "talks"]),
            is_featured: true,
        },
        CreateEvent {
            title: "Cultural Night Fiesta".to_string(),
            description: "An evening of performances, fashion show, and food stalls.".to_string(),
            event_date: today,
            event_time: "06:30 PM".to_string(),
            location: "Open Air Theatre".to_string(),
            category: "Cultural".to_string(),
            cover_image: Some(
                "https://images.unsplash.com/photo-1515165562835-c3b8c0b1a3b0?q=80&w=1600&auto=format&fit=crop"
                    .to_string(),
            ),
            tags: tags(&["dance", "music", "food"]),
            is_featured: true,
        },
        CreateEvent {
            title: "Data Science Workshop".to_string(),
            description: "Hands-on bootcamp on Python, pandas, and ML pipelines.".to_string(),
            event_date: today,
            event_time: "02:00 PM".to_string(),
            location: "Lab Complex - 204".to_string(),
            category: "Workshop".to_string(),
            cover_image: Some(
                "https://images.unsplash.com/photo-1555949963-aa79dcee981d?q=80&w=1600&auto=format&fit=crop"
                    .to_string(),
            ),
            tags: tags(&["python", "ml", "workshop"]),
            is_featured: false,
        },
    ]
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

/// Insert the demo events one at a time if the collection is empty.
///
/// Returns how many were inserted. Not atomic: two concurrent callers can
/// both see zero and both insert.
#[instrument(skip(repository))]
pub async fn seed_if_empty<R>(repository: &R, today: NaiveDate) -> Result<usize>
where
    R: EventRepository + ?Sized,
{
    if repository.count().await? > 0 {
        return Ok(0);
    }

    let samples = sample_events(today);
    for event in &samples {
        repository.create(event.to_storage_record()).await?;
    }

    info!(count = samples.len(), "Seeded sample events");
    Ok(samples.len())
}
