//! Storage document to API shape
//!
//! Stored events keep their internal key names (`_id`, `event_date`,
//! `event_time`). Clients see `id`, `date` and `time` instead, so the two can
//! evolve independently.

use chrono::{DateTime, SecondsFormat, Utc};
use mongodb::bson::{self, Bson, Document};
use serde_json::Value;

const TIMESTAMP_FIELDS: [&str; 2] = ["created_at", "updated_at"];

/// Map a stored document to its API shape.
///
/// Total over any document: missing keys are skipped, unknown keys pass
/// through. Applying it to its own output changes nothing.
pub fn to_api_record(mut record: Document) -> Document {
    if let Some(id) = record.remove("_id") {
        record.insert("id", id_to_string(id));
    }

    if let Some(date) = record.remove("event_date") {
        record.insert("date", render_date(date));
    }

    if let Some(time) = record.remove("event_time") {
        record.insert("time", time);
    }

    for key in TIMESTAMP_FIELDS {
        let rendered = match record.get(key) {
            Some(Bson::DateTime(at)) => Some(render_timestamp(*at)),
            _ => None,
        };
        if let Some(rendered) = rendered {
            record.insert(key, rendered);
        }
    }

    record
}

/// API shape rendered as JSON (relaxed extended JSON for leftover BSON types)
pub fn to_api_json(record: Document) -> Value {
    Bson::Document(to_api_record(record)).into_relaxed_extjson()
}

/// String form of a store-assigned identifier
pub(crate) fn id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

fn render_date(value: Bson) -> Bson {
    match value {
        Bson::DateTime(at) => match to_chrono(at) {
            Some(at) => Bson::String(at.date_naive().to_string()),
            None => Bson::String(at.to_string()),
        },
        Bson::String(s) => Bson::String(s),
        other => Bson::String(other.to_string()),
    }
}

fn render_timestamp(at: bson::DateTime) -> String {
    match to_chrono(at) {
        Some(at) => at.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => at.to_string(),
    }
}

fn to_chrono(at: bson::DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(at.timestamp_millis())
}
