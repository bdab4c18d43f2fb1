//! Event domain models

use crate::error::{EventError, Result};
use chrono::{NaiveDate, NaiveTime};
use mongodb::bson::{self, Document, doc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Collection holding event documents
pub const EVENT_COLLECTION: &str = "event";

/// Message returned after a successful create
pub const EVENT_CREATED: &str = "Event created";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated event, defaults applied.
///
/// Built from an untyped request body with [`CreateEvent::from_json`]; the
/// identifier is never part of it, the store assigns one on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEvent {
    /// Event title
    #[validate(length(min = 1, message = "must not be empty"))]
    #[schema(example = "Tech Symposium 2025")]
    pub title: String,

    /// Detailed description of the event
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,

    /// Calendar date (YYYY-MM-DD)
    #[schema(example = "2025-05-01")]
    pub event_date: NaiveDate,

    /// Free-form time, e.g. "5:00 PM"
    #[schema(example = "10:00 AM")]
    pub event_time: String,

    /// Venue or location
    #[validate(length(min = 1, message = "must not be empty"))]
    pub location: String,

    /// Category such as Tech, Cultural, Sports, Workshop
    #[validate(length(min = 1, message = "must not be empty"))]
    #[schema(example = "Tech")]
    pub category: String,

    /// Cover image URL
    #[serde(default)]
    pub cover_image: Option<String>,

    /// Searchable tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Whether this is a featured event
    #[serde(default)]
    pub is_featured: bool,
}

impl CreateEvent {
    /// Lift an untyped JSON body into a validated event.
    ///
    /// Every offending field is reported in one message, `field: reason`
    /// joined with `; `. Unknown keys (including any caller-supplied id) are
    /// dropped.
    pub fn from_json(input: Value) -> Result<Self> {
        let Value::Object(mut fields) = input else {
            return Err(EventError::validation("request body must be a JSON object"));
        };

        let mut problems = Vec::new();

        let title = required::<String>(&mut fields, "title", &mut problems);
        let description = required::<String>(&mut fields, "description", &mut problems);
        let event_date = required::<String>(&mut fields, "event_date", &mut problems)
            .and_then(|raw| parse_date("event_date", &raw, &mut problems));
        let event_time = required::<String>(&mut fields, "event_time", &mut problems);
        let location = required::<String>(&mut fields, "location", &mut problems);
        let category = required::<String>(&mut fields, "category", &mut problems);
        let cover_image = optional::<String>(&mut fields, "cover_image", &mut problems);
        let tags = optional::<Vec<String>>(&mut fields, "tags", &mut problems);
        let is_featured = optional::<bool>(&mut fields, "is_featured", &mut problems);

        let event = Self {
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
            event_date: event_date.unwrap_or_default(),
            event_time: event_time.unwrap_or_default(),
            location: location.unwrap_or_default(),
            category: category.unwrap_or_default(),
            cover_image,
            tags: tags.unwrap_or_default(),
            is_featured: is_featured.unwrap_or(false),
        };

        // Skip fields already reported as missing or mistyped
        if let Err(errors) = event.validate() {
            for (field, field_errors) in errors.field_errors() {
                let prefix = format!("{}:", field);
                if problems.iter().any(|p| p.starts_with(&prefix)) {
                    continue;
                }
                for error in field_errors {
                    let reason = error.message.as_deref().unwrap_or("invalid value");
                    problems.push(format!("{} {}", prefix, reason));
                }
            }
        }

        if problems.is_empty() {
            Ok(event)
        } else {
            Err(EventError::validation(problems.join("; ")))
        }
    }

    /// Document written to the store. Internal key names, no identifier.
    pub fn to_storage_record(&self) -> Document {
        doc! {
            "title": self.title.as_str(),
            "description": self.description.as_str(),
            "event_date": date_to_bson(self.event_date),
            "event_time": self.event_time.as_str(),
            "location": self.location.as_str(),
            "category": self.category.as_str(),
            "cover_image": self.cover_image.as_deref(),
            "tags": self.tags.clone(),
            "is_featured": self.is_featured,
        }
    }
}

fn required<T: DeserializeOwned>(
    fields: &mut Map<String, Value>,
    key: &str,
    problems: &mut Vec<String>,
) -> Option<T> {
    match fields.remove(key) {
        None | Some(Value::Null) => {
            problems.push(format!("{}: field required", key));
            None
        }
        Some(value) => lift(key, value, problems),
    }
}

fn optional<T: DeserializeOwned>(
    fields: &mut Map<String, Value>,
    key: &str,
    problems: &mut Vec<String>,
) -> Option<T> {
    match fields.remove(key) {
        None | Some(Value::Null) => None,
        Some(value) => lift(key, value, problems),
    }
}

fn lift<T: DeserializeOwned>(key: &str, value: Value, problems: &mut Vec<String>) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            problems.push(format!("{}: {}", key, e));
            None
        }
    }
}

fn parse_date(key: &str, raw: &str, problems: &mut Vec<String>) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            problems.push(format!(
                "{}: expected an ISO-8601 date (YYYY-MM-DD), got {:?} ({})",
                key, raw, e
            ));
            None
        }
    }
}

/// Dates are stored as BSON datetimes at midnight UTC.
pub(crate) fn date_to_bson(date: NaiveDate) -> bson::DateTime {
    bson::DateTime::from_millis(date.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
}

/// Query options for listing events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventFilter {
    /// Filter by category (exact match)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Filter by featured flag; `false` only matches non-featured events.
    /// Accepts `true/false`, `1/0`, `yes/no`, `on/off`, `t/f` and `y/n` in any case.
    #[serde(
        default,
        deserialize_with = "lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub featured: Option<bool>,
}

/// Query-string flag parsing; an empty value counts as absent.
fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(Some(true)),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(Some(false)),
        _ => Err(de::Error::custom(format!(
            "featured: expected a boolean, got {:?}",
            raw
        ))),
    }
}

impl EventFilter {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    /// Equality query over storage keys. An empty category is treated as absent.
    pub fn to_query(&self) -> Document {
        let mut query = Document::new();

        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            query.insert("category", category);
        }

        if let Some(featured) = self.featured {
            query.insert("is_featured", featured);
        }

        query
    }
}

/// Listing response
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EventList {
    /// Events in store order, in their API shape
    #[schema(value_type = Vec<Object>)]
    pub events: Vec<Value>,
}

/// Create response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedEvent {
    /// Identifier assigned by the store
    pub id: String,
    pub message: String,
}

impl CreatedEvent {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: EVENT_CREATED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;
    use serde_json::json;

    fn minimal_body() -> Value {
        json!({
            "title": "X",
            "description": "Y",
            "event_date": "2025-05-01",
            "event_time": "5 PM",
            "location": "Hall A",
            "category": "Tech"
        })
    }

    #[test]
    fn test_minimal_body_applies_defaults() {
        let event = CreateEvent::from_json(minimal_body()).unwrap();

        assert_eq!(event.title, "X");
        assert_eq!(event.event_date, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        assert_eq!(event.event_time, "5 PM");
        assert!(event.tags.is_empty());
        assert!(!event.is_featured);
        assert_eq!(event.cover_image, None);
    }

    #[test]
    fn test_each_required_field_is_enforced() {
        for field in [
            "title",
            "description",
            "event_date",
            "event_time",
            "location",
            "category",
        ] {
            let mut body = minimal_body();
            body.as_object_mut().unwrap().remove(field);

            let err = CreateEvent::from_json(body).unwrap_err();
            assert!(err.is_validation());
            assert!(
                err.to_string().contains(field),
                "error for missing {} was: {}",
                field,
                err
            );
        }
    }

    #[test]
    fn test_null_required_field_is_missing() {
        let mut body = minimal_body();
        body["event_date"] = Value::Null;

        let err = CreateEvent::from_json(body).unwrap_err();
        assert!(err.to_string().contains("event_date: field required"));
    }

    #[test]
    fn test_all_problems_reported_together() {
        let err = CreateEvent::from_json(json!({
            "title": "X",
            "description": "Y",
            "event_time": "5 PM",
            "location": "Hall A",
            "tags": "not-a-list"
        }))
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("event_date"));
        assert!(message.contains("category"));
        assert!(message.contains("tags"));
    }

    #[test]
    fn test_optional_fields_accepted() {
        let mut body = minimal_body();
        let fields = body.as_object_mut().unwrap();
        fields.insert("cover_image".into(), json!("https://example.com/c.png"));
        fields.insert("tags".into(), json!(["b", "a"]));
        fields.insert("is_featured".into(), json!(true));

        let event = CreateEvent::from_json(body).unwrap();
        assert_eq!(event.cover_image.as_deref(), Some("https://example.com/c.png"));
        assert_eq!(event.tags, vec!["b".to_string(), "a".to_string()]);
        assert!(event.is_featured);
    }

    #[test]
    fn test_null_optionals_use_defaults() {
        let mut body = minimal_body();
        let fields = body.as_object_mut().unwrap();
        fields.insert("cover_image".into(), Value::Null);
        fields.insert("tags".into(), Value::Null);
        fields.insert("is_featured".into(), Value::Null);

        let event = CreateEvent::from_json(body).unwrap();
        assert_eq!(event.cover_image, None);
        assert!(event.tags.is_empty());
        assert!(!event.is_featured);
    }

    #[test]
    fn test_wrong_types_rejected() {
        let mut body = minimal_body();
        body["is_featured"] = json!("yes");
        let err = CreateEvent::from_json(body).unwrap_err();
        assert!(err.to_string().contains("is_featured"));

        let mut body = minimal_body();
        body["tags"] = json!(["ok", 3]);
        let err = CreateEvent::from_json(body).unwrap_err();
        assert!(err.to_string().contains("tags"));

        let mut body = minimal_body();
        body["event_time"] = json!(17);
        let err = CreateEvent::from_json(body).unwrap_err();
        assert!(err.to_string().contains("event_time"));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let mut body = minimal_body();
        body["event_date"] = json!("2025-02-30");

        let err = CreateEvent::from_json(body).unwrap_err();
        assert!(err.to_string().contains("event_date"));
    }

    #[test]
    fn test_empty_text_rejected() {
        let mut body = minimal_body();
        body["title"] = json!("");

        let err = CreateEvent::from_json(body).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_empty_text_reported_with_missing_field() {
        let err = CreateEvent::from_json(json!({
            "title": "",
            "description": "Y",
            "event_time": "5 PM",
            "location": "Hall A",
            "category": "Tech"
        }))
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("event_date: field required"), "{}", message);
        assert!(message.contains("title: must not be empty"), "{}", message);
    }

    #[test]
    fn test_missing_text_field_reported_once() {
        let mut body = minimal_body();
        body.as_object_mut().unwrap().remove("location");

        let err = CreateEvent::from_json(body).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: location: field required");
    }

    #[test]
    fn test_non_object_body_rejected() {
        let err = CreateEvent::from_json(json!(["title"])).unwrap_err();
        assert!(err.to_string().contains("JSON object"));
    }

    #[test]
    fn test_caller_id_is_ignored() {
        let mut body = minimal_body();
        body["_id"] = json!("abc");
        body["id"] = json!("def");

        let record = CreateEvent::from_json(body).unwrap().to_storage_record();
        assert!(!record.contains_key("_id"));
        assert!(!record.contains_key("id"));
    }

    #[test]
    fn test_storage_record_uses_internal_keys() {
        let record = CreateEvent::from_json(minimal_body())
            .unwrap()
            .to_storage_record();

        assert_eq!(record.get_str("event_time").unwrap(), "5 PM");
        assert!(matches!(record.get("event_date"), Some(Bson::DateTime(_))));
        assert_eq!(record.get("cover_image"), Some(&Bson::Null));
        assert_eq!(record.get_array("tags").unwrap().len(), 0);
        assert!(!record.get_bool("is_featured").unwrap());
        assert!(!record.contains_key("date"));
        assert!(!record.contains_key("time"));
    }

    #[test]
    fn test_date_stored_at_midnight_utc() {
        let stored = date_to_bson(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        assert_eq!(stored.timestamp_millis(), 1_746_057_600_000);
    }

    #[test]
    fn test_filter_query() {
        assert!(EventFilter::default().to_query().is_empty());

        let query = EventFilter::default()
            .with_category("Tech")
            .with_featured(false)
            .to_query();
        assert_eq!(query, doc! { "category": "Tech", "is_featured": false });
    }

    #[test]
    fn test_filter_accepts_boolean_spellings() {
        let parse = |value: &str| -> Option<bool> {
            serde_json::from_value::<EventFilter>(json!({ "featured": value }))
                .unwrap()
                .featured
        };

        for value in ["true", "1", "True", "YES", "on", "y"] {
            assert_eq!(parse(value), Some(true), "{}", value);
        }
        for value in ["false", "0", "False", "no", "OFF", "n"] {
            assert_eq!(parse(value), Some(false), "{}", value);
        }
        assert_eq!(parse(""), None);
        assert!(serde_json::from_value::<EventFilter>(json!({ "featured": "maybe" })).is_err());
    }

    #[test]
    fn test_filter_ignores_empty_category() {
        let query = EventFilter::default().with_category("").to_query();
        assert!(query.is_empty());
    }

    #[test]
    fn test_created_event_message() {
        let created = CreatedEvent::new("65f0c0ffee");
        assert_eq!(created.message, "Event created");
        assert_eq!(created.id, "65f0c0ffee");
    }
}
