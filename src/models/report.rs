use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A stored lost-item report. `extras` holds whatever additional fields the
/// client sent and is flattened back into the JSON representation, so the
/// wire shape matches what was submitted plus `id` and `timestamp`.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct LostItemReport {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "timestamp")]
    pub reported_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extras: Value,
}

/// A validated report ready for insertion. The timestamp and identity are
/// assigned by the store, never taken from the client.
#[derive(Debug, Clone)]
pub struct NewLostItem {
    pub name: String,
    pub description: String,
    pub location: String,
    pub extras: Value,
}

// Keys the server owns. Client-supplied values for these are discarded:
// the timestamp is stamped at insert, the identity is storage-assigned.
const RESERVED: [&str; 2] = ["timestamp", "id"];

impl NewLostItem {
    /// Sort an incoming JSON body into the required fields and `extras`.
    /// Returns `None` when the body is not an object or any of `name`,
    /// `description`, `location` is missing, non-string, or blank.
    pub fn from_payload(raw: &Value) -> Option<NewLostItem> {
        let obj = raw.as_object()?;

        let name = required_text(obj, "name")?;
        let description = required_text(obj, "description")?;
        let location = required_text(obj, "location")?;

        let mut extras = Map::new();
        for (key, value) in obj {
            if matches!(key.as_str(), "name" | "description" | "location")
                || RESERVED.contains(&key.as_str())
            {
                continue;
            }
            extras.insert(key.clone(), value.clone());
        }

        Some(NewLostItem {
            name,
            description,
            location,
            extras: Value::Object(extras),
        })
    }
}

fn required_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    let text = obj.get(key)?.as_str()?;
    if text.trim().is_empty() {
        return None;
    }
    Some(text.to_string())
}
