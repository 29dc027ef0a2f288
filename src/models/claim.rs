use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Verified,
    Pending,
    Rejected,
}

/// A claim against a found item. Field names follow the wire contract the
/// frontend was written against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimTicket {
    pub id: String,
    #[serde(rename = "itemName")]
    pub item_name: String,
    #[serde(rename = "itemID")]
    pub item_id: String,
    pub status: ClaimStatus,
    pub date: DateTime<Utc>,
}
