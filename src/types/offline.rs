use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for one "save page offline" action.
///
/// Serialized as a single JSON line in the offline metadata log. `saved_at`
/// is written as an RFC 3339 timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfflinePageRecord {
    pub url: String,
    pub title: String,
    pub saved_at: DateTime<Utc>,
}
