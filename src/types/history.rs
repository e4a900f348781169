use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// A single visited-URL event as recorded by the browser window.
///
/// The history store persists entries as opaque strings; this type is the
/// string form the controller writes, `<rfc3339>\t<url>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub visited_at: DateTime<Utc>,
    pub url: String,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time.
    pub fn now(url: &str) -> Self {
        Self {
            visited_at: Utc::now(),
            url: url.to_string(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.visited_at.to_rfc3339(), self.url)
    }
}

impl FromStr for HistoryEntry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (stamp, url) = s
            .split_once('\t')
            .ok_or_else(|| format!("Missing tab separator in history entry: {}", s))?;
        let visited_at = DateTime::parse_from_rfc3339(stamp)
            .map_err(|e| format!("Invalid history timestamp '{}': {}", stamp, e))?
            .with_timezone(&Utc);
        Ok(Self {
            visited_at,
            url: url.to_string(),
        })
    }
}
