use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Community event row
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CommunityEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// RFC3339 start time
    pub starts_at: String,
    #[serde(default)]
    pub ends_at: Option<String>,
}

impl CommunityEvent {
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        match DateTime::parse_from_rfc3339(&self.starts_at) {
            Ok(starts) => starts.with_timezone(&Utc) >= now,
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn upcoming_uses_start_time() {
        let event = CommunityEvent {
            id: "e1".into(),
            title: "Annual General Meeting".into(),
            description: None,
            location: Some("Community Hall".into()),
            starts_at: "2025-12-01T10:00:00Z".into(),
            ends_at: None,
        };
        let before = Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 12, 2, 0, 0, 0).unwrap();
        assert!(event.is_upcoming(before));
        assert!(!event.is_upcoming(after));
    }
}
