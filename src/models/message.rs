use serde::{Deserialize, Serialize};

/// Announcement / message board row
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub author_name: Option<String>,
    /// RFC3339 publish time
    pub posted_at: String,
    #[serde(default)]
    pub pinned: bool,
}
