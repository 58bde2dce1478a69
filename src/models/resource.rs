use serde::{Deserialize, Serialize};

/// Library resource row (documents, media, study material)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub category: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}
