use serde::{Deserialize, Serialize};

/// Marketplace listing row
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Listing {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub seller_id: String,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_currency() -> String {
    "KES".to_string()
}

impl Listing {
    pub fn is_available(&self) -> bool {
        self.status == "available"
    }

    pub fn display_price(&self) -> String {
        format!("{} {:.2}", self.currency, self.price)
    }
}
