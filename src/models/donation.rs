use serde::{Deserialize, Serialize};

/// Donation record row
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Donation {
    pub id: String,
    pub member_id: String,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub purpose: Option<String>,
    /// RFC3339 timestamp
    pub donated_at: String,
}

fn default_currency() -> String {
    "KES".to_string()
}

/// Sum of a member's donations, used for the membership card total
pub fn total_donated(donations: &[Donation]) -> f64 {
    donations.iter().map(|d| d.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_amounts() {
        let donations = vec![
            Donation {
                id: "d1".into(),
                member_id: "m1".into(),
                amount: 500.0,
                currency: "KES".into(),
                purpose: Some("Building fund".into()),
                donated_at: "2025-01-10T08:00:00Z".into(),
            },
            Donation {
                id: "d2".into(),
                member_id: "m1".into(),
                amount: 250.0,
                currency: "KES".into(),
                purpose: None,
                donated_at: "2025-02-10T08:00:00Z".into(),
            },
        ];
        assert_eq!(total_donated(&donations), 750.0);
        assert_eq!(total_donated(&[]), 0.0);
    }
}
