use serde::{Deserialize, Serialize};

/// Community development project row
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    #[serde(default)]
    pub target_amount: Option<f64>,
    #[serde(default)]
    pub raised_amount: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Project {
    /// Funding progress in percent, clamped to 100
    pub fn progress_percent(&self) -> u32 {
        match (self.raised_amount, self.target_amount) {
            (Some(raised), Some(target)) if target > 0.0 => {
                (((raised / target) * 100.0) as u32).min(100)
            }
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        let mut project = Project {
            id: "p1".into(),
            title: "Borehole".into(),
            description: None,
            status: "active".into(),
            target_amount: Some(1_000.0),
            raised_amount: Some(1_500.0),
            created_at: None,
        };
        assert_eq!(project.progress_percent(), 100);

        project.raised_amount = Some(250.0);
        assert_eq!(project.progress_percent(), 25);

        project.target_amount = None;
        assert_eq!(project.progress_percent(), 0);
    }
}
