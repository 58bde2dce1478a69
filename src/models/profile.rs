use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::auth::AuthUser;

/// Where the profile currently attached to the user came from.
/// Quality degrades Real -> Default -> Fallback, never blocking authentication.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum ProfileOrigin {
    /// Loaded from the remote profiles table
    Real,
    /// Freshly inserted default row (no row existed yet)
    Default,
    /// Synthesized client-side from identity metadata
    Fallback,
}

/// Membership record, distinct from the backend identity record
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Profile {
    /// Identity id of the owning user (primary key of the profiles table)
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub membership_id: String,
    pub membership_status: String,
    pub membership_type: String,
    /// ISO date (YYYY-MM-DD)
    pub join_date: String,
    #[serde(default)]
    pub total_donations: f64,
}

/// Fields accepted by `update_profile`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_type: Option<String>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Synthesize a profile from the identity alone, so the UI is never blocked
    /// on the network. Explicit identity metadata wins over the email heuristic.
    pub fn fallback_from_identity(user: &AuthUser, now: DateTime<Utc>) -> Profile {
        let email = user.email.clone().unwrap_or_default();
        let (derived_first, derived_last) = derive_name_from_email(&email);

        let first_name = user
            .user_metadata
            .first_name
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or(derived_first);
        let last_name = user
            .user_metadata
            .last_name
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or(derived_last);

        Profile {
            id: user.id.clone(),
            first_name,
            last_name,
            email: user.email.clone(),
            phone: user.user_metadata.phone.clone(),
            membership_id: format!("MEM-{}", now.timestamp_millis()),
            membership_status: "Active".to_string(),
            membership_type: "Full Member".to_string(),
            join_date: now.format("%Y-%m-%d").to_string(),
            total_donations: 0.0,
        }
    }
}

/// Best-effort name guess from the email local part, split on '.', '_' and '-'.
/// Lossy by nature; only used when the real profile row is unavailable.
pub fn derive_name_from_email(email: &str) -> (String, String) {
    let local = email.split('@').next().unwrap_or("");
    let tokens: Vec<&str> = local
        .split(|c| c == '.' || c == '_' || c == '-')
        .filter(|t| !t.is_empty())
        .collect();

    let first = tokens.first().map(|t| capitalize(t)).unwrap_or_default();
    let last = tokens.get(1).map(|t| capitalize(t)).unwrap_or_default();
    (first, last)
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::UserMetadata;
    use chrono::TimeZone;

    fn identity(email: &str, metadata: UserMetadata) -> AuthUser {
        AuthUser {
            id: "uid-1".to_string(),
            email: Some(email.to_string()),
            user_metadata: metadata,
        }
    }

    #[test]
    fn derives_two_name_tokens_from_email() {
        assert_eq!(
            derive_name_from_email("john.doe@example.com"),
            ("John".to_string(), "Doe".to_string())
        );
        assert_eq!(
            derive_name_from_email("mary_wanjiku@example.com"),
            ("Mary".to_string(), "Wanjiku".to_string())
        );
        assert_eq!(
            derive_name_from_email("sam-otieno@example.com"),
            ("Sam".to_string(), "Otieno".to_string())
        );
    }

    #[test]
    fn single_token_email_leaves_last_name_empty() {
        assert_eq!(
            derive_name_from_email("admin@example.com"),
            ("Admin".to_string(), String::new())
        );
    }

    #[test]
    fn fallback_profile_prefers_identity_metadata() {
        let user = identity(
            "john.doe@example.com",
            UserMetadata {
                first_name: Some("Jonathan".to_string()),
                last_name: None,
                phone: Some("+254700000000".to_string()),
            },
        );
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let profile = Profile::fallback_from_identity(&user, now);

        assert_eq!(profile.first_name, "Jonathan");
        // No metadata last name: heuristic fills it in
        assert_eq!(profile.last_name, "Doe");
        assert_eq!(profile.phone.as_deref(), Some("+254700000000"));
        assert_eq!(profile.membership_status, "Active");
        assert_eq!(profile.membership_type, "Full Member");
        assert_eq!(profile.join_date, "2025-06-01");
        assert!(profile.membership_id.starts_with("MEM-"));
        assert_eq!(profile.total_donations, 0.0);
    }

    #[test]
    fn fallback_profile_from_bare_email() {
        let user = identity("john.doe@example.com", UserMetadata::default());
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let profile = Profile::fallback_from_identity(&user, now);

        assert_eq!(profile.first_name, "John");
        assert_eq!(profile.last_name, "Doe");
        assert_eq!(profile.full_name(), "John Doe");
    }
}
