use serde::{Deserialize, Serialize};

/// Identity metadata attached at sign-up and mirrored on the auth user
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct UserMetadata {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Authenticated identity object as returned by the auth endpoint
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Backend-issued credential bundle for an authenticated connection
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Unix timestamp (seconds) at which the access token expires
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub refresh_token: String,
    pub user: AuthUser,
}

impl Session {
    /// True when the access token is expired or expires within `margin_secs`
    pub fn needs_refresh(&self, now_secs: i64, margin_secs: i64) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at - now_secs <= margin_secs,
            // No expiry on the bundle: be conservative and refresh
            None => true,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    /// Profile fields carried as identity metadata
    pub data: UserMetadata,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Error payload shapes the auth endpoint responds with
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct AuthErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthErrorBody {
    /// Best message available in the payload
    pub fn message(&self) -> Option<String> {
        self.error_description
            .clone()
            .or_else(|| self.msg.clone())
            .or_else(|| self.message.clone())
            .or_else(|| self.error.clone())
    }
}

/// Detect the invalid/expired refresh token error class by its signature.
/// The backend reports it as an error code or as a message substring.
pub fn is_invalid_refresh_token(error: &str) -> bool {
    error.contains("refresh_token_not_found")
        || error.contains("Invalid Refresh Token")
        || error.contains("invalid_grant")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_invalid_refresh_token_signatures() {
        assert!(is_invalid_refresh_token("refresh_token_not_found"));
        assert!(is_invalid_refresh_token("Auth error: Invalid Refresh Token: Already Used"));
        assert!(!is_invalid_refresh_token("HTTP error: 500"));
    }

    #[test]
    fn session_refresh_margin() {
        let session = Session {
            access_token: "at".into(),
            token_type: Some("bearer".into()),
            expires_in: Some(3600),
            expires_at: Some(1_000),
            refresh_token: "rt".into(),
            user: AuthUser {
                id: "uid".into(),
                email: Some("a@b.c".into()),
                user_metadata: UserMetadata::default(),
            },
        };
        assert!(!session.needs_refresh(0, 60));
        assert!(session.needs_refresh(950, 60));
        assert!(session.needs_refresh(2_000, 60));
    }
}
