// ============================================================================
// AUTH STATE - session/auth state machine
// ============================================================================
// Single source of truth for {session, user, is_manually_authenticated,
// is_loading}. Mutations happen through the transition methods below; the
// epoch counter lets in-flight background work detect that the session
// generation changed underneath it.
// ============================================================================

use chrono::{DateTime, Utc};

use crate::models::{AuthUser, Profile, ProfileOrigin, Session};

/// Auth lifecycle events emitted by the backend client
#[derive(Clone, PartialEq, Debug)]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
    TokenRefreshed(Session),
    /// Emitted once for the session found (or not) at startup. Ignored here:
    /// the initialization protocol already processed it.
    InitialSession(Option<Session>),
}

/// Authenticated identity plus whatever profile we currently hold for it
#[derive(Clone, PartialEq, Debug)]
pub struct CurrentUser {
    pub identity: AuthUser,
    pub profile: Profile,
    pub profile_origin: ProfileOrigin,
}

#[derive(Clone, PartialEq, Debug)]
pub struct AuthSnapshot {
    pub session: Option<Session>,
    pub user: Option<CurrentUser>,
    /// True only after an explicit auth action in this app lifetime (or a
    /// persisted session detected at startup) - distinct from raw session
    /// presence, and the flag navigation is gated on.
    pub is_manually_authenticated: bool,
    pub is_loading: bool,
    /// Session generation. Sign-in and sign-out bump it; a background profile
    /// load captures it at start and discards its result if it moved.
    pub epoch: u64,
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self {
            session: None,
            user: None,
            is_manually_authenticated: false,
            is_loading: true,
            epoch: 0,
        }
    }
}

impl AuthSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Adopt a session as the active one. Installs a fallback profile
    /// synchronously so the UI never waits on the network for a usable user.
    pub fn adopt_session(&mut self, session: Session, now: DateTime<Utc>) {
        let identity = session.user.clone();
        let profile = Profile::fallback_from_identity(&identity, now);

        self.session = Some(session);
        self.user = Some(CurrentUser {
            identity,
            profile,
            profile_origin: ProfileOrigin::Fallback,
        });
        self.is_manually_authenticated = true;
        self.is_loading = false;
        self.epoch += 1;
    }

    /// Reset to the signed-out state unconditionally
    pub fn force_signed_out(&mut self) {
        self.session = None;
        self.user = None;
        self.is_manually_authenticated = false;
        self.is_loading = false;
        self.epoch += 1;
    }

    /// Swap in the refreshed session without touching auth flags or the
    /// profile (a silent refresh must not cause refetches or UI flicker).
    /// There is nothing to update after a sign-out: a refresh that resolves
    /// late must not resurrect the session.
    pub fn replace_session(&mut self, session: Session) {
        if self.session.is_some() {
            self.session = Some(session);
        }
    }

    /// Attach a better-quality profile to the current user, if any
    pub fn install_profile(&mut self, profile: Profile, origin: ProfileOrigin) {
        if let Some(user) = self.user.as_mut() {
            user.profile = profile;
            user.profile_origin = origin;
        }
    }

    /// Process one backend auth lifecycle event
    pub fn apply_event(&mut self, event: AuthEvent, now: DateTime<Utc>) {
        match event {
            AuthEvent::SignedIn(session) => self.adopt_session(session, now),
            AuthEvent::SignedOut => self.force_signed_out(),
            AuthEvent::TokenRefreshed(session) => self.replace_session(session),
            AuthEvent::InitialSession(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserMetadata;
    use chrono::TimeZone;

    fn test_session(email: &str) -> Session {
        Session {
            access_token: "access".to_string(),
            token_type: Some("bearer".to_string()),
            expires_in: Some(3600),
            expires_at: Some(4_000_000_000),
            refresh_token: "refresh".to_string(),
            user: AuthUser {
                id: "uid-1".to_string(),
                email: Some(email.to_string()),
                user_metadata: UserMetadata::default(),
            },
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn signed_in_adopts_session_with_fallback_profile() {
        let mut state = AuthSnapshot::default();
        state.apply_event(AuthEvent::SignedIn(test_session("john.doe@example.com")), now());

        assert!(state.is_authenticated());
        assert!(state.is_manually_authenticated);
        assert!(!state.is_loading);
        assert_eq!(state.epoch, 1);

        // Fallback profile present synchronously, before any network round-trip
        let user = state.user.expect("user present");
        assert_eq!(user.profile_origin, ProfileOrigin::Fallback);
        assert_eq!(user.profile.first_name, "John");
        assert_eq!(user.profile.last_name, "Doe");
    }

    #[test]
    fn signed_out_clears_everything() {
        let mut state = AuthSnapshot::default();
        state.apply_event(AuthEvent::SignedIn(test_session("a@b.c")), now());
        state.apply_event(AuthEvent::SignedOut, now());

        assert!(state.session.is_none());
        assert!(state.user.is_none());
        assert!(!state.is_manually_authenticated);
        assert!(!state.is_loading);
        assert_eq!(state.epoch, 2);
    }

    #[test]
    fn token_refresh_swaps_session_only() {
        let mut state = AuthSnapshot::default();
        state.apply_event(AuthEvent::SignedIn(test_session("a@b.c")), now());

        let real_profile = Profile {
            id: "uid-1".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Borewa".to_string(),
            email: Some("a@b.c".to_string()),
            phone: None,
            membership_id: "MEM-001".to_string(),
            membership_status: "Active".to_string(),
            membership_type: "Full Member".to_string(),
            join_date: "2024-01-01".to_string(),
            total_donations: 100.0,
        };
        state.install_profile(real_profile.clone(), ProfileOrigin::Real);

        let mut refreshed = test_session("a@b.c");
        refreshed.access_token = "access-2".to_string();
        let epoch_before = state.epoch;
        state.apply_event(AuthEvent::TokenRefreshed(refreshed), now());

        // Flags, profile and epoch untouched; only the token bundle moved
        assert!(state.is_manually_authenticated);
        assert_eq!(state.epoch, epoch_before);
        let user = state.user.expect("user kept");
        assert_eq!(user.profile, real_profile);
        assert_eq!(user.profile_origin, ProfileOrigin::Real);
        assert_eq!(state.session.unwrap().access_token, "access-2");
    }

    #[test]
    fn late_token_refresh_after_sign_out_is_dropped() {
        let mut state = AuthSnapshot::default();
        state.apply_event(AuthEvent::SignedIn(test_session("a@b.c")), now());
        state.apply_event(AuthEvent::SignedOut, now());

        state.apply_event(AuthEvent::TokenRefreshed(test_session("a@b.c")), now());
        assert!(state.session.is_none());
        assert!(state.user.is_none());
    }

    #[test]
    fn initial_session_event_is_a_noop() {
        let mut state = AuthSnapshot::default();
        state.apply_event(
            AuthEvent::InitialSession(Some(test_session("a@b.c"))),
            now(),
        );
        assert!(state.session.is_none());
        assert!(state.is_loading);
        assert_eq!(state.epoch, 0);
    }

    #[test]
    fn install_profile_without_user_is_ignored() {
        let mut state = AuthSnapshot::default();
        let profile = Profile::fallback_from_identity(
            &AuthUser {
                id: "uid-1".to_string(),
                email: Some("a@b.c".to_string()),
                user_metadata: UserMetadata::default(),
            },
            now(),
        );
        state.install_profile(profile, ProfileOrigin::Real);
        assert!(state.user.is_none());
    }

    #[test]
    fn epoch_detects_stale_background_work() {
        let mut state = AuthSnapshot::default();
        state.apply_event(AuthEvent::SignedIn(test_session("a@b.c")), now());
        let started_at = state.epoch;

        // Sign-out happens while a profile load is still in flight
        state.apply_event(AuthEvent::SignedOut, now());
        assert_ne!(state.epoch, started_at);
    }
}
