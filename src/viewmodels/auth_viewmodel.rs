// ============================================================================
// AUTH VIEWMODEL - session/auth reconciler
// ============================================================================
// Owns the auth state cell and every operation that mutates it. Reacts to the
// backend client's lifecycle events for the app lifetime; profile loads run
// in the background, time-boxed, and never block authentication.
// ============================================================================

use chrono::Utc;
use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::config::CONFIG;
use crate::models::{is_invalid_refresh_token, ProfileUpdate, Session, UserMetadata};
use crate::services::{self, SupabaseClient};
use crate::state::{AuthEvent, AuthSnapshot, ReactiveState};

#[derive(Clone)]
pub struct AuthViewModel {
    client: SupabaseClient,
    state: ReactiveState<AuthSnapshot>,
}

impl AuthViewModel {
    pub fn new() -> Self {
        Self::with_client(SupabaseClient::new())
    }

    pub fn with_client(client: SupabaseClient) -> Self {
        let vm = Self {
            client,
            state: ReactiveState::new(AuthSnapshot::default()),
        };

        // Subscribe for the app lifetime
        let handler = vm.clone();
        vm.client.on_auth_state_change(move |event| {
            handler.handle_auth_event(event.clone());
        });

        vm
    }

    pub fn state(&self) -> ReactiveState<AuthSnapshot> {
        self.state.clone()
    }

    pub fn client(&self) -> &SupabaseClient {
        &self.client
    }

    // ------------------------------------------------------------------
    // Initialization protocol (runs once at startup)
    // ------------------------------------------------------------------

    pub async fn initialize(&self) {
        log::info!("🚀 Auth init: checking for a persisted session...");

        match self.client.get_session().await {
            Ok(Some(session)) => {
                log::info!(
                    "✅ Session restored for {}",
                    session.user.email.as_deref().unwrap_or("<no email>")
                );
                self.state
                    .update(|s| s.adopt_session(session.clone(), Utc::now()));
                self.spawn_profile_load(session);
            }
            Ok(None) => {
                log::info!("ℹ️ No persisted session");
                self.state.update(|s| s.is_loading = false);
            }
            Err(e) if is_invalid_refresh_token(&e) => {
                log::warn!("⚠️ Invalid refresh token at startup, purging credentials");
                self.clear_invalid_session().await;
            }
            Err(e) => {
                log::error!("❌ Session retrieval failed: {}", e);
                self.state.update(|s| s.is_loading = false);
            }
        }
    }

    // ------------------------------------------------------------------
    // Event subscription protocol (runs for the app lifetime)
    // ------------------------------------------------------------------

    fn handle_auth_event(&self, event: AuthEvent) {
        match event {
            AuthEvent::SignedIn(session) => {
                log::info!("🔑 Auth event: signed-in");
                self.state
                    .update(|s| s.adopt_session(session.clone(), Utc::now()));
                self.spawn_profile_load(session);
            }
            AuthEvent::SignedOut => {
                log::info!("🔒 Auth event: signed-out");
                self.state.update(|s| s.force_signed_out());
            }
            AuthEvent::TokenRefreshed(session) => {
                // Silent refresh: swap the session, nothing else. Resetting
                // flags or reloading the profile here causes UI flicker.
                self.state.update(|s| s.replace_session(session));
            }
            AuthEvent::InitialSession(_) => {
                // Already handled by initialize(); processing it again would
                // double-adopt the startup session.
            }
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Password sign-in. Errors are normalized to one generic message; the
    /// loading flag is always cleared on exit.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), String> {
        self.state.update(|s| s.is_loading = true);
        let result = self.client.sign_in_with_password(email, password).await;
        self.state.update(|s| s.is_loading = false);

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                log::error!("❌ Login failed: {}", e);
                Err("Login failed. Please check your credentials and try again.".to_string())
            }
        }
    }

    /// Sign-up with profile fields as identity metadata. A backend
    /// "Database error" gets a distinct user-facing message; other messages
    /// pass through.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        metadata: UserMetadata,
    ) -> Result<(), String> {
        self.state.update(|s| s.is_loading = true);
        let result = self.client.sign_up(email, password, metadata).await;
        self.state.update(|s| s.is_loading = false);

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                log::error!("❌ Registration failed: {}", e);
                Err(normalize_register_error(e))
            }
        }
    }

    /// Sign-out. State clearing happens via the signed-out event, not here.
    pub async fn logout(&self) {
        if let Err(e) = self.client.sign_out().await {
            log::warn!("⚠️ Remote sign-out failed: {}", e);
        }
    }

    /// Patch the remote profile row, then reload the profile. No-ops when no
    /// user is active.
    pub async fn update_profile(&self, patch: ProfileUpdate) -> Result<(), String> {
        let snapshot = self.state.snapshot();
        let (session, user) = match (snapshot.session, snapshot.user) {
            (Some(session), Some(user)) => (session, user),
            _ => return Ok(()),
        };

        services::update_profile(&self.client, &session.access_token, &user.identity.id, &patch)
            .await?;
        log::info!("✅ Profile updated");

        self.refresh_user().await;
        Ok(())
    }

    /// Re-run the profile-load path for the current session, if any
    pub async fn refresh_user(&self) {
        let session = match self.state.with(|s| s.session.clone()) {
            Some(session) => session,
            None => return,
        };
        self.load_profile_time_boxed(session).await;
    }

    /// Best-effort purge of persisted credentials plus backend sign-out.
    /// Local state is forced to signed-out regardless of what the purge did -
    /// the app must never stay stuck believing it is authenticated on top of
    /// corrupt credentials.
    pub async fn clear_invalid_session(&self) {
        log::warn!("🧹 Purging invalid session state");
        self.client.clear_persisted_session();

        if let Err(e) = self.client.sign_out().await {
            log::warn!("⚠️ Sign-out during purge failed: {}", e);
        }

        self.state.update(|s| s.force_signed_out());
    }

    /// Refresh the access token when it nears expiry. Called from a periodic
    /// timer while a session is active.
    pub async fn maybe_refresh_token(&self) {
        let session = match self.state.with(|s| s.session.clone()) {
            Some(session) => session,
            None => return,
        };

        let now_secs = (js_sys::Date::now() / 1000.0) as i64;
        if !session.needs_refresh(now_secs, CONFIG.auth_config.session_refresh_margin_secs) {
            return;
        }

        match self.client.refresh_session(&session.refresh_token).await {
            // The token-refreshed event swaps the session in
            Ok(_) => {}
            Err(e) if is_invalid_refresh_token(&e) => {
                log::warn!("⚠️ Refresh token rejected, purging credentials");
                self.clear_invalid_session().await;
            }
            Err(e) => log::warn!("⚠️ Token refresh failed: {}", e),
        }
    }

    // ------------------------------------------------------------------
    // Background profile loading
    // ------------------------------------------------------------------

    /// Fire-and-forget load of the real profile. The caller keeps going with
    /// the fallback profile installed at adoption time.
    fn spawn_profile_load(&self, session: Session) {
        let vm = self.clone();
        spawn_local(async move {
            vm.load_profile_time_boxed(session).await;
        });
    }

    /// Race the profile load against a fixed timeout. A timeout or error is
    /// logged, not surfaced - the fallback profile stays in place. A result
    /// arriving after the session generation changed is discarded.
    async fn load_profile_time_boxed(&self, session: Session) {
        let started_epoch = self.state.with(|s| s.epoch);
        let timeout_ms = CONFIG.auth_config.profile_load_timeout_ms;

        let load = Box::pin(services::load_or_create_profile(
            &self.client,
            &session.access_token,
            &session.user,
        ));
        let timeout = Box::pin(TimeoutFuture::new(timeout_ms));

        let result = match select(load, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => {
                log::warn!(
                    "⏱️ Profile load exceeded {}ms, keeping fallback profile",
                    timeout_ms
                );
                return;
            }
        };

        // The session generation moved while we were away (sign-out or a new
        // sign-in): this result belongs to a dead session, drop it.
        let current_epoch = self.state.with(|s| s.epoch);
        if current_epoch != started_epoch {
            log::info!(
                "🗑️ Discarding stale profile load (epoch {} -> {})",
                started_epoch,
                current_epoch
            );
            return;
        }

        match result {
            Ok(Some((profile, origin))) => {
                log::info!("✅ Profile ready ({:?})", origin);
                self.state.update(|s| s.install_profile(profile, origin));
            }
            Ok(None) => {
                log::info!("ℹ️ No profile row available, fallback profile stays");
            }
            Err(e) => {
                log::warn!("⚠️ Profile load failed: {} (fallback profile stays)", e);
            }
        }
    }
}

impl Default for AuthViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Map the backend's opaque "Database error" to something a member can act
/// on; every other message passes through unchanged.
fn normalize_register_error(error: String) -> String {
    if error.contains("Database error") {
        "Registration could not be completed right now. Please try again in a few minutes."
            .to_string()
    } else {
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_gets_a_friendly_message() {
        let mapped = normalize_register_error("Auth error (500): Database error saving new user".into());
        assert!(mapped.contains("try again in a few minutes"));
    }

    #[test]
    fn other_register_errors_pass_through() {
        let message = "Auth error (422): User already registered".to_string();
        assert_eq!(normalize_register_error(message.clone()), message);
    }
}
