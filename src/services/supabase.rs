// ============================================================================
// SUPABASE CLIENT - auth + table access over the hosted backend's REST surface
// ============================================================================
// Auth goes through GoTrue (/auth/v1), table reads/writes through PostgREST
// (/rest/v1). The client owns session persistence in localStorage and a
// subscriber registry for auth lifecycle events, the in-crate equivalent of
// the SDK's onAuthStateChange.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};

use crate::config::CONFIG;
use crate::models::{
    AuthErrorBody, RefreshRequest, Session, SignInRequest, SignUpRequest, UserMetadata,
};
use crate::state::AuthEvent;
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_SESSION};

type AuthListener = Box<dyn Fn(&AuthEvent)>;

#[derive(Clone)]
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
    listeners: Rc<RefCell<Vec<AuthListener>>>,
}

impl SupabaseClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.supabase_url.clone(),
            anon_key: CONFIG.supabase_anon_key.clone(),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    // ------------------------------------------------------------------
    // Auth lifecycle events
    // ------------------------------------------------------------------

    /// Subscribe to auth lifecycle events (signed-in, signed-out,
    /// token-refreshed, initial-session). Listeners live for the app lifetime.
    pub fn on_auth_state_change<F>(&self, listener: F)
    where
        F: Fn(&AuthEvent) + 'static,
    {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    fn emit(&self, event: AuthEvent) {
        for listener in self.listeners.borrow().iter() {
            listener(&event);
        }
    }

    // ------------------------------------------------------------------
    // Auth operations
    // ------------------------------------------------------------------

    /// Password sign-in. Persists the session and emits signed-in on success.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, String> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        let body = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = Request::post(&url)
            .header("apikey", &self.anon_key)
            .json(&body)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Request error: {}", e))?;

        if !response.ok() {
            return Err(auth_error(response).await);
        }

        let session: Session = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        self.persist_session(&session);
        log::info!("🔐 Signed in: {}", email);
        self.emit(AuthEvent::SignedIn(session.clone()));
        Ok(session)
    }

    /// Sign-up with profile fields attached as identity metadata.
    /// Persists the session and emits signed-in on success.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: UserMetadata,
    ) -> Result<Session, String> {
        let url = format!("{}/auth/v1/signup", self.base_url);
        let body = SignUpRequest {
            email: email.to_string(),
            password: password.to_string(),
            data: metadata,
        };

        let response = Request::post(&url)
            .header("apikey", &self.anon_key)
            .json(&body)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Request error: {}", e))?;

        if !response.ok() {
            return Err(auth_error(response).await);
        }

        let session: Session = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        self.persist_session(&session);
        log::info!("📝 Registered: {}", email);
        self.emit(AuthEvent::SignedIn(session.clone()));
        Ok(session)
    }

    /// Sign-out. Local credentials are purged and signed-out is emitted even
    /// when the remote revoke fails; the revoke error is still reported.
    pub async fn sign_out(&self) -> Result<(), String> {
        let revoke_result = match self.persisted_session() {
            Some(session) => {
                let url = format!("{}/auth/v1/logout", self.base_url);
                Request::post(&url)
                    .header("apikey", &self.anon_key)
                    .header("Authorization", &format!("Bearer {}", session.access_token))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|e| format!("Sign-out error: {}", e))
            }
            None => Ok(()),
        };

        self.clear_persisted_session();
        log::info!("👋 Signed out");
        self.emit(AuthEvent::SignedOut);
        revoke_result
    }

    /// Exchange the refresh token for a new session. Persists the new bundle
    /// and emits token-refreshed.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session, String> {
        let session = self.exchange_refresh_token(refresh_token).await?;
        log::info!("🔄 Session token refreshed");
        self.emit(AuthEvent::TokenRefreshed(session.clone()));
        Ok(session)
    }

    /// Retrieve the persisted session, refreshing it when stale. Emits
    /// initial-session with the outcome (listeners treat it as a no-op; the
    /// initialization protocol consumes the return value instead).
    pub async fn get_session(&self) -> Result<Option<Session>, String> {
        let persisted = match self.persisted_session() {
            Some(session) => session,
            None => {
                self.emit(AuthEvent::InitialSession(None));
                return Ok(None);
            }
        };

        let now_secs = (js_sys::Date::now() / 1000.0) as i64;
        let margin = CONFIG.auth_config.session_refresh_margin_secs;

        let session = if persisted.needs_refresh(now_secs, margin) {
            log::info!("🔄 Persisted session is stale, refreshing...");
            // Retrieval path: no token-refreshed event, initial-session covers it
            self.exchange_refresh_token(&persisted.refresh_token).await?
        } else {
            persisted
        };

        self.emit(AuthEvent::InitialSession(Some(session.clone())));
        Ok(Some(session))
    }

    async fn exchange_refresh_token(&self, refresh_token: &str) -> Result<Session, String> {
        let url = format!("{}/auth/v1/token?grant_type=refresh_token", self.base_url);
        let body = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };

        let response = Request::post(&url)
            .header("apikey", &self.anon_key)
            .json(&body)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Request error: {}", e))?;

        if !response.ok() {
            return Err(auth_error(response).await);
        }

        let session: Session = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        self.persist_session(&session);
        Ok(session)
    }

    // ------------------------------------------------------------------
    // Session persistence
    // ------------------------------------------------------------------

    pub fn persisted_session(&self) -> Option<Session> {
        load_from_storage::<Session>(STORAGE_KEY_SESSION)
    }

    fn persist_session(&self, session: &Session) {
        if let Err(e) = save_to_storage(STORAGE_KEY_SESSION, session) {
            log::error!("❌ Error persisting session: {}", e);
        }
    }

    pub fn clear_persisted_session(&self) {
        let _ = remove_from_storage(STORAGE_KEY_SESSION);
    }

    // ------------------------------------------------------------------
    // Table access (PostgREST)
    // ------------------------------------------------------------------

    /// Select rows: GET /rest/v1/{table}?{query}
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &str,
        access_token: Option<&str>,
    ) -> Result<Vec<T>, String> {
        let url = format!("{}/rest/v1/{}?{}", self.base_url, table, query);
        let response = Request::get(&url)
            .header("apikey", &self.anon_key)
            .header("Authorization", &self.bearer(access_token))
            .send()
            .await
            .map_err(|e| format!("Request error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error ({}): {}", response.status(), table));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Insert a row and return the stored representation
    pub async fn insert<T: Serialize, R: DeserializeOwned>(
        &self,
        table: &str,
        row: &T,
        access_token: Option<&str>,
    ) -> Result<Vec<R>, String> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let response = Request::post(&url)
            .header("apikey", &self.anon_key)
            .header("Authorization", &self.bearer(access_token))
            .header("Prefer", "return=representation")
            .json(row)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Request error: {}", e))?;

        if !response.ok() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("HTTP error ({}): {}", response.status(), error_text));
        }

        response
            .json::<Vec<R>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Patch rows matching the filter query
    pub async fn update<T: Serialize>(
        &self,
        table: &str,
        query: &str,
        patch: &T,
        access_token: Option<&str>,
    ) -> Result<(), String> {
        let url = format!("{}/rest/v1/{}?{}", self.base_url, table, query);
        let response = Request::patch(&url)
            .header("apikey", &self.anon_key)
            .header("Authorization", &self.bearer(access_token))
            .json(patch)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Request error: {}", e))?;

        if !response.ok() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("HTTP error ({}): {}", response.status(), error_text));
        }

        Ok(())
    }

    fn bearer(&self, access_token: Option<&str>) -> String {
        format!("Bearer {}", access_token.unwrap_or(&self.anon_key))
    }
}

impl Default for SupabaseClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the most useful message from an auth error response
async fn auth_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<AuthErrorBody>(&body)
        .ok()
        .and_then(|b| b.message())
        .unwrap_or(body);
    format!("Auth error ({}): {}", status, message)
}
