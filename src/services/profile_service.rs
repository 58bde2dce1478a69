use chrono::Utc;

use crate::models::{AuthUser, Profile, ProfileOrigin, ProfileUpdate};
use crate::services::SupabaseClient;

const PROFILES_TABLE: &str = "profiles";

/// Fetch the profile row keyed by identity id, if one exists
pub async fn fetch_profile(
    client: &SupabaseClient,
    access_token: &str,
    user_id: &str,
) -> Result<Option<Profile>, String> {
    let query = format!("id=eq.{}&select=*&limit=1", user_id);
    let rows: Vec<Profile> = client
        .select(PROFILES_TABLE, &query, Some(access_token))
        .await?;
    Ok(rows.into_iter().next())
}

/// Insert a default profile row for a user that has none yet.
/// Insert failures are not fatal: the caller keeps its fallback profile.
pub async fn insert_default_profile(
    client: &SupabaseClient,
    access_token: &str,
    identity: &AuthUser,
) -> Option<Profile> {
    let row = Profile::fallback_from_identity(identity, Utc::now());

    match client
        .insert::<Profile, Profile>(PROFILES_TABLE, &row, Some(access_token))
        .await
    {
        Ok(mut inserted) => {
            log::info!("📇 Default profile created for {}", identity.id);
            inserted.pop().or(Some(row))
        }
        Err(e) => {
            log::warn!("⚠️ Default profile insert failed: {}", e);
            None
        }
    }
}

/// Full profile-load path: real row if present, otherwise a freshly inserted
/// default row, otherwise nothing (the caller falls back further).
pub async fn load_or_create_profile(
    client: &SupabaseClient,
    access_token: &str,
    identity: &AuthUser,
) -> Result<Option<(Profile, ProfileOrigin)>, String> {
    if let Some(profile) = fetch_profile(client, access_token, &identity.id).await? {
        return Ok(Some((profile, ProfileOrigin::Real)));
    }

    log::info!("📇 No profile row for {}, inserting default", identity.id);
    Ok(insert_default_profile(client, access_token, identity)
        .await
        .map(|profile| (profile, ProfileOrigin::Default)))
}

/// Patch the profile row keyed by identity id
pub async fn update_profile(
    client: &SupabaseClient,
    access_token: &str,
    user_id: &str,
    patch: &ProfileUpdate,
) -> Result<(), String> {
    let query = format!("id=eq.{}", user_id);
    client
        .update(PROFILES_TABLE, &query, patch, Some(access_token))
        .await
}
