use crate::models::Donation;
use crate::services::SupabaseClient;

/// Load the signed-in member's donation history, newest first
pub async fn fetch_member_donations(
    client: &SupabaseClient,
    access_token: &str,
    member_id: &str,
) -> Result<Vec<Donation>, String> {
    log::info!("💝 Loading donations for {}...", member_id);
    let query = format!("member_id=eq.{}&select=*&order=donated_at.desc", member_id);
    let donations: Vec<Donation> = client
        .select("donations", &query, Some(access_token))
        .await?;

    log::info!("✅ Donations loaded: {}", donations.len());
    Ok(donations)
}
