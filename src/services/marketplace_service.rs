use crate::models::Listing;
use crate::services::SupabaseClient;

/// Load available marketplace listings, newest first
pub async fn fetch_listings(
    client: &SupabaseClient,
    access_token: Option<&str>,
) -> Result<Vec<Listing>, String> {
    log::info!("🛒 Loading marketplace listings...");
    let listings: Vec<Listing> = client
        .select(
            "listings",
            "select=*&status=eq.available&order=created_at.desc",
            access_token,
        )
        .await?;

    log::info!("✅ Listings loaded: {}", listings.len());
    Ok(listings)
}
