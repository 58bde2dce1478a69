use crate::models::Announcement;
use crate::services::SupabaseClient;

/// Load announcements, pinned entries first, then newest first
pub async fn fetch_announcements(
    client: &SupabaseClient,
    access_token: Option<&str>,
) -> Result<Vec<Announcement>, String> {
    log::info!("📣 Loading announcements...");
    let announcements: Vec<Announcement> = client
        .select(
            "announcements",
            "select=*&order=pinned.desc,posted_at.desc",
            access_token,
        )
        .await?;

    log::info!("✅ Announcements loaded: {}", announcements.len());
    Ok(announcements)
}
