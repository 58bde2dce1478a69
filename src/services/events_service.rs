use serde::{Deserialize, Serialize};

use crate::config::CONFIG;
use crate::models::CommunityEvent;
use crate::services::SupabaseClient;
use crate::utils::{get_cache_key, load_from_storage, save_to_storage};

#[derive(Serialize, Deserialize)]
struct EventsCache {
    events: Vec<CommunityEvent>,
    timestamp: String,
}

/// Load community events (with a localStorage cache so the feed renders
/// instantly on revisit)
pub async fn fetch_events(
    client: &SupabaseClient,
    access_token: Option<&str>,
) -> Result<Vec<CommunityEvent>, String> {
    let cache_key = get_cache_key("events");

    // Check cache first
    if let Some(cache) = load_from_storage::<EventsCache>(&cache_key) {
        if let Ok(cache_time) = chrono::DateTime::parse_from_rfc3339(&cache.timestamp) {
            let now = chrono::Utc::now();
            let age = now.signed_duration_since(cache_time.with_timezone(&chrono::Utc));

            if age.num_minutes() < CONFIG.cache_config.feed_cache_ttl_minutes {
                log::info!("📅 Using cached events ({} min old)", age.num_minutes());
                return Ok(cache.events);
            }
            log::info!("📅 Events cache expired, fetching fresh data...");
        }
    }

    // Fetch from the backend
    let events: Vec<CommunityEvent> = client
        .select("events", "select=*&order=starts_at.asc", access_token)
        .await?;

    let cache = EventsCache {
        events: events.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };
    if save_to_storage(&cache_key, &cache).is_ok() {
        log::info!("💾 {} events cached", events.len());
    }

    Ok(events)
}
