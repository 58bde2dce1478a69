use serde::{Deserialize, Serialize};

use crate::config::CONFIG;
use crate::models::Resource;
use crate::services::SupabaseClient;
use crate::utils::{get_cache_key, load_from_storage, save_to_storage};

#[derive(Serialize, Deserialize)]
struct ResourcesCache {
    resources: Vec<Resource>,
    timestamp: String,
}

/// Load the resource library (documents, media), cached like the events feed
pub async fn fetch_resources(
    client: &SupabaseClient,
    access_token: Option<&str>,
) -> Result<Vec<Resource>, String> {
    let cache_key = get_cache_key("resources");

    if let Some(cache) = load_from_storage::<ResourcesCache>(&cache_key) {
        if let Ok(cache_time) = chrono::DateTime::parse_from_rfc3339(&cache.timestamp) {
            let now = chrono::Utc::now();
            let age = now.signed_duration_since(cache_time.with_timezone(&chrono::Utc));

            if age.num_minutes() < CONFIG.cache_config.feed_cache_ttl_minutes {
                log::info!("📚 Using cached resources ({} min old)", age.num_minutes());
                return Ok(cache.resources);
            }
        }
    }

    let resources: Vec<Resource> = client
        .select(
            "resources",
            "select=*&order=published_at.desc",
            access_token,
        )
        .await?;

    let cache = ResourcesCache {
        resources: resources.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };
    if save_to_storage(&cache_key, &cache).is_ok() {
        log::info!("💾 {} resources cached", resources.len());
    }

    Ok(resources)
}
