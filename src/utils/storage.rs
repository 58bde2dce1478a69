use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

use crate::utils::STORAGE_KEY_CACHE_PREFIX;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("Could not access localStorage")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Serialize error: {}", e))?;
    storage.set_item(key, &json)
        .map_err(|_| "Error writing to localStorage".to_string())?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("Could not access localStorage")?;
    storage.remove_item(key)
        .map_err(|_| "Error removing from localStorage".to_string())?;
    Ok(())
}

/// Cache key for a per-feed read-model cache entry
pub fn get_cache_key(feed: &str) -> String {
    format!("{}_{}", STORAGE_KEY_CACHE_PREFIX, feed)
}
