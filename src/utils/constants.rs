/// Supabase project URL
/// Configured at compile time via SUPABASE_URL (see build.rs / .env)
pub const SUPABASE_URL: &str = match option_env!("SUPABASE_URL") {
    Some(url) => url,
    None => "http://localhost:54321",
};

/// Supabase anon (publishable) API key
pub const SUPABASE_ANON_KEY: &str = match option_env!("SUPABASE_ANON_KEY") {
    Some(key) => key,
    None => "local-anon-key",
};

/// localStorage key for the persisted auth session bundle
pub const STORAGE_KEY_SESSION: &str = "communityHub_session";

/// Prefix for cached read-model feeds in localStorage
pub const STORAGE_KEY_CACHE_PREFIX: &str = "communityHub_cache";
