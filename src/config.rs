use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub environment: String,
    pub enable_logging: bool,
    pub auth_config: AuthConfig,
    pub cache_config: CacheConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "local-anon-key".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            auth_config: AuthConfig::default(),
            cache_config: CacheConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Time box for the background profile load, in milliseconds
    pub profile_load_timeout_ms: u32,
    /// Delay before the navigation guard starts issuing redirects, in milliseconds
    pub nav_settle_delay_ms: u32,
    /// Refresh the persisted session when it expires within this margin, in seconds
    pub session_refresh_margin_secs: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            profile_load_timeout_ms: 3_000,
            nav_settle_delay_ms: 500,
            session_refresh_margin_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub feed_cache_ttl_minutes: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            feed_cache_ttl_minutes: 30,
        }
    }
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self {
            supabase_url: option_env!("SUPABASE_URL")
                .unwrap_or("http://localhost:54321").to_string(),
            supabase_anon_key: option_env!("SUPABASE_ANON_KEY")
                .unwrap_or("local-anon-key").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            auth_config: AuthConfig {
                profile_load_timeout_ms: option_env!("PROFILE_LOAD_TIMEOUT_MS")
                    .unwrap_or("3000").parse().unwrap_or(3_000),
                nav_settle_delay_ms: option_env!("NAV_SETTLE_DELAY_MS")
                    .unwrap_or("500").parse().unwrap_or(500),
                session_refresh_margin_secs: option_env!("SESSION_REFRESH_MARGIN_SECS")
                    .unwrap_or("60").parse().unwrap_or(60),
            },
            cache_config: CacheConfig {
                feed_cache_ttl_minutes: option_env!("FEED_CACHE_TTL_MINUTES")
                    .unwrap_or("30").parse().unwrap_or(30),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Global static configuration
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
