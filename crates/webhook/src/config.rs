use std::env;
use std::time::Duration;

/// Process-wide settings, read once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub default_channel: String,
    pub default_category: String,
    pub telegram_api_base: String,
    pub dispatch_timeout: Duration,
    pub port: u16,
}

impl RelayConfig {
    pub fn from_env() -> Self {
        let default_channel = env::var("DEFAULT_CHANNEL_ID")
            .unwrap_or_else(|_| "@default_channel".to_string());
        let default_category =
            env::var("DEFAULT_SIGNAL_CATEGORY").unwrap_or_else(|_| "SIGNAL".to_string());
        let telegram_api_base = env::var("TELEGRAM_API_BASE")
            .unwrap_or_else(|_| "https://api.telegram.org".to_string());
        let timeout_secs = env::var("DISPATCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(15);
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(5000);

        Self {
            default_channel,
            default_category,
            telegram_api_base,
            dispatch_timeout: Duration::from_secs(timeout_secs),
            port,
        }
    }
}
