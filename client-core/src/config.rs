use std::env;

/// Client configuration, read once at startup
#[derive(Clone)]
pub struct Config {
    /// Base URL of the Ripple API
    pub api_url: String,
    /// Bearer token for authenticated endpoints
    pub api_token: Option<String>,
    /// Per-request timeout in seconds
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_url: env::var("RIPPLE_API_URL")
                .unwrap_or_else(|_| "https://api.ripple.app".to_string()),
            api_token: env::var("RIPPLE_API_TOKEN").ok(),
            http_timeout_secs: env::var("RIPPLE_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}
