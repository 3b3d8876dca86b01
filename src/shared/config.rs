//! Process configuration, read once at startup and threaded into the
//! adapters and fetch client at construction time.

use crate::modules::provider::http_client::RetryPolicy;

const DEFAULT_CONSUMET_URL: &str = "https://api.consumet.org";
const DEFAULT_MANGADEX_URL: &str = "https://api.mangadex.org";
const DEFAULT_MANGADEX_UPLOADS_URL: &str = "https://uploads.mangadex.org";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the Consumet aggregator (anime + movie providers).
    pub consumet_url: String,
    /// Base URL of the MangaDex API.
    pub mangadex_url: String,
    /// Base URL of the MangaDex uploads host, used by the cover proxy.
    pub mangadex_uploads_url: String,
    /// Origin of the browser client, for CORS.
    pub frontend_url: String,
    /// Listen port.
    pub port: u16,
    /// Retry policy for metadata/listing calls.
    pub api_retry: RetryPolicy,
    /// Retry policy for the binary cover proxy.
    pub media_retry: RetryPolicy,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self {
            consumet_url: strip_trailing_slash(&env_or("CONSUMET_API_URL", DEFAULT_CONSUMET_URL)),
            mangadex_url: strip_trailing_slash(&env_or("MANGADEX_API_URL", DEFAULT_MANGADEX_URL)),
            mangadex_uploads_url: strip_trailing_slash(&env_or(
                "MANGADEX_UPLOADS_URL",
                DEFAULT_MANGADEX_UPLOADS_URL,
            )),
            frontend_url: strip_trailing_slash(&env_or("FRONTEND_URL", DEFAULT_FRONTEND_URL)),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            api_retry: RetryPolicy::api(),
            media_retry: RetryPolicy::media(),
        }
    }

    /// Origins allowed to call the gateway: the configured frontend plus the
    /// local dev server.
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = vec![self.frontend_url.clone()];
        if self.frontend_url != DEFAULT_FRONTEND_URL {
            origins.push(DEFAULT_FRONTEND_URL.to_string());
        }
        origins
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            consumet_url: DEFAULT_CONSUMET_URL.to_string(),
            mangadex_url: DEFAULT_MANGADEX_URL.to_string(),
            mangadex_uploads_url: DEFAULT_MANGADEX_UPLOADS_URL.to_string(),
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            port: DEFAULT_PORT,
            api_retry: RetryPolicy::api(),
            media_retry: RetryPolicy::media(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn strip_trailing_slash(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
