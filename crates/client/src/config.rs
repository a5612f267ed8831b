use std::{env, time::Duration};

use manageshop_core::query::StaleTime;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL (default: "http://localhost:3333")
    pub api_url: String,
    /// Maximum number of cached queries (default: 1,000)
    pub cache_max_entries: usize,
    /// Per-request timeout in seconds (default: 30)
    pub request_timeout_seconds: u64,
    /// Seconds a cached dashboard metric stays fresh (default: 60)
    pub metrics_stale_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MANAGESHOP_API_URL` - API base URL (default: "http://localhost:3333")
    /// - `QUERY_CACHE_MAX_ENTRIES` - Maximum cached queries (default: 1,000)
    /// - `API_TIMEOUT_SECONDS` - Request timeout in seconds (default: 30)
    /// - `METRICS_STALE_SECONDS` - Metric freshness in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("MANAGESHOP_API_URL")
                .unwrap_or_else(|_| "http://localhost:3333".to_string()),
            cache_max_entries: env::var("QUERY_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1_000),
            request_timeout_seconds: env::var("API_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            metrics_stale_seconds: env::var("METRICS_STALE_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Get the freshness window of dashboard metrics.
    pub fn metrics_stale_time(&self) -> StaleTime {
        StaleTime::After(Duration::from_secs(self.metrics_stale_seconds))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
