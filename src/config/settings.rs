//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_CITATIONS_API_URL, DEFAULT_DATABASE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS,
    DEFAULT_IMAGE_BASE_URL, DEFAULT_PROFILE_BASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub citations_api_url: String,
    pub image_base_url: String,
    pub profile_base_url: String,
    pub http_timeout_seconds: u64,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("citations_api_url", &self.citations_api_url)
            .field("image_base_url", &self.image_base_url)
            .field("profile_base_url", &self.profile_base_url)
            .field("http_timeout_seconds", &self.http_timeout_seconds)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            citations_api_url: DEFAULT_CITATIONS_API_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            profile_base_url: DEFAULT_PROFILE_BASE_URL.to_string(),
            http_timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECONDS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        if env::var("CITATIONS_API_URL").is_err() {
            tracing::warn!(
                "CITATIONS_API_URL not set, using {}",
                defaults.citations_api_url
            );
        }

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            citations_api_url: env::var("CITATIONS_API_URL")
                .unwrap_or(defaults.citations_api_url),
            image_base_url: env::var("IMAGE_BASE_URL").unwrap_or(defaults.image_base_url),
            profile_base_url: env::var("PROFILE_BASE_URL").unwrap_or(defaults.profile_base_url),
            http_timeout_seconds: env::var("HTTP_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.http_timeout_seconds),
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
