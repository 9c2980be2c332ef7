//! Environment configuration for the Study Space API client.

use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use common::viewer_const::{DEFAULT_API_URL, DEFAULT_DOCUMENT_TIMEOUT_SECS, DEFAULT_SEARCH_TIMEOUT_SECS, DEFAULT_UPLOAD_TIMEOUT_SECS};

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub search_timeout: Duration,
    pub document_timeout: Duration,
    pub upload_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            search_timeout: Duration::from_secs(DEFAULT_SEARCH_TIMEOUT_SECS),
            document_timeout: Duration::from_secs(DEFAULT_DOCUMENT_TIMEOUT_SECS),
            upload_timeout: Duration::from_secs(DEFAULT_UPLOAD_TIMEOUT_SECS),
        }
    }

    /// Process-wide configuration, read from the environment on first use.
    pub fn global() -> &'static ApiConfig {
        static CONFIG: OnceLock<ApiConfig> = OnceLock::new();
        CONFIG.get_or_init(|| {
            let config = ApiConfig::from_env();
            tracing::info!("Study Space API at {}", config.base_url);
            config
        })
    }

    /// Reads `STUDY_SPACE_API_URL`, `SEARCH_TIMEOUT_SECS`, `DOCUMENT_TIMEOUT_SECS` and `UPLOAD_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let secs = |key: &str, default: u64| {
            let Some(value) = lookup(key) else { return Duration::from_secs(default) };
            match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!("{key}={value:?} is not a positive number of seconds, using {default}");
                    Duration::from_secs(default)
                }
            }
        };
        Self {
            base_url: lookup("STUDY_SPACE_API_URL").unwrap_or(DEFAULT_API_URL.to_string()),
            search_timeout: secs("SEARCH_TIMEOUT_SECS", DEFAULT_SEARCH_TIMEOUT_SECS),
            document_timeout: secs("DOCUMENT_TIMEOUT_SECS", DEFAULT_DOCUMENT_TIMEOUT_SECS),
            upload_timeout: secs("UPLOAD_TIMEOUT_SECS", DEFAULT_UPLOAD_TIMEOUT_SECS),
        }
    }

    /// Base URL with `segments` appended, each percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> anyhow::Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url).with_context(|| format!("Invalid STUDY_SPACE_API_URL: {}", self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("STUDY_SPACE_API_URL cannot be a base: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
