use std::time::Duration;

use url::Url;

use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "DASHBOARD_BASE_API";
/// Variable name used by existing browser deployments; read when [`BASE_URL_ENV`] is unset.
pub const LEGACY_BASE_URL_ENV: &str = "VUE_APP_BASE_API";

/// Client settings, fixed once an [`crate::ApiClient`] is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
    content_type: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            content_type: JSON_CONTENT_TYPE.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`ClientConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = [BASE_URL_ENV, LEGACY_BASE_URL_ENV]
            .into_iter()
            .filter_map(|name| lookup(name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty());

        match base_url {
            Some(base_url) => Self::default().with_base_url(base_url),
            None => Ok(Self::default()),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url).map_err(|err| ConfigError::InvalidBaseUrl {
            value: base_url.clone(),
            message: err.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                value: base_url,
                message: "url cannot be used as a base".to_string(),
            });
        }
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        self.timeout = timeout;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Joins a relative path such as `/tension/trend` onto the base URL.
    pub fn resolve(&self, path: &str) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{}/{}", self.base_url, path.trim_start_matches('/')))
    }
}
