pub mod manager;
use serde::{Deserialize, Serialize};
use std::time::Duration;
pub use manager::ConfigManager;

use crate::constants::{defaults, http};
use crate::errors::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NexlConfig {
    pub base_url: String,
    pub connect_timeout_seconds: u64,
    pub request_timeout_seconds: u64,
    pub user_agent: String,
    pub max_concurrent_calls: usize,
    pub provider: ProviderConfig,
}

/// Settings for the config-server provider built on the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub enabled: bool,
    /// Serve non-git labels that are not explicitly addressed to NEXL
    pub fallback: bool,
}

impl Default for NexlConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::BASE_URL.to_string(),
            connect_timeout_seconds: http::CONNECT_TIMEOUT.as_secs(),
            request_timeout_seconds: http::REQUEST_TIMEOUT.as_secs(),
            user_agent: defaults::USER_AGENT.to_string(),
            max_concurrent_calls: defaults::MAX_CONCURRENT_CALLS,
            provider: ProviderConfig::default(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fallback: false,
        }
    }
}

impl NexlConfig {
    /// Config pointing at a different NEXL server, everything else default
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "base_url".to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "base_url".to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        if self.connect_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_seconds".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.request_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_seconds".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.max_concurrent_calls == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_concurrent_calls".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
