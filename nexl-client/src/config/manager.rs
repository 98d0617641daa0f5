use super::NexlConfig;
use crate::constants::defaults;
use crate::errors::ConfigError;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info};

pub struct ConfigManager {
    current_config: Arc<NexlConfig>,
}

impl ConfigManager {
    /// Load `nexl.toml` from `config_dir`, falling back to defaults when absent
    pub async fn new(config_dir: String) -> Result<Self> {
        let config = Self::load_configuration(&config_dir).await?;
        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    pub fn from_config(config: NexlConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    pub fn get_current_config(&self) -> Arc<NexlConfig> {
        self.current_config.clone()
    }

    async fn load_configuration(config_dir: &str) -> Result<NexlConfig> {
        let config_path = Path::new(config_dir).join(defaults::CONFIG_FILE);

        let exists = fs::try_exists(&config_path)
            .await
            .map_err(|e| ConfigError::LoadFailed {
                path: config_path.display().to_string(),
                reason: e.to_string(),
            })?;

        let config = if exists {
            debug!("Loading NEXL config: {}", config_path.display());
            let content = fs::read_to_string(&config_path)
                .await
                .map_err(|e| ConfigError::LoadFailed {
                    path: config_path.display().to_string(),
                    reason: e.to_string(),
                })?;
            Self::parse(&content)?
        } else {
            info!(
                "No config at {}, using defaults",
                config_path.display()
            );
            NexlConfig::default()
        };

        config.validate()?;

        info!(
            "NEXL client configured for {} (connect {}s, request {}s, {} concurrent calls)",
            config.base_url,
            config.connect_timeout_seconds,
            config.request_timeout_seconds,
            config.max_concurrent_calls
        );

        Ok(config)
    }

    pub fn parse(content: &str) -> Result<NexlConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            reason: e.to_string(),
        })
    }
}
