//! Test configuration builders for NEXL client tests

use nexl_client::{NexlClient, NexlConfig, ProviderConfig};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Builder for in-memory test configurations
pub struct TestConfigBuilder {
    config: NexlConfig,
}

impl TestConfigBuilder {
    pub fn new(base_url: &str) -> Self {
        Self {
            config: NexlConfig::with_base_url(base_url),
        }
    }

    pub fn request_timeout(mut self, seconds: u64) -> Self {
        self.config.request_timeout_seconds = seconds;
        self
    }

    pub fn connect_timeout(mut self, seconds: u64) -> Self {
        self.config.connect_timeout_seconds = seconds;
        self
    }

    pub fn max_concurrent_calls(mut self, calls: usize) -> Self {
        self.config.max_concurrent_calls = calls;
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.config.user_agent = user_agent.to_string();
        self
    }

    pub fn provider(mut self, enabled: bool, fallback: bool) -> Self {
        self.config.provider = ProviderConfig { enabled, fallback };
        self
    }

    pub fn build(self) -> NexlConfig {
        self.config
    }

    pub fn client(self) -> NexlClient {
        NexlClient::new(Arc::new(self.config)).expect("Failed to build NEXL client")
    }
}

/// Config directory on disk; removed when dropped
pub struct TestConfigDir {
    _temp_dir: TempDir,
    pub config_dir: PathBuf,
}

impl TestConfigDir {
    /// Write `nexl.toml` with the given content
    pub fn with_file(content: &str) -> Self {
        let dir = Self::empty();
        fs::write(dir.config_dir.join("nexl.toml"), content).expect("Failed to write nexl.toml");
        dir
    }

    pub fn empty() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        Self {
            _temp_dir: temp_dir,
            config_dir,
        }
    }

    pub fn path_string(&self) -> String {
        self.config_dir.display().to_string()
    }
}
