pub mod config;
pub mod constants;
pub mod errors;
pub mod http;
pub mod provider;
pub mod resolver;
pub mod response;

// Re-export commonly used types
pub use config::{ConfigManager, NexlConfig, ProviderConfig};
pub use errors::{ConfigError, NexlError, NexlResult, TransportKind};
pub use http::{DeploymentClient, NexlClient};
pub use provider::NexlConfigProvider;
pub use resolver::NexlTarget;
