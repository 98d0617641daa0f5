//! Shared test utilities:
//! - Mock NEXL server
//! - Test configuration builders

// Not every test binary uses every fixture
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_nexl;
pub mod test_config;

pub use mock_nexl::MockNexlServer;
pub use test_config::{TestConfigBuilder, TestConfigDir};
