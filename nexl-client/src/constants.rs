//! Central repository for default values used by the NEXL client
//!
//! Constants are grouped by category so timeouts, header values and
//! endpoints have a single source of truth.

use std::time::Duration;

/// HTTP client timeout and header constants
pub mod http {
    use super::Duration;

    /// Overall timeout for a single NEXL request
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Timeout for establishing the TCP connection
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Accept header for generic evaluation calls
    pub const ACCEPT_ANY: &str = "*/*";

    /// Accept header for the deployment script endpoint
    pub const ACCEPT_JSON: &str = "application/json";

    /// Name of the query parameter carrying the expression
    pub const EXPRESSION_PARAM: &str = "expression";
}

/// NEXL endpoint constants
pub mod endpoints {
    /// Micro-services deployment script evaluated by [`crate::http::DeploymentClient`]
    pub const DEPLOY_MS_SCRIPT: &str = "/jenkins/deployment/micro-services/deploy-ms.js";
}

/// Default configuration values
pub mod defaults {
    /// Default NEXL server location
    pub const BASE_URL: &str = "http://nexl:8181";

    /// Default User-Agent header
    pub const USER_AGENT: &str = "nexl-client/1.0";

    /// Maximum number of callback-dispatched calls in flight at once
    pub const MAX_CONCURRENT_CALLS: usize = 16;

    /// Directory holding `nexl.toml` when none is given
    pub const CONFIG_DIR: &str = "config";

    /// Configuration file name inside the config directory
    pub const CONFIG_FILE: &str = "nexl.toml";
}
