//! HTTP communication with the NEXL server
//!
//! Every call is a single GET against the configured NEXL base URL:
//!
//! ```text
//! GET <base_url><path>[?expression=<form-urlencoded expression>]
//! ```
//!
//! # Outcome mapping
//!
//! - 200 → body as text
//! - any other status → [`crate::errors::NexlError::HttpStatus`]
//! - connect/DNS/I/O/timeout → [`crate::errors::NexlError::Transport`]
//!
//! No retries. Callback dispatch runs on Tokio tasks bounded by
//! `max_concurrent_calls`.

pub mod client;
pub mod deployment;
pub mod url;

pub use client::NexlClient;
pub use deployment::DeploymentClient;
