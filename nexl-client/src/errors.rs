//! Custom error types for the NEXL client
//!
//! Every failure of a NEXL call is returned as a value. Callers branch on
//! [`NexlError`] instead of catching panics.

use std::fmt;

/// Result alias used throughout the client
pub type NexlResult<T> = std::result::Result<T, NexlError>;

/// Failure of a single NEXL call
#[derive(Debug)]
pub enum NexlError {
    /// Server answered with a status other than 200
    HttpStatus {
        url: String,
        status: u16,
        body: String,
    },

    /// Request never produced a usable response
    Transport {
        url: String,
        kind: TransportKind,
        source: reqwest::Error,
    },

    /// Base URL and path did not form a valid URL
    InvalidUrl { url: String, reason: String },

    /// The underlying HTTP client could not be built
    Client { reason: String },
}

/// Classification of transport failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Connection refused, DNS failure, unreachable host
    Connect,
    /// Connect or request timeout elapsed
    Timeout,
    /// Failure while sending the request
    Request,
    /// Failure while reading the response body
    Body,
    Other,
}

/// Configuration error variants
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    LoadFailed { path: String, reason: String },

    /// Configuration parsing error
    ParseError { reason: String },

    /// Invalid configuration value
    InvalidValue { field: String, reason: String },
}

impl NexlError {
    /// HTTP status for [`NexlError::HttpStatus`], `None` otherwise
    pub fn status(&self) -> Option<u16> {
        match self {
            NexlError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, NexlError::Transport { .. })
    }

    pub fn transport_kind(&self) -> Option<TransportKind> {
        match self {
            NexlError::Transport { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub(crate) fn transport(url: &str, source: reqwest::Error) -> Self {
        NexlError::Transport {
            url: url.to_string(),
            kind: TransportKind::classify(&source),
            source,
        }
    }
}

impl TransportKind {
    fn classify(err: &reqwest::Error) -> Self {
        // reqwest reports connect timeouts as both; timeout wins
        if err.is_timeout() {
            TransportKind::Timeout
        } else if err.is_connect() {
            TransportKind::Connect
        } else if err.is_body() || err.is_decode() {
            TransportKind::Body
        } else if err.is_request() {
            TransportKind::Request
        } else {
            TransportKind::Other
        }
    }
}

impl fmt::Display for NexlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NexlError::HttpStatus { status, body, .. } => {
                write!(f, "HTTP Error: {} - {}", status, body)
            }
            NexlError::Transport { url, kind, source } => {
                write!(f, "Request to {} failed ({}): {}", url, kind, source)
            }
            NexlError::InvalidUrl { url, reason } => {
                write!(f, "Invalid NEXL URL '{}': {}", url, reason)
            }
            NexlError::Client { reason } => {
                write!(f, "Failed to build HTTP client: {}", reason)
            }
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportKind::Connect => "connect",
            TransportKind::Timeout => "timeout",
            TransportKind::Request => "request",
            TransportKind::Body => "body",
            TransportKind::Other => "other",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path, reason)
            }
            ConfigError::ParseError { reason } => {
                write!(f, "Failed to parse config: {}", reason)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for NexlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NexlError::Transport { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl std::error::Error for ConfigError {}
