//! Derive NEXL path and expression from config-server style requests
//!
//! Config clients address NEXL scripts in three ways:
//!
//! - `application` / `profile` pairs, e.g. `java-opts/docker-conf/mobile.js`
//!   or `app` + `js?expression=${all}`
//! - a raw `url` parameter such as `/app/conf.js?expression=%24%7Ball%7D`
//! - a request URI shaped `/{application}/{profile}/{label}`

use percent_encoding::percent_decode_str;
use tracing::debug;

const EXPRESSION_MARKER: &str = "expression=";

/// Path and expression ready for [`crate::http::NexlClient::call`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NexlTarget {
    pub path: String,
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Request URI does not match `/{application}/{profile}/{label}`
    InvalidRequestUri { uri: String },
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::InvalidRequestUri { uri } => {
                write!(f, "Invalid request URI format: {}", uri)
            }
        }
    }
}

impl std::error::Error for ResolveError {}

impl NexlTarget {
    pub fn new(path: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            expression: expression.into(),
        }
    }

    pub fn from_parameters(application: &str, profile: &str) -> Self {
        let target = if application.contains('/') && application.ends_with(".js") {
            Self::new(
                format!("/{}", application),
                expression_in(profile).unwrap_or_default(),
            )
        } else if let Some((script, query)) = profile.split_once('?') {
            Self::new(
                format!("/{}/{}", application, script),
                expression_in(query).unwrap_or_default(),
            )
        } else {
            Self::new(format!("/{}/{}.js", application, profile), "")
        };

        debug!(
            "Resolved application '{}' profile '{}' to path {} expression '{}'",
            application, profile, target.path, target.expression
        );
        target
    }

    /// Split a `url` request parameter into path and decoded expression
    pub fn from_url_param(url: &str) -> Self {
        let Some(index) = url.find(EXPRESSION_MARKER) else {
            return Self::new(url, "");
        };

        // Drop the `?` or `&` that introduced the parameter
        let path = url[..index]
            .strip_suffix(['?', '&'])
            .unwrap_or(&url[..index]);

        Self::new(path, first_value(&url[index + EXPRESSION_MARKER.len()..]))
    }

    pub fn from_request_path(request_uri: &str, query: Option<&str>) -> Result<Self, ResolveError> {
        // Trailing empty segments do not count as a label
        let segments: Vec<&str> = request_uri.trim_end_matches('/').split('/').collect();
        if segments.len() < 4 {
            return Err(ResolveError::InvalidRequestUri {
                uri: request_uri.to_string(),
            });
        }

        let application = decode(segments[1]);
        let profile = decode(segments[2]);

        let path = if application.ends_with(".js") {
            format!("/{}", application)
        } else if let Some((script, _)) = profile.split_once('?') {
            format!("/{}/{}", application, script)
        } else {
            format!("/{}/{}.js", application, profile)
        };

        let expression = query
            .and_then(expression_in)
            .or_else(|| expression_in(&profile))
            .unwrap_or_default();

        Ok(Self::new(path, expression))
    }
}

/// Decoded value following `expression=`, up to the next `&`
fn expression_in(text: &str) -> Option<String> {
    text.find(EXPRESSION_MARKER)
        .map(|index| first_value(&text[index + EXPRESSION_MARKER.len()..]))
}

fn first_value(text: &str) -> String {
    decode(text.split('&').next().unwrap_or_default())
}

/// Form decoding: `+` is a space, `%XX` sequences are UTF-8 bytes
pub fn decode(text: &str) -> String {
    let spaced = text.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
