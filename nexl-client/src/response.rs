//! Turn NEXL response bodies into flat property maps

use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Key holding the untouched body when a JSON body could not be read
pub const RAW_RESPONSE_KEY: &str = "nexl.raw.response";
pub const SOURCE_APPLICATION_KEY: &str = "nexl.source.application";
pub const SOURCE_PROFILE_KEY: &str = "nexl.source.profile";

pub type Properties = HashMap<String, Value>;

/// Config request a response belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseSource<'a> {
    pub application: &'a str,
    pub profile: &'a str,
}

/// Parse a NEXL response body.
///
/// JSON objects are taken as-is. A body that looks like JSON but is not an
/// object is kept under [`RAW_RESPONSE_KEY`] together with its source.
/// Script output is read as `key = value` assignments, then as an embedded
/// JSON object; script output with neither yields no properties.
pub fn parse_properties(body: &str, source: &ResponseSource<'_>) -> Properties {
    let trimmed = body.trim();

    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return match serde_json::from_str::<Map<String, Value>>(trimmed) {
            Ok(object) => {
                info!("Parsed JSON response with {} properties", object.len());
                object.into_iter().collect()
            }
            Err(e) => {
                warn!("Failed to parse NEXL response as JSON object, keeping raw text: {}", e);
                raw(body, source)
            }
        };
    }

    let mut properties = parse_assignments(body);
    if properties.is_empty() {
        properties = embedded_json(body).unwrap_or_default();
    }

    info!("Parsed script response with {} properties", properties.len());
    properties
}

fn parse_assignments(body: &str) -> Properties {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("//") && !line.starts_with("/*"))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let key = strip_declaration(key.trim());
            let value = value.trim();
            let value = value.strip_suffix(';').unwrap_or(value).replace('"', "");
            (key.to_string(), Value::String(value))
        })
        .collect()
}

fn strip_declaration(key: &str) -> &str {
    for keyword in ["var", "let", "const"] {
        if let Some(rest) = key.strip_prefix(keyword) {
            if rest.starts_with(char::is_whitespace) {
                return rest.trim_start();
            }
        }
    }
    key
}

fn embedded_json(body: &str) -> Option<Properties> {
    let start = body.find('{')?;
    let end = body.rfind('}')?;
    if end <= start {
        return None;
    }

    match serde_json::from_str::<Map<String, Value>>(&body[start..=end]) {
        Ok(object) => Some(object.into_iter().collect()),
        Err(e) => {
            debug!("No JSON block in script response: {}", e);
            None
        }
    }
}

fn raw(body: &str, source: &ResponseSource<'_>) -> Properties {
    HashMap::from([
        (RAW_RESPONSE_KEY.to_string(), Value::String(body.to_string())),
        (
            SOURCE_APPLICATION_KEY.to_string(),
            Value::String(source.application.to_string()),
        ),
        (
            SOURCE_PROFILE_KEY.to_string(),
            Value::String(source.profile.to_string()),
        ),
    ])
}
