//! URL construction for NEXL requests

use std::borrow::Cow;
use url::{form_urlencoded, Url};

use crate::constants::http::EXPRESSION_PARAM;
use crate::errors::{NexlError, NexlResult};

/// Ensure the path starts with exactly the `/` it was missing
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{}", path))
    }
}

/// Form-urlencode an expression (`${all}` becomes `%24%7Ball%7D`)
pub fn encode_expression(expression: &str) -> String {
    form_urlencoded::byte_serialize(expression.as_bytes()).collect()
}

/// Build the full request URL.
///
/// An empty expression leaves the path untouched, including any query it
/// already carries. A non-empty expression is appended as
/// `expression=<encoded>`, joined with `&` when the path has a query.
/// Dot segments (`.`, `..`) are resolved by URL parsing.
pub fn build_url(base_url: &str, path: &str, expression: &str) -> NexlResult<Url> {
    let mut raw = format!("{}{}", base_url.trim_end_matches('/'), normalize_path(path));

    if !expression.is_empty() {
        let separator = if path.contains('?') { '&' } else { '?' };
        raw.push(separator);
        raw.push_str(EXPRESSION_PARAM);
        raw.push('=');
        raw.push_str(&encode_expression(expression));
    }

    Url::parse(&raw).map_err(|e| NexlError::InvalidUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })
}
