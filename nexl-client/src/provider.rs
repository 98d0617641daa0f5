//! Config-server property provider backed by NEXL

use tracing::{debug, error, info, warn};

use crate::config::ProviderConfig;
use crate::http::NexlClient;
use crate::resolver::NexlTarget;
use crate::response::{parse_properties, Properties, ResponseSource};

const EXPLICIT_LABELS: [&str; 2] = ["nexl", "nexl-primary"];
const GIT_LABELS: [&str; 4] = ["git", "main", "master", "develop"];
const GIT_LABEL_PREFIXES: [&str; 2] = ["feature/", "release/"];

pub struct NexlConfigProvider {
    client: NexlClient,
    settings: ProviderConfig,
}

impl NexlConfigProvider {
    pub fn new(client: NexlClient) -> Self {
        let settings = client.config().provider.clone();
        Self { client, settings }
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.enabled
    }

    /// Whether requests carrying `label` should be served from NEXL
    pub fn supports(&self, label: &str) -> bool {
        if !self.settings.enabled {
            debug!("NEXL provider disabled, not serving label '{}'", label);
            return false;
        }

        if EXPLICIT_LABELS.contains(&label) {
            return true;
        }

        self.settings.fallback && !is_git_label(label)
    }

    pub async fn load_properties(&self, application: &str, profile: &str) -> Properties {
        let target = NexlTarget::from_parameters(application, profile);
        self.load_target(&target, &ResponseSource { application, profile })
            .await
    }

    /// Serve a request that addressed the script through a `url` parameter
    pub async fn load_properties_for_url(
        &self,
        url: &str,
        application: &str,
        profile: &str,
    ) -> Properties {
        let target = NexlTarget::from_url_param(url);
        self.load_target(&target, &ResponseSource { application, profile })
            .await
    }

    pub async fn load_target(&self, target: &NexlTarget, source: &ResponseSource<'_>) -> Properties {
        if !self.settings.enabled {
            info!("NEXL provider is disabled");
            return Properties::new();
        }

        match self.client.call(&target.path, &target.expression).await {
            Ok(body) if body.trim().is_empty() => {
                warn!(
                    "No configuration found for path: {} with expression: {}",
                    target.path, target.expression
                );
                Properties::new()
            }
            Ok(body) => {
                debug!("NEXL response body length: {}", body.len());
                parse_properties(&body, source)
            }
            Err(e) => {
                error!("Failed to load configuration from NEXL server: {}", e);
                Properties::new()
            }
        }
    }
}

/// Labels that belong to the git backend (branches and version tags)
pub fn is_git_label(label: &str) -> bool {
    GIT_LABELS.contains(&label)
        || GIT_LABEL_PREFIXES
            .iter()
            .any(|prefix| label.starts_with(prefix))
        || is_version_tag(label)
}

/// Matches `v<digits>.<digits>` followed by anything
fn is_version_tag(label: &str) -> bool {
    let Some(rest) = label.strip_prefix('v') else {
        return false;
    };
    let Some((major, tail)) = rest.split_once('.') else {
        return false;
    };
    let minor_len = tail.chars().take_while(char::is_ascii_digit).count();

    !major.is_empty() && major.chars().all(|c| c.is_ascii_digit()) && minor_len > 0
}
