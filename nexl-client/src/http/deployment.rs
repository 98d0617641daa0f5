use tokio::task::JoinHandle;

use super::client::NexlClient;
use crate::constants::endpoints::DEPLOY_MS_SCRIPT;
use crate::constants::http::ACCEPT_JSON;
use crate::errors::NexlResult;

/// [`NexlClient`] pinned to the micro-services deployment script.
///
/// Requests `application/json`; otherwise behaves exactly like the generic
/// client.
#[derive(Clone)]
pub struct DeploymentClient {
    client: NexlClient,
}

impl DeploymentClient {
    pub fn new(client: NexlClient) -> Self {
        Self { client }
    }

    pub fn path(&self) -> &'static str {
        DEPLOY_MS_SCRIPT
    }

    pub async fn call(&self, expression: &str) -> NexlResult<String> {
        self.client.fetch(DEPLOY_MS_SCRIPT, expression, ACCEPT_JSON).await
    }

    pub fn call_with_callback<F>(&self, expression: &str, callback: F) -> Option<JoinHandle<()>>
    where
        F: FnOnce(NexlResult<String>) + Send + 'static,
    {
        self.client.dispatch(
            DEPLOY_MS_SCRIPT.to_string(),
            expression.to_string(),
            ACCEPT_JSON,
            callback,
        )
    }
}
