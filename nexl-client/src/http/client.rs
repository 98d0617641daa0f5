use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::url::build_url;
use crate::config::NexlConfig;
use crate::constants::http::ACCEPT_ANY;
use crate::errors::{NexlError, NexlResult};

/// HTTP client for a single NEXL server.
///
/// Cloning is cheap: clones share the connection pool and the dispatch
/// limit used by [`NexlClient::call_with_callback`].
#[derive(Clone)]
pub struct NexlClient {
    config: Arc<NexlConfig>,
    client: Client,
    dispatch_limit: Arc<Semaphore>,
}

impl NexlClient {
    pub fn new(config: Arc<NexlConfig>) -> NexlResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .http1_only()
            .build()
            .map_err(|e| NexlError::Client {
                reason: e.to_string(),
            })?;

        let dispatch_limit = Arc::new(Semaphore::new(config.max_concurrent_calls.max(1)));

        Ok(Self {
            config,
            client,
            dispatch_limit,
        })
    }

    pub fn config(&self) -> &NexlConfig {
        &self.config
    }

    /// Evaluate `expression` against the script at `path`.
    ///
    /// Returns the body on HTTP 200. Any other status and every transport
    /// failure come back as [`NexlError`].
    pub async fn call(&self, path: &str, expression: &str) -> NexlResult<String> {
        self.fetch(path, expression, ACCEPT_ANY).await
    }

    /// Run [`NexlClient::call`] on a Tokio task and hand the result to `callback`.
    ///
    /// Returns immediately. The callback runs exactly once on the spawned
    /// task unless the returned handle is aborted first. Outside a Tokio
    /// runtime nothing is spawned: the callback receives
    /// [`NexlError::Client`] on the caller's thread and `None` is returned.
    pub fn call_with_callback<F>(
        &self,
        path: &str,
        expression: &str,
        callback: F,
    ) -> Option<JoinHandle<()>>
    where
        F: FnOnce(NexlResult<String>) + Send + 'static,
    {
        self.dispatch(path.to_string(), expression.to_string(), ACCEPT_ANY, callback)
    }

    pub(crate) fn dispatch<F>(
        &self,
        path: String,
        expression: String,
        accept: &'static str,
        callback: F,
    ) -> Option<JoinHandle<()>>
    where
        F: FnOnce(NexlResult<String>) + Send + 'static,
    {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                warn!("Cannot dispatch NEXL call for {}: {}", path, e);
                callback(Err(NexlError::Client {
                    reason: format!("no Tokio runtime for callback dispatch: {}", e),
                }));
                return None;
            }
        };

        let client = self.clone();
        let call_id = Uuid::new_v4();
        debug!("Dispatching NEXL call {} for {}", call_id, path);

        Some(runtime.spawn(async move {
            // Semaphore is never closed, so a permit always arrives
            let _permit = client.dispatch_limit.clone().acquire_owned().await.ok();
            let result = client.fetch(&path, &expression, accept).await;
            debug!("NEXL call {} finished (success: {})", call_id, result.is_ok());
            callback(result);
        }))
    }

    /// Number of callback dispatches that may start a request right now
    pub fn available_dispatch_slots(&self) -> usize {
        self.dispatch_limit.available_permits()
    }

    pub(crate) async fn fetch(
        &self,
        path: &str,
        expression: &str,
        accept: &str,
    ) -> NexlResult<String> {
        let url = build_url(&self.config.base_url, path, expression)?;
        let target = url.to_string();

        debug!("Target URL: {}", target);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.config.user_agent.as_str())
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(|e| {
                warn!("Error calling NEXL server at {}: {}", target, e);
                NexlError::transport(&target, e)
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NexlError::transport(&target, e))?;

        if status != StatusCode::OK {
            warn!("NEXL server returned {} for {}", status.as_u16(), target);
            return Err(NexlError::HttpStatus {
                url: target,
                status: status.as_u16(),
                body,
            });
        }

        info!("NEXL call to {} returned {} bytes", target, body.len());
        Ok(body)
    }
}
