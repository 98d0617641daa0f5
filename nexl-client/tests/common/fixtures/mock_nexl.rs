//! Mock NEXL server for testing client calls
//!
//! Serves canned script responses without a real NEXL deployment.

use std::time::Duration;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, Request, ResponseTemplate,
};

/// Mock NEXL server
pub struct MockNexlServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockNexlServer {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// Respond to any GET on `script_path` with the given status and body
    pub async fn mock_script(&self, script_path: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(script_path))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Respond only when the decoded `expression` parameter matches
    pub async fn mock_expression(&self, script_path: &str, expression: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(script_path))
            .and(query_param("expression", expression))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Respond after `delay`, for timeout and concurrency tests
    pub async fn mock_slow(&self, script_path: &str, delay: Duration, body: &str) {
        Mock::given(method("GET"))
            .and(path(script_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(body).set_delay(delay))
            .mount(&self.server)
            .await;
    }

    pub async fn received(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Raw query strings of every request seen so far, as sent on the wire
    pub async fn received_queries(&self) -> Vec<Option<String>> {
        self.received()
            .await
            .iter()
            .map(|req| req.url.query().map(str::to_string))
            .collect()
    }
}
