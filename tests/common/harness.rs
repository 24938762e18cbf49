//! Mock Jikan upstream for integration tests.
//!
//! Each MockUpstream owns its own wiremock server, so tests run in parallel
//! without sharing state.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use mal_mcp::config::Config;
use mal_mcp::jikan::JikanClient;
use mal_mcp::mcp::MalServer;

pub struct MockUpstream {
    pub server: MockServer,
    pub mal: MalServer,
}

impl MockUpstream {
    pub async fn new() -> Self {
        Self::with_timeouts(Duration::from_secs(10), Duration::from_secs(10)).await
    }

    pub async fn with_timeouts(search: Duration, lookup: Duration) -> Self {
        let server = MockServer::start().await;
        let config = Config::new(&server.uri())
            .expect("mock server URI is a valid base URL")
            .with_timeouts(search, lookup);
        let client = JikanClient::new(config).expect("Failed to build Jikan client");
        let mal = MalServer::new(Arc::new(client));
        Self { server, mal }
    }

    /// Answer GET `route` with `body`, expecting exactly one call.
    pub async fn mount_json(&self, route: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Fail the test if any request reaches the upstream.
    pub async fn expect_no_calls(&self) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    pub async fn requests(&self) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .expect("request recording is enabled")
    }

    /// Query pairs of the single recorded request.
    pub async fn only_query(&self) -> Vec<(String, String)> {
        let requests = self.requests().await;
        assert_eq!(requests.len(), 1, "expected exactly one upstream call");
        requests[0]
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}
