//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the search session client.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every mock server is private to the test that started it
//!
//! # What this does NOT handle
//! - Test-specific assertions or test logic

use std::collections::HashMap;

#[allow(unused_imports)]
pub use splunk_search_client::testing::load_fixture;
#[allow(unused_imports)]
pub use splunk_search_client::{ClientError, ResultRecord, SessionClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use wiremock::matchers::{method, path};

/// Session key returned by [`mount_login`].
#[allow(dead_code)]
pub const SESSION_KEY: &str = "abc123";

/// Mount a login endpoint that accepts any credentials and returns [`SESSION_KEY`].
#[allow(dead_code)]
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/services/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "sessionKey": SESSION_KEY
            })),
        )
        .mount(server)
        .await;
}

/// Create a client for `server` that has already logged in as alice.
#[allow(dead_code)]
pub async fn logged_in_client(server: &MockServer) -> SessionClient {
    mount_login(server).await;
    let client = SessionClient::new(server.uri());
    client
        .login("alice", "secret")
        .await
        .expect("login against mock server");
    client
}

/// Decode a form-encoded request body into a field map.
#[allow(dead_code)]
pub fn form_fields(request: &Request) -> HashMap<String, String> {
    url::form_urlencoded::parse(&request.body)
        .into_owned()
        .collect()
}

/// All received requests whose path equals `request_path`.
#[allow(dead_code)]
pub async fn requests_to(server: &MockServer, request_path: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path() == request_path)
        .collect()
}

/// Build a record from `(field, value)` pairs.
#[allow(dead_code)]
pub fn record(pairs: &[(&str, &str)]) -> ResultRecord {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
