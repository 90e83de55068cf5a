//! Search session client.
//!
//! This module provides [`SessionClient`], which logs in to a Splunk
//! management endpoint, submits searches as blocking jobs and fetches their
//! results.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login and credential inspection
//! - `search`: Job submission and result retrieval
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Credential storage and locking (delegated to [`crate::auth::SessionStore`])
//!
//! # Invariants
//! - The endpoint is stored verbatim; paths are appended with a literal `/`
//! - Every decode target is local to the call that receives the response
//! - No request is retried

pub mod builder;
mod search;
mod session;

use std::sync::LazyLock;
use std::time::Duration;

use crate::auth::SessionStore;
use crate::config::{
    DEFAULT_AUTH_SCHEME, DEFAULT_MAX_REDIRECTS, DEFAULT_SEARCH_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};

/// Process-wide HTTP transport shared by clients that use default TLS settings.
///
/// `reqwest::Client` pools connections internally and is safe to use from
/// many tasks at once.
static SHARED_HTTP: LazyLock<reqwest::Client> = LazyLock::new(|| {
    http_client_builder().build().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Falling back to default HTTP client settings");
        reqwest::Client::new()
    })
});

/// HTTP client settings shared by every transport the crate builds.
pub(crate) fn http_client_builder() -> reqwest::ClientBuilder {
    reqwest::Client::builder().redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
}

pub(crate) fn shared_http() -> reqwest::Client {
    SHARED_HTTP.clone()
}

/// Splunk search session client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use splunk_search_client::SessionClient;
///
/// let client = SessionClient::new("https://localhost:8089");
/// client.login("admin", "changeme").await?;
/// let rows = client.search("error (?<code>\\d{3})", 10).await?;
/// ```
///
/// Use [`SessionClient::builder()`] to change deadlines, the TLS trust
/// policy or the authorization scheme.
///
/// # Concurrency
///
/// All methods take `&self`. The session key is guarded by a lock, so one
/// client may be shared through an `Arc` by many tasks.
#[derive(Debug)]
pub struct SessionClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) session: SessionStore,
    pub(crate) timeout: Duration,
    pub(crate) search_timeout: Duration,
}

impl SessionClient {
    /// Create a client for `endpoint` with default settings.
    ///
    /// The endpoint is stored exactly as given: no validation and no
    /// trailing-slash trimming. No network activity happens until
    /// [`login`](Self::login).
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: shared_http(),
            base_url: endpoint.into(),
            session: SessionStore::new(DEFAULT_AUTH_SCHEME),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            search_timeout: Duration::from_secs(DEFAULT_SEARCH_TIMEOUT_SECS),
        }
    }

    /// Create a new client builder.
    pub fn builder() -> builder::SessionClientBuilder {
        builder::SessionClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_endpoint_verbatim() {
        let client = SessionClient::new("https://localhost:8089/");
        assert_eq!(client.base_url(), "https://localhost:8089/");

        let client = SessionClient::new("not a url");
        assert_eq!(client.base_url(), "not a url");
    }

    #[test]
    fn test_new_uses_default_deadlines() {
        let client = SessionClient::new("https://localhost:8089");
        assert_eq!(client.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(
            client.search_timeout,
            Duration::from_secs(DEFAULT_SEARCH_TIMEOUT_SECS)
        );
        assert_eq!(client.session.scheme(), "Splunk");
    }

    #[tokio::test]
    async fn test_new_client_starts_unauthenticated() {
        let client = SessionClient::new("https://localhost:8089");
        assert!(!client.is_authenticated().await);
    }
}
