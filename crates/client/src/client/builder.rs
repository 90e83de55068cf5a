//! Client builder for constructing [`SessionClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating that an endpoint was supplied
//! - Configuring the underlying HTTP client (TLS trust policy, redirects)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`SessionClient`] methods)
//! - Loading configuration from files or the environment
//!
//! # Invariants
//! - The endpoint is stored verbatim, as with [`SessionClient::new`]
//! - TLS certificates are verified unless `skip_verify(true)` is set explicitly
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning
//! - Without `skip_verify` or an injected client, the process-wide transport is reused

use std::time::Duration;

use crate::auth::SessionStore;
use crate::client::{SessionClient, http_client_builder, shared_http};
use crate::config::{
    ConnectionConfig, DEFAULT_AUTH_SCHEME, DEFAULT_SEARCH_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
use crate::error::{ClientError, Result};

/// Builder for creating a new [`SessionClient`].
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use splunk_search_client::SessionClient;
///
/// let client = SessionClient::builder()
///     .base_url("https://localhost:8089")
///     .timeout(Duration::from_secs(10))
///     .search_timeout(Duration::from_secs(600))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct SessionClientBuilder {
    base_url: Option<String>,
    skip_verify: bool,
    timeout: Duration,
    search_timeout: Duration,
    auth_scheme: String,
    http: Option<reqwest::Client>,
}

impl Default for SessionClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            search_timeout: Duration::from_secs(DEFAULT_SEARCH_TIMEOUT_SECS),
            auth_scheme: DEFAULT_AUTH_SCHEME.to_string(),
            http: None,
        }
    }
}

impl SessionClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Splunk management endpoint.
    ///
    /// This should include the protocol and port, e.g., `https://localhost:8089`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the deadline for login and result requests.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the deadline for the blocking job submission.
    ///
    /// The submit request only returns once the search has finished, so this
    /// bounds the search run time. Default is 300 seconds.
    pub fn search_timeout(mut self, timeout: Duration) -> Self {
        self.search_timeout = timeout;
        self
    }

    /// Set the scheme token sent before the session key in `Authorization`.
    ///
    /// Default is `Splunk`.
    pub fn auth_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.auth_scheme = scheme.into();
        self
    }

    /// Use an existing HTTP client instead of the shared transport.
    ///
    /// The injected client's own TLS settings apply; `skip_verify` is ignored.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Apply connection settings from a [`ConnectionConfig`].
    pub fn from_config(mut self, config: &ConnectionConfig) -> Self {
        self.base_url = Some(config.base_url.clone());
        self.skip_verify = config.skip_verify;
        self.timeout = config.timeout;
        self.search_timeout = config.search_timeout;
        self
    }

    fn build_http(&self, base_url: &str) -> Result<reqwest::Client> {
        if !self.skip_verify {
            return Ok(shared_http());
        }

        if !base_url.starts_with("https://") {
            // skip_verify only affects TLS certificate verification.
            tracing::warn!(
                "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
            );
            return Ok(shared_http());
        }

        tracing::warn!(
            base_url,
            "TLS certificate verification disabled for this client"
        );
        let http = http_client_builder()
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(http)
    }

    /// Build the [`SessionClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if no non-blank `base_url` was provided.
    /// Returns [`ClientError::Transport`] if the HTTP client fails to build.
    pub fn build(mut self) -> Result<SessionClient> {
        let base_url = self
            .base_url
            .take()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;

        let http = match self.http.take() {
            Some(http) => http,
            None => self.build_http(&base_url)?,
        };

        Ok(SessionClient {
            http,
            base_url,
            session: SessionStore::new(self.auth_scheme),
            timeout: self.timeout,
            search_timeout: self.search_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_base_url() {
        let result = SessionClient::builder().build();
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_build_rejects_blank_base_url() {
        let result = SessionClient::builder().base_url("   ").build();
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_build_keeps_base_url_verbatim() {
        let client = SessionClient::builder()
            .base_url("https://localhost:8089/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://localhost:8089/");
    }

    #[test]
    fn test_build_applies_deadlines_and_scheme() {
        let client = SessionClient::builder()
            .base_url("https://localhost:8089")
            .timeout(Duration::from_secs(5))
            .search_timeout(Duration::from_secs(60))
            .auth_scheme("Bearer")
            .build()
            .unwrap();

        assert_eq!(client.timeout, Duration::from_secs(5));
        assert_eq!(client.search_timeout, Duration::from_secs(60));
        assert_eq!(client.session.scheme(), "Bearer");
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = ConnectionConfig::new("https://splunk.example.com:8089");
        config.skip_verify = true;
        config.timeout = Duration::from_secs(120);
        config.search_timeout = Duration::from_secs(900);

        let builder = SessionClient::builder().from_config(&config);

        assert_eq!(
            builder.base_url,
            Some("https://splunk.example.com:8089".to_string())
        );
        assert!(builder.skip_verify);
        assert_eq!(builder.timeout, Duration::from_secs(120));
        assert_eq!(builder.search_timeout, Duration::from_secs(900));
    }

    #[test]
    fn test_skip_verify_with_https_url() {
        let client = SessionClient::builder()
            .base_url("https://localhost:8089")
            .skip_verify(true)
            .build();

        assert!(client.is_ok());
    }

    #[test]
    fn test_skip_verify_with_http_url() {
        // Should succeed but log warning about ineffective skip_verify
        let client = SessionClient::builder()
            .base_url("http://localhost:8089")
            .skip_verify(true)
            .build();

        assert!(client.is_ok());
    }

    #[test]
    fn test_injected_http_client_is_used() {
        let http = reqwest::Client::new();
        let client = SessionClient::builder()
            .base_url("https://localhost:8089")
            .http_client(http)
            .build();

        assert!(client.is_ok());
    }
}
