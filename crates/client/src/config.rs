//! Connection settings and protocol constants.
//!
//! Responsibilities:
//! - Name the defaults the client uses (deadlines, auth scheme, job options).
//! - Define [`ConnectionConfig`], a serde-friendly settings block callers can
//!   embed in their own configuration and hand to
//!   [`SessionClientBuilder::from_config`](crate::SessionClientBuilder::from_config).
//!
//! Does NOT handle:
//! - Reading configuration from files, environment or profiles.
//! - Credential storage.
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default deadline for login and result requests in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default deadline for a blocking job submission in seconds.
///
/// The submit call does not return until the job finishes server-side.
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 300;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Scheme token placed before the session key in the `Authorization` header.
pub const DEFAULT_AUTH_SCHEME: &str = "Splunk";

/// Output mode requested from every endpoint.
pub const OUTPUT_MODE_JSON: &str = "json";

/// Execution mode for submitted jobs.
pub const EXEC_MODE_BLOCKING: &str = "blocking";

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

fn default_search_timeout() -> Duration {
    Duration::from_secs(DEFAULT_SEARCH_TIMEOUT_SECS)
}

/// Connection settings for a Splunk management endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the Splunk server (e.g., https://localhost:8089).
    pub base_url: String,
    /// Accept invalid TLS certificates. Off unless set explicitly.
    #[serde(default)]
    pub skip_verify: bool,
    /// Deadline for login and result requests (serialized as seconds).
    #[serde(with = "duration_seconds", default = "default_timeout")]
    pub timeout: Duration,
    /// Deadline for the blocking job submission (serialized as seconds).
    #[serde(with = "duration_seconds", default = "default_search_timeout")]
    pub search_timeout: Duration,
}

impl ConnectionConfig {
    /// Settings for `base_url` with every other field at its default.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            skip_verify: false,
            timeout: default_timeout(),
            search_timeout: default_search_timeout(),
        }
    }
}
