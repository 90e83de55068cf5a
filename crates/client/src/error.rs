//! Error types for the search session client.
//!
//! Three failure categories reach callers from a remote call:
//! - transport failures (connection, TLS, deadline) wrap [`reqwest::Error`]
//! - protocol failures are non-2xx responses, including rejected logins
//! - decode failures are bodies that are not the JSON shape the endpoint promises
//!
//! All of them propagate unchanged; the client never retries.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during search session operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection, TLS or timeout failure from the HTTP transport.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP response from Splunk.
    #[error("API error ({status}) at {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    Api {
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    },

    /// Response body could not be decoded into the expected shape.
    #[error("Failed to decode {context} response: {message}")]
    ResponseDecode {
        context: &'static str,
        message: String,
    },

    /// A search was attempted before a successful login.
    #[error("Not authenticated, call login first")]
    NotAuthenticated,

    /// Invalid or missing endpoint.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    pub(crate) fn decode(context: &'static str, message: impl Into<String>) -> Self {
        Self::ResponseDecode {
            context,
            message: message.into(),
        }
    }

    /// HTTP status of a protocol error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error indicates an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::NotAuthenticated => true,
            Self::Api { status, .. } => matches!(status, 401 | 403),
            _ => false,
        }
    }

    /// Check if the request deadline elapsed before a response arrived.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
