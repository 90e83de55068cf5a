//! Session credential storage.
//!
//! The session key issued by `/services/auth/login` is held behind an async
//! `RwLock`, so a [`SessionClient`](crate::SessionClient) can be shared across
//! tasks: a login replaces the key atomically and concurrent searches read a
//! complete key, never a torn one.

use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::RwLock;

use crate::error::{ClientError, Result};

/// A logged-in session: the raw key plus the `Authorization` value built from it.
#[derive(Clone)]
struct Session {
    key: SecretString,
    authorization: HeaderValue,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Holds the current session credential, if any.
#[derive(Debug)]
pub struct SessionStore {
    scheme: String,
    session: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Create an empty store whose `Authorization` values use `scheme`.
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            session: RwLock::new(None),
        }
    }

    /// The scheme token placed before the session key.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Build the `Authorization` header value for `key`.
    ///
    /// The value is marked sensitive so it is redacted from `Debug` output and
    /// excluded from HTTP/2 header compression tables.
    pub fn authorization_for(&self, key: &SecretString) -> Result<HeaderValue> {
        let mut value = HeaderValue::try_from(format!("{} {}", self.scheme(), key.expose_secret()))
            .map_err(|_| {
                ClientError::decode("login", "sessionKey is not a valid header value")
            })?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Store a new session key, replacing any previous one.
    pub async fn set(&self, key: SecretString) -> Result<()> {
        let authorization = self.authorization_for(&key)?;
        *self.session.write().await = Some(Session { key, authorization });
        Ok(())
    }

    /// Forget the current session key.
    pub async fn clear(&self) {
        *self.session.write().await = None;
    }

    /// The current session key.
    pub async fn key(&self) -> Option<SecretString> {
        self.session.read().await.as_ref().map(|s| s.key.clone())
    }

    /// The `Authorization` header value for the current session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotAuthenticated`] if no login has succeeded.
    pub async fn authorization(&self) -> Result<HeaderValue> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|s| s.authorization.clone())
            .ok_or(ClientError::NotAuthenticated)
    }
}
