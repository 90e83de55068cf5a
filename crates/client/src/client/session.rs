//! Login and session inspection for [`SessionClient`].
//!
//! # Invariants
//! - A successful login replaces the stored session key
//! - A failed login leaves the client unauthenticated

use secrecy::SecretString;
use tracing::debug;

use crate::client::SessionClient;
use crate::endpoints;
use crate::error::Result;

impl SessionClient {
    /// Login with username/password and store the returned session key.
    ///
    /// Any previously stored key is discarded first, so a failed login never
    /// leaves a stale session behind.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`](crate::ClientError::Transport) if the request does not complete.
    /// - [`ClientError::Api`](crate::ClientError::Api) if Splunk rejects the login (non-2xx).
    /// - [`ClientError::ResponseDecode`](crate::ClientError::ResponseDecode) if the
    ///   response has no usable `sessionKey`.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let password = SecretString::new(password.into());
        self.session.clear().await;

        let key = endpoints::login(
            &self.http,
            &self.base_url,
            username,
            &password,
            self.timeout,
        )
        .await?;

        self.session.set(key).await?;
        debug!("Session established for {}", username);
        Ok(())
    }

    /// The session key obtained by the last successful login.
    pub async fn session_key(&self) -> Option<SecretString> {
        self.session.key().await
    }

    /// Whether a login has succeeded and its key is still held.
    pub async fn is_authenticated(&self) -> bool {
        self.session.key().await.is_some()
    }
}
