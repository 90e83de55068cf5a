//! Authentication endpoint.

use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::config::OUTPUT_MODE_JSON;
use crate::endpoints::request::{extract_str, read_json, send_request};
use crate::error::{ClientError, Result};

/// Login to Splunk with username and password, returning the session key.
///
/// # Errors
///
/// - [`ClientError::Transport`] if the request does not complete.
/// - [`ClientError::Api`] for non-2xx responses, including rejected credentials.
/// - [`ClientError::ResponseDecode`] if the body is not JSON or has no `sessionKey`.
pub async fn login(
    client: &Client,
    base_url: &str,
    username: &str,
    password: &SecretString,
    timeout: Duration,
) -> Result<SecretString> {
    debug!("Logging in to Splunk as {}", username);

    let url = format!("{}/services/auth/login", base_url);
    let builder = client
        .post(&url)
        .timeout(timeout)
        .form(&[
            ("username", username),
            ("password", password.expose_secret()),
            ("output_mode", OUTPUT_MODE_JSON),
        ]);
    let response = send_request(builder, "/services/auth/login").await?;

    let resp = read_json(response, "login").await?;

    extract_str(&resp, "sessionKey")
        .filter(|key| !key.is_empty())
        .map(|key| SecretString::new(key.into()))
        .ok_or_else(|| ClientError::decode("login", "Missing sessionKey in response"))
}
