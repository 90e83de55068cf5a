//! Request execution and response checks shared by every endpoint.
//!
//! Every call goes out exactly once. Retrying is unsafe here: a blocking job
//! submission that timed out on the client may still be running on the server,
//! and a second submit would start a second job.

use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::SplunkMessages;

/// Header Splunk uses to correlate a response with its server-side logs.
pub const REQUEST_ID_HEADER: &str = "X-Splunk-Request-Id";

/// Send a request and turn any non-2xx status into [`ClientError::Api`].
///
/// # Errors
///
/// Returns [`ClientError::Transport`] when the request cannot be completed
/// (connection refused, TLS failure, deadline exceeded) and
/// [`ClientError::Api`] for non-success statuses. The API error message is
/// taken from Splunk's `messages` array when the body has one.
pub async fn send_request(builder: RequestBuilder, endpoint: &'static str) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();
    debug!(endpoint, status = status.as_u16(), "Received response");

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    // Try to parse Splunk error messages for a cleaner display
    let message = match serde_json::from_str::<SplunkMessages>(&body) {
        Ok(m) if !m.messages.is_empty() => m.summary(),
        _ if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("Unknown status")
            .to_string(),
        _ => body,
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        url,
        message,
        request_id,
    })
}

/// Read a response body and parse it as JSON.
///
/// # Errors
///
/// Returns [`ClientError::Transport`] if the body cannot be read and
/// [`ClientError::ResponseDecode`] if it is not valid JSON.
pub async fn read_json(response: Response, context: &'static str) -> Result<Value> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::decode(context, e.to_string()))
}

/// Find a string field at the top level of a response, or under
/// `entry[0].content` where Splunk's Atom-style responses put it.
pub fn extract_str<'a>(resp: &'a Value, field: &str) -> Option<&'a str> {
    resp.get(field).and_then(|v| v.as_str()).or_else(|| {
        resp.get("entry")?
            .get(0)?
            .get("content")?
            .get(field)?
            .as_str()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_str_top_level() {
        let resp = json!({"sid": "1700000000.42"});
        assert_eq!(extract_str(&resp, "sid"), Some("1700000000.42"));
    }

    #[test]
    fn test_extract_str_entry_content() {
        let resp = json!({"entry": [{"content": {"sessionKey": "abc123"}}]});
        assert_eq!(extract_str(&resp, "sessionKey"), Some("abc123"));
    }

    #[test]
    fn test_extract_str_prefers_top_level() {
        let resp = json!({
            "sid": "top",
            "entry": [{"content": {"sid": "nested"}}]
        });
        assert_eq!(extract_str(&resp, "sid"), Some("top"));
    }

    #[test]
    fn test_extract_str_missing_or_wrong_type() {
        assert_eq!(extract_str(&json!({}), "sid"), None);
        assert_eq!(extract_str(&json!({"sid": 42}), "sid"), None);
        assert_eq!(extract_str(&json!({"entry": []}), "sid"), None);
        assert_eq!(extract_str(&json!([1, 2]), "sid"), None);
    }
}
