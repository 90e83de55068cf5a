//! Search job endpoints.
//!
//! # What this module handles:
//! - Submitting a search job in blocking execution mode
//! - Retrieving the results of a finished job
//!
//! # What this module does NOT handle:
//! - Building the SPL query (see [`crate::spl`])
//! - Job status polling; submissions block until the job is done

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use tracing::debug;

use crate::config::{EXEC_MODE_BLOCKING, OUTPUT_MODE_JSON};
use crate::endpoints::encode_path_segment;
use crate::endpoints::request::{extract_str, read_json, send_request};
use crate::error::{ClientError, Result};
use crate::models::SearchResults;
use crate::spl::redact_query;

/// Submit a search job and return its sid once the job has finished.
///
/// The job is created with `exec_mode=blocking`, so the server holds the
/// response until the search completes. `timeout` must cover the whole
/// search run.
pub async fn create_job(
    client: &Client,
    base_url: &str,
    authorization: &HeaderValue,
    search: &str,
    timeout: Duration,
) -> Result<String> {
    debug!("Creating search job: {}", redact_query(search));

    let url = format!("{}/services/search/jobs", base_url);
    let builder = client
        .post(&url)
        .timeout(timeout)
        .header(AUTHORIZATION, authorization.clone())
        .form(&[
            ("search", search),
            ("exec_mode", EXEC_MODE_BLOCKING),
            ("output_mode", OUTPUT_MODE_JSON),
        ]);
    let response = send_request(builder, "/services/search/jobs").await?;

    let resp = read_json(response, "search job").await?;

    // Splunk can return either:
    // - `{ "sid": "<sid>" }` (common on newer versions / certain output modes)
    // - `{ "entry": [ { "content": { "sid": "<sid>" } } ] }` (older/alternate shape)
    let sid = extract_str(&resp, "sid")
        .filter(|sid| !sid.is_empty())
        .ok_or_else(|| ClientError::decode("search job", "Missing sid in response"))?;

    debug!(sid, "Search job finished");
    Ok(sid.to_string())
}

/// Get the results of a finished search job.
///
/// An empty body is returned as no results; Splunk answers that way for jobs
/// that matched nothing.
pub async fn get_results(
    client: &Client,
    base_url: &str,
    authorization: &HeaderValue,
    sid: &str,
    timeout: Duration,
) -> Result<SearchResults> {
    debug!("Getting results for job: {}", sid);

    let url = format!(
        "{}/services/search/jobs/{}/results",
        base_url,
        encode_path_segment(sid)
    );
    let builder = client
        .get(&url)
        .timeout(timeout)
        .header(AUTHORIZATION, authorization.clone())
        .query(&[("output_mode", OUTPUT_MODE_JSON)]);
    let response = send_request(builder, "/services/search/jobs/{sid}/results").await?;

    let body = response.text().await?;
    if body.trim().is_empty() {
        return Ok(SearchResults::default());
    }

    let results: SearchResults = serde_json::from_str(&body)
        .map_err(|e| ClientError::decode("search results", e.to_string()))?;

    for message in &results.messages {
        debug!(sid, "{}: {}", message.message_type, message.text);
    }
    debug!(sid, count = results.results.len(), "Fetched search results");

    Ok(results)
}
