//! Search methods for [`SessionClient`].
//!
//! # What this module handles:
//! - Building and submitting the composite search job
//! - Fetching the finished job's results
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints::search`])
//! - SPL quoting (in [`crate::spl`])
//!
//! # Invariants
//! - The job id lives only for the duration of one `search` call
//! - Results are returned in the order the server sent them; nothing is
//!   returned when any step fails

use tracing::debug;

use crate::client::SessionClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::ResultRecord;
use crate::spl::composite_search;

impl SessionClient {
    /// Run `query` as a regular expression over all indexed events.
    ///
    /// Submits `search index=* | regex "<query>" | head <max_results> | rex "<query>"`
    /// as a blocking job, so named capture groups in `query` come back as
    /// fields of each record. `query` is quoted before it is placed in the
    /// pipeline and cannot change the pipeline's structure.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NotAuthenticated`](crate::ClientError::NotAuthenticated)
    ///   if [`login`](Self::login) has not succeeded; no request is sent.
    /// - Any transport, protocol or decode error from job submission or
    ///   [`fetch_results`](Self::fetch_results), unchanged.
    pub async fn search(&self, query: &str, max_results: u64) -> Result<Vec<ResultRecord>> {
        let authorization = self.session.authorization().await?;
        let search = composite_search(query, max_results);

        let sid = endpoints::create_job(
            &self.http,
            &self.base_url,
            &authorization,
            &search,
            self.search_timeout,
        )
        .await?;

        self.fetch_results(&sid).await
    }

    /// Fetch the results of a finished search job.
    ///
    /// The job must already be done; [`search`](Self::search) guarantees that
    /// by submitting in blocking mode. Calling this again for the same sid
    /// returns the same rows while the job is retained on the server.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NotAuthenticated`](crate::ClientError::NotAuthenticated)
    ///   if no session key is held.
    /// - [`ClientError::Api`](crate::ClientError::Api) for non-2xx responses,
    ///   e.g. 404 once the job has expired.
    /// - [`ClientError::ResponseDecode`](crate::ClientError::ResponseDecode) for
    ///   malformed JSON.
    pub async fn fetch_results(&self, sid: &str) -> Result<Vec<ResultRecord>> {
        let authorization = self.session.authorization().await?;

        let results = endpoints::get_results(
            &self.http,
            &self.base_url,
            &authorization,
            sid,
            self.timeout,
        )
        .await?;

        if results.preview {
            debug!(sid, "Results are a preview of an unfinished job");
        }
        Ok(results.results)
    }
}
